pub mod manager;
pub mod models;
pub mod repository;

pub use manager::{DatabaseError, DatabaseManager};
pub use models::{Folder, NewFolder};
pub use repository::{FolderRepository, FolderStore, FOLDERS_TABLE};
