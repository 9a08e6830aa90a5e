pub mod format;
pub mod sanitize;

pub use format::{folder_location, FolderView};
pub use sanitize::sanitize_text;
