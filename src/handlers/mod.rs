// handlers/mod.rs - HTTP handlers
//
// folders: the four CRUD operations mounted under the API root
// system:  service descriptor and health check mounted at "/"
pub mod folders;
pub mod system;

pub use folders::*;
pub use system::*;
