use std::sync::Arc;

use crate::database::FolderStore;

/// Shared by every request: the store handle and the mount point used to
/// build `Location` headers
#[derive(Clone)]
pub struct AppState {
    pub folders: Arc<dyn FolderStore>,
    pub api_root: String,
}

impl AppState {
    pub fn new(folders: Arc<dyn FolderStore>, api_root: impl Into<String>) -> Self {
        Self {
            folders,
            api_root: api_root.into(),
        }
    }
}
