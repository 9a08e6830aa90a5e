use serde::{Deserialize, Serialize};

use crate::api::sanitize::sanitize_text;
use crate::database::models::Folder;

/// Public wire format of a folder: `{ id, name }` with the name sanitized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderView {
    pub id: i32,
    pub name: String,
}

impl From<&Folder> for FolderView {
    fn from(folder: &Folder) -> Self {
        Self {
            id: folder.id,
            name: sanitize_text(&folder.name),
        }
    }
}

impl From<Folder> for FolderView {
    fn from(folder: Folder) -> Self {
        Self::from(&folder)
    }
}

/// Path of a single folder under the given API root
pub fn folder_location(api_root: &str, id: i32) -> String {
    format!("{}/folders/{}", api_root, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_sanitizes_name_and_keeps_id() {
        let folder = Folder {
            id: 7,
            name: "<b>bold</b>".to_string(),
        };
        let view = FolderView::from(&folder);
        assert_eq!(view.id, 7);
        assert_eq!(view.name, "&lt;b&gt;bold&lt;/b&gt;");
    }

    #[test]
    fn location_respects_api_root() {
        assert_eq!(folder_location("/api", 3), "/api/folders/3");
        assert_eq!(folder_location("", 3), "/folders/3");
    }
}
