pub mod collection;
pub mod record;

// Re-export handler functions for use in routing
pub use collection::get as folders_get;
pub use collection::post as folders_post;

pub use record::delete as folder_delete;
pub use record::get as folder_get;

use axum::extract::{rejection::PathRejection, Path};
use tracing::debug;

use crate::error::ApiError;

/// Folder ids arrive as raw path segments. Anything that is not a positive
/// `i32` cannot match a row, so callers treat `None` as a lookup miss.
pub fn parse_folder_id(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok().filter(|id| *id > 0)
}

/// Resolve the `:id` segment, treating an undecodable segment (e.g. invalid
/// UTF-8 after percent-decoding) the same as any other miss
pub fn folder_id_from_path(path: Result<Path<String>, PathRejection>) -> Result<i32, ApiError> {
    let raw = match path {
        Ok(Path(raw)) => raw,
        Err(rejection) => {
            debug!("Rejected folder id segment: {}", rejection);
            return Err(ApiError::folder_not_found());
        }
    };
    parse_folder_id(&raw).ok_or_else(ApiError::folder_not_found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_ids() {
        assert_eq!(parse_folder_id("1"), Some(1));
        assert_eq!(parse_folder_id("12345"), Some(12345));
    }

    #[test]
    fn rejects_ids_that_cannot_exist() {
        assert_eq!(parse_folder_id("abc"), None);
        assert_eq!(parse_folder_id("0"), None);
        assert_eq!(parse_folder_id("-4"), None);
        assert_eq!(parse_folder_id("99999999999"), None);
        assert_eq!(parse_folder_id(""), None);
    }
}
