use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of `noteful_folders`, exactly as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Folder {
    pub id: i32,
    pub name: String,
}

/// Validated input for a folder insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFolder {
    pub name: String,
}

impl NewFolder {
    /// Returns `None` when the name is missing or blank after trimming.
    /// The stored name keeps the caller's original spelling.
    pub fn from_name(name: Option<&str>) -> Option<Self> {
        match name {
            Some(n) if !n.trim().is_empty() => Some(Self { name: n.to_string() }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_and_blank_names() {
        assert_eq!(NewFolder::from_name(None), None);
        assert_eq!(NewFolder::from_name(Some("")), None);
        assert_eq!(NewFolder::from_name(Some("   \t\n")), None);
    }

    #[test]
    fn keeps_name_as_supplied() {
        let folder = NewFolder::from_name(Some("  Spangley ")).unwrap();
        assert_eq!(folder.name, "  Spangley ");
    }
}
