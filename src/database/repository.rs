use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Folder, NewFolder};

/// Table holding every folder
pub const FOLDERS_TABLE: &str = "noteful_folders";

/// Storage seam for the folders handlers. Every method issues a single
/// statement; nothing here opens a transaction.
#[async_trait]
pub trait FolderStore: Send + Sync {
    /// All folders in insertion order
    async fn list(&self) -> Result<Vec<Folder>, DatabaseError>;

    async fn find(&self, id: i32) -> Result<Option<Folder>, DatabaseError>;

    /// Insert and return the stored row with its assigned id
    async fn insert(&self, folder: NewFolder) -> Result<Folder, DatabaseError>;

    /// Returns `false` when no row had this id
    async fn delete(&self, id: i32) -> Result<bool, DatabaseError>;

    /// Remove every row and restart id assignment
    async fn reset(&self) -> Result<(), DatabaseError>;

    async fn ping(&self) -> Result<(), DatabaseError>;
}

pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the folders table when it is missing
    pub async fn ensure_table(&self) -> Result<(), DatabaseError> {
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} (id SERIAL PRIMARY KEY, name TEXT NOT NULL)",
            FOLDERS_TABLE
        );
        sqlx::query(&sql).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl FolderStore for FolderRepository {
    async fn list(&self) -> Result<Vec<Folder>, DatabaseError> {
        let sql = format!("SELECT id, name FROM {} ORDER BY id", FOLDERS_TABLE);
        let folders = sqlx::query_as::<_, Folder>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(folders)
    }

    async fn find(&self, id: i32) -> Result<Option<Folder>, DatabaseError> {
        let sql = format!("SELECT id, name FROM {} WHERE id = $1", FOLDERS_TABLE);
        let folder = sqlx::query_as::<_, Folder>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(folder)
    }

    async fn insert(&self, folder: NewFolder) -> Result<Folder, DatabaseError> {
        let sql = format!(
            "INSERT INTO {} (name) VALUES ($1) RETURNING id, name",
            FOLDERS_TABLE
        );
        let created = sqlx::query_as::<_, Folder>(&sql)
            .bind(folder.name)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn delete(&self, id: i32) -> Result<bool, DatabaseError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", FOLDERS_TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn reset(&self) -> Result<(), DatabaseError> {
        let sql = format!("TRUNCATE {} RESTART IDENTITY CASCADE", FOLDERS_TABLE);
        sqlx::query(&sql).execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
