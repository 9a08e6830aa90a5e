use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::database::{DatabaseError, Folder, FolderStore, NewFolder};

/// In-memory `FolderStore` with the same id rules as the Postgres table:
/// ids grow monotonically and only `reset` restarts them
#[derive(Default)]
pub struct MemoryFolderStore {
    inner: RwLock<MemoryState>,
    unavailable: AtomicBool,
}

#[derive(Default)]
struct MemoryState {
    rows: Vec<Folder>,
    last_id: i32,
}

impl MemoryFolderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `names`, assigned ids 1..=n
    pub async fn seeded(names: &[&str]) -> Self {
        let store = Self::new();
        for name in names {
            store
                .insert(NewFolder { name: name.to_string() })
                .await
                .expect("memory insert");
        }
        store
    }

    /// Make every call fail as if the pool were closed
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), DatabaseError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DatabaseError::Sqlx(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl FolderStore for MemoryFolderStore {
    async fn list(&self) -> Result<Vec<Folder>, DatabaseError> {
        self.check()?;
        Ok(self.inner.read().await.rows.clone())
    }

    async fn find(&self, id: i32) -> Result<Option<Folder>, DatabaseError> {
        self.check()?;
        let state = self.inner.read().await;
        Ok(state.rows.iter().find(|f| f.id == id).cloned())
    }

    async fn insert(&self, folder: NewFolder) -> Result<Folder, DatabaseError> {
        self.check()?;
        let mut state = self.inner.write().await;
        state.last_id += 1;
        let created = Folder {
            id: state.last_id,
            name: folder.name,
        };
        state.rows.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: i32) -> Result<bool, DatabaseError> {
        self.check()?;
        let mut state = self.inner.write().await;
        let before = state.rows.len();
        state.rows.retain(|f| f.id != id);
        Ok(state.rows.len() != before)
    }

    async fn reset(&self) -> Result<(), DatabaseError> {
        self.check()?;
        let mut state = self.inner.write().await;
        state.rows.clear();
        state.last_id = 0;
        Ok(())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        self.check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_not_reused_until_reset() {
        let store = MemoryFolderStore::seeded(&["a", "b"]).await;
        assert!(store.delete(2).await.unwrap());

        let c = store.insert(NewFolder { name: "c".into() }).await.unwrap();
        assert_eq!(c.id, 3);

        store.reset().await.unwrap();
        let d = store.insert(NewFolder { name: "d".into() }).await.unwrap();
        assert_eq!(d.id, 1);
    }
}
