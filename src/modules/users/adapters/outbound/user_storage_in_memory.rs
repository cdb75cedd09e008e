use crate::modules::users::adapters::outbound::user_storage::{StorageError, UserStorage};
use crate::modules::users::core::user::User;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryUserStorage {
    rows: RwLock<HashMap<String, User>>,
    is_offline: bool,
}

impl InMemoryUserStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    fn ensure_online(&self) -> Result<(), StorageError> {
        if self.is_offline {
            return Err(StorageError::Backend("User storage offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserStorage for InMemoryUserStorage {
    async fn put(&self, user: User) -> Result<(), StorageError> {
        self.ensure_online()?;
        self.rows.write().await.insert(user.id.clone(), user);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<User>, StorageError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &str) -> Result<bool, StorageError> {
        self.ensure_online()?;
        Ok(self.rows.write().await.remove(id).is_some())
    }
}
