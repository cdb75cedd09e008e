// Storage port for user records.
//
// Implementations only hold records keyed by id. Versioning, timestamps and
// not-found semantics belong to the service.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::users::core::user::User;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Inserts or fully replaces the record stored under `user.id`.
    async fn put(&self, user: User) -> Result<(), StorageError>;
    async fn get(&self, id: &str) -> Result<Option<User>, StorageError>;
    /// Returns whether a record was removed.
    async fn delete(&self, id: &str) -> Result<bool, StorageError>;
}
