use thiserror::Error;

use crate::modules::users::adapters::outbound::user_storage::StorageError;

#[derive(Debug, Error)]
pub enum UserServiceError {
    #[error("user {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("could not allocate a unique user id after {attempts} attempts")]
    IdExhausted { attempts: usize },
}

impl UserServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, UserServiceError::NotFound(_))
    }
}
