use crate::modules::users::adapters::outbound::user_storage::UserStorage;
use crate::modules::users::application::errors::UserServiceError;
use crate::modules::users::core::evolve::{apply_update, register};
use crate::modules::users::core::user::{NewUser, UpdateFields, User};
use crate::shared::core::primitives::{Clock, IdGenerator, SystemClock, UuidV7Ids};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const MAX_ID_ATTEMPTS: usize = 3;

/// Business rules around user storage.
///
/// Mutations are serialized through `retired_ids`, so every read-modify-write
/// on a record is atomic with respect to other creates, updates and deletes.
/// Reads go straight to storage.
///
/// `retired_ids` holds every deleted id; none of them is handed out again.
pub struct UserService<TStorage>
where
    TStorage: UserStorage + 'static,
{
    storage: Arc<TStorage>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    retired_ids: Mutex<HashSet<String>>,
}

impl<TStorage> UserService<TStorage>
where
    TStorage: UserStorage + 'static,
{
    pub fn new(storage: Arc<TStorage>) -> Self {
        Self {
            storage,
            clock: Arc::new(SystemClock),
            ids: Arc::new(UuidV7Ids),
            retired_ids: Mutex::new(HashSet::new()),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub async fn create(&self, input: NewUser) -> Result<User, UserServiceError> {
        let retired = self.retired_ids.lock().await;

        let id = self.allocate_id(&retired).await?;
        let user = register(id, input, self.clock.now());
        self.storage.put(user.clone()).await?;

        tracing::debug!(user_id = %user.id, "user stored");
        Ok(user)
    }

    pub async fn get(&self, id: &str) -> Result<User, UserServiceError> {
        self.storage
            .get(id)
            .await?
            .ok_or_else(|| UserServiceError::NotFound(id.to_string()))
    }

    pub async fn update(
        &self,
        id: &str,
        fields: UpdateFields,
    ) -> Result<User, UserServiceError> {
        if fields.is_empty() {
            tracing::debug!(user_id = %id, "update carries no field changes");
        }

        let _guard = self.retired_ids.lock().await;

        let current = self
            .storage
            .get(id)
            .await?
            .ok_or_else(|| UserServiceError::NotFound(id.to_string()))?;
        let updated = apply_update(current, fields, self.clock.now());
        self.storage.put(updated.clone()).await?;

        tracing::debug!(user_id = %id, version = updated.version, "user updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<(), UserServiceError> {
        let mut retired = self.retired_ids.lock().await;

        if !self.storage.delete(id).await? {
            return Err(UserServiceError::NotFound(id.to_string()));
        }
        retired.insert(id.to_string());

        tracing::debug!(user_id = %id, "user deleted");
        Ok(())
    }

    async fn allocate_id(&self, retired: &HashSet<String>) -> Result<String, UserServiceError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.next_id();
            if !retired.contains(&candidate) && self.storage.get(&candidate).await?.is_none() {
                return Ok(candidate);
            }
            tracing::warn!(user_id = %candidate, "generated user id already taken");
        }
        Err(UserServiceError::IdExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}
