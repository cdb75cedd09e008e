use crate::modules::users::adapters::outbound::user_storage_in_memory::InMemoryUserStorage;
use crate::modules::users::application::user_service::UserService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService<InMemoryUserStorage>>,
}

impl AppState {
    /// Fresh, empty in-memory store behind the default clock and id scheme.
    pub fn in_memory() -> Self {
        let storage = Arc::new(InMemoryUserStorage::new());
        Self {
            users: Arc::new(UserService::new(storage)),
        }
    }
}
