use crate::modules::users::adapters::outbound::user_storage_in_memory::InMemoryUserStorage;
use crate::modules::users::application::user_service::UserService;
use crate::shell::state::AppState;
use crate::tests::fixtures::clock::SteppingClock;
use std::sync::Arc;

pub fn make_test_state() -> AppState {
    let storage = Arc::new(InMemoryUserStorage::new());
    let users = UserService::new(storage).with_clock(Arc::new(SteppingClock::default()));
    AppState {
        users: Arc::new(users),
    }
}

pub fn make_offline_storage_state() -> AppState {
    let mut storage = InMemoryUserStorage::new();
    storage.toggle_offline();
    AppState {
        users: Arc::new(UserService::new(Arc::new(storage))),
    }
}
