use crate::shared::infrastructure::project_store::in_memory::InMemoryProjectStore;
use crate::shell::state::AppState;

/// Fresh seeded state; every call gets its own store.
pub fn make_test_state() -> AppState {
    AppState::in_memory(InMemoryProjectStore::seeded())
}

/// Seeded state whose store rejects every call as a backend failure.
pub fn make_offline_state() -> AppState {
    let mut store = InMemoryProjectStore::seeded();
    store.toggle_offline();
    AppState::in_memory(store)
}
