//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity. The store owns
//! the single long-lived mutable copy of the collection state; every
//! mutation goes through the pure functions in `models` and replaces the
//! status map wholesale, then persists the full snapshot.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::models::{effective_status, set_status, StatusFilter, StatusMap};
use crate::storage;

/// App-wide collection state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Recorded statuses; absent numbers are uncaught
    pub statuses: StatusMap,
    /// Active status filter (transient, not persisted)
    pub filter: StatusFilter,
    /// Search box contents (transient, not persisted)
    pub query: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// The status map after one press on `digimon_number`
pub fn cycled(statuses: &StatusMap, digimon_number: u32) -> StatusMap {
    let next = effective_status(statuses, digimon_number).advance();
    set_status(statuses, digimon_number, next)
}

/// Advance one entry's status and persist the new snapshot. The store is
/// updated synchronously; the write is fire-and-forget, and a later press
/// simply overwrites the same key with a newer full snapshot.
pub fn cycle_status(store: &AppStore, digimon_number: u32) {
    let updated = cycled(&store.statuses().read(), digimon_number);
    store.statuses().set(updated.clone());
    spawn_local(async move {
        storage::save_statuses(&updated);
    });
}

/// Apply toggle semantics to the filter row: pressing the active filter
/// returns to All
pub fn toggle_filter(store: &AppStore, pressed: StatusFilter) {
    let current = store.filter().get();
    store.filter().set(current.toggled(pressed));
}
