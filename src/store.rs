//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Nothing is persisted; a reload starts logged out.

use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Session flag gating every route except `/login`
    pub is_logged_in: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;
