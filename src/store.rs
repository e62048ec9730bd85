//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use kangyur_catalog::{CatalogItem, TreeState};
use leptos::prelude::*;
use reactive_stores::Store;

/// Loaded catalog data
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Catalog tree as fetched, never mutated afterwards
    pub catalog: Vec<CatalogItem>,
    /// A fetch is in flight
    pub loading: bool,
    /// Last fetch failure, shown as a banner
    pub load_error: Option<String>,
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

/// Read the catalog, tracking it
pub fn store_catalog_with<R>(store: &AppStore, f: impl FnOnce(&[CatalogItem]) -> R) -> R {
    store.catalog().with(|tree| f(tree))
}

/// Read the catalog without tracking (event handlers)
pub fn store_catalog_with_untracked<R>(store: &AppStore, f: impl FnOnce(&[CatalogItem]) -> R) -> R {
    store.catalog().with_untracked(|tree| f(tree))
}

pub fn store_is_loading(store: &AppStore) -> bool {
    store.loading().get()
}

pub fn store_load_error(store: &AppStore) -> Option<String> {
    store.load_error().get()
}

pub fn store_begin_load(store: &AppStore) {
    store.loading().set(true);
}

/// Replace the catalog and return the matching initial tree state
pub fn store_set_catalog(store: &AppStore, tree: Vec<CatalogItem>) -> TreeState {
    let state = TreeState::with_top_level_expanded(&tree);
    store.catalog().set(tree);
    store.load_error().set(None);
    store.loading().set(false);
    state
}

/// Record a failed load; the tree is emptied
pub fn store_set_load_error(store: &AppStore, message: String) {
    store.catalog().set(Vec::new());
    store.load_error().set(Some(message));
    store.loading().set(false);
}
