//! Catalog Context
//!
//! Browsing state shared via Leptos Context API: search text, result page,
//! and the tree's expansion/selection state.

use kangyur_catalog::{TreeState, UrlQuery};
use leptos::prelude::*;

use crate::routing;
use crate::store::{store_catalog_with_untracked, AppStore};

/// Browsing signals provided via context
#[derive(Clone, Copy)]
pub struct CatalogContext {
    store: AppStore,
    /// Trigger to reload the catalog - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the catalog - write
    set_reload_trigger: WriteSignal<u32>,
    /// Trimmed search text, empty = browse the tree
    pub query: ReadSignal<String>,
    set_query: WriteSignal<String>,
    /// Search results page (1-based)
    pub page: ReadSignal<i64>,
    set_page: WriteSignal<i64>,
    /// Expanded ids and current selection
    pub tree_state: RwSignal<TreeState>,
    pub items_per_page: i64,
}

impl CatalogContext {
    pub fn new(store: AppStore, initial: &UrlQuery, items_per_page: i64) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (query, set_query) = signal(initial.q.clone().unwrap_or_default());
        let (page, set_page) = signal(initial.page);
        Self {
            store,
            reload_trigger,
            set_reload_trigger,
            query,
            set_query,
            page,
            set_page,
            tree_state: RwSignal::new(TreeState::new()),
            items_per_page,
        }
    }

    /// Trigger a reload of the catalog
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Apply a typed query; results restart at page 1
    pub fn set_query(&self, raw: &str) {
        let Some(query) = changed_query(&self.query.get_untracked(), raw) else {
            return;
        };
        self.set_query.set(query);
        self.set_page.set(1);
        self.sync_location();
    }

    pub fn set_page(&self, page: i64) {
        self.set_page.set(page.max(1));
        self.sync_location();
    }

    pub fn toggle_expand(&self, id: &str) {
        self.tree_state.update(|state| state.toggle_expand(id));
    }

    /// Tree click: select, expanding/collapsing nodes with children
    pub fn select(&self, id: &str) {
        let store = self.store;
        self.tree_state
            .update(|state| {
                store_catalog_with_untracked(&store, |tree| state.select_in(tree, id));
            });
        self.sync_location();
    }

    /// Jump to a node from outside the tree (search hit, breadcrumb, URL)
    ///
    /// Ancestors are expanded so the row is visible; the node's own expansion is kept.
    pub fn reveal(&self, id: &str) {
        let store = self.store;
        let found = self
            .tree_state
            .try_update(|state| store_catalog_with_untracked(&store, |tree| state.reveal_and_select(tree, id)))
            .unwrap_or(false);
        if !found {
            log::debug!("reveal ignored, id {:?} not in catalog", id);
        }
        self.sync_location();
    }

    /// Fresh state for a newly loaded tree
    pub fn reset_tree_state(&self, state: TreeState) {
        self.tree_state.set(state);
    }

    pub fn selected_id(&self) -> Option<String> {
        self.tree_state.with(|state| state.selected_id.clone())
    }

    fn sync_location(&self) {
        routing::replace_query(&location_query(
            self.query.get_untracked(),
            self.page.get_untracked(),
            self.tree_state.with_untracked(|state| state.selected_id.clone()),
        ));
    }
}

/// Trimmed query if it differs from the one already applied
fn changed_query(current: &str, raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (trimmed != current).then(|| trimmed.to_string())
}

/// Address bar parameters for the current browsing state
fn location_query(query: String, page: i64, selected_id: Option<String>) -> UrlQuery {
    UrlQuery {
        q: (!query.is_empty()).then_some(query),
        page,
        item: selected_id,
    }
}

/// Get the catalog context
pub fn use_catalog_context() -> CatalogContext {
    expect_context::<CatalogContext>()
}
