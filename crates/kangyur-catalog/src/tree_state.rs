//! Expansion/Selection State
//!
//! Which catalog nodes are expanded and which one (at most) is selected.
//! Lives as long as the tree view that owns it; `reset` brings it back to
//! the initial state.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::item::CatalogItem;
use crate::lookup::{find_item_in_tree, find_path_to_item};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeState {
    pub expanded_ids: HashSet<String>,
    pub selected_id: Option<String>,
}

impl TreeState {
    /// Nothing expanded, nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state with every top-level category expanded
    pub fn with_top_level_expanded(tree: &[CatalogItem]) -> Self {
        Self {
            expanded_ids: tree
                .iter()
                .filter(|item| item.is_category())
                .map(|item| item.id.clone())
                .collect(),
            selected_id: None,
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_ids.contains(id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }

    /// Collapse if expanded, expand otherwise
    pub fn toggle_expand(&mut self, id: &str) {
        if !self.expanded_ids.remove(id) {
            self.expanded_ids.insert(id.to_string());
        }
    }

    /// Replace the selection
    pub fn select(&mut self, id: &str) {
        self.selected_id = Some(id.to_string());
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// Select `item`; an item with children also toggles its expansion
    pub fn select_with_auto_expand(&mut self, item: &CatalogItem) {
        self.select(&item.id);
        if item.has_children() {
            self.toggle_expand(&item.id);
        }
    }

    /// Resolve `id` in `tree` and select it with auto-expand
    ///
    /// Returns false (state untouched) when the id is not in the tree.
    pub fn select_in(&mut self, tree: &[CatalogItem], id: &str) -> bool {
        match find_item_in_tree(tree, id) {
            Some(item) => {
                self.select_with_auto_expand(item);
                true
            }
            None => {
                log::debug!("select ignored, id {:?} not in catalog", id);
                false
            }
        }
    }

    /// Expand every ancestor of `id` so its row becomes visible
    ///
    /// The node itself keeps its expansion. Returns false for unknown ids.
    pub fn reveal(&mut self, tree: &[CatalogItem], id: &str) -> bool {
        let Some(path) = find_path_to_item(tree, id) else {
            return false;
        };
        if let Some((_, ancestors)) = path.split_last() {
            self.expanded_ids.extend(ancestors.iter().map(|item| item.id.clone()));
        }
        true
    }

    /// Jump to `id` from outside the tree: reveal its row and select it
    ///
    /// The node's own expansion is kept. Returns false (state untouched) for unknown ids.
    pub fn reveal_and_select(&mut self, tree: &[CatalogItem], id: &str) -> bool {
        if !self.reveal(tree, id) {
            return false;
        }
        self.select(id);
        true
    }

    /// Back to the initial state for `tree`
    pub fn reset(&mut self, tree: &[CatalogItem]) {
        *self = Self::with_top_level_expanded(tree);
    }
}
