//! Catalog Tree View Component
//!
//! Displays the catalog as indented rows; expansion and selection come from
//! the shared tree state.

use kangyur_catalog::{visible_rows, VisibleRow};
use leptos::prelude::*;

use crate::components::{indexed, CatalogTreeItem};
use crate::context::use_catalog_context;
use crate::store::{store_catalog_with, use_app_store};

/// Owned copy of a visible row, so it can live in a Memo
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow {
    pub id: String,
    pub tibetan: String,
    pub english: String,
    pub depth: usize,
    pub has_children: bool,
    pub is_expanded: bool,
    pub count: Option<usize>,
}

impl From<VisibleRow<'_>> for TreeRow {
    fn from(row: VisibleRow<'_>) -> Self {
        Self {
            id: row.item.id.clone(),
            tibetan: row.item.title.tibetan.clone(),
            english: row.item.title.english.clone(),
            depth: row.depth,
            has_children: row.has_children,
            is_expanded: row.is_expanded,
            count: row.item.display_count(),
        }
    }
}

/// `<For>` key for an indexed tree row; position keeps duplicate ids apart
pub fn tree_row_key((index, row): &(usize, TreeRow)) -> (usize, String, usize, bool) {
    (*index, row.id.clone(), row.depth, row.is_expanded)
}

#[component]
pub fn CatalogTreeView() -> impl IntoView {
    let ctx = use_catalog_context();
    let store = use_app_store();

    let rows = Memo::new(move |_| {
        ctx.tree_state.with(|state| {
            store_catalog_with(&store, |tree| {
                visible_rows(tree, state).into_iter().map(TreeRow::from).collect::<Vec<_>>()
            })
        })
    });

    view! {
        <div class="tree-view">
            <Show
                when=move || rows.with(|r| !r.is_empty())
                fallback=|| view! { <p class="empty-state">"No items found"</p> }
            >
                <For
                    each=move || indexed(rows.get())
                    key=tree_row_key
                    children=move |(_, row)| {
                        let id = row.id.clone();
                        let is_selected = move || ctx.tree_state.with(|state| state.is_selected(&id));
                        let item_class = move || {
                            if is_selected() { "tree-item-wrapper selected" } else { "tree-item-wrapper" }
                        };
                        let select_id = row.id.clone();

                        view! {
                            <div class=item_class on:click=move |_| ctx.select(&select_id)>
                                <CatalogTreeItem row=row />
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kangyur_catalog::{BilingualTitle, CatalogItem, TreeState};

    #[test]
    fn test_duplicate_rows_keep_distinct_keys() {
        let tree = vec![
            CatalogItem::text("dup", BilingualTitle::new("", "First")),
            CatalogItem::text("dup", BilingualTitle::new("", "Second")),
        ];
        let rows = indexed(visible_rows(&tree, &TreeState::new()).into_iter().map(TreeRow::from).collect());

        let keys: Vec<_> = rows.iter().map(tree_row_key).collect();
        assert_eq!(keys.len(), 2);
        assert_ne!(keys[0], keys[1]);
        assert_eq!(rows[1].1.english, "Second");
    }
}
