//! Catalog Tree Item Component
//!
//! Individual row in the catalog tree.

use leptos::prelude::*;

use crate::components::TreeRow;
use crate::context::use_catalog_context;

/// Pixels of indentation per tree level
const INDENT_PX: usize = 20;

/// A single catalog row in the tree
#[component]
pub fn CatalogTreeItem(row: TreeRow) -> impl IntoView {
    let ctx = use_catalog_context();

    let id = row.id.clone();
    let indent = row.depth * INDENT_PX;

    view! {
        <div class="item-row" style=format!("margin-left: {}px;", indent)>
            // Expand toggle
            {if row.has_children {
                view! {
                    <button class="collapse-btn" on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        ctx.toggle_expand(&id);
                    }>
                        {if row.is_expanded { "▼" } else { "▶" }}
                    </button>
                }.into_any()
            } else {
                view! { <span class="collapse-placeholder">"·"</span> }.into_any()
            }}

            <span class="title-tibetan">{row.tibetan}</span>
            <span class="title-english">{row.english}</span>
            {row.count.map(|count| view! { <span class="item-count">{count}</span> })}
        </div>
    }
}
