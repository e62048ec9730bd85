//! Breadcrumbs Component
//!
//! Root-to-node trail for the selected catalog item.

use kangyur_catalog::find_path_to_item;
use leptos::prelude::*;

use crate::components::{entry_key, indexed, CatalogEntry};
use crate::context::use_catalog_context;
use crate::store::{store_catalog_with, use_app_store};

#[component]
pub fn Breadcrumbs(#[prop(into)] item_id: Signal<Option<String>>) -> impl IntoView {
    let ctx = use_catalog_context();
    let store = use_app_store();

    let crumbs = Memo::new(move |_| {
        let Some(id) = item_id.get() else {
            return Vec::new();
        };
        store_catalog_with(&store, |tree| {
            find_path_to_item(tree, &id)
                .map(|path| path.into_iter().map(CatalogEntry::from).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });

    view! {
        <nav class="breadcrumbs">
            <For
                each=move || indexed(crumbs.get())
                key=entry_key
                children=move |(index, crumb)| {
                    let id = crumb.id.clone();
                    let label = if crumb.english.is_empty() { crumb.tibetan.clone() } else { crumb.english.clone() };
                    view! {
                        {(index > 0).then(|| view! { <span class="crumb-sep">" › "</span> })}
                        <button class="crumb" title=crumb.tibetan on:click=move |_| ctx.reveal(&id)>
                            {label}
                        </button>
                    }
                }
            />
        </nav>
    }
}
