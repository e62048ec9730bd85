//! Catalog Entry Row
//!
//! One flat list row (search hit or child of the selected node).

use kangyur_catalog::CatalogItem;
use leptos::prelude::*;

/// Owned snapshot of the fields a list row shows
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub id: String,
    pub tibetan: String,
    pub english: String,
    pub count: Option<usize>,
    pub is_category: bool,
}

impl From<&CatalogItem> for CatalogEntry {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.clone(),
            tibetan: item.title.tibetan.clone(),
            english: item.title.english.clone(),
            count: item.display_count(),
            is_category: item.is_category(),
        }
    }
}

/// Pair each row with its position; ids alone can repeat within one tree
pub fn indexed<T>(rows: Vec<T>) -> Vec<(usize, T)> {
    rows.into_iter().enumerate().collect()
}

/// `<For>` key for an indexed entry list
pub fn entry_key((index, entry): &(usize, CatalogEntry)) -> (usize, String) {
    (*index, entry.id.clone())
}

#[component]
pub fn CatalogEntryRow(
    entry: CatalogEntry,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let id = entry.id.clone();
    let icon = if entry.is_category { "📁" } else { "📄" };

    view! {
        <li class="catalog-entry" on:click=move |_| on_select.run(id.clone())>
            <span class="entry-icon">{icon}</span>
            <span class="title-tibetan">{entry.tibetan}</span>
            <span class="title-english">{entry.english}</span>
            {entry.count.map(|count| view! { <span class="entry-count">{count}</span> })}
        </li>
    }
}
