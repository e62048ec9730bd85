//! Search Results Component
//!
//! Paginated flat list of catalog nodes whose titles contain the query.

use kangyur_catalog::{filter_catalog_items, paginate_items, SearchOutcome};
use leptos::prelude::*;

use crate::components::{entry_key, indexed, CatalogEntry, CatalogEntryRow, PageInfo, PaginationBar};
use crate::context::use_catalog_context;
use crate::store::{store_catalog_with, use_app_store};

#[component]
pub fn SearchResults() -> impl IntoView {
    let ctx = use_catalog_context();
    let store = use_app_store();

    let matches = Memo::new(move |_| {
        let query = ctx.query.get();
        store_catalog_with(&store, |tree| match filter_catalog_items(tree, &query) {
            SearchOutcome::Matches(found) => found.into_iter().map(CatalogEntry::from).collect::<Vec<_>>(),
            SearchOutcome::Unfiltered(_) => Vec::new(),
        })
    });

    let page = Memo::new(move |_| {
        let current = ctx.page.get();
        matches.with(|all| {
            let page = paginate_items(all, current, ctx.items_per_page);
            (page.items.to_vec(), PageInfo::from(&page))
        })
    });
    let info = Signal::derive(move || page.with(|(_, info)| info.clone()));

    let on_select = Callback::new(move |id: String| ctx.reveal(&id));
    let on_page = Callback::new(move |p: i64| ctx.set_page(p));

    view! {
        <div class="search-results">
            <p class="result-count">
                {move || format!("{} results for \u{201c}{}\u{201d}", matches.with(|m| m.len()), ctx.query.get())}
            </p>
            <Show
                when=move || page.with(|(entries, _)| !entries.is_empty())
                fallback=|| view! { <p class="empty-state">"No items found"</p> }
            >
                <ul class="entry-list">
                    <For
                        each=move || page.with(|(entries, _)| indexed(entries.clone()))
                        key=entry_key
                        children=move |(_, entry)| view! { <CatalogEntryRow entry=entry on_select=on_select /> }
                    />
                </ul>
            </Show>
            <PaginationBar info=info on_change=on_page />
        </div>
    }
}
