//! Kangyur Browser App
//!
//! Two-column layout: catalog tree (or search results) on the left, detail
//! of the selected item on the right.

use kangyur_catalog::TreeState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{CatalogTreeView, ItemDetail, SearchBar, SearchResults};
use crate::config::AppConfig;
use crate::context::CatalogContext;
use crate::routing;
use crate::store::{store_begin_load, store_is_loading, store_load_error, store_set_catalog, store_set_load_error, AppState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let initial = routing::current_query();

    // State
    let store = Store::new(AppState::default());
    let ctx = CatalogContext::new(store, &initial, config.items_per_page);
    // `?item=` from the URL, applied once the first tree arrives
    let pending_item = StoredValue::new(initial.item.clone());

    // Provide state to all children
    provide_context(store);
    provide_context(ctx);

    // Load catalog on mount and whenever a reload is requested
    let fetch_config = config.clone();
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let config = fetch_config.clone();
        store_begin_load(&store);
        spawn_local(async move {
            let result = api::load_catalog(&config).await;
            if ctx.reload_trigger.get_untracked() != trigger {
                log::debug!("dropping stale catalog response (trigger {})", trigger);
                return;
            }
            match result {
                Ok(tree) => {
                    log::info!("loaded catalog with {} top-level sections", tree.len());
                    let state = store_set_catalog(&store, tree);
                    ctx.reset_tree_state(state);
                    if let Some(id) = pending_item.get_value() {
                        pending_item.set_value(None);
                        ctx.reveal(&id);
                    }
                }
                Err(err) => {
                    log::error!("failed to load catalog: {}", err);
                    store_set_load_error(&store, err.to_string());
                    ctx.reset_tree_state(TreeState::new());
                }
            }
        });
    });

    let searching = move || !ctx.query.get().is_empty();

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1 class="app-title">
                    <span class="title-tibetan">"བཀའ་འགྱུར།"</span>
                    <span class="title-english">"Kangyur"</span>
                </h1>
                <SearchBar debounce_ms=config.search_debounce_ms />
            </header>

            {move || store_load_error(&store).map(|message| view! {
                <div class="error-banner">
                    <span>{message}</span>
                    <button class="retry-btn" on:click=move |_| ctx.reload()>"Retry"</button>
                </div>
            })}

            <div class="app-body">
                // Left: tree or flat search results
                <nav class="catalog-column">
                    <Show
                        when=move || !store_is_loading(&store)
                        fallback=|| view! { <p class="loading">"Loading…"</p> }
                    >
                        <Show when=searching fallback=|| view! { <CatalogTreeView /> }>
                            <SearchResults />
                        </Show>
                    </Show>
                </nav>

                // Right: selected item
                <main class="detail-column">
                    <ItemDetail />
                </main>
            </div>
        </div>
    }
}
