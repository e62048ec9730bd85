//! Item Detail Component
//!
//! Shows the selected catalog node: bilingual title, description,
//! breadcrumbs, and a paginated list of its children.

use kangyur_catalog::{find_item_in_tree, paginate_items, CatalogItem, NodeKind};
use leptos::prelude::*;

use crate::components::{entry_key, indexed, Breadcrumbs, CatalogEntry, CatalogEntryRow, PageInfo, PaginationBar};
use crate::context::use_catalog_context;
use crate::store::{store_catalog_with, use_app_store};

#[component]
pub fn ItemDetail() -> impl IntoView {
    let ctx = use_catalog_context();
    let store = use_app_store();

    let selected_id = Memo::new(move |_| ctx.selected_id());
    let selected = Memo::new(move |_| {
        let id = selected_id.get()?;
        store_catalog_with(&store, |tree| find_item_in_tree(tree, &id).cloned())
    });

    // Children page restarts whenever another node is selected
    let (child_page, set_child_page) = signal(1i64);
    Effect::new(move |_| {
        selected_id.track();
        set_child_page.set(1);
    });

    let children_page = Memo::new(move |_| {
        let current = child_page.get();
        selected.with(|item| {
            let children = item.as_ref().map(CatalogItem::child_items).unwrap_or(&[]);
            let page = paginate_items(children, current, ctx.items_per_page);
            (page.items.iter().map(CatalogEntry::from).collect::<Vec<_>>(), PageInfo::from(&page))
        })
    });
    let info = Signal::derive(move || children_page.with(|(_, info)| info.clone()));

    let on_select = Callback::new(move |id: String| ctx.reveal(&id));
    let on_page = Callback::new(move |p: i64| set_child_page.set(p.max(1)));

    view! {
        <section class="item-detail">
            {move || match selected.get() {
                None => view! {
                    <p class="empty-state">"Select a text or category"</p>
                }.into_any(),
                Some(item) => {
                    let kind_label = match item.kind() {
                        NodeKind::Text => "Text",
                        NodeKind::Category(_) => "Category",
                    };
                    let unloaded = matches!(item.kind(), NodeKind::Category(children) if children.is_empty());
                    view! {
                        <Breadcrumbs item_id=Signal::derive(move || selected_id.get()) />
                        <header class="detail-header">
                            <span class="detail-kind">{kind_label}</span>
                            <h2 class="title-tibetan">{item.title.tibetan.clone()}</h2>
                            <h3 class="title-english">{item.title.english.clone()}</h3>
                            {item.display_count().map(|count| view! { <p class="detail-count">{format!("{} texts", count)}</p> })}
                        </header>
                        {item.description.clone().map(|text| view! { <p class="detail-description">{text}</p> })}
                        {unloaded.then(|| view! { <p class="empty-state">"No items found"</p> })}
                    }.into_any()
                }
            }}
            <Show when=move || children_page.with(|(entries, _)| !entries.is_empty())>
                <ul class="entry-list">
                    <For
                        each=move || children_page.with(|(entries, _)| indexed(entries.clone()))
                        key=entry_key
                        children=move |(_, entry)| view! { <CatalogEntryRow entry=entry on_select=on_select /> }
                    />
                </ul>
                <PaginationBar info=info on_change=on_page />
            </Show>
        </section>
    }
}
