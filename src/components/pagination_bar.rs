//! Pagination Bar Component
//!
//! Prev/next buttons with a window of page numbers.

use kangyur_catalog::Page;
use leptos::prelude::*;

/// Buttons shown around the current page
const PAGE_WINDOW: usize = 7;

/// Page metadata detached from the borrowed slice
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub window: Vec<usize>,
}

impl<T> From<&Page<'_, T>> for PageInfo {
    fn from(page: &Page<'_, T>) -> Self {
        Self {
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_items: page.total_items,
            has_next_page: page.has_next_page,
            has_prev_page: page.has_prev_page,
            window: page.page_window(PAGE_WINDOW),
        }
    }
}

/// Hidden when everything fits on one page
#[component]
pub fn PaginationBar(
    info: Signal<PageInfo>,
    #[prop(into)] on_change: Callback<i64>,
) -> impl IntoView {
    let go_prev = move |_| {
        let current = info.with(|i| i64::try_from(i.current_page).unwrap_or(i64::MAX));
        on_change.run(current - 1);
    };
    let go_next = move |_| {
        let current = info.with(|i| i64::try_from(i.current_page).unwrap_or(i64::MAX));
        on_change.run(current.saturating_add(1));
    };

    view! {
        <Show when=move || info.with(|i| i.total_pages > 1)>
            <nav class="pagination-bar">
                <button class="page-btn" disabled=move || !info.with(|i| i.has_prev_page) on:click=go_prev>
                    "‹"
                </button>
                <For
                    each=move || info.with(|i| i.window.clone())
                    key=|page| *page
                    children=move |page| {
                        let is_current = move || info.with(|i| i.current_page == page);
                        view! {
                            <button
                                class=move || if is_current() { "page-btn current" } else { "page-btn" }
                                on:click=move |_| on_change.run(page as i64)
                            >
                                {page}
                            </button>
                        }
                    }
                />
                <button class="page-btn" disabled=move || !info.with(|i| i.has_next_page) on:click=go_next>
                    "›"
                </button>
                <span class="page-summary">
                    {move || info.with(|i| format!("Page {} of {} ({} items)", i.current_page, i.total_pages, i.total_items))}
                </span>
            </nav>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kangyur_catalog::paginate_items;

    #[test]
    fn test_page_info_from_page() {
        let items: Vec<u32> = (0..45).collect();
        let info = PageInfo::from(&paginate_items(&items, 3, 10));
        assert_eq!(info.current_page, 3);
        assert_eq!(info.total_pages, 5);
        assert_eq!(info.window, vec![1, 2, 3, 4, 5]);
        assert!(info.has_next_page && info.has_prev_page);
    }
}
