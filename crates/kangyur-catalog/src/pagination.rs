//! Pagination
//!
//! Slice-and-metadata helper for any flat list (search matches, a category's children).

/// One page of a borrowed sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based, after clamping
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl<T> Page<'_, T> {
    /// Up to `max_buttons` page numbers centred on the current page
    ///
    /// Empty when there are no pages. A current page past the end yields the
    /// last window.
    pub fn page_window(&self, max_buttons: usize) -> Vec<usize> {
        if self.total_pages == 0 || max_buttons == 0 {
            return Vec::new();
        }
        let span = max_buttons.min(self.total_pages);
        let current = self.current_page.min(self.total_pages);
        let start = current.saturating_sub(span / 2).max(1).min(self.total_pages - span + 1);
        (start..start + span).collect()
    }
}

/// Slice `items` to the requested 1-based page
///
/// Pages below 1 become 1; there is no upper clamp, so a page past the end
/// is just empty. A page size below 1 is treated as 1.
pub fn paginate_items<T>(items: &[T], current_page: i64, items_per_page: i64) -> Page<'_, T> {
    let page = current_page.max(1) as u64;
    let per_page = items_per_page.max(1) as u64;
    let total_items = items.len();

    let start = (page - 1).saturating_mul(per_page).min(total_items as u64) as usize;
    let end = (start as u64).saturating_add(per_page).min(total_items as u64) as usize;
    let total_pages = (total_items as u64).div_ceil(per_page) as usize;

    Page {
        items: &items[start..end],
        current_page: usize::try_from(page).unwrap_or(usize::MAX),
        total_pages,
        total_items,
        items_per_page: usize::try_from(per_page).unwrap_or(usize::MAX),
        has_next_page: page < total_pages as u64,
        has_prev_page: page > 1,
    }
}

/// Largest page number accepted from a URL; fits `usize` on 32-bit targets
pub const MAX_PAGE_NUMBER: i64 = u32::MAX as i64;

/// Page number from a URL parameter; anything unusable becomes 1
///
/// Accepts integers only: `"2.5"`, `"NaN"`, `"inf"`, `"-3"` and `""` all give 1.
/// Values above `MAX_PAGE_NUMBER` are capped to it.
pub fn parse_page_number(raw: &str) -> i64 {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|p| *p >= 1)
        .map_or(1, |p| p.min(MAX_PAGE_NUMBER))
}
