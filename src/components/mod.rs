//! UI Components
//!
//! Reusable Leptos components.

mod breadcrumbs;
mod catalog_entry;
mod catalog_tree_item;
mod catalog_tree_view;
mod item_detail;
mod pagination_bar;
mod search_bar;
mod search_results;

pub use breadcrumbs::Breadcrumbs;
pub use catalog_entry::{entry_key, indexed, CatalogEntry, CatalogEntryRow};
pub use catalog_tree_item::CatalogTreeItem;
pub use catalog_tree_view::{tree_row_key, CatalogTreeView, TreeRow};
pub use item_detail::ItemDetail;
pub use pagination_bar::{PageInfo, PaginationBar};
pub use search_bar::SearchBar;
pub use search_results::SearchResults;
