//! Kangyur Catalog Core
//!
//! Pure tree utilities behind the catalog browser:
//! - item: the recursive `CatalogItem` model
//! - search: case-insensitive title search over the whole tree
//! - lookup: find-by-id and breadcrumb paths
//! - pagination: page slicing with metadata
//! - tree_state: expansion/selection state machine
//! - visible: indented rows for the tree view
//! - query: `?q=` / `?page=` / `?item=` URL parameters
//! - dataset: JSON loading and the bundled sample catalog

mod dataset;
mod item;
mod lookup;
mod pagination;
mod query;
mod search;
mod tree_state;
mod visible;

#[cfg(test)]
mod tests;

pub use dataset::{duplicate_ids, parse_catalog, sample_catalog, CatalogError};
pub use item::{BilingualTitle, CatalogItem, NodeKind};
pub use lookup::{find_item_in_tree, find_path_to_item};
pub use pagination::{paginate_items, parse_page_number, Page, MAX_PAGE_NUMBER};
pub use query::UrlQuery;
pub use search::{filter_catalog_items, SearchOutcome};
pub use tree_state::TreeState;
pub use visible::{visible_rows, VisibleRow};
