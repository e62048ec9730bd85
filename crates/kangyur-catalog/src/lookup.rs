//! Tree Lookup
//!
//! Depth-first find-by-id. Duplicate ids resolve to the first node met.

use crate::item::CatalogItem;

/// Find the first node with `id`, parent before children, left to right
pub fn find_item_in_tree<'a>(tree: &'a [CatalogItem], id: &str) -> Option<&'a CatalogItem> {
    for item in tree {
        if item.id == id {
            return Some(item);
        }
        if let Some(children) = &item.children {
            if let Some(found) = find_item_in_tree(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Root-to-target chain for breadcrumbs, same tie-break as `find_item_in_tree`
pub fn find_path_to_item<'a>(tree: &'a [CatalogItem], id: &str) -> Option<Vec<&'a CatalogItem>> {
    fn walk<'a>(items: &'a [CatalogItem], id: &str, path: &mut Vec<&'a CatalogItem>) -> bool {
        for item in items {
            path.push(item);
            if item.id == id {
                return true;
            }
            if let Some(children) = &item.children {
                if walk(children, id, path) {
                    return true;
                }
            }
            path.pop();
        }
        false
    }

    let mut path = Vec::new();
    walk(tree, id, &mut path).then_some(path)
}
