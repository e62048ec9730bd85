//! Visible Rows
//!
//! Flattens the catalog into indented rows for the tree view.

use crate::item::CatalogItem;
use crate::tree_state::TreeState;

/// A row in display order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleRow<'a> {
    pub item: &'a CatalogItem,
    pub depth: usize,
    pub has_children: bool,
    pub is_expanded: bool,
}

/// Render the tree as (item, depth) rows using recursive DFS
/// Children are only listed under expanded nodes.
pub fn visible_rows<'a>(tree: &'a [CatalogItem], state: &TreeState) -> Vec<VisibleRow<'a>> {
    fn collect<'a>(items: &'a [CatalogItem], depth: usize, state: &TreeState, result: &mut Vec<VisibleRow<'a>>) {
        for item in items {
            let is_expanded = state.is_expanded(&item.id);
            result.push(VisibleRow {
                item,
                depth,
                has_children: item.has_children(),
                is_expanded,
            });
            if is_expanded {
                collect(item.child_items(), depth + 1, state, result);
            }
        }
    }

    let mut result = Vec::new();
    collect(tree, 0, state, &mut result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::BilingualTitle;

    fn make(id: &str, children: Option<Vec<CatalogItem>>) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            title: BilingualTitle::new("", format!("Item {}", id)),
            children,
            ..Default::default()
        }
    }

    #[test]
    fn test_visible_rows() {
        let tree = vec![
            make("1", Some(vec![make("3", Some(vec![make("5", None)])), make("4", None)])),
            make("2", None),
        ];
        let mut state = TreeState::new();
        state.toggle_expand("1");
        state.toggle_expand("3");

        let rows = visible_rows(&tree, &state);

        // 1 (depth 0), 3 (depth 1), 5 (depth 2), 4 (depth 1), 2 (depth 0)
        let got: Vec<(&str, usize)> = rows.iter().map(|r| (r.item.id.as_str(), r.depth)).collect();
        assert_eq!(got, vec![("1", 0), ("3", 1), ("5", 2), ("4", 1), ("2", 0)]);
        assert!(rows[0].has_children && rows[0].is_expanded);
        assert!(!rows[4].has_children);
    }

    #[test]
    fn test_collapsed_hides_descendants() {
        let tree = vec![make("1", Some(vec![make("3", Some(vec![make("5", None)]))]))];
        let mut state = TreeState::new();
        state.toggle_expand("3");

        let rows = visible_rows(&tree, &state);
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].is_expanded);
    }
}
