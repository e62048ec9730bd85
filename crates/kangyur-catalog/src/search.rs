//! Tree Search
//!
//! Case-insensitive substring search over both title languages.

use crate::item::CatalogItem;

/// Result of a catalog search
///
/// An empty query hands back the tree untouched (hierarchy kept), any other
/// query yields a flat list with parent/child relationships dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<'a> {
    Unfiltered(&'a [CatalogItem]),
    Matches(Vec<&'a CatalogItem>),
}

impl<'a> SearchOutcome<'a> {
    pub fn is_filtered(&self) -> bool {
        matches!(self, SearchOutcome::Matches(_))
    }

    /// Top-level entries: roots when unfiltered, matches otherwise
    pub fn len(&self) -> usize {
        match self {
            SearchOutcome::Unfiltered(tree) => tree.len(),
            SearchOutcome::Matches(matches) => matches.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat list of top-level entries
    pub fn into_vec(self) -> Vec<&'a CatalogItem> {
        match self {
            SearchOutcome::Unfiltered(tree) => tree.iter().collect(),
            SearchOutcome::Matches(matches) => matches,
        }
    }
}

/// Search the tree for nodes whose English or Tibetan title contains `query`
///
/// Only exact emptiness counts as "no query"; callers trim beforehand.
/// Matches come out depth-first, parent before children, and keep node
/// identity (no cloning).
pub fn filter_catalog_items<'a>(tree: &'a [CatalogItem], query: &str) -> SearchOutcome<'a> {
    if query.is_empty() {
        return SearchOutcome::Unfiltered(tree);
    }

    let needle = query.to_lowercase();

    fn collect<'a>(items: &'a [CatalogItem], needle: &str, result: &mut Vec<&'a CatalogItem>) {
        for item in items {
            if title_matches(item, needle) {
                result.push(item);
            }
            if let Some(children) = &item.children {
                collect(children, needle, result);
            }
        }
    }

    let mut result = Vec::new();
    collect(tree, &needle, &mut result);
    log::debug!("catalog search {:?}: {} matches", query, result.len());
    SearchOutcome::Matches(result)
}

/// `needle` must already be lowercased
fn title_matches(item: &CatalogItem, needle: &str) -> bool {
    item.title.english.to_lowercase().contains(needle) || item.title.tibetan.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::BilingualTitle;

    fn text(id: &str, english: &str, tibetan: &str) -> CatalogItem {
        CatalogItem::text(id, BilingualTitle::new(tibetan, english))
    }

    fn sample_tree() -> Vec<CatalogItem> {
        vec![
            CatalogItem::category(
                "A",
                BilingualTitle::new("མདོ།", "Sutra"),
                vec![
                    text("A1", "Heart Sutra", "ཤེས་རབ་སྙིང་པོ།"),
                    text("A2", "Diamond Cutter", "རྡོ་རྗེ་གཅོད་པ།"),
                ],
            ),
            CatalogItem::category(
                "B",
                BilingualTitle::new("རྒྱུད།", "Tantra"),
                vec![CatalogItem::category(
                    "B1",
                    BilingualTitle::new("", "Sutra-like Tantras"),
                    vec![text("B1a", "Hevajra", "ཀྱེ་རྡོ་རྗེ།")],
                )],
            ),
        ]
    }

    #[test]
    fn test_empty_query_returns_tree_unchanged() {
        let tree = sample_tree();
        match filter_catalog_items(&tree, "") {
            SearchOutcome::Unfiltered(roots) => {
                assert!(std::ptr::eq(roots, tree.as_slice()));
                assert_eq!(roots[0].child_items().len(), 2);
            }
            other => panic!("expected unfiltered tree, got {:?}", other),
        }
    }

    #[test]
    fn test_whitespace_query_is_not_trimmed() {
        let tree = sample_tree();
        let outcome = filter_catalog_items(&tree, " ");
        assert!(outcome.is_filtered());
        let matches = outcome.into_vec();
        let ids: Vec<&str> = matches.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["A1", "A2", "B1"]);
    }

    #[test]
    fn test_heart_matches_only_child() {
        let tree = sample_tree();
        let matches = filter_catalog_items(&tree, "heart").into_vec();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "A1");
        assert!(std::ptr::eq(matches[0], &tree[0].child_items()[0]));
    }

    #[test]
    fn test_parent_and_child_both_listed_in_dfs_order() {
        let tree = sample_tree();
        let ids: Vec<String> = filter_catalog_items(&tree, "SUTRA")
            .into_vec()
            .into_iter()
            .map(|i| i.id.clone())
            .collect();
        assert_eq!(ids, vec!["A", "A1", "B1"]);
    }

    #[test]
    fn test_tibetan_substring_match() {
        let tree = sample_tree();
        let ids: Vec<String> = filter_catalog_items(&tree, "རྡོ་རྗེ")
            .into_vec()
            .into_iter()
            .map(|i| i.id.clone())
            .collect();
        assert_eq!(ids, vec!["A2", "B1a"]);
    }

    #[test]
    fn test_no_match_and_empty_tree() {
        let tree = sample_tree();
        assert!(filter_catalog_items(&tree, "vinaya").is_empty());
        assert!(filter_catalog_items(&[], "heart").is_empty());
        assert!(!filter_catalog_items(&[], "").is_filtered());
    }
}
