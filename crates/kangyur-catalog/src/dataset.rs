//! Catalog Dataset
//!
//! Builds the catalog tree from a JSON payload or the bundled sample.

use std::collections::HashSet;

use thiserror::Error;

use crate::item::CatalogItem;

const SAMPLE_CATALOG_JSON: &str = include_str!("../data/sample_catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON array of root nodes
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogItem>, CatalogError> {
    let tree: Vec<CatalogItem> = serde_json::from_str(json)?;
    for id in duplicate_ids(&tree) {
        log::warn!("catalog id {:?} appears more than once, lookups use the first", id);
    }
    Ok(tree)
}

/// Static catalog used when no API is configured
pub fn sample_catalog() -> Result<Vec<CatalogItem>, CatalogError> {
    parse_catalog(SAMPLE_CATALOG_JSON)
}

/// Ids occurring more than once, in first-repeat order
pub fn duplicate_ids(tree: &[CatalogItem]) -> Vec<String> {
    fn walk(items: &[CatalogItem], seen: &mut HashSet<String>, dups: &mut Vec<String>) {
        for item in items {
            if !seen.insert(item.id.clone()) && !dups.contains(&item.id) {
                dups.push(item.id.clone());
            }
            walk(item.child_items(), seen, dups);
        }
    }

    let mut seen = HashSet::new();
    let mut dups = Vec::new();
    walk(tree, &mut seen, &mut dups);
    dups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_loads() {
        let tree = sample_catalog().expect("bundled catalog parses");
        assert_eq!(tree.len(), 4);
        assert!(duplicate_ids(&tree).is_empty());
    }

    #[test]
    fn test_parse_error() {
        let err = parse_catalog("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(err.to_string().starts_with("invalid catalog JSON"));
    }

    #[test]
    fn test_null_title_does_not_reject_catalog() {
        let tree = parse_catalog(
            r#"[{"id":"a","title":{"tibetan":null,"english":"Heart"},"children":[{"id":"b","title":null}]}]"#,
        )
        .unwrap();
        assert_eq!(tree[0].title.english, "Heart");
        assert_eq!(tree[0].child_items()[0].title.english, "");
    }

    #[test]
    fn test_duplicates_reported_once() {
        let tree = parse_catalog(
            r#"[{"id":"a","children":[{"id":"b"},{"id":"a"}]},{"id":"a"},{"id":"b"}]"#,
        )
        .unwrap();
        assert_eq!(duplicate_ids(&tree), vec!["a".to_string(), "b".to_string()]);
    }
}
