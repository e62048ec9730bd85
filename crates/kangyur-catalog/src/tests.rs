//! Catalog Scenario Tests
//!
//! Search, lookup, pagination and tree state working together on the
//! bundled sample catalog.

#[cfg(test)]
mod tests {
    use crate::{
        filter_catalog_items, find_item_in_tree, paginate_items, sample_catalog, visible_rows, CatalogItem,
        SearchOutcome, TreeState, UrlQuery,
    };

    fn all_nodes(tree: &[CatalogItem]) -> Vec<&CatalogItem> {
        let mut out = Vec::new();
        for item in tree {
            out.push(item);
            out.extend(all_nodes(item.child_items()));
        }
        out
    }

    fn matches_predicate(item: &CatalogItem, query: &str) -> bool {
        let q = query.to_lowercase();
        item.title.english.to_lowercase().contains(&q) || item.title.tibetan.to_lowercase().contains(&q)
    }

    #[test]
    fn test_search_is_sound_and_complete() {
        let tree = sample_catalog().unwrap();
        for query in ["the", "SŪTRA", "wisdom", "རྡོ་རྗེ", "x", "ཤེར"] {
            let matches = filter_catalog_items(&tree, query).into_vec();
            let expected: Vec<&CatalogItem> = all_nodes(&tree)
                .into_iter()
                .filter(|item| matches_predicate(item, query))
                .collect();

            assert_eq!(matches.len(), expected.len(), "query {:?}", query);
            for (got, want) in matches.iter().zip(&expected) {
                assert!(std::ptr::eq(*got, *want), "query {:?}", query);
            }
        }
    }

    #[test]
    fn test_every_id_resolves() {
        let tree = sample_catalog().unwrap();
        for node in all_nodes(&tree) {
            let found = find_item_in_tree(&tree, &node.id).unwrap();
            assert_eq!(found.id, node.id);
        }
        assert!(find_item_in_tree(&tree, "toh-missing").is_none());
    }

    #[test]
    fn test_search_results_paginate_without_gaps() {
        let tree = sample_catalog().unwrap();
        let matches = filter_catalog_items(&tree, "the").into_vec();
        assert!(matches.len() > 2);

        let first = paginate_items(&matches, 1, 2);
        let mut rebuilt = Vec::new();
        for page in 1..=first.total_pages as i64 {
            rebuilt.extend(paginate_items(&matches, page, 2).items.iter().map(|i| i.id.clone()));
        }
        let ids: Vec<String> = matches.iter().map(|i| i.id.clone()).collect();
        assert_eq!(rebuilt, ids);
    }

    #[test]
    fn test_url_selection_reveals_row() {
        let tree = sample_catalog().unwrap();
        let query = UrlQuery::parse("?item=toh95");
        let mut state = TreeState::new();

        let id = query.item.unwrap();
        assert!(state.reveal(&tree, &id));
        state.select(&id);

        let rows = visible_rows(&tree, &state);
        let row = rows.iter().find(|r| r.item.id == "toh95").expect("revealed row is visible");
        assert_eq!(row.depth, 2);
        assert!(state.is_selected("toh95"));
    }

    #[test]
    fn test_clicking_category_collapses_default_expansion() {
        let tree = sample_catalog().unwrap();
        let mut state = TreeState::with_top_level_expanded(&tree);
        let before = visible_rows(&tree, &state).len();

        assert!(state.select_in(&tree, "prajnaparamita"));
        let after = visible_rows(&tree, &state).len();
        assert_eq!(before - after, 3);
    }

    #[test]
    fn test_empty_query_keeps_hierarchy() {
        let tree = sample_catalog().unwrap();
        assert_eq!(filter_catalog_items(&tree, ""), SearchOutcome::Unfiltered(&tree));
    }
}
