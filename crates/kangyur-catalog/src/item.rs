//! Catalog Item
//!
//! One node of the catalog tree. Categories carry `children`, texts don't.

use serde::{Deserialize, Deserializer, Serialize};

/// Missing or `null` both become `T::default()`
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Tibetan/English title pair
///
/// Both fields are always strings. A title missing from the payload, or
/// sent as `null`, deserializes to empty strings rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualTitle {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tibetan: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub english: String,
}

impl BilingualTitle {
    pub fn new(tibetan: impl Into<String>, english: impl Into<String>) -> Self {
        Self {
            tibetan: tibetan.into(),
            english: english.into(),
        }
    }
}

/// A catalog node (category or text)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique within one fetched tree only
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: BilingualTitle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Server-supplied descendant text count, may disagree with `children`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// `None` = text (leaf), `Some(vec![])` = category with nothing loaded yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<CatalogItem>>,
}

/// Tagged view of a node, distinguished by presence of `children`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeKind<'a> {
    Text,
    Category(&'a [CatalogItem]),
}

impl CatalogItem {
    /// Create a text (leaf) node
    pub fn text(id: impl Into<String>, title: BilingualTitle) -> Self {
        Self {
            id: id.into(),
            title,
            ..Default::default()
        }
    }

    /// Create a category node with the given children
    pub fn category(id: impl Into<String>, title: BilingualTitle, children: Vec<CatalogItem>) -> Self {
        Self {
            id: id.into(),
            title,
            children: Some(children),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn kind(&self) -> NodeKind<'_> {
        match &self.children {
            Some(children) => NodeKind::Category(children),
            None => NodeKind::Text,
        }
    }

    pub fn is_category(&self) -> bool {
        self.children.is_some()
    }

    /// Children present and non-empty
    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Children slice, empty for texts
    pub fn child_items(&self) -> &[CatalogItem] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Number of leaf texts actually present below this node
    pub fn leaf_text_count(&self) -> usize {
        match self.kind() {
            NodeKind::Text => 0,
            NodeKind::Category(children) => children
                .iter()
                .map(|child| if child.is_category() { child.leaf_text_count() } else { 1 })
                .sum(),
        }
    }

    /// Count shown next to a category: server count first, computed otherwise
    pub fn display_count(&self) -> Option<usize> {
        if !self.is_category() {
            return None;
        }
        Some(self.count.map(|c| c as usize).unwrap_or_else(|| self.leaf_text_count()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty_children_are_distinct() {
        let leaf: CatalogItem = serde_json::from_str(r#"{"id":"t1","title":{"tibetan":"","english":"Text"}}"#).unwrap();
        let empty: CatalogItem =
            serde_json::from_str(r#"{"id":"c1","title":{"tibetan":"","english":"Cat"},"children":[]}"#).unwrap();

        assert_eq!(leaf.kind(), NodeKind::Text);
        assert!(matches!(empty.kind(), NodeKind::Category(c) if c.is_empty()));
        assert!(!empty.has_children());

        let round_trip: CatalogItem = serde_json::from_str(&serde_json::to_string(&empty).unwrap()).unwrap();
        assert_eq!(round_trip.children, Some(vec![]));
    }

    #[test]
    fn test_missing_title_defaults_to_empty_strings() {
        let item: CatalogItem = serde_json::from_str(r#"{"id":"x","title":{"english":"Only English"}}"#).unwrap();
        assert_eq!(item.title.tibetan, "");

        let bare: CatalogItem = serde_json::from_str(r#"{"id":"y","_matches":true}"#).unwrap();
        assert_eq!(bare.title, BilingualTitle::default());
    }

    #[test]
    fn test_null_title_fields_become_empty() {
        let item: CatalogItem =
            serde_json::from_str(r#"{"id":"a","title":{"tibetan":null,"english":"Heart"}}"#).unwrap();
        assert_eq!(item.title, BilingualTitle::new("", "Heart"));

        let item: CatalogItem = serde_json::from_str(r#"{"id":"b","title":null}"#).unwrap();
        assert_eq!(item.title, BilingualTitle::default());
    }

    #[test]
    fn test_display_count_prefers_server_count() {
        let cat = CatalogItem::category(
            "c",
            BilingualTitle::new("མདོ།", "Sutra"),
            vec![
                CatalogItem::text("a", BilingualTitle::default()),
                CatalogItem::category("sub", BilingualTitle::default(), vec![CatalogItem::text("b", BilingualTitle::default())]),
            ],
        );
        assert_eq!(cat.leaf_text_count(), 2);
        assert_eq!(cat.display_count(), Some(2));
        assert_eq!(cat.clone().with_count(40).display_count(), Some(40));
        assert_eq!(CatalogItem::text("t", BilingualTitle::default()).display_count(), None);
    }
}
