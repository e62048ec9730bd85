//! URL Query
//!
//! The `?q=`, `?page=` and `?item=` parameters of the browser location.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::pagination::parse_page_number;

/// Unreserved characters stay readable in the address bar
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlQuery {
    /// Trimmed search text, `None` when blank
    pub q: Option<String>,
    pub page: i64,
    /// Selected catalog id
    pub item: Option<String>,
}

impl Default for UrlQuery {
    fn default() -> Self {
        Self {
            q: None,
            page: 1,
            item: None,
        }
    }
}

impl UrlQuery {
    /// Parse a location search string (`?q=heart&page=2`); unknown keys are ignored
    pub fn parse(search: &str) -> Self {
        let mut query = Self::default();
        let mut seen_page = false;

        for pair in search.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode(raw);
            match key {
                "q" if query.q.is_none() => {
                    let trimmed = value.trim();
                    if !trimmed.is_empty() {
                        query.q = Some(trimmed.to_string());
                    }
                }
                "page" if !seen_page => {
                    seen_page = true;
                    query.page = parse_page_number(&value);
                }
                "item" if query.item.is_none() && !value.is_empty() => query.item = Some(value),
                _ => {}
            }
        }
        query
    }

    /// Serialize back to `?...`, leaving out defaults; empty string when nothing is set
    pub fn to_search_string(&self) -> String {
        let mut parts = Vec::new();
        if let Some(q) = self.q.as_deref().filter(|q| !q.is_empty()) {
            parts.push(format!("q={}", utf8_percent_encode(q, QUERY_VALUE)));
        }
        if self.page > 1 {
            parts.push(format!("page={}", self.page));
        }
        if let Some(item) = &self.item {
            parts.push(format!("item={}", utf8_percent_encode(item, QUERY_VALUE)));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_params() {
        let query = UrlQuery::parse("?q=heart+sutra&page=3&item=toh21");
        assert_eq!(query.q.as_deref(), Some("heart sutra"));
        assert_eq!(query.page, 3);
        assert_eq!(query.item.as_deref(), Some("toh21"));
    }

    #[test]
    fn test_parse_trims_and_drops_blank_query() {
        assert_eq!(UrlQuery::parse("?q=%20%20").q, None);
        assert_eq!(UrlQuery::parse("q=%20Heart%20").q.as_deref(), Some("Heart"));
        assert_eq!(UrlQuery::parse(""), UrlQuery::default());
    }

    #[test]
    fn test_parse_tibetan_and_bad_page() {
        let query = UrlQuery::parse("?q=%E0%BD%98%E0%BD%91%E0%BD%BC&page=abc");
        assert_eq!(query.q.as_deref(), Some("མདོ"));
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_first_value_wins() {
        let query = UrlQuery::parse("?q=one&q=two&page=2&page=5");
        assert_eq!(query.q.as_deref(), Some("one"));
        assert_eq!(query.page, 2);
    }

    #[test]
    fn test_to_search_string() {
        assert_eq!(UrlQuery::default().to_search_string(), "");

        let query = UrlQuery {
            q: Some("heart sutra".to_string()),
            page: 2,
            item: Some("toh-21".to_string()),
        };
        let search = query.to_search_string();
        assert_eq!(search, "?q=heart%20sutra&page=2&item=toh-21");
        assert_eq!(UrlQuery::parse(&search), query);
    }
}
