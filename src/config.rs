//! App Configuration
//!
//! Read from the build environment:
//! - `KANGYUR_API_BASE`: REST API root; unset means the bundled sample catalog
//! - `KANGYUR_ITEMS_PER_PAGE`: list page size (default 20, at least 1)
//! - `KANGYUR_SEARCH_DEBOUNCE_MS`: delay before a typed query is applied (default 200)
//! - `KANGYUR_LOG_LEVEL`: console log level (default info)

use log::LevelFilter;

pub const DEFAULT_ITEMS_PER_PAGE: i64 = 20;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: Option<String>,
    pub items_per_page: i64,
    pub search_debounce_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("KANGYUR_API_BASE"),
            option_env!("KANGYUR_ITEMS_PER_PAGE"),
            option_env!("KANGYUR_SEARCH_DEBOUNCE_MS"),
            option_env!("KANGYUR_LOG_LEVEL"),
        )
    }

    /// Build from raw values; unparsable numbers fall back to defaults
    pub fn from_values(
        api_base: Option<&str>,
        items_per_page: Option<&str>,
        search_debounce_ms: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let api_base = api_base
            .map(|base| base.trim().trim_end_matches('/'))
            .filter(|base| !base.is_empty())
            .map(str::to_string);
        let items_per_page = items_per_page
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_ITEMS_PER_PAGE)
            .max(1);
        let search_debounce_ms = search_debounce_ms
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS);
        let log_level = log_level.map(console_logger::parse_level).unwrap_or(LevelFilter::Info);

        Self {
            api_base,
            items_per_page,
            search_debounce_ms,
            log_level,
        }
    }

    /// `GET` endpoint for the whole catalog tree
    pub fn catalog_url(&self) -> Option<String> {
        self.api_base.as_ref().map(|base| format!("{}/catalog", base))
    }
}
