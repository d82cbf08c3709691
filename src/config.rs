//! Frontend Configuration
//!
//! A WASM bundle has no process environment at runtime, so values are baked
//! in at build time from environment variables, each with a default.

use log::LevelFilter;

use crate::search::DEFAULT_PAGE_SIZE;

const DEFAULT_API_URL: &str = "http://localhost:8080";
/// Backend rejects page sizes above this
const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin, without trailing slash (`MEMBER_SEARCH_API_URL`)
    pub api_base_url: String,
    /// Rows per results page (`MEMBER_SEARCH_PAGE_SIZE`)
    pub page_size: u32,
    /// Console log level (`MEMBER_SEARCH_LOG_LEVEL`)
    pub log_level: LevelFilter,
    /// Maximum toasts on screen; unset keeps all (`MEMBER_SEARCH_TOAST_LIMIT`)
    pub toast_limit: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None, None)
    }
}

impl AppConfig {
    /// Load configuration captured at build time.
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("MEMBER_SEARCH_API_URL"),
            option_env!("MEMBER_SEARCH_PAGE_SIZE"),
            option_env!("MEMBER_SEARCH_LOG_LEVEL"),
            option_env!("MEMBER_SEARCH_TOAST_LIMIT"),
        )
    }

    fn from_values(
        api_url: Option<&str>,
        page_size: Option<&str>,
        log_level: Option<&str>,
        toast_limit: Option<&str>,
    ) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let page_size = page_size
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);

        let log_level = log_level
            .and_then(|v| v.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);

        let toast_limit = toast_limit
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|limit| *limit > 0);

        Self {
            api_base_url,
            page_size,
            log_level,
            toast_limit,
        }
    }
}
