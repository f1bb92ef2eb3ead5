//! List Configuration
//!
//! Defaults cover the hosted item service. A host page may override any
//! field with a JSON block:
//!
//! ```html
//! <script id="list-config" type="application/json">{"page_size": 50}</script>
//! ```

use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "list-config";

pub const DEFAULT_BASE_URL: &str = "https://list-blue-xi.vercel.app";
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_PREFETCH_THRESHOLD: usize = 5;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub base_url: String,
    pub page_size: usize,
    /// Rows from the loaded end at which the next page is requested
    pub prefetch_threshold: usize,
    /// Fixed row height in pixels
    pub row_height: u32,
    /// Scroll container height in pixels
    pub viewport_height: u32,
    /// Extra rows rendered on each side of the viewport
    pub overscan: usize,
    pub log_level: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            prefetch_threshold: DEFAULT_PREFETCH_THRESHOLD,
            row_height: 40,
            viewport_height: 480,
            overscan: 4,
            log_level: "info".to_string(),
        }
    }
}

impl ListConfig {
    /// Parse a JSON override; fields not present keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: ListConfig = serde_json::from_str(json)?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        if config.page_size == 0 {
            config.page_size = DEFAULT_PAGE_SIZE;
        }
        Ok(config)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// Read the config block from the host page, falling back to defaults.
pub fn load() -> ListConfig {
    let text = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match text {
        Some(json) if !json.trim().is_empty() => match ListConfig::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                // Logger is not up yet
                web_sys::console::warn_1(&format!("[config] ignoring #{}: {}", CONFIG_ELEMENT_ID, e).into());
                ListConfig::default()
            }
        },
        _ => ListConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(ListConfig::from_json("{}").unwrap(), ListConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = ListConfig::from_json(r#"{"base_url":"http://localhost:3000/","page_size":50}"#).unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.prefetch_threshold, DEFAULT_PREFETCH_THRESHOLD);
    }

    #[test]
    fn test_zero_page_size_falls_back() {
        let config = ListConfig::from_json(r#"{"page_size":0}"#).unwrap();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_malformed_json() {
        assert!(ListConfig::from_json("{page_size:").is_err());
    }

    #[test]
    fn test_log_level() {
        let mut config = ListConfig::default();
        assert_eq!(config.log_level(), log::LevelFilter::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }
}
