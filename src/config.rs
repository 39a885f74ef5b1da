//! Board Configuration
//!
//! Defaults suit a page served by the backend itself; a host page can point
//! the board elsewhere with `<meta name="activity-board-api" content="...">`.

pub const API_META_NAME: &str = "activity-board-api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Prefix for every endpoint; empty means same origin
    pub api_base: String,
    /// How long an unregister outcome stays on screen
    pub unregister_hide_ms: u32,
    /// How long a signup outcome stays on screen
    pub signup_hide_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            unregister_hide_ms: 4000,
            signup_hide_ms: 5000,
        }
    }
}

impl BoardConfig {
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim().trim_end_matches('/').to_string();
        self
    }

    /// Defaults, overridden by the host page's meta tag when present
    pub fn from_document() -> Self {
        let config = Self::default();
        let selector = format!("meta[name=\"{}\"]", API_META_NAME);
        let base = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&selector).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"));

        match base {
            Some(base) => {
                web_sys::console::log_1(&format!("[CONFIG] API base from page: {}", base).into());
                config.with_api_base(base)
            }
            None => config,
        }
    }
}
