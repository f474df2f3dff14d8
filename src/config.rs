use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::lab::DEFAULT_TOAST_DURATION;

const CONFIG_KEY: &str = "calculadoras_config";

/// Runtime settings, overridable through localStorage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL the `/api/...` paths are appended to. Empty means the page
    /// origin.
    #[serde(default)]
    pub api_base: String,
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
}

fn default_toast_ms() -> u64 {
    DEFAULT_TOAST_DURATION.as_millis() as u64
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { api_base: String::new(), toast_ms: default_toast_ms() }
    }
}

impl AppConfig {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    /// Fill an empty `api_base` with `origin` and drop any trailing slash.
    pub fn with_origin(mut self, origin: &str) -> Self {
        if self.api_base.trim().is_empty() {
            self.api_base = origin.to_string();
        }
        let trimmed = self.api_base.trim().trim_end_matches('/').to_string();
        self.api_base = trimmed;
        self
    }
}

/// Decode a stored config. Corrupt JSON falls back to defaults.
pub fn parse_config(raw: Option<&str>) -> AppConfig {
    match raw {
        Some(json) => serde_json::from_str(json).unwrap_or_else(|err| {
            tracing::warn!(%err, "stored config is unreadable, using defaults");
            AppConfig::default()
        }),
        None => AppConfig::default(),
    }
}

/// Returns `None` outside a browser, with storage disabled (private mode) or
/// when access raises a SecurityError.
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Load the config for this page. Never fails; every problem degrades to
/// defaults.
pub fn load_config() -> AppConfig {
    let raw = match get_storage() {
        Some(storage) => match storage.get_item(CONFIG_KEY) {
            Ok(raw) => raw,
            Err(_) => {
                tracing::warn!("could not read config from localStorage, using defaults");
                None
            }
        },
        // Expected in private browsing.
        None => None,
    };
    let config = parse_config(raw.as_deref()).with_origin(&page_origin());
    tracing::debug!(api_base = %config.api_base, toast_ms = config.toast_ms, "config loaded");
    config
}
