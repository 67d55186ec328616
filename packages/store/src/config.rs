//! # Client configuration (`gobarber.toml`)
//!
//! The web binary embeds `gobarber.toml` at build time and parses it into an
//! [`AppConfig`].
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3333"   # GoBarber backend
//!
//! [toast]
//! duration_ms = 3000                   # how long a toast stays on screen
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config. TOML (de)serialisation, the canonical filename, and a lenient [`parse_or_default`](AppConfig::parse_or_default). |
//! | [`ApiConfig`] | Backend base URL, default **`http://localhost:3333`**. |
//! | [`ToastConfig`] | Toast lifetime, default **3000 ms**. |
//!
//! Every section and field has a default, so a missing or empty file is the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `gobarber.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub toast: ToastConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Toast settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToastConfig {
    /// Milliseconds before a toast removes itself.
    #[serde(default = "default_toast_duration")]
    pub duration_ms: u64,
}

fn default_toast_duration() -> u64 {
    3000
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_toast_duration(),
        }
    }
}

impl AppConfig {
    /// Builder method to point at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "gobarber.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse, falling back to the defaults when the file is malformed.
    pub fn parse_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("Invalid {}, using defaults: {}", Self::filename(), e);
            Self::default()
        })
    }
}
