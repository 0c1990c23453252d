//! Backend base-URL configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request URL is built here from a single base. Call sites pass a path
//! from `endpoints` and never hardcode a host.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://localhost:7057/api";

/// Where the REST backend lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Create a config for `base_url`, dropping any trailing slash.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self { base_url: base_url.to_owned() }
    }

    /// Config baked in at compile time through `ATS_API_BASE_URL`.
    #[must_use]
    pub fn from_build_env() -> Self {
        option_env!("ATS_API_BASE_URL").map_or_else(Self::default, Self::new)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an endpoint path onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
