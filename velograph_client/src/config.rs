// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Backend used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "VELOGRAPH_API_URL";

/// Prefix of every catalog route.
pub const API_PREFIX: &str = "/api/bikes";

/// Where the catalog backend lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    /// Uses `base_url` (scheme, host and port; trailing slashes are dropped).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Reads [`BASE_URL_ENV`], falling back to [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map_or_else(Self::default, |v| Self::new(v.trim()))
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of a catalog route; `path` starts with `/`.
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.base_url)
    }

    /// Absolute URL of the health probe.
    #[must_use]
    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls() {
        let config = ClientConfig::new("https://api.example.org//");
        assert_eq!(config.base_url(), "https://api.example.org");
        assert_eq!(
            config.api_url("/specs/4"),
            "https://api.example.org/api/bikes/specs/4"
        );
        assert_eq!(config.api_url("/"), "https://api.example.org/api/bikes/");
        assert_eq!(config.health_url(), "https://api.example.org/health");
        assert_eq!(ClientConfig::default().base_url(), DEFAULT_BASE_URL);
    }
}
