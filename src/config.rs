// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Client configuration: defaults, an optional JSON file in the platform
//! config directory, environment overrides and finally command line flags.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.lagathub", "Spendtracker", "spendtracker"));

pub const ENV_API_URL: &str = "SPENDTRACKER_API_URL";
pub const ENV_SPENDING_PREFIX: &str = "SPENDTRACKER_SPENDING_PREFIX";
pub const ENV_DASHBOARD_PREFIX: &str = "SPENDTRACKER_DASHBOARD_PREFIX";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    /// Prefix of the transaction and category endpoints. Empty for bare paths.
    pub spending_prefix: String,
    pub dashboard_prefix: String,
    /// No timeout beyond the transport defaults when unset.
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            spending_prefix: "/api/spending".to_string(),
            dashboard_prefix: "/api/dashboard".to_string(),
            timeout_secs: None,
        }
    }
}

/// Values given on the command line. `None` leaves the lower layer in place.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub spending_prefix: Option<String>,
    pub dashboard_prefix: Option<String>,
    pub timeout_secs: Option<u64>,
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .ok_or_else(|| Error::Config("could not determine platform config dir".into()))?;
    Ok(proj.config_dir().join("config.json"))
}

impl Config {
    /// Builds the effective configuration from every layer.
    pub fn load(overrides: &Overrides) -> Result<Self> {
        let path = config_path()?;
        let cfg = Self::from_file_or_default(&path)?
            .with_env(|key| std::env::var(key).ok())
            .with_overrides(overrides);
        cfg.validated()
    }

    /// Reads `path` if it exists, otherwise starts from the defaults.
    pub fn from_file_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        let cfg: Config = serde_json::from_str(&raw)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Ok(cfg)
    }

    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_API_URL) {
            self.base_url = v;
        }
        if let Some(v) = lookup(ENV_SPENDING_PREFIX) {
            self.spending_prefix = v;
        }
        if let Some(v) = lookup(ENV_DASHBOARD_PREFIX) {
            self.dashboard_prefix = v;
        }
        self
    }

    pub fn with_overrides(mut self, o: &Overrides) -> Self {
        if let Some(v) = &o.base_url {
            self.base_url = v.clone();
        }
        if let Some(v) = &o.spending_prefix {
            self.spending_prefix = v.clone();
        }
        if let Some(v) = &o.dashboard_prefix {
            self.dashboard_prefix = v.clone();
        }
        if o.timeout_secs.is_some() {
            self.timeout_secs = o.timeout_secs;
        }
        self
    }

    /// Checks the base URL and normalises both prefixes to `/segment` form.
    pub fn validated(mut self) -> Result<Self> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("base url '{}': {}", self.base_url, e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::Config(format!(
                "base url '{}' must use http or https",
                self.base_url
            )));
        }
        self.base_url = self.base_url.trim_end_matches('/').to_string();
        self.spending_prefix = normalize_prefix(&self.spending_prefix);
        self.dashboard_prefix = normalize_prefix(&self.dashboard_prefix);
        Ok(self)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

fn normalize_prefix(p: &str) -> String {
    let trimmed = p.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_normalised() {
        let cfg = Config {
            base_url: "http://api.local:8080/".into(),
            spending_prefix: "api/spending/".into(),
            dashboard_prefix: "/".into(),
            timeout_secs: None,
        }
        .validated()
        .unwrap();
        assert_eq!(cfg.base_url, "http://api.local:8080");
        assert_eq!(cfg.spending_prefix, "/api/spending");
        assert_eq!(cfg.dashboard_prefix, "");
    }

    #[test]
    fn rejects_non_http_urls() {
        let cfg = Config {
            base_url: "ftp://example.com".into(),
            ..Config::default()
        };
        assert!(matches!(cfg.validated(), Err(Error::Config(_))));
        let cfg = Config {
            base_url: "not a url".into(),
            ..Config::default()
        };
        assert!(cfg.validated().is_err());
    }

    #[test]
    fn flags_win_over_env() {
        let cfg = Config::default()
            .with_env(|k| (k == ENV_API_URL).then(|| "http://env:1".to_string()))
            .with_overrides(&Overrides {
                base_url: Some("http://flag:2".into()),
                timeout_secs: Some(5),
                ..Overrides::default()
            });
        assert_eq!(cfg.base_url, "http://flag:2");
        assert_eq!(cfg.timeout_secs, Some(5));
        assert_eq!(cfg.spending_prefix, "/api/spending");
    }
}
