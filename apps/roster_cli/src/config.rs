use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = "roster.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base: String,
    pub cohort: String,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: "https://fsa-puppy-bowl.herokuapp.com/api".into(),
            cohort: "2510-Jerrad".into(),
            request_timeout_secs: 10,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_base: Option<String>,
    cohort: Option<String>,
    request_timeout_secs: Option<u64>,
}

impl Settings {
    /// Collection root for this deployment: `<api_base>/<cohort>`.
    pub fn collection_url(&self) -> anyhow::Result<Url> {
        let base = self.api_base.trim().trim_end_matches('/');
        let cohort = self.cohort.trim().trim_matches('/');
        anyhow::ensure!(!cohort.is_empty(), "cohort must not be empty");
        let raw = format!("{base}/{cohort}");
        Url::parse(&raw).with_context(|| format!("invalid collection url '{raw}'"))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    fn apply_file(&mut self, raw: &str) -> anyhow::Result<()> {
        let file_cfg: FileSettings = toml::from_str(raw)?;
        if let Some(v) = file_cfg.api_base {
            self.api_base = v;
        }
        if let Some(v) = file_cfg.cohort {
            self.cohort = v;
        }
        if let Some(v) = file_cfg.request_timeout_secs {
            self.request_timeout_secs = v;
        }
        Ok(())
    }

    /// Later keys in each list win, so `APP__*` overrides `ROSTER_*`.
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for key in ["ROSTER_API_BASE", "APP__API_BASE"] {
            if let Some(v) = lookup(key) {
                self.api_base = v;
            }
        }
        for key in ["ROSTER_COHORT", "APP__COHORT"] {
            if let Some(v) = lookup(key) {
                self.cohort = v;
            }
        }
        if let Some(v) = lookup("APP__REQUEST_TIMEOUT_SECS") {
            if let Ok(parsed) = v.trim().parse::<u64>() {
                self.request_timeout_secs = parsed;
            }
        }
    }
}

/// Defaults, then the optional TOML file, then the environment. A missing
/// file is fine; an unreadable or malformed one is an error.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?;
        settings
            .apply_file(&raw)
            .with_context(|| format!("failed to parse config '{}'", path.display()))?;
    }

    settings.apply_env(|key| std::env::var(key).ok());
    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
