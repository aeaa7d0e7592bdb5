//! Persisted settings — read/write `~/.cardex/config.toml`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use cardex_core::flags::{flag_by_setting_key, FlagSet};
use cardex_core::options::{SearchOptions, DEFAULT_PAGE_SIZE};

/// Default catalog API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.chub.ai";

/// Environment variable overriding the catalog base URL.
pub const ENV_BASE_URL: &str = "CARDEX_BASE_URL";

/// Environment variable overriding the catalog API key.
pub const ENV_API_KEY: &str = "CARDEX_API_KEY";

/// Persisted user preferences.
///
/// Always fully populated: loading merges a partial file over [`Default`],
/// so option normalization never observes an unset persisted value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Persisted boolean requirement flags.
    #[serde(flatten)]
    pub flags: FlagSet,
    /// Default number of results per page.
    pub find_count: u32,
    /// Catalog API base URL.
    pub base_url: String,
    /// API key for authenticated calls (empty = anonymous).
    pub api_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            flags: FlagSet::default(),
            find_count: DEFAULT_PAGE_SIZE,
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: String::new(),
        }
    }
}

impl Settings {
    /// Overlay environment variable overrides onto the loaded settings.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            if !url.is_empty() {
                self.base_url = url;
            }
        }
        if let Ok(key) = std::env::var(ENV_API_KEY) {
            if !key.is_empty() {
                self.api_key = key;
            }
        }
    }

    /// Write the effective choices of a search back into the store.
    pub fn remember(&mut self, opts: &SearchOptions) {
        self.flags = opts.flags;
        self.find_count = opts.page_size;
    }

    /// Update one setting by its key, parsing the value.
    ///
    /// Boolean flag keys come from the option table; the remaining keys are
    /// `find_count`, `base_url`, and `api_key`.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown key or an unparseable value.
    pub fn set_key(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "find_count" => {
                self.find_count = value
                    .parse::<u32>()
                    .ok()
                    .filter(|n| *n > 0)
                    .with_context(|| format!("find_count must be a positive integer, got '{value}'"))?;
            }
            "base_url" => self.base_url = value.to_owned(),
            "api_key" => self.api_key = value.to_owned(),
            flag => match flag_by_setting_key(flag) {
                Some(spec) => {
                    let parsed = value
                        .parse::<bool>()
                        .with_context(|| format!("{flag} must be true or false, got '{value}'"))?;
                    (spec.set)(&mut self.flags, parsed);
                }
                None => bail!("unknown setting: {key}"),
            },
        }
        Ok(())
    }
}

/// Return the default path for the settings file (`~/.cardex/config.toml`).
#[must_use]
pub fn default_config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_owned());
    PathBuf::from(home).join(".cardex").join("config.toml")
}

/// Write `settings` to `path`, creating parent directories if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// written.
pub fn save_settings(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string(settings)?)?;
    Ok(())
}

/// Load settings from `path`, merging a partial file over the defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read or deserialized.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Load settings, falling back to defaults when no file exists yet.
#[must_use]
pub fn load_or_default(path: &Path) -> Settings {
    load_settings(path).unwrap_or_default()
}
