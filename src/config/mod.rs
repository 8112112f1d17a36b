// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Application settings with layered loading.
//!
//! Settings are resolved in this order, later layers winning:
//!
//! 1. **Defaults**: `http://localhost:5000`, 2 s status delay, 10 s timeout
//! 2. **Config file**: optional TOML file, missing file is not an error
//! 3. **Environment**: `BIRTHDAY_API_URL`, `BIRTHDAY_STATUS_CLEAR_MS`,
//!    `BIRTHDAY_REQUEST_TIMEOUT_SECS` (a `.env` file is loaded by the binary)
//! 4. **CLI flag**: `--api-url`
//!
//! # Example
//!
//! ```no_run
//! use birthday_manager::config::{default_config_path, Settings};
//!
//! let settings = Settings::load(&default_config_path()?)?
//!     .with_api_url("http://birthdays.local:8080")?;
//! println!("Backend: {}", settings.api_base_url);
//! # Ok::<(), birthday_manager::config::ConfigError>(())
//! ```

mod error;

pub use error::ConfigError;

use reqwest::Url;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Backend address used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Default config file location (tilde is expanded at load time)
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/birthday-manager/config.toml";

/// Delay before a status message clears itself
pub const DEFAULT_STATUS_CLEAR_DELAY: Duration = Duration::from_millis(2000);

/// Per-request timeout for backend calls
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const ENV_API_URL: &str = "BIRTHDAY_API_URL";
pub const ENV_STATUS_CLEAR_MS: &str = "BIRTHDAY_STATUS_CLEAR_MS";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "BIRTHDAY_REQUEST_TIMEOUT_SECS";

/// Resolved application settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Backend base address, normalised without a trailing slash.
    pub api_base_url: String,
    /// How long a status message stays visible.
    pub status_clear_delay: Duration,
    /// Timeout applied to every backend request.
    pub request_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            status_clear_delay: DEFAULT_STATUS_CLEAR_DELAY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// On-disk layout of the optional config file.
///
/// Every key is optional; absent keys keep the lower layer's value.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub api_base_url: Option<String>,
    pub status_clear_ms: Option<u64>,
    pub request_timeout_secs: Option<u64>,
}

impl Settings {
    /// Loads defaults, then the config file at `config_path`, then the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read`/`Parse` for an unreadable or malformed
    /// file and `ConfigError::InvalidValue` for unusable values.
    pub fn load(config_path: &Path) -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        if let Some(file) = read_config_file(config_path)? {
            settings.apply_file(file)?;
        }

        settings.apply_env_with(|key| std::env::var(key).ok())?;

        info!("Using backend at {}", settings.api_base_url);
        Ok(settings)
    }

    /// Applies the values present in a parsed config file.
    pub fn apply_file(&mut self, file: FileSettings) -> Result<(), ConfigError> {
        if let Some(url) = file.api_base_url {
            self.api_base_url = normalise_base_url("api_base_url", &url)?;
        }
        if let Some(ms) = file.status_clear_ms {
            self.status_clear_delay = Duration::from_millis(ms);
        }
        if let Some(secs) = file.request_timeout_secs {
            self.request_timeout = positive_secs("request_timeout_secs", secs)?;
        }
        Ok(())
    }

    /// Applies environment overrides read through `lookup`.
    ///
    /// The lookup is injected so tests never touch the real process
    /// environment.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            debug!("{} overrides api_base_url", ENV_API_URL);
            self.api_base_url = normalise_base_url(ENV_API_URL, &url)?;
        }

        if let Some(raw) = lookup(ENV_STATUS_CLEAR_MS) {
            let ms = parse_number(ENV_STATUS_CLEAR_MS, &raw)?;
            self.status_clear_delay = Duration::from_millis(ms);
        }

        if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            let secs = parse_number(ENV_REQUEST_TIMEOUT_SECS, &raw)?;
            self.request_timeout = positive_secs(ENV_REQUEST_TIMEOUT_SECS, secs)?;
        }

        Ok(())
    }

    /// Overrides the backend address (the `--api-url` flag).
    pub fn with_api_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.api_base_url = normalise_base_url("--api-url", url)?;
        Ok(self)
    }
}

/// Returns the default config path with `~` expanded
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    expand_path(Path::new(DEFAULT_CONFIG_PATH))
}

/// Expands a leading `~` in a user-supplied path
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath(path.to_path_buf()))?;

    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

/// Reads and parses the config file, `None` if it does not exist
pub fn read_config_file(path: &Path) -> Result<Option<FileSettings>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    toml::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Validates a backend base address and strips trailing slashes
pub fn normalise_base_url(key: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');

    let invalid = |reason: &str| ConfigError::InvalidValue {
        key: key.to_string(),
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(invalid("URL has no host"));
    }

    Ok(trimmed.to_string())
}

fn parse_number(key: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: raw.to_string(),
        reason: "expected a non-negative integer".to_string(),
    })
}

fn positive_secs(key: &str, secs: u64) -> Result<Duration, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: secs.to_string(),
            reason: "timeout must be at least one second".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests;
