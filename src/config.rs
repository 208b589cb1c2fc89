//! Configuration file parser for `infomercado.toml`.
//!
//! The config file is optional. A missing file yields `Config::default()`.
//! Unknown keys are silently ignored by serde (with `deny_unknown_fields` off),
//! though we log a warning when the file contains potential typos.
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// SEC-014: Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),

    /// A value parsed fine but cannot be used.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
/// Missing keys fall back to `Default::default()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The single RSS/Atom feed this instance serves.
    pub feed_url: String,

    /// Publisher label stamped on every article.
    pub source_label: String,

    /// User-Agent sent to the feed host.
    pub user_agent: String,

    pub bind_address: String,

    pub port: u16,

    /// How long a successful fetch is served without refetching.
    pub cache_ttl_secs: u64,

    /// Background refresh interval in minutes. 0 = on-demand refresh only.
    pub refresh_interval_minutes: u64,

    pub fetch_timeout_secs: u64,

    /// Timeout for the HEAD probe used by the extended health check.
    pub probe_timeout_secs: u64,

    /// Directory served for any non-API path.
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: "https://www.pagina12.com.ar/rss/secciones/economia/notas".to_string(),
            source_label: "Página 12".to_string(),
            user_agent: "InfoMercado RSS Reader 1.0".to_string(),
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            cache_ttl_secs: 600,
            refresh_interval_minutes: 10,
            fetch_timeout_secs: 15,
            probe_timeout_secs: 10,
            static_dir: PathBuf::from("public"),
        }
    }
}

impl Config {
    /// SEC-014: Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    const KNOWN_KEYS: [&'static str; 10] = [
        "feed_url",
        "source_label",
        "user_agent",
        "bind_address",
        "port",
        "cache_ttl_secs",
        "refresh_interval_minutes",
        "fetch_timeout_secs",
        "probe_timeout_secs",
        "static_dir",
    ];

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → silently accepted (serde default behavior), logged as warning
    ///
    /// The result is not validated; call [`Config::validate`] after applying
    /// any command-line overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        // SEC-014: Check file size before reading to prevent memory exhaustion
        // from a maliciously large or corrupted config file.
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Race condition: file deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        // Parse the TOML content first as a raw table to detect unknown keys
        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), feed_url = %config.feed_url, "Loaded configuration");
        Ok(config)
    }

    /// Reject values that would make the service unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = url::Url::parse(&self.feed_url).map_err(|e| {
            ConfigError::Invalid(format!("feed_url '{}' is not a valid URL: {}", self.feed_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "feed_url must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.cache_ttl_secs == 0 {
            return Err(ConfigError::Invalid(
                "cache_ttl_secs must be greater than zero".to_string(),
            ));
        }
        if self.fetch_timeout_secs == 0 || self.probe_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeouts must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_minutes.saturating_mul(60))
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

// ============================================================================
// Tests
// ============================================================================
