//! Application configuration.
//!
//! Loaded from TOML; every field has a default so a partial (or missing)
//! file is valid.

use chrono::Duration as ChronoDuration;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use vistoria_core::{VistoriaError, VistoriaResult};
use vistoria_transport::GatewayConfig;

/// Origin of a loaded [`AppConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    /// The file was absent.
    Defaults,
}

impl ConfigSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Defaults => "defaults",
        }
    }
}

/// Runtime configuration for the application core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Gateway base URL.
    pub api_url: String,
    /// On-device SQLite file.
    pub database_path: PathBuf,
    pub request_timeout_secs: u64,
    /// Artificial latency of the mock credential check.
    pub login_delay_ms: u64,
    /// How long the "updated" banner stays visible.
    pub success_banner_ms: u64,
    /// Internal area attached to every new inspection.
    pub area_vistoria_interna_id: i64,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: Self::DEFAULT_API_URL.to_string(),
            database_path: PathBuf::from("app.db"),
            request_timeout_secs: 30,
            login_delay_ms: 1500,
            success_banner_ms: 3000,
            area_vistoria_interna_id: 1,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub const DEFAULT_API_URL: &'static str = "https://suporte.zapto.org:3001";

    /// Parse a TOML document.
    pub fn from_toml_str(raw: &str) -> VistoriaResult<Self> {
        toml::from_str(raw).map_err(|e| VistoriaError::config(format!("invalid config: {e}")))
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> VistoriaResult<Self> {
        Self::load_with_source(path).map(|(config, _)| config)
    }

    /// Like [`AppConfig::load`], also reporting where the values came from.
    ///
    /// Nothing is logged here: callers usually load the config before the
    /// subscriber exists and report the source once it does.
    pub fn load_with_source(path: impl AsRef<Path>) -> VistoriaResult<(Self, ConfigSource)> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(raw) => Ok((Self::from_toml_str(&raw)?, ConfigSource::File)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok((Self::default(), ConfigSource::Defaults))
            }
            Err(e) => Err(VistoriaError::config(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    pub fn validate(&self) -> VistoriaResult<()> {
        let url = self.api_url.trim();
        if url.is_empty() {
            return Err(VistoriaError::config("api_url must not be empty"));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(VistoriaError::config(format!(
                "api_url must be an http(s) url, got {url}"
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(VistoriaError::config("request_timeout_secs must be positive"));
        }
        Ok(())
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    #[must_use]
    pub fn success_banner_ttl(&self) -> ChronoDuration {
        ChronoDuration::milliseconds(i64::try_from(self.success_banner_ms).unwrap_or(i64::MAX))
    }

    #[must_use]
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig::new(self.api_url.trim(), self.request_timeout())
    }
}
