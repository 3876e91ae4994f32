//! Client config load/save for `~/.faq-chat/config.yaml`.

use std::path::{Path, PathBuf};

use crate::client::DEFAULT_BASE_URL;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "FAQ_CHAT_CONFIG";

/// Backend section (base_url).
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct BackendSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Logging section (level, directory for the debug log file).
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct LoggingSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

/// Full config file. Every field is optional.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

impl Config {
    /// Backend base URL, falling back to [`DEFAULT_BASE_URL`].
    pub fn base_url(&self) -> &str {
        self.backend.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Starter config with every default spelled out, as written by `faq-ask --init`.
    pub fn with_defaults() -> Self {
        Config {
            backend: BackendSection {
                base_url: Some(DEFAULT_BASE_URL.to_string()),
            },
            logging: LoggingSection {
                level: Some("info".to_string()),
                directory: None,
            },
        }
    }
}

/// Config load/save error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[source] serde_yaml::Error),
    #[error("cannot serialize config: {0}")]
    Serialize(#[source] serde_yaml::Error),
    #[error("unable to determine home directory (set --config or FAQ_CHAT_CONFIG)")]
    NoHomeDir,
}

/// Per-user application directory: `~/.faq-chat`.
pub fn app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".faq-chat"))
}

/// Returns the default config file path: `~/.faq-chat/config.yaml`.
pub fn default_config_path() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join("config.yaml"))
}

/// Where a resolved config path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    Flag,
    Env,
    Default,
}

/// Resolve the config path: explicit override, then `FAQ_CHAT_CONFIG`, then the default.
pub fn resolve_config_path(
    override_path: Option<&Path>,
) -> Result<(PathBuf, PathSource), ConfigError> {
    if let Some(p) = override_path {
        return Ok((p.to_path_buf(), PathSource::Flag));
    }
    if let Some(val) = std::env::var_os(CONFIG_ENV) {
        return Ok((PathBuf::from(val), PathSource::Env));
    }
    default_config_path()
        .map(|p| (p, PathSource::Default))
        .ok_or(ConfigError::NoHomeDir)
}

/// Load config from a YAML file.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&contents).map_err(ConfigError::Parse)
}

/// Resolve and load. A missing file at the default location yields `Config::default()`;
/// a missing file that was named explicitly is an error.
pub fn load_resolved(override_path: Option<&Path>) -> Result<Config, ConfigError> {
    let (path, source) = resolve_config_path(override_path)?;
    if source == PathSource::Default && !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    load(&path)
}

/// Save config to a YAML file. Creates parent directory if missing.
pub fn save(path: &Path, config: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    let contents = serde_yaml::to_string(config).map_err(ConfigError::Serialize)?;
    std::fs::write(path, contents).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
