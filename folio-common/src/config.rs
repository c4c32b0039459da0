//! Configuration loading and data source resolution
//!
//! Configuration is a small optional TOML file. A missing default file is not
//! an error: the service starts with built-in defaults and logs a warning.

use crate::loader::DataSource;
use crate::vocabulary::TagVocabulary;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Default HTTP port for folio-ui
pub const DEFAULT_PORT: u16 = 5790;

/// Default bind address (local access only)
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Data document looked up under the site root when nothing else is configured
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Collapse transition length; must match the stylesheet's transition timing
pub const COLLAPSE_TRANSITION_MS: u64 = 400;

/// Environment variable naming the data document location
pub const DATA_ENV_VAR: &str = "FOLIO_DATA";

/// Bootstrap configuration loaded from TOML
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TomlConfig {
    /// Data document path or URL
    pub data_source: Option<String>,

    /// Folder served as the page's relative-URL base (media files)
    pub site_root: Option<PathBuf>,

    /// Bind address
    pub host: String,

    /// HTTP server port
    pub port: u16,

    /// Delay before a collapsing card hides its detail region
    pub collapse_delay_ms: u64,

    /// Dropdown priority list; `None` uses the built-in list
    pub tag_order: Option<Vec<String>>,

    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            data_source: None,
            site_root: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            collapse_delay_ms: COLLAPSE_TRANSITION_MS,
            tag_order: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl TomlConfig {
    /// Parse configuration text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))
    }

    /// Load configuration
    ///
    /// An explicitly named file must exist. Without one, the platform default
    /// location is tried and defaults are used if it is absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let content = std::fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
            })?;
            info!("Loaded configuration from {}", path.display());
            return Self::from_toml_str(&content);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)?;
                info!("Loaded configuration from {}", path.display());
                Self::from_toml_str(&content)
            }
            Some(path) => {
                warn!(
                    "Config file not found at {}, using built-in defaults",
                    path.display()
                );
                Ok(Self::default())
            }
            None => {
                warn!("Could not determine config directory, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    /// Dropdown vocabulary from `tag_order`, or the built-in list
    pub fn vocabulary(&self) -> TagVocabulary {
        match &self.tag_order {
            Some(order) => TagVocabulary::new(order.iter().cloned()),
            None => TagVocabulary::default(),
        }
    }

    pub fn collapse_delay(&self) -> Duration {
        Duration::from_millis(self.collapse_delay_ms)
    }
}

/// Platform config file location: `<config_dir>/folio/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("folio").join("config.toml"))
}

/// Site root resolution: command line, then TOML, then the working directory
pub fn resolve_site_root(cli_arg: Option<&Path>, config: &TomlConfig) -> PathBuf {
    cli_arg
        .map(Path::to_path_buf)
        .or_else(|| config.site_root.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Data source resolution, highest priority first:
/// 1. Command-line argument
/// 2. Environment variable
/// 3. TOML `data_source`
/// 4. `data.json` under the site root
pub fn resolve_data_source(
    cli_arg: Option<&str>,
    env_var_name: &str,
    config: &TomlConfig,
    site_root: &Path,
) -> DataSource {
    // Priority 1: Command-line argument
    if let Some(location) = cli_arg {
        return DataSource::parse(location);
    }

    // Priority 2: Environment variable
    if let Ok(location) = std::env::var(env_var_name) {
        if !location.trim().is_empty() {
            return DataSource::parse(&location);
        }
    }

    // Priority 3: TOML config file
    if let Some(location) = &config.data_source {
        return DataSource::parse(location);
    }

    // Priority 4: compiled default
    DataSource::File(site_root.join(DEFAULT_DATA_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TomlConfig::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.collapse_delay(), Duration::from_millis(400));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.vocabulary(), TagVocabulary::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = TomlConfig::from_toml_str("port = 8080\n").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.collapse_delay_ms, COLLAPSE_TRANSITION_MS);
    }

    #[test]
    fn test_full_toml() {
        let config = TomlConfig::from_toml_str(
            r#"
            data_source = "https://example.org/data.json"
            site_root = "/srv/gallery"
            host = "0.0.0.0"
            port = 9000
            collapse_delay_ms = 250
            tag_order = ["XR", "Light"]

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.site_root, Some(PathBuf::from("/srv/gallery")));
        assert_eq!(config.vocabulary().order(), ["XR", "Light"]);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.collapse_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        assert!(matches!(
            TomlConfig::from_toml_str("port = \"not a number\""),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_site_root_priority() {
        let mut config = TomlConfig::default();
        assert_eq!(resolve_site_root(None, &config), PathBuf::from("."));

        config.site_root = Some(PathBuf::from("/from/toml"));
        assert_eq!(resolve_site_root(None, &config), PathBuf::from("/from/toml"));
        assert_eq!(
            resolve_site_root(Some(Path::new("/from/cli")), &config),
            PathBuf::from("/from/cli")
        );
    }
}
