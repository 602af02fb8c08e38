use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// Top-level configuration loaded from `~/.bracket/config.toml`.
///
/// Every section is optional; missing keys fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub locales: LocaleConfig,
    #[serde(default)]
    pub skeleton: SkeletonConfig,
}

impl Config {
    /// Load config from `~/.bracket/config.toml`, falling back to defaults
    /// when the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(path)
        } else {
            let cfg = Config::default();
            cfg.validate()?;
            Ok(cfg)
        }
    }

    /// Load from a specific path.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let text = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        let cfg: Config = toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialize config to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        self.validate()?;
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.general.validate()?;
        self.locales.validate()?;
        self.skeleton.validate()?;
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bracket")
            .join("config.toml")
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(String),
    #[error("parse: {0}")]
    Parse(String),
    #[error("validation: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Section structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl GeneralConfig {
    /// `log_level` takes `RUST_LOG`-style directives: `info` or
    /// `bk_core=debug,warn`. Every level named must be a real level, since
    /// the subscriber drops directives it cannot parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |detail: String| {
            ConfigError::Validation(format!(
                "general.log_level '{}' is invalid: {detail}",
                self.log_level
            ))
        };
        if self.log_level.trim().is_empty() {
            return Err(invalid("empty".into()));
        }
        for directive in self.log_level.split(',').map(str::trim) {
            let level = match directive.rsplit_once('=') {
                Some((target, level)) if !target.is_empty() => level,
                Some(_) => return Err(invalid(format!("directive `{directive}` has no target"))),
                None => directive,
            };
            level
                .parse::<LevelFilter>()
                .map_err(|_| invalid(format!("unknown level `{level}`")))?;
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".into()
}

/// Locales accepted as the optional first path segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    #[serde(default = "default_supported_locales")]
    pub supported: Vec<String>,
    #[serde(default = "default_locale")]
    pub default: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            supported: default_supported_locales(),
            default: default_locale(),
        }
    }
}

impl LocaleConfig {
    pub fn is_supported(&self, locale: &str) -> bool {
        self.supported.iter().any(|l| l == locale)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.supported.is_empty() {
            return Err(ConfigError::Validation(
                "locales.supported must list at least one locale".into(),
            ));
        }
        if !self.is_supported(&self.default) {
            return Err(ConfigError::Validation(format!(
                "locales.default '{}' is not in locales.supported",
                self.default
            )));
        }
        Ok(())
    }
}

fn default_supported_locales() -> Vec<String> {
    vec!["ja".into(), "en".into()]
}
fn default_locale() -> String {
    "ja".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkeletonConfig {
    /// Pulse animation on placeholder bars.
    #[serde(default = "default_true")]
    pub animate: bool,
    /// Screen-reader text announced while a loading view is shown.
    #[serde(default = "default_label")]
    pub label: String,
}

impl Default for SkeletonConfig {
    fn default() -> Self {
        Self {
            animate: true,
            label: default_label(),
        }
    }
}

impl SkeletonConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "skeleton.label must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}
fn default_label() -> String {
    "Loading...".into()
}
