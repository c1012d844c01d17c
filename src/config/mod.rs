//! Client configuration
//!
//! Loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/dsaquest/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

#[cfg(test)]
mod tests;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default backend base URL
pub const DEFAULT_API_URL: &str = "https://gamified-dsa-server.onrender.com";

// ─────────────────────────────────────────────────────────────────────────
// Logging configuration
// ─────────────────────────────────────────────────────────────────────────

/// Log file rotation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

impl LogRotation {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "never" => Self::Never,
            _ => Self::Daily,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Write JSON logs to rotating files in addition to the TUI buffer
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// Prefix for log file names ("dsaquest" -> "dsaquest.2026-08-29.log")
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "dsaquest".to_string(),
        }
    }
}

/// `[logging]` section as loaded from the config file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.file_dir),
            file_rotation: file
                .file_rotation
                .map(|s| LogRotation::parse(&s))
                .unwrap_or(defaults.file_rotation),
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Application configuration
// ─────────────────────────────────────────────────────────────────────────

/// Effective application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL
    pub api_url: String,

    /// Theme name: "Quest Dark", "Quest Light", "Monokai", "Nord"
    pub theme: String,

    /// Demo mode: seeded in-memory backend, no network (runtime flag)
    pub demo_mode: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            theme: "Quest Dark".to_string(),
            demo_mode: false,
            logging: LoggingConfig::default(),
        }
    }
}

/// Config file structure (subset of Config worth persisting)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub theme: Option<String>,
    pub logging: Option<FileLogging>,
}

impl Config {
    /// Config file path: ~/.config/dsaquest/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("dsaquest").join("config.toml"))
    }

    /// Create the config template on first run so options are discoverable
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };
        if path.exists() {
            return;
        }
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // config is optional
            }
        }
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Render as a commented TOML template (single source of truth for
    /// `ensure_config_exists` and `config --reset`)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# dsaquest configuration
# Precedence: environment variables > this file > defaults

# Backend base URL (env: DSAQUEST_API_URL)
api_url = "{api_url}"

# Theme: "Quest Dark", "Quest Light", "Monokai", "Nord" (env: DSAQUEST_THEME)
theme = "{theme}"

[logging]
# Level: trace, debug, info, warn, error (env: RUST_LOG overrides)
level = "{level}"
# Write JSON logs to rotating files in addition to the in-app buffer
file_enabled = {file_enabled}
file_dir = "{file_dir}"
# Rotation: hourly, daily, never
file_rotation = "{file_rotation}"
file_prefix = "{file_prefix}"
"#,
            api_url = self.api_url,
            theme = self.theme,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_rotation = self.logging.file_rotation.as_str(),
            file_prefix = self.logging.file_prefix,
        )
    }

    /// Load the file config if present
    ///
    /// A config file that exists but fails to parse is a fatal error:
    /// failing fast beats silently running with defaults while the user
    /// debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse_file_config(&contents).unwrap_or_else(|e| {
                eprintln!("Failed to parse config file {}:", path.display());
                eprintln!("  {}", e);
                eprintln!("To reset, run: dsaquest config --reset");
                std::process::exit(1);
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("Cannot read config file {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    pub(crate) fn parse_file_config(contents: &str) -> Result<FileConfig, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load configuration: env > file > defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        Self::resolve(file)
    }

    pub(crate) fn resolve(file: FileConfig) -> Self {
        let api_url = std::env::var("DSAQUEST_API_URL")
            .ok()
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let theme = std::env::var("DSAQUEST_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or_else(|| "Quest Dark".to_string());

        // Demo mode: env only (runtime flag, also settable via --demo)
        let demo_mode = std::env::var("DSAQUEST_DEMO")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            api_url,
            theme,
            demo_mode,
            logging,
        }
    }
}
