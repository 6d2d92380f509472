//! Configuration file loading with precedence handling.

use crate::i18n::Language;
use crate::state::LogicalFailurePolicy;
use crate::theme::ThemeName;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default moment-style time pattern (the server-side default).
pub const DEFAULT_TIME_FORMAT: &str = "LT";

/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// An environment variable or flag holds a value that cannot be used.
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        /// Variable or flag name.
        key: &'static str,
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A value required by the selected mode is not configured anywhere.
    #[error("Missing configuration: {0}")]
    MissingValue(&'static str),
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/rrview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Server base URL (e.g., "https://open.rocket.chat").
    #[serde(default)]
    pub server_url: Option<String>,

    /// Id of the logged-in user, sent as `X-User-Id`.
    #[serde(default)]
    pub user_id: Option<String>,

    /// Personal access token, sent as `X-Auth-Token`.
    #[serde(default)]
    pub auth_token: Option<String>,

    /// Moment-style time pattern for receipt timestamps.
    #[serde(default)]
    pub time_format: Option<String>,

    /// Theme name ("light", "dark", "black").
    #[serde(default)]
    pub theme: Option<ThemeName>,

    /// Display language tag (e.g., "en", "pt-BR").
    #[serde(default)]
    pub language: Option<Language>,

    /// Render timestamps in UTC instead of local time.
    #[serde(default)]
    pub utc: Option<bool>,

    /// Request timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// What to do when the server answers `success: false`.
    #[serde(default)]
    pub logical_failure: Option<LogicalFailurePolicy>,

    /// Skip redraws when theme, loading flag and receipts are unchanged.
    #[serde(default)]
    pub render_gate: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub server_url: Option<String>,
    pub user_id: Option<String>,
    pub auth_token: Option<String>,
    pub time_format: String,
    pub theme: ThemeName,
    pub language: Language,
    pub utc: bool,
    pub request_timeout: Duration,
    pub logical_failure: LogicalFailurePolicy,
    pub render_gate: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            server_url: None,
            user_id: None,
            auth_token: None,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            theme: ThemeName::default(),
            language: Language::default(),
            utc: false,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            logical_failure: LogicalFailurePolicy::default(),
            render_gate: true,
            log_file_path: default_log_path(),
        }
    }
}

/// Overrides taken from command-line flags. `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub server_url: Option<String>,
    pub user_id: Option<String>,
    pub auth_token: Option<String>,
    pub time_format: Option<String>,
    pub theme: Option<ThemeName>,
    pub language: Option<Language>,
    pub utc: Option<bool>,
    pub render_gate: Option<bool>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/rrview/rrview.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("rrview").join("rrview.log")
    } else {
        PathBuf::from("rrview.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/rrview/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rrview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `RRVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/rrview/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("RRVIEW_CONFIG") {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(env_path));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        server_url: config.server_url.or(defaults.server_url),
        user_id: config.user_id.or(defaults.user_id),
        auth_token: config.auth_token.or(defaults.auth_token),
        time_format: config.time_format.unwrap_or(defaults.time_format),
        theme: config.theme.unwrap_or(defaults.theme),
        language: config.language.unwrap_or(defaults.language),
        utc: config.utc.unwrap_or(defaults.utc),
        request_timeout: config
            .request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout),
        logical_failure: config.logical_failure.unwrap_or(defaults.logical_failure),
        render_gate: config.render_gate.unwrap_or(defaults.render_gate),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `RRVIEW_SERVER`: Override server URL
/// - `RRVIEW_USER_ID`: Override user id
/// - `RRVIEW_AUTH_TOKEN`: Override auth token
/// - `RRVIEW_THEME`: Override theme
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if `RRVIEW_THEME` names an unknown theme.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(server) = std::env::var("RRVIEW_SERVER") {
        config.server_url = Some(server);
    }

    if let Ok(user_id) = std::env::var("RRVIEW_USER_ID") {
        config.user_id = Some(user_id);
    }

    if let Ok(token) = std::env::var("RRVIEW_AUTH_TOKEN") {
        config.auth_token = Some(token);
    }

    if let Ok(theme) = std::env::var("RRVIEW_THEME") {
        config.theme = theme.parse().map_err(|e: crate::theme::UnknownTheme| {
            ConfigError::InvalidValue {
                key: "RRVIEW_THEME",
                value: theme.clone(),
                reason: e.to_string(),
            }
        })?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(server) = cli.server_url {
        config.server_url = Some(server);
    }
    if let Some(user_id) = cli.user_id {
        config.user_id = Some(user_id);
    }
    if let Some(token) = cli.auth_token {
        config.auth_token = Some(token);
    }
    if let Some(time_format) = cli.time_format {
        config.time_format = time_format;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(language) = cli.language {
        config.language = language;
    }
    if let Some(utc) = cli.utc {
        config.utc = utc;
    }
    if let Some(render_gate) = cli.render_gate {
        config.render_gate = render_gate;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
