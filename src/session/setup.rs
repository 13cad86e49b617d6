//! Session setup and initialization

use crate::config::{Config, get_config_path};
use crate::error::AppError;
use crate::logging::{LogLevel, get_log_threshold};
use crate::theme::Theme;

/// Everything the TUI needs to start, resolved from config and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    pub theme: Theme,
    pub with_background_color: bool,
    /// Path the router starts at.
    pub route: String,
    /// Lowest level shown in the activity panel.
    pub log_threshold: LogLevel,
}

impl SessionData {
    /// Merges command-line flags over the stored config. Flags win for this run only.
    pub fn resolve(
        config: &Config,
        theme: Option<Theme>,
        route: Option<String>,
        no_background: bool,
        log_threshold: LogLevel,
    ) -> Self {
        Self {
            theme: theme.unwrap_or(config.theme),
            with_background_color: config.with_background_color && !no_background,
            route: route.unwrap_or_else(|| "/".to_string()),
            log_threshold,
        }
    }
}

/// Reads the config file (defaults if absent) and applies the `start` flags.
pub fn setup_session(
    theme: Option<Theme>,
    route: Option<String>,
    no_background: bool,
) -> Result<SessionData, AppError> {
    let config_path = get_config_path()?;
    let config = Config::load_or_default(&config_path)?;
    let session = SessionData::resolve(
        &config,
        theme,
        route,
        no_background,
        get_log_threshold(),
    );
    log::debug!("Session resolved: {session:?}");
    Ok(session)
}
