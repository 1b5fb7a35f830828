//! Centralized constants used across the application.

/// Directory name under the platform config/data roots
pub const APP_DIR_NAME: &str = "modifier-clipboard";

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const LOGS_DIR_NAME: &str = "logs";

/// Log file inside the logs directory (debug builds only)
pub const LOG_FILE_NAME: &str = "modifier-clipboard.log";

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info,modifier_clipboard=debug";
