//! Where the config file and logs live.
//!
//! Development runs (cargo, debug builds) keep everything in the working
//! directory. Installed builds use the platform locations from `dirs`:
//! - Linux: `~/.config/modifier-clipboard/` for config, `~/.local/share/modifier-clipboard/` for logs
//! - Windows/macOS: one data directory for both

use std::path::PathBuf;

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, LOGS_DIR_NAME};

/// True under `cargo run` or in debug builds.
pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

fn local_dir() -> Option<PathBuf> {
    is_dev_mode().then(|| PathBuf::from("."))
}

pub fn data_dir() -> Option<PathBuf> {
    local_dir().or_else(|| dirs::data_dir().map(|p| p.join(APP_DIR_NAME)))
}

pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = local_dir() {
        return Some(dir);
    }

    #[cfg(target_os = "linux")]
    {
        dirs::config_dir().map(|p| p.join(APP_DIR_NAME))
    }

    #[cfg(not(target_os = "linux"))]
    {
        data_dir()
    }
}

pub fn config_file() -> PathBuf {
    config_dir()
        .map(|p| p.join(CONFIG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

pub fn logs_dir() -> PathBuf {
    data_dir()
        .map(|p| p.join(LOGS_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(LOGS_DIR_NAME))
}

/// Create the config and log directories for installed builds.
pub fn ensure_directories() -> std::io::Result<()> {
    if is_dev_mode() {
        return Ok(());
    }

    if let Some(config) = config_dir() {
        std::fs::create_dir_all(config)?;
    }
    std::fs::create_dir_all(logs_dir())
}
