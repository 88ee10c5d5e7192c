//! Centralized configuration paths for inkpad
//!
//! All persistent files live under:
//! - Unix/macOS: `~/.config/inkpad/`
//! - Windows: `%APPDATA%\inkpad\`
//!
//! This module is the single source of truth for these paths.

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "inkpad";

/// Base config directory
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/inkpad`
///   - Else: `~/.config/inkpad`
///
/// Windows:
///   - `%APPDATA%\inkpad`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/inkpad/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/inkpad/session.json` - the saved editor session
pub fn session_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("session.json"))
}

/// `~/.config/inkpad/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Ensure the logs dir exists, returning it
pub fn ensure_logs_dir() -> anyhow::Result<PathBuf> {
    let logs = logs_dir().ok_or_else(|| anyhow::anyhow!("No config directory available"))?;
    fs::create_dir_all(&logs)?;
    Ok(logs)
}
