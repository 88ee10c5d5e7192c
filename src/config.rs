//! Editor configuration persistence
//!
//! Stores preferences in `~/.config/inkpad/config.yaml`

use serde::{Deserialize, Serialize};

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Idle interval before an edit is persisted, in milliseconds
    #[serde(default = "default_autosave_delay_ms")]
    pub autosave_delay_ms: u64,
    /// How long a notification stays visible, in milliseconds
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,
    /// Default row count offered by the create-table dialog
    #[serde(default = "default_table_rows")]
    pub table_rows: usize,
    /// Default column count offered by the create-table dialog
    #[serde(default = "default_table_cols")]
    pub table_cols: usize,
}

fn default_autosave_delay_ms() -> u64 {
    1000
}

fn default_notification_ms() -> u64 {
    3000
}

fn default_table_rows() -> usize {
    3
}

fn default_table_cols() -> usize {
    3
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            autosave_delay_ms: default_autosave_delay_ms(),
            notification_ms: default_notification_ms(),
            table_rows: default_table_rows(),
            table_cols: default_table_cols(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("Config file not found at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk, creating the config directory if needed
    pub fn save(&self) -> anyhow::Result<()> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| anyhow::anyhow!("No config directory available"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content)?;
        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.autosave_delay_ms, 1000);
        assert_eq!(config.notification_ms, 3000);
        assert_eq!(config.table_rows, 3);
        assert_eq!(config.table_cols, 3);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: EditorConfig = serde_yaml::from_str("autosave_delay_ms: 250").unwrap();
        assert_eq!(config.autosave_delay_ms, 250);
        assert_eq!(config.notification_ms, 3000);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = EditorConfig {
            autosave_delay_ms: 500,
            notification_ms: 1500,
            table_rows: 4,
            table_cols: 2,
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let loaded: EditorConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(loaded.autosave_delay_ms, 500);
        assert_eq!(loaded.table_cols, 2);
    }
}
