//! Configuration management with YAML support

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub state: StateConfig,

    #[serde(default)]
    pub sessions: SessionsConfig,

    #[serde(default)]
    pub user: UserConfig,
}

/// Local state cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    #[serde(default = "default_state_path")]
    pub path: String,
}

/// Session replica configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionsConfig {
    #[serde(default = "default_sessions_path")]
    pub path: String,
}

/// Active user configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default = "default_user_id")]
    pub id: String,
}

// Default value functions
fn default_state_path() -> String {
    "~/.local/share/stillpoint/state.db".to_string()
}

fn default_sessions_path() -> String {
    "~/.local/share/stillpoint/sessions.db".to_string()
}

fn default_user_id() -> String {
    "local".to_string()
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            path: default_state_path(),
        }
    }
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            path: default_sessions_path(),
        }
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            id: default_user_id(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    /// Searches in order:
    /// 1. Provided path
    /// 2. ./stillpoint.yaml (current directory)
    /// 3. ~/.config/stillpoint/stillpoint.yaml
    pub fn load(path: &str) -> Result<Self> {
        let search_paths = vec![
            shellexpand::tilde(path).to_string(),
            "stillpoint.yaml".to_string(),
            shellexpand::tilde("~/.config/stillpoint/stillpoint.yaml").to_string(),
        ];

        for search_path in &search_paths {
            if std::path::Path::new(search_path).exists() {
                let content = std::fs::read_to_string(search_path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        // No config file found, use defaults
        Ok(Config::default())
    }

    /// Get the state cache path, expanding ~ to home directory
    pub fn state_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.state.path).to_string();
        PathBuf::from(expanded)
    }

    /// Get the session replica path, expanding ~ to home directory
    pub fn sessions_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.sessions.path).to_string();
        PathBuf::from(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.user.id, "local");
        assert!(config.state.path.ends_with("state.db"));
        assert!(config.sessions.path.ends_with("sessions.db"));
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
state:
  path: ~/.local/share/stillpoint/test-state.db

sessions:
  path: /tmp/replica.db

user:
  id: ada
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.state.path, "~/.local/share/stillpoint/test-state.db");
        assert_eq!(config.sessions.path, "/tmp/replica.db");
        assert_eq!(config.user.id, "ada");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
user:
  id: ada
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.user.id, "ada");
        assert_eq!(config.state.path, "~/.local/share/stillpoint/state.db");
    }
}
