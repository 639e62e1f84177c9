use crate::error::{Result, TaskzError};
use crate::store::MalformedStorePolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration stored next to the data files as `config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskzConfig {
    /// What to do when a store file exists but is not valid JSON.
    #[serde(default)]
    pub malformed_store: MalformedStorePolicy,
}

impl TaskzConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TaskzError::Io)?;
        let config: TaskzConfig =
            serde_json::from_str(&content).map_err(TaskzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TaskzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TaskzError::Serialization)?;
        fs::write(config_path, content).map_err(TaskzError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_lenient() {
        let config = TaskzConfig::default();
        assert_eq!(config.malformed_store, MalformedStorePolicy::TreatAsEmpty);
    }

    #[test]
    fn load_missing_config_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TaskzConfig::load(dir.path()).unwrap();
        assert_eq!(config, TaskzConfig::default());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let config = TaskzConfig {
            malformed_store: MalformedStorePolicy::Fail,
        };
        config.save(dir.path()).unwrap();

        let loaded = TaskzConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn policy_serializes_in_kebab_case() {
        let json = serde_json::to_string(&TaskzConfig {
            malformed_store: MalformedStorePolicy::Fail,
        })
        .unwrap();
        assert!(json.contains("\"fail\""));

        let lenient: TaskzConfig =
            serde_json::from_str("{\"malformed_store\":\"treat-as-empty\"}").unwrap();
        assert_eq!(lenient.malformed_store, MalformedStorePolicy::TreatAsEmpty);
    }
}
