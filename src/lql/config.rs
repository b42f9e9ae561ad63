use crate::error::{LqlError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_MAX_RATING: f64 = 10.0;

pub const MAX_RATING_KEY: &str = "max-rating";

/// Configuration for lql, stored in ~/.lql/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LqlConfig {
    /// Top of the rating scale (e.g. 10 or 100). Also decides how many
    /// fraction digits ratings are shown with.
    #[serde(default = "default_max_rating")]
    pub max_rating: f64,
}

fn default_max_rating() -> f64 {
    DEFAULT_MAX_RATING
}

impl Default for LqlConfig {
    fn default() -> Self {
        Self {
            max_rating: DEFAULT_MAX_RATING,
        }
    }
}

impl LqlConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: LqlConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        crate::paths::ensure_directory(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn set_max_rating(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() || value <= 0.0 {
            return Err(LqlError::Config(format!(
                "{} must be a positive number, got {}",
                MAX_RATING_KEY, value
            )));
        }
        self.max_rating = value;
        Ok(())
    }

    /// Looks up a value by its command-line key.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            MAX_RATING_KEY => Ok(self.max_rating.to_string()),
            other => Err(LqlError::Config(format!("Unknown config key: {}", other))),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            MAX_RATING_KEY => {
                let parsed: f64 = value.trim().parse().map_err(|_| {
                    LqlError::Config(format!("{} must be a number, got {:?}", key, value))
                })?;
                self.set_max_rating(parsed)
            }
            other => Err(LqlError::Config(format!("Unknown config key: {}", other))),
        }
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![(MAX_RATING_KEY, self.max_rating.to_string())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LqlConfig::default();
        assert_eq!(config.max_rating, 10.0);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = LqlConfig::load(temp.path().join(".lql")).unwrap();
        assert_eq!(config, LqlConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".lql");

        let mut config = LqlConfig::default();
        config.set(MAX_RATING_KEY, "100").unwrap();
        config.save(&dir).unwrap();

        let loaded = LqlConfig::load(&dir).unwrap();
        assert_eq!(loaded.max_rating, 100.0);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "{}").unwrap();

        let loaded = LqlConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.max_rating, 10.0);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = LqlConfig::default();
        assert!(config.set(MAX_RATING_KEY, "-5").is_err());
        assert!(config.set(MAX_RATING_KEY, "lots").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config.max_rating, 10.0);
    }
}
