//! Default correction settings, loaded from / saved to JSON

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::GrammaticalCase;
use crate::corrector::CorrectionOptions;

/// Environment variable that overrides the config file location
pub const CONFIG_PATH_ENV: &str = "GREEKNAMES_CONFIG";

/// Config file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config serialization failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Defaults applied when a caller does not pass its own options
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GreekNamesConfig {
    /// Case to decline every name into
    #[serde(default)]
    pub target_case: Option<GrammaticalCase>,
    /// Run the spelling repair pass
    #[serde(default)]
    pub fix_common_errors: bool,
    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for GreekNamesConfig {
    fn default() -> Self {
        Self {
            target_case: None,
            fix_common_errors: false,
            pretty: default_pretty(),
        }
    }
}

impl GreekNamesConfig {
    /// Correction options described by this config
    pub fn options(&self) -> CorrectionOptions {
        let options = CorrectionOptions::new().with_fix_common_errors(self.fix_common_errors);
        match self.target_case {
            Some(case) => options.with_target_case(case),
            None => options,
        }
    }
}

/// Config path: $GREEKNAMES_CONFIG, else ~/.config/greeknames/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("greeknames").join("config.json")
}

/// Load the config (defaults when the file is missing or unreadable)
pub fn load_config() -> GreekNamesConfig {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> GreekNamesConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("invalid config {}: {}; using defaults", path.display(), e);
            GreekNamesConfig::default()
        }),
        Err(_) => GreekNamesConfig::default(),
    }
}

/// Save the config
pub fn save_config(config: &GreekNamesConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_path())
}

pub fn save_config_to(config: &GreekNamesConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GreekNamesConfig::default();
        assert_eq!(config.target_case, None);
        assert!(!config.fix_common_errors);
        assert!(config.pretty);
        assert_eq!(config.options(), CorrectionOptions::default());
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = GreekNamesConfig {
            target_case: Some(GrammaticalCase::Accusative),
            fix_common_errors: true,
            pretty: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GreekNamesConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(
            parsed.options(),
            CorrectionOptions::new()
                .with_target_case(GrammaticalCase::Accusative)
                .with_fix_common_errors(true)
        );
    }

    #[test]
    fn test_backward_compat_missing_field() {
        let json = r#"{"fix_common_errors": true}"#;
        let config: GreekNamesConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.target_case, None);
        assert!(config.fix_common_errors);
        assert!(config.pretty);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!("greeknames-config-{}", std::process::id()));
        let path = dir.join("config.json");
        let config = GreekNamesConfig {
            target_case: Some(GrammaticalCase::Vocative),
            fix_common_errors: false,
            pretty: true,
        };

        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path), config);

        fs::write(&path, "not json").unwrap();
        assert_eq!(load_config_from(&path), GreekNamesConfig::default());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("greeknames-does-not-exist/config.json");
        assert_eq!(load_config_from(&path), GreekNamesConfig::default());
    }
}
