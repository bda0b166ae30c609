// Tue Jan 13 2026 - Alex

use crate::finders::{DEFAULT_BACKWARD_LIMIT, DEFAULT_FORWARD_WINDOW};
use crate::memory::image::HEADER_SEGMENT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub comment_prototype: bool,
    pub comment_description: bool,
    pub comment_guid: bool,
    pub generate_stats: bool,
    pub generate_log: bool,
    pub output_log: bool,
    pub output_sql: bool,
    pub debug_msgs: bool,
    pub forward_scan_window: u64,
    pub backward_scan_limit: usize,
    pub entry_point_names: Vec<String>,
    pub code_segment: String,
    pub data_segment: String,
    pub header_segment: String,
    pub log_file: PathBuf,
    pub database_file: PathBuf,
    pub report_file_name: String,
    pub json_output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            comment_prototype: true,
            comment_description: false,
            comment_guid: true,
            generate_stats: true,
            generate_log: false,
            output_log: false,
            output_sql: false,
            debug_msgs: false,
            forward_scan_window: DEFAULT_FORWARD_WINDOW,
            backward_scan_limit: DEFAULT_BACKWARD_LIMIT,
            entry_point_names: vec!["start".to_string(), "_ModuleEntryPoint".to_string()],
            code_segment: ".text".to_string(),
            data_segment: ".data".to_string(),
            header_segment: HEADER_SEGMENT.to_string(),
            log_file: PathBuf::from("efiswissknife.log"),
            database_file: PathBuf::from("efi_stats.sql"),
            report_file_name: "log".to_string(),
            json_output: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset for unattended runs over many binaries: everything goes to files.
    pub fn batch() -> Self {
        Self {
            generate_stats: true,
            generate_log: true,
            debug_msgs: true,
            output_sql: true,
            ..Self::default()
        }
    }

    pub fn with_json_output(mut self, path: PathBuf) -> Self {
        self.json_output = Some(path);
        self
    }

    pub fn with_database_file(mut self, path: PathBuf) -> Self {
        self.database_file = path;
        self
    }

    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = path;
        self
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.forward_scan_window == 0 {
            return Err(ConfigError::Validation("forward_scan_window must be > 0".to_string()));
        }
        if self.backward_scan_limit == 0 {
            return Err(ConfigError::Validation("backward_scan_limit must be > 0".to_string()));
        }
        if self.entry_point_names.is_empty() {
            return Err(ConfigError::Validation("entry_point_names must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.comment_prototype && config.comment_guid && config.generate_stats);
        assert!(!config.comment_description && !config.output_sql && !config.generate_log);
        assert_eq!(config.forward_scan_window, 64);
        assert_eq!(config.backward_scan_limit, 32);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_batch_preset() {
        let config = Config::batch();
        assert!(config.generate_stats && config.generate_log && config.debug_msgs && config.output_sql);
        assert!(!config.output_log);
    }

    #[test]
    fn test_validate_rejects_zero_bounds() {
        let mut config = Config::default();
        config.backward_scan_limit = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let mut config = Config::default();
        config.entry_point_names.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"comment_description": true, "forward_scan_window": 128}"#).unwrap();
        assert!(config.comment_description);
        assert_eq!(config.forward_scan_window, 128);
        assert_eq!(config.data_segment, ".data");
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("uefi-service-mapper-config-{}.json", std::process::id()));
        let config = Config::batch().with_json_output(PathBuf::from("out.json"));
        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.json_output, Some(PathBuf::from("out.json")));
        assert!(loaded.output_sql);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Config::load("/nonexistent/uefi-service-mapper.json"),
            Err(ConfigError::NotFound(_))
        ));
    }
}
