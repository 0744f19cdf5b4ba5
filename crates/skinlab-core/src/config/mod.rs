//! Analysis configuration loading.
//!
//! Configuration is optional: every field has a built-in default and the
//! engine functions never read it implicitly. Callers load a handle once and
//! pass the values they need down explicitly.

mod defaults;

pub use defaults::AnalysisDefaults;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "SKINLAB_CONFIG";

/// Canonical config file name we search for on disk.
pub const CONFIG_FILENAME: &str = "skinlab.yml";

/// Directory under the home directory holding user configuration
const USER_CONFIG_DIR: &str = "skinlab";

/// Public handle that stores the loaded configuration, its source path, and warnings.
#[derive(Debug, Clone)]
pub struct AnalysisConfigHandle {
    pub config: AnalysisConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl AnalysisConfigHandle {
    fn with_config(config: AnalysisConfig, source: Option<PathBuf>, warnings: Vec<String>) -> Self {
        Self {
            config,
            source,
            warnings,
        }
    }

    /// Emit the source and any warnings through the logger
    pub fn log_usage(&self) {
        match &self.source {
            Some(source) => log::info!("Loaded analysis config from {}", source.display()),
            None => log::debug!("Using built-in analysis defaults"),
        }
        for warning in &self.warnings {
            log::warn!("Config warning: {}", warning);
        }
    }
}

/// Complete configuration file structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    pub defaults: AnalysisDefaults,
}

impl AnalysisConfig {
    fn sanitize(mut self, warnings: &mut Vec<String>) -> Self {
        warnings.extend(self.defaults.sanitize());
        self
    }

    /// Parse and sanitize a YAML document
    pub fn from_yaml(contents: &str) -> Result<(Self, Vec<String>)> {
        let config: AnalysisConfig = serde_yaml::from_str(contents)
            .map_err(|e| AnalysisError::Config(e.to_string()))?;
        let mut warnings = Vec::new();
        let config = config.sanitize(&mut warnings);
        Ok((config, warnings))
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| AnalysisError::Config(e.to_string()))
    }
}

/// Load configuration from disk, optionally forcing a specific path.
///
/// Never fails: unreadable or unparsable candidates are recorded as warnings
/// and the search moves on, ending with the built-in defaults.
pub fn load_analysis_config(custom_path: Option<&Path>) -> AnalysisConfigHandle {
    load_from_candidates(get_config_candidates(custom_path))
}

fn load_from_candidates(candidates: Vec<PathBuf>) -> AnalysisConfigHandle {
    let mut warnings = Vec::new();

    for candidate in candidates {
        if !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match AnalysisConfig::from_yaml(&contents) {
                Ok((config, sanitize_warnings)) => {
                    warnings.extend(sanitize_warnings);
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    return AnalysisConfigHandle::with_config(config, Some(source), warnings);
                }
                Err(err) => warnings.push(format!(
                    "Failed to parse analysis config {}: {}",
                    candidate.display(),
                    err
                )),
            },
            Err(err) => warnings.push(format!(
                "Failed to read analysis config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    warnings.push("No analysis config found; using built-in defaults.".to_string());
    AnalysisConfigHandle::with_config(AnalysisConfig::default(), None, warnings)
}

/// Get list of config file candidates to try
fn get_config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join("config").join(CONFIG_FILENAME));
        candidates.push(cwd.join(CONFIG_FILENAME));
    }

    if let Some(path) = user_config_path() {
        candidates.push(path);
    }

    candidates
}

/// `~/skinlab/skinlab.yml`, if a home directory is known
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(USER_CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Write the default configuration to `path`, creating parent directories.
///
/// Returns `false` without touching the file if it exists and `force` is off.
pub fn write_default_config(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, AnalysisConfig::default().to_yaml()?)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::SkinZone;

    #[test]
    fn test_missing_candidates_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let handle = load_from_candidates(vec![dir.path().join("absent.yml")]);
        assert!(handle.source.is_none());
        assert_eq!(handle.config, AnalysisConfig::default());
        assert!(handle.warnings.iter().any(|w| w.contains("built-in defaults")));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            "defaults:\n  glcm_levels: 32\n  texture_zone: left_cheek\n  environment_baseline:\n    humidity: 40\n",
        )
        .unwrap();

        let handle = load_analysis_config(Some(&path));
        assert!(handle.source.is_some());
        let defaults = &handle.config.defaults;
        assert_eq!(defaults.glcm_levels, 32);
        assert_eq!(defaults.texture_zone, SkinZone::LeftCheek);
        assert_eq!(defaults.glcm_distance, 1);
        assert!(defaults.multi_angle);
        assert_eq!(defaults.environment_baseline.humidity, 40.0);
        assert_eq!(defaults.environment_baseline.temperature, 22.0);
    }

    #[test]
    fn test_out_of_range_values_are_sanitized() {
        let (config, warnings) = AnalysisConfig::from_yaml(
            "defaults:\n  glcm_levels: 1000\n  glcm_distance: 0\n  environment_baseline:\n    humidity: 140\n",
        )
        .unwrap();
        assert_eq!(config.defaults.glcm_levels, 256);
        assert_eq!(config.defaults.glcm_distance, 1);
        assert_eq!(config.defaults.environment_baseline.humidity, 100.0);
        assert_eq!(warnings.len(), 2);
        assert!(config.defaults.glcm_params().validate().is_ok());
    }

    #[test]
    fn test_invalid_file_is_skipped_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.yml");
        let good = dir.path().join("good.yml");
        fs::write(&bad, "defaults: [not, a, map").unwrap();
        fs::write(&good, "defaults:\n  multi_angle: false\n").unwrap();

        let handle = load_from_candidates(vec![bad, good]);
        assert!(!handle.config.defaults.multi_angle);
        assert!(handle
            .warnings
            .iter()
            .any(|w| w.contains("Failed to parse analysis config")));
    }

    #[test]
    fn test_write_default_config_respects_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILENAME);

        assert!(write_default_config(&path, false).unwrap());
        let contents = fs::read_to_string(&path).unwrap();
        let (config, warnings) = AnalysisConfig::from_yaml(&contents).unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert!(warnings.is_empty());

        fs::write(&path, "defaults:\n  glcm_levels: 8\n").unwrap();
        assert!(!write_default_config(&path, false).unwrap());
        assert!(fs::read_to_string(&path).unwrap().contains("glcm_levels: 8"));
        assert!(write_default_config(&path, true).unwrap());
    }
}
