//! Configuration loading and management.

use std::path::{Path, PathBuf};

use attendance_core::{AttendanceConfig, MIN_PRESENCE_DURATION, ValidationError};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Presences shorter than this many minutes do not count.
    pub min_presence_minutes: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_presence_minutes: MIN_PRESENCE_DURATION,
        }
    }
}

impl Config {
    /// Loads configuration from the default location, then `config_path`,
    /// then `ATTENDANCE_*` environment variables.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // ATTENDANCE_MIN_PRESENCE_MINUTES etc.
        figment = figment.merge(Env::prefixed("ATTENDANCE_"));

        let config: Self = figment.extract()?;
        AttendanceConfig::new(config.min_presence_minutes)
            .map_err(|e| figment::Error::from(e.to_string()))?;
        Ok(config)
    }

    /// Aggregation settings, with an optional command-line override.
    pub fn attendance(
        &self,
        min_duration: Option<i64>,
    ) -> Result<AttendanceConfig, ValidationError> {
        AttendanceConfig::new(min_duration.unwrap_or(self.min_presence_minutes))
    }
}

/// Returns the platform-specific config directory.
///
/// On Linux: `~/.config/attendance`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("attendance"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn test_default_minimum() {
        assert_eq!(Config::default().min_presence_minutes, 5);
    }

    #[test]
    fn test_dirs_config_path_ends_with_attendance() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "attendance");
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "min_presence_minutes = 15\n").unwrap();

        let config = Config::load_from(Some(&path)).unwrap();
        assert_eq!(config.min_presence_minutes, 15);
    }

    #[test]
    fn test_load_rejects_bad_value() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "min_presence_minutes = \"lots\"\n").unwrap();

        assert!(Config::load_from(Some(&path)).is_err());
    }

    #[test]
    fn test_cli_override_wins() {
        let config = Config {
            min_presence_minutes: 15,
        };
        assert_eq!(config.attendance(None).unwrap().min_presence_minutes(), 15);
        assert_eq!(config.attendance(Some(1)).unwrap().min_presence_minutes(), 1);
    }

    #[test]
    fn test_load_rejects_negative_minimum() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "min_presence_minutes = -60\n").unwrap();

        let err = Config::load_from(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("cannot be negative"));
    }

    #[test]
    fn test_negative_override_is_rejected() {
        let config = Config::default();
        assert_eq!(
            config.attendance(Some(-60)),
            Err(ValidationError::Negative {
                field: "minimum presence duration",
                value: -60
            })
        );
    }
}
