// src/config/config_load.rs
//
// loading of config.toml

use log::{info, warn};
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::config_types::*;
use crate::errors::ClockError;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub clock: ClockConfig,
    pub vehicle: VehicleConfig,
    pub animation: AnimationConfig,
    pub layout: LayoutConfig,
    pub osc: OscConfig,
}

impl Config {
    pub fn load() -> Result<Self, ClockError> {
        // First try to load from the executable's directory
        if let Some(path) = Self::exe_dir_config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        // Fallback to the current working directory, then to defaults
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            warn!("No {} found, using built-in defaults", CONFIG_FILE);
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ClockError> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ClockError> {
        let config: Config = toml::from_str(content)?;
        if let Some(fixed) = &config.clock.fixed_time {
            parse_fixed_time(fixed)?;
        }
        Ok(config)
    }

    fn exe_dir_config_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        Some(exe_dir.join(CONFIG_FILE))
    }
}

/// Parses "HH:MM" (24-hour) into hours and minutes.
pub fn parse_fixed_time(text: &str) -> Result<(u32, u32), ClockError> {
    let invalid = || ClockError::InvalidFixedTime(text.to_string());
    let re = Regex::new(r"^\s*(\d{1,2}):(\d{2})\s*$").map_err(|_| invalid())?;
    let caps = re.captures(text).ok_or_else(invalid)?;

    let hours: u32 = caps[1].parse().map_err(|_| invalid())?;
    let minutes: u32 = caps[2].parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    Ok((hours, minutes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixed_time() {
        assert_eq!(parse_fixed_time("09:59").unwrap(), (9, 59));
        assert_eq!(parse_fixed_time("7:05").unwrap(), (7, 5));
        assert_eq!(parse_fixed_time(" 23:00 ").unwrap(), (23, 0));
    }

    #[test]
    fn test_invalid_fixed_time() {
        for text in ["24:00", "12:60", "1200", "ab:cd", "12:5", ""] {
            assert!(
                matches!(parse_fixed_time(text), Err(ClockError::InvalidFixedTime(_))),
                "accepted {:?}",
                text
            );
        }
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml(
            r#"
            [animation]
            enter_step_ms = 80.0
            easing = "linear"

            [clock]
            fixed_time = "10:00"
            "#,
        )
        .unwrap();

        assert_eq!(config.animation.enter_step_ms, 80.0);
        assert_eq!(config.animation.exit_step_ms, 45.0);
        assert_eq!(config.animation.hide_after_ms, 1100.0);
        assert_eq!(config.vehicle.width, 34.0);
        assert_eq!(config.clock.fixed_time.as_deref(), Some("10:00"));
        assert!(!config.osc.enabled);
    }

    #[test]
    fn test_bad_fixed_time_rejected_on_load() {
        let result = Config::from_toml("[clock]\nfixed_time = \"99:99\"\n");
        assert!(matches!(result, Err(ClockError::InvalidFixedTime(_))));
    }
}
