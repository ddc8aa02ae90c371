//! Session configuration loading
//!
//! ```toml
//! channel_capacity = 32
//!
//! [navigation]
//! arrival_threshold_m = 20.0
//! min_speed_for_eta_mps = 0.0
//! ```
//!
//! Every field is optional; missing values take the defaults below.

use std::path::Path;

use log::warn;
use serde::Deserialize;
use wayfinder_core::navigation::{
    NavigationConfig, DEFAULT_ARRIVAL_THRESHOLD_M, DEFAULT_MIN_SPEED_FOR_ETA_MPS,
};

use crate::error::{Result, SessionError};

/// Top-level session configuration
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Pending commands buffered between callers and the session task
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,

    #[serde(default)]
    pub navigation: NavigationSection,
}

/// Navigation tracker settings
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NavigationSection {
    /// Waypoint acceptance radius in meters (default: 20.0)
    #[serde(default = "default_arrival_threshold")]
    pub arrival_threshold_m: f64,

    /// Speeds at or below this produce no ETA (default: 0.0)
    #[serde(default = "default_min_speed_for_eta")]
    pub min_speed_for_eta_mps: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
            navigation: NavigationSection::default(),
        }
    }
}

impl Default for NavigationSection {
    fn default() -> Self {
        Self {
            arrival_threshold_m: default_arrival_threshold(),
            min_speed_for_eta_mps: default_min_speed_for_eta(),
        }
    }
}

impl SessionConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SessionConfig = toml::from_str(content)?;
        if config.channel_capacity == 0 {
            return Err(SessionError::Config(
                "channel_capacity must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Tracker configuration with out-of-range values clamped
    pub fn navigation_config(&self) -> NavigationConfig {
        let requested = NavigationConfig {
            arrival_threshold_m: self.navigation.arrival_threshold_m,
            min_speed_for_eta_mps: self.navigation.min_speed_for_eta_mps,
        };
        let clamped = requested.clamped();
        if clamped != requested {
            warn!(
                "navigation config out of range, clamped: {:?} -> {:?}",
                requested, clamped
            );
        }
        clamped
    }
}

fn default_channel_capacity() -> usize {
    32
}

fn default_arrival_threshold() -> f64 {
    DEFAULT_ARRIVAL_THRESHOLD_M
}

fn default_min_speed_for_eta() -> f64 {
    DEFAULT_MIN_SPEED_FOR_ETA_MPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = SessionConfig::from_toml_str("").unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.channel_capacity, 32);
        assert_eq!(config.navigation_config(), NavigationConfig::default());
    }

    #[test]
    fn test_partial_navigation_section() {
        let config = SessionConfig::from_toml_str(
            r#"
            [navigation]
            arrival_threshold_m = 35.0
            "#,
        )
        .unwrap();
        assert!((config.navigation.arrival_threshold_m - 35.0).abs() < 1e-9);
        assert!(config.navigation.min_speed_for_eta_mps.abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let config = SessionConfig::from_toml_str(
            r#"
            channel_capacity = 4

            [navigation]
            arrival_threshold_m = 10000.0
            min_speed_for_eta_mps = -3.0
            "#,
        )
        .unwrap();
        let nav = config.navigation_config();
        assert!((nav.arrival_threshold_m - 500.0).abs() < 1e-9);
        assert!(nav.min_speed_for_eta_mps.abs() < 1e-9);
    }

    #[test]
    fn test_zero_channel_capacity_rejected() {
        let err = SessionConfig::from_toml_str("channel_capacity = 0").unwrap_err();
        assert!(matches!(err, SessionError::Config(_)));
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = SessionConfig::from_toml_str("channel_capacity = \"lots\"").unwrap_err();
        assert!(matches!(err, SessionError::Config(_)));
    }
}
