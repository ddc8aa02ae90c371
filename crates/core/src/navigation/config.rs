//! Navigation tracker configuration
//!
//! # Parameters
//!
//! - `arrival_threshold_m` - Distance below which a waypoint counts as reached
//! - `min_speed_for_eta_mps` - Speeds at or below this never produce an ETA
//!
//! Values outside the valid ranges are forced back into range by
//! [`NavigationConfig::clamped`].

// --- Defaults ---

pub const DEFAULT_ARRIVAL_THRESHOLD_M: f64 = 20.0;
pub const DEFAULT_MIN_SPEED_FOR_ETA_MPS: f64 = 0.0;

// --- Ranges ---

pub const MIN_ARRIVAL_THRESHOLD_M: f64 = 1.0;
pub const MAX_ARRIVAL_THRESHOLD_M: f64 = 500.0;

pub const MIN_SPEED_FOR_ETA_MPS: f64 = 0.0;
pub const MAX_SPEED_FOR_ETA_MPS: f64 = 50.0;

/// Configuration for [`NavigationTracker`](super::NavigationTracker)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationConfig {
    /// Waypoint acceptance radius in meters
    pub arrival_threshold_m: f64,
    /// Minimum ground speed (m/s) that produces a fresh ETA
    pub min_speed_for_eta_mps: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            arrival_threshold_m: DEFAULT_ARRIVAL_THRESHOLD_M,
            min_speed_for_eta_mps: DEFAULT_MIN_SPEED_FOR_ETA_MPS,
        }
    }
}

impl NavigationConfig {
    /// Copy of this configuration with every value forced into its valid range
    ///
    /// Non-finite values fall back to their defaults.
    pub fn clamped(&self) -> Self {
        Self {
            arrival_threshold_m: clamp_or_default(
                self.arrival_threshold_m,
                MIN_ARRIVAL_THRESHOLD_M,
                MAX_ARRIVAL_THRESHOLD_M,
                DEFAULT_ARRIVAL_THRESHOLD_M,
            ),
            min_speed_for_eta_mps: clamp_or_default(
                self.min_speed_for_eta_mps,
                MIN_SPEED_FOR_ETA_MPS,
                MAX_SPEED_FOR_ETA_MPS,
                DEFAULT_MIN_SPEED_FOR_ETA_MPS,
            ),
        }
    }

    /// True when no value needs clamping
    pub fn is_within_range(&self) -> bool {
        self.clamped() == *self
    }
}

fn clamp_or_default(value: f64, min: f64, max: f64, default: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        default
    }
}
