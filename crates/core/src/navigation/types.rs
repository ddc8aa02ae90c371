//! Navigation type definitions
//!
//! This module contains core types used by the navigation tracker:
//! - `NavigationPosition`: A single observed position fix
//! - `NavigationPhase`: Tracker lifecycle phase
//! - `WaypointIndex`: Current target waypoint, unset or completion sentinel
//! - `NavigationState`: Progress snapshot owned by the tracker
//! - `NavigationEvent`: Transitions reported by each update

use core::fmt;

use heapless::Vec;

use crate::route::Route;

/// Maximum events emitted by a single tracker call
pub const MAX_NAVIGATION_EVENTS: usize = 4;

/// Events produced by one tracker call
pub type NavigationEvents = Vec<NavigationEvent, MAX_NAVIGATION_EVENTS>;

/// Single observed position fix from a location provider
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavigationPosition {
    /// Latitude in degrees (-90 to +90)
    pub lat: f64,
    /// Longitude in degrees (-180 to +180)
    pub lng: f64,
    /// Horizontal accuracy in meters
    pub accuracy: Option<f64>,
    /// Course over ground in degrees (0-360, true north)
    pub heading: Option<f64>,
    /// Ground speed in m/s
    pub speed: Option<f64>,
    /// Milliseconds since an arbitrary epoch, non-decreasing per session
    pub timestamp_ms: u64,
}

impl NavigationPosition {
    /// Create a fix without optional fields
    pub fn new(lat: f64, lng: f64, timestamp_ms: u64) -> Self {
        Self {
            lat,
            lng,
            accuracy: None,
            heading: None,
            speed: None,
            timestamp_ms,
        }
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = Some(accuracy);
        self
    }

    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = Some(heading);
        self
    }

    /// Ground speed usable for an ETA, if strictly greater than `min_speed`
    pub fn usable_speed(&self, min_speed: f64) -> Option<f64> {
        self.speed
            .filter(|s| s.is_finite() && *s > 0.0 && *s > min_speed)
    }
}

/// Tracker lifecycle phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NavigationPhase {
    /// No route loaded
    #[default]
    Idle,
    /// Route loaded, not navigating
    Ready,
    /// Consuming position updates
    Navigating,
    /// Last waypoint reached
    Completed,
}

impl fmt::Display for NavigationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationPhase::Idle => write!(f, "Idle"),
            NavigationPhase::Ready => write!(f, "Ready"),
            NavigationPhase::Navigating => write!(f, "Navigating"),
            NavigationPhase::Completed => write!(f, "Completed"),
        }
    }
}

/// Current target waypoint
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WaypointIndex {
    /// No route is being followed (Idle or Ready)
    #[default]
    Unset,
    /// Index into the route's waypoints, always valid while navigating
    At(usize),
    /// Every waypoint has been passed
    Complete,
}

impl WaypointIndex {
    /// Index of the target waypoint, `None` when unset or complete
    pub fn index(self) -> Option<usize> {
        match self {
            WaypointIndex::At(i) => Some(i),
            WaypointIndex::Unset | WaypointIndex::Complete => None,
        }
    }

    pub fn is_complete(self) -> bool {
        self == WaypointIndex::Complete
    }
}

/// Events emitted by the tracker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationEvent {
    /// Navigation began on a route with the given waypoint count
    Started(usize),
    /// Waypoint at this index came within the arrival threshold
    WaypointReached(usize),
    /// Target moved to the waypoint at this index
    TargetChanged(usize),
    /// Last waypoint reached
    RouteCompleted,
    /// Navigation stopped and route cleared
    Stopped,
}

/// Progress snapshot
///
/// Distances are in meters, times in seconds. Distance fields are `None`
/// until the first position is accepted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationState {
    pub phase: NavigationPhase,
    pub current_route: Option<Route>,
    pub current_waypoint_index: WaypointIndex,
    pub distance_to_next_waypoint: Option<f64>,
    pub total_distance_remaining: Option<f64>,
    pub estimated_time_remaining: Option<f64>,
    /// Initial bearing from the last fix to the target (degrees 0-360)
    pub bearing_to_next_waypoint: Option<f64>,
    /// Last accepted fix
    pub last_position: Option<NavigationPosition>,
}

impl NavigationState {
    pub fn is_navigating(&self) -> bool {
        self.phase == NavigationPhase::Navigating
    }

    /// Fraction of the route travelled (0.0 to 1.0)
    ///
    /// Zero-length routes report 0.0 until completed.
    pub fn progress(&self) -> f64 {
        if self.phase == NavigationPhase::Completed {
            return 1.0;
        }
        let (Some(route), Some(remaining)) =
            (self.current_route.as_ref(), self.total_distance_remaining)
        else {
            return 0.0;
        };
        let total = route.total_length_m();
        if total <= 0.0 {
            return 0.0;
        }
        (1.0 - remaining / total).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{RouteMetadata, RouteWaypoint};

    #[test]
    fn test_position_builders() {
        let pos = NavigationPosition::new(35.6762, 139.6503, 1_000)
            .with_speed(1.5)
            .with_accuracy(4.0)
            .with_heading(270.0);
        assert_eq!(pos.speed, Some(1.5));
        assert_eq!(pos.accuracy, Some(4.0));
        assert_eq!(pos.heading, Some(270.0));
        assert_eq!(pos.timestamp_ms, 1_000);
    }

    #[test]
    fn test_usable_speed() {
        let pos = NavigationPosition::new(0.0, 0.0, 0);
        assert_eq!(pos.usable_speed(0.0), None);
        assert_eq!(pos.with_speed(0.0).usable_speed(0.0), None);
        assert_eq!(pos.with_speed(-2.0).usable_speed(0.0), None);
        assert_eq!(pos.with_speed(f64::NAN).usable_speed(0.0), None);
        assert_eq!(pos.with_speed(0.4).usable_speed(0.5), None);
        assert_eq!(pos.with_speed(1.2).usable_speed(0.5), Some(1.2));
    }

    #[test]
    fn test_navigation_state_default() {
        let state = NavigationState::default();
        assert_eq!(state.phase, NavigationPhase::Idle);
        assert!(!state.is_navigating());
        assert!(state.current_route.is_none());
        assert_eq!(state.current_waypoint_index, WaypointIndex::Unset);
        assert!(state.distance_to_next_waypoint.is_none());
        assert!(state.total_distance_remaining.is_none());
        assert!(state.estimated_time_remaining.is_none());
    }

    #[test]
    fn test_waypoint_index() {
        assert_eq!(WaypointIndex::At(3).index(), Some(3));
        assert_eq!(WaypointIndex::Complete.index(), None);
        assert_eq!(WaypointIndex::Unset.index(), None);
        assert!(!WaypointIndex::Unset.is_complete());
        assert!(WaypointIndex::Complete.is_complete());
        assert!(!WaypointIndex::At(0).is_complete());
    }

    #[test]
    fn test_progress() {
        let route = Route::new(
            RouteMetadata::new("p").unwrap(),
            [RouteWaypoint::new(0.0, 0.0, 0), RouteWaypoint::new(0.0, 0.001, 1)],
        )
        .unwrap();
        let total = route.total_length_m();

        let mut state = NavigationState {
            phase: NavigationPhase::Navigating,
            current_route: Some(route),
            ..Default::default()
        };
        assert_eq!(state.progress(), 0.0);

        state.total_distance_remaining = Some(total / 4.0);
        assert!((state.progress() - 0.75).abs() < 1e-9);

        state.phase = NavigationPhase::Completed;
        assert_eq!(state.progress(), 1.0);
    }
}
