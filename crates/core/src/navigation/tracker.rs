//! Navigation state tracker
//!
//! Platform-agnostic state machine that follows a route as position fixes
//! arrive. Modeled on the mission sequencer lifecycle:
//!
//! ```text
//! Idle --load--> Ready --start--> Navigating --last waypoint--> Completed
//!   ^                                                              |
//!   +-------------------------------stop---------------------------+
//! ```
//!
//! The tracker is synchronous and never blocks. Callers own scheduling; one
//! tracker instance belongs to exactly one navigation session.
//!
//! # Update rules
//!
//! - Fixes are only accepted while `Navigating`
//! - Fixes with non-finite or out-of-range coordinates are rejected and the
//!   state is retained
//! - Fixes older than the last accepted one are ignored
//! - A waypoint is reached when the great-circle distance drops below the
//!   arrival threshold; the target advances by one waypoint per fix
//! - Remaining distance is the distance to the target plus every leg after it
//! - ETA is refreshed only when the fix carries a usable speed

use super::config::NavigationConfig;
use super::error::NavigationError;
use super::geo::{calculate_bearing, calculate_distance, is_valid_coordinate};
use super::types::{
    NavigationEvent, NavigationEvents, NavigationPhase, NavigationPosition, NavigationState,
    WaypointIndex,
};
use crate::route::Route;

/// Result of feeding a position fix to the tracker
#[derive(Clone, Debug, PartialEq)]
pub enum PositionOutcome {
    /// Fix accepted and state recomputed
    Updated(NavigationEvents),
    /// Fix older than the last accepted one; state unchanged
    Stale,
}

/// Route progress tracker
pub struct NavigationTracker {
    config: NavigationConfig,
    state: NavigationState,
}

impl NavigationTracker {
    /// Create a tracker in Idle state with default configuration
    pub fn new() -> Self {
        Self::with_config(NavigationConfig::default())
    }

    /// Create a tracker in Idle state; out-of-range values are clamped
    pub fn with_config(config: NavigationConfig) -> Self {
        Self {
            config: config.clamped(),
            state: NavigationState::default(),
        }
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Current progress snapshot
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn phase(&self) -> NavigationPhase {
        self.state.phase
    }

    /// Load a route without starting navigation
    ///
    /// Empty routes may be loaded; they fail later at [`start_loaded`](Self::start_loaded).
    pub fn load(&mut self, route: Route) -> Result<(), NavigationError> {
        if self.state.is_navigating() {
            return Err(NavigationError::AlreadyNavigating);
        }
        self.state = NavigationState {
            phase: NavigationPhase::Ready,
            current_route: Some(route),
            ..Default::default()
        };
        Ok(())
    }

    /// Start navigating a route from its first waypoint
    ///
    /// Fails with [`NavigationError::EmptyRoute`] when the route has no
    /// waypoints, leaving the current state untouched.
    pub fn start(&mut self, route: Route) -> Result<NavigationEvents, NavigationError> {
        if self.state.is_navigating() {
            return Err(NavigationError::AlreadyNavigating);
        }
        if !route.is_navigable() {
            return Err(NavigationError::EmptyRoute);
        }

        let mut events = NavigationEvents::new();
        let _ = events.push(NavigationEvent::Started(route.waypoint_count()));
        let _ = events.push(NavigationEvent::TargetChanged(0));

        // No fix yet: only the route geometry is known
        let remaining = route.length_from(0);
        self.state = NavigationState {
            phase: NavigationPhase::Navigating,
            current_route: Some(route),
            current_waypoint_index: WaypointIndex::At(0),
            distance_to_next_waypoint: None,
            total_distance_remaining: Some(remaining),
            estimated_time_remaining: None,
            bearing_to_next_waypoint: None,
            last_position: None,
        };
        Ok(events)
    }

    /// Start navigating the route previously passed to [`load`](Self::load)
    pub fn start_loaded(&mut self) -> Result<NavigationEvents, NavigationError> {
        if self.state.is_navigating() {
            return Err(NavigationError::AlreadyNavigating);
        }
        let route = match (&self.state.phase, &self.state.current_route) {
            (NavigationPhase::Ready, Some(route)) => route.clone(),
            _ => return Err(NavigationError::NoRouteLoaded),
        };
        self.start(route)
    }

    /// Stop navigation and clear the route
    ///
    /// Valid from any phase. Later fixes are rejected until a new start.
    pub fn stop(&mut self) -> NavigationEvents {
        let mut events = NavigationEvents::new();
        if self.state.phase != NavigationPhase::Idle {
            let _ = events.push(NavigationEvent::Stopped);
        }
        self.state = NavigationState::default();
        events
    }

    /// Feed a position fix
    pub fn on_position(
        &mut self,
        pos: NavigationPosition,
    ) -> Result<PositionOutcome, NavigationError> {
        if !self.state.is_navigating() {
            return Err(NavigationError::NotNavigating {
                phase: self.state.phase,
            });
        }
        if !is_valid_coordinate(pos.lat, pos.lng) {
            return Err(NavigationError::InvalidPosition {
                lat: pos.lat,
                lng: pos.lng,
            });
        }
        if let Some(last) = &self.state.last_position {
            if pos.timestamp_ms < last.timestamp_ms {
                return Ok(PositionOutcome::Stale);
            }
        }

        let route = match &self.state.current_route {
            Some(route) => route,
            None => return Err(NavigationError::NoRouteLoaded),
        };
        let mut index = match self.state.current_waypoint_index {
            WaypointIndex::At(i) => i,
            WaypointIndex::Unset | WaypointIndex::Complete => {
                return Err(NavigationError::NotNavigating {
                    phase: self.state.phase,
                })
            }
        };

        let mut events = NavigationEvents::new();
        let target = route.waypoint_at(index)?;
        let mut distance = calculate_distance(pos.lat, pos.lng, target.lat, target.lng);

        if distance < self.config.arrival_threshold_m {
            let _ = events.push(NavigationEvent::WaypointReached(index));

            if index + 1 >= route.waypoint_count() {
                let _ = events.push(NavigationEvent::RouteCompleted);
                self.complete(pos);
                return Ok(PositionOutcome::Updated(events));
            }

            index += 1;
            let _ = events.push(NavigationEvent::TargetChanged(index));
            let target = route.waypoint_at(index)?;
            distance = calculate_distance(pos.lat, pos.lng, target.lat, target.lng);
        }

        let target = route.waypoint_at(index)?;
        let bearing = calculate_bearing(pos.lat, pos.lng, target.lat, target.lng);
        let remaining = distance + route.length_from(index);
        let eta = match pos.usable_speed(self.config.min_speed_for_eta_mps) {
            Some(speed) => Some(remaining / speed),
            // Keep the previous estimate rather than a stale/zero-speed one
            None => self.state.estimated_time_remaining,
        };

        self.state.current_waypoint_index = WaypointIndex::At(index);
        self.state.distance_to_next_waypoint = Some(distance);
        self.state.total_distance_remaining = Some(remaining);
        self.state.estimated_time_remaining = eta;
        self.state.bearing_to_next_waypoint = Some(bearing);
        self.state.last_position = Some(pos);

        Ok(PositionOutcome::Updated(events))
    }

    fn complete(&mut self, pos: NavigationPosition) {
        self.state.phase = NavigationPhase::Completed;
        self.state.current_waypoint_index = WaypointIndex::Complete;
        self.state.distance_to_next_waypoint = Some(0.0);
        self.state.total_distance_remaining = Some(0.0);
        self.state.estimated_time_remaining = Some(0.0);
        self.state.bearing_to_next_waypoint = None;
        self.state.last_position = Some(pos);
    }
}

impl Default for NavigationTracker {
    fn default() -> Self {
        Self::new()
    }
}
