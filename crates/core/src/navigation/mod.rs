//! Navigation tracking
//!
//! Follows a [`Route`](crate::route::Route) as position fixes arrive and
//! keeps a [`NavigationState`] with the current target, remaining distance
//! and estimated time remaining.

mod config;
mod error;
pub mod geo;
mod tracker;
mod types;

pub use config::{
    NavigationConfig, DEFAULT_ARRIVAL_THRESHOLD_M, DEFAULT_MIN_SPEED_FOR_ETA_MPS,
    MAX_ARRIVAL_THRESHOLD_M, MAX_SPEED_FOR_ETA_MPS, MIN_ARRIVAL_THRESHOLD_M,
    MIN_SPEED_FOR_ETA_MPS,
};
pub use error::NavigationError;
pub use tracker::{NavigationTracker, PositionOutcome};
pub use types::{
    NavigationEvent, NavigationEvents, NavigationPhase, NavigationPosition, NavigationState,
    WaypointIndex, MAX_NAVIGATION_EVENTS,
};
