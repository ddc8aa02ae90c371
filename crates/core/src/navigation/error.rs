//! Navigation error types

use core::fmt;

use crate::route::RouteError;

use super::types::NavigationPhase;

/// Errors from navigation tracker operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationError {
    /// Route has no waypoints and cannot be navigated
    EmptyRoute,
    /// Operation requires an active navigation session
    NotNavigating {
        /// Phase the tracker was in
        phase: NavigationPhase,
    },
    /// A route is already being navigated; stop first
    AlreadyNavigating,
    /// No route was loaded before `start_loaded`
    NoRouteLoaded,
    /// Position fix has non-finite or out-of-range coordinates
    InvalidPosition {
        lat: f64,
        lng: f64,
    },
    /// Underlying route access failed
    Route(RouteError),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::EmptyRoute => write!(f, "route is not navigable: no waypoints"),
            NavigationError::NotNavigating { phase } => {
                write!(f, "not navigating (phase: {})", phase)
            }
            NavigationError::AlreadyNavigating => write!(f, "navigation already in progress"),
            NavigationError::NoRouteLoaded => write!(f, "no route loaded"),
            NavigationError::InvalidPosition { lat, lng } => {
                write!(f, "invalid position fix ({}, {})", lat, lng)
            }
            NavigationError::Route(e) => write!(f, "route error: {}", e),
        }
    }
}

impl From<RouteError> for NavigationError {
    fn from(e: RouteError) -> Self {
        NavigationError::Route(e)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::format;

    use super::*;

    #[test]
    fn test_navigation_error_display() {
        assert_eq!(
            format!("{}", NavigationError::EmptyRoute),
            "route is not navigable: no waypoints"
        );
        assert_eq!(
            format!(
                "{}",
                NavigationError::NotNavigating {
                    phase: NavigationPhase::Completed
                }
            ),
            "not navigating (phase: Completed)"
        );
        assert_eq!(
            format!(
                "{}",
                NavigationError::from(RouteError::IndexOutOfRange { index: 3, count: 1 })
            ),
            "route error: waypoint index 3 out of range (count 1)"
        );
    }
}
