//! Route error types

use core::fmt;

/// Errors from route construction and waypoint access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteError {
    /// Two waypoints share the same `order` value
    DuplicateOrder {
        /// The repeated order value
        order: i32,
    },
    /// Waypoint coordinate is non-finite or outside lat/lng ranges
    InvalidCoordinate {
        /// Order value of the offending waypoint
        order: i32,
    },
    /// Route exceeds the waypoint capacity
    TooManyWaypoints {
        /// Maximum number of waypoints per route
        max: usize,
    },
    /// A name or description exceeds its capacity
    TextTooLong {
        /// Which field overflowed
        field: &'static str,
        /// Capacity of the field in bytes
        max: usize,
    },
    /// Waypoint index outside `0..count`
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of waypoints in the route
        count: usize,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::DuplicateOrder { order } => {
                write!(f, "duplicate waypoint order {}", order)
            }
            RouteError::InvalidCoordinate { order } => {
                write!(f, "invalid coordinate for waypoint order {}", order)
            }
            RouteError::TooManyWaypoints { max } => {
                write!(f, "route exceeds {} waypoints", max)
            }
            RouteError::TextTooLong { field, max } => {
                write!(f, "{} exceeds {} bytes", field, max)
            }
            RouteError::IndexOutOfRange { index, count } => {
                write!(f, "waypoint index {} out of range (count {})", index, count)
            }
        }
    }
}
