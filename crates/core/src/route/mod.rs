//! Route model
//!
//! A route is an ordered sequence of waypoints plus descriptive metadata.
//!
//! # Validation
//!
//! - Waypoints are sorted by `order` ascending at construction
//! - Duplicate `order` values are rejected with [`RouteError::DuplicateOrder`]
//! - Coordinates must be finite and inside lat/lng ranges
//! - Fixed capacity of [`MAX_WAYPOINTS`] (no allocator)
//!
//! A route with zero waypoints is valid but not navigable.
//!
//! Leg lengths are computed once at construction so that remaining-distance
//! queries during navigation are constant time.

mod error;
mod waypoint;

use heapless::Vec;

use crate::navigation::geo::{calculate_distance, is_valid_coordinate};

pub use error::RouteError;
pub use waypoint::{
    Description, Name, RouteMetadata, RouteWaypoint, Visibility, MAX_DESCRIPTION_LEN,
    MAX_NAME_LEN,
};

/// Maximum number of waypoints in a route
pub const MAX_WAYPOINTS: usize = 100;

/// Validated, order-sorted route
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    metadata: RouteMetadata,
    waypoints: Vec<RouteWaypoint, MAX_WAYPOINTS>,
    /// `length_after[i]` = sum of leg distances from waypoint `i` to the last one
    length_after: Vec<f64, MAX_WAYPOINTS>,
}

impl Route {
    /// Build a route from waypoints in any order
    pub fn new<I>(metadata: RouteMetadata, waypoints: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = RouteWaypoint>,
    {
        let mut sorted: Vec<RouteWaypoint, MAX_WAYPOINTS> = Vec::new();
        for wp in waypoints {
            if !is_valid_coordinate(wp.lat, wp.lng) {
                return Err(RouteError::InvalidCoordinate { order: wp.order });
            }
            sorted
                .push(wp)
                .map_err(|_| RouteError::TooManyWaypoints { max: MAX_WAYPOINTS })?;
        }

        sorted.sort_unstable_by_key(|wp| wp.order);
        if let Some(pair) = sorted.windows(2).find(|w| w[0].order == w[1].order) {
            return Err(RouteError::DuplicateOrder {
                order: pair[0].order,
            });
        }

        let length_after = cumulative_lengths(&sorted);
        Ok(Self {
            metadata,
            waypoints: sorted,
            length_after,
        })
    }

    /// Route with no waypoints
    pub fn empty(metadata: RouteMetadata) -> Self {
        Self {
            metadata,
            waypoints: Vec::new(),
            length_after: Vec::new(),
        }
    }

    pub fn metadata(&self) -> &RouteMetadata {
        &self.metadata
    }

    /// Number of waypoints
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// True when the route has at least one waypoint
    pub fn is_navigable(&self) -> bool {
        !self.is_empty()
    }

    /// Bounds-checked waypoint access
    pub fn waypoint_at(&self, index: usize) -> Result<&RouteWaypoint, RouteError> {
        self.waypoints.get(index).ok_or(RouteError::IndexOutOfRange {
            index,
            count: self.waypoints.len(),
        })
    }

    /// All waypoints, sorted by order
    pub fn waypoints(&self) -> &[RouteWaypoint] {
        &self.waypoints
    }

    /// Sum of all leg distances in meters
    pub fn total_length_m(&self) -> f64 {
        self.length_after.first().copied().unwrap_or(0.0)
    }

    /// Sum of leg distances from waypoint `index` to the end of the route
    ///
    /// This covers every leg strictly after `index`; indices at or past the
    /// last waypoint yield zero.
    pub fn length_from(&self, index: usize) -> f64 {
        self.length_after.get(index).copied().unwrap_or(0.0)
    }
}

fn cumulative_lengths(waypoints: &[RouteWaypoint]) -> Vec<f64, MAX_WAYPOINTS> {
    let mut lengths: Vec<f64, MAX_WAYPOINTS> = Vec::new();
    // Same length as `waypoints`, which is bounded by MAX_WAYPOINTS
    for _ in waypoints {
        let _ = lengths.push(0.0);
    }
    for i in (0..waypoints.len().saturating_sub(1)).rev() {
        let (a, b) = (&waypoints[i], &waypoints[i + 1]);
        lengths[i] = lengths[i + 1] + calculate_distance(a.lat, a.lng, b.lat, b.lng);
    }
    lengths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> RouteMetadata {
        RouteMetadata::new("test").unwrap()
    }

    #[test]
    fn test_route_sorts_by_order() {
        let route = Route::new(
            meta(),
            [
                RouteWaypoint::new(0.0, 0.002, 7),
                RouteWaypoint::new(0.0, 0.0, 1),
                RouteWaypoint::new(0.0, 0.001, 3),
            ],
        )
        .unwrap();

        let orders: [i32; 3] = [
            route.waypoint_at(0).unwrap().order,
            route.waypoint_at(1).unwrap().order,
            route.waypoint_at(2).unwrap().order,
        ];
        assert_eq!(orders, [1, 3, 7]);
    }

    #[test]
    fn test_route_rejects_duplicate_order() {
        let err = Route::new(
            meta(),
            [
                RouteWaypoint::new(0.0, 0.0, 0),
                RouteWaypoint::new(1.0, 1.0, 2),
                RouteWaypoint::new(2.0, 2.0, 2),
            ],
        )
        .unwrap_err();
        assert_eq!(err, RouteError::DuplicateOrder { order: 2 });
    }

    #[test]
    fn test_route_rejects_invalid_coordinate() {
        let err = Route::new(meta(), [RouteWaypoint::new(f64::NAN, 0.0, 4)]).unwrap_err();
        assert_eq!(err, RouteError::InvalidCoordinate { order: 4 });

        let err = Route::new(meta(), [RouteWaypoint::new(0.0, 200.0, 5)]).unwrap_err();
        assert_eq!(err, RouteError::InvalidCoordinate { order: 5 });
    }

    #[test]
    fn test_route_capacity() {
        let too_many = (0..=MAX_WAYPOINTS as i32).map(|i| RouteWaypoint::new(0.0, 0.0, i));
        let err = Route::new(meta(), too_many).unwrap_err();
        assert_eq!(err, RouteError::TooManyWaypoints { max: MAX_WAYPOINTS });

        let full = (0..MAX_WAYPOINTS as i32).map(|i| RouteWaypoint::new(0.0, 0.0, i));
        assert_eq!(Route::new(meta(), full).unwrap().waypoint_count(), MAX_WAYPOINTS);
    }

    #[test]
    fn test_empty_route() {
        let route = Route::new(meta(), core::iter::empty::<RouteWaypoint>()).unwrap();
        assert!(route.is_empty());
        assert!(!route.is_navigable());
        assert_eq!(route.waypoint_count(), 0);
        assert_eq!(route.total_length_m(), 0.0);
        assert_eq!(route, Route::empty(meta()));
    }

    #[test]
    fn test_waypoint_at_out_of_range() {
        let route = Route::new(meta(), [RouteWaypoint::new(0.0, 0.0, 0)]).unwrap();
        assert!(route.waypoint_at(0).is_ok());
        assert_eq!(
            route.waypoint_at(1).unwrap_err(),
            RouteError::IndexOutOfRange { index: 1, count: 1 }
        );
    }

    #[test]
    fn test_route_lengths() {
        let route = Route::new(
            meta(),
            [
                RouteWaypoint::new(0.0, 0.0, 0),
                RouteWaypoint::new(0.0, 0.001, 1),
                RouteWaypoint::new(0.0, 0.002, 2),
            ],
        )
        .unwrap();

        let leg = calculate_distance(0.0, 0.0, 0.0, 0.001);
        assert!((route.total_length_m() - 2.0 * leg).abs() < 1e-6);
        assert!((route.length_from(1) - leg).abs() < 1e-6);
        assert_eq!(route.length_from(2), 0.0);
        assert_eq!(route.length_from(10), 0.0);
    }

    #[test]
    fn test_single_waypoint_route_has_zero_length() {
        let route = Route::new(meta(), [RouteWaypoint::new(10.0, 10.0, 0)]).unwrap();
        assert!(route.is_navigable());
        assert_eq!(route.total_length_m(), 0.0);
    }
}
