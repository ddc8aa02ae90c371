//! Store record types
//!
//! Plain serde records mirroring the store's `routes` / `route_points`
//! rows and the device location provider's fixes. Conversion into core
//! types validates the data; records themselves accept anything.

use serde::{Deserialize, Serialize};
use wayfinder_core::{NavigationPosition, Route, RouteError, RouteMetadata, RouteWaypoint, Visibility};

use crate::types::RouteId;

/// Row of the `route_points` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePointRecord {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub order: i32,
}

/// Row of the `routes` table with its points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub id: RouteId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub points: Vec<RoutePointRecord>,
}

impl RouteRecord {
    /// Validate and convert into a core route (sorted by `order`)
    pub fn to_route(&self) -> Result<Route, RouteError> {
        let mut metadata = RouteMetadata::new(&self.name)?
            .with_visibility(Visibility::from_public_flag(self.is_public));
        if let Some(description) = &self.description {
            metadata = metadata.with_description(description)?;
        }

        let waypoints = self
            .points
            .iter()
            .map(RoutePointRecord::to_waypoint)
            .collect::<Result<Vec<_>, _>>()?;
        Route::new(metadata, waypoints)
    }
}

impl RoutePointRecord {
    fn to_waypoint(&self) -> Result<RouteWaypoint, RouteError> {
        let waypoint = RouteWaypoint::new(self.lat, self.lng, self.order);
        match &self.name {
            Some(name) => waypoint.with_name(name),
            None => Ok(waypoint),
        }
    }
}

/// Position fix as delivered by the device location provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
}

impl From<PositionRecord> for NavigationPosition {
    fn from(r: PositionRecord) -> Self {
        NavigationPosition {
            lat: r.lat,
            lng: r.lng,
            accuracy: r.accuracy,
            heading: r.heading,
            speed: r.speed,
            timestamp_ms: r.timestamp,
        }
    }
}

/// Parse newline-delimited position records, skipping blank lines
pub fn parse_position_lines(content: &str) -> Result<Vec<PositionRecord>, serde_json::Error> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(serde_json::from_str)
        .collect()
}
