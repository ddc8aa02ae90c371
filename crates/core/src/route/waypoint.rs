//! Route waypoint and metadata types

use heapless::String;

use super::error::RouteError;

/// Maximum length of a route or waypoint name in bytes
pub const MAX_NAME_LEN: usize = 64;

/// Maximum length of a route description in bytes
pub const MAX_DESCRIPTION_LEN: usize = 256;

/// Bounded name string
pub type Name = String<MAX_NAME_LEN>;

/// Bounded description string
pub type Description = String<MAX_DESCRIPTION_LEN>;

/// Single point of a route
#[derive(Clone, Debug, PartialEq)]
pub struct RouteWaypoint {
    /// Latitude in degrees (-90 to +90)
    pub lat: f64,
    /// Longitude in degrees (-180 to +180)
    pub lng: f64,
    /// Optional display name
    pub name: Option<Name>,
    /// Position of this waypoint within its route (unique per route)
    pub order: i32,
}

impl RouteWaypoint {
    /// Create an unnamed waypoint
    pub fn new(lat: f64, lng: f64, order: i32) -> Self {
        Self {
            lat,
            lng,
            name: None,
            order,
        }
    }

    /// Attach a display name
    pub fn with_name(mut self, name: &str) -> Result<Self, RouteError> {
        self.name = Some(bounded(name, "waypoint name")?);
        Ok(self)
    }
}

/// Who can see a route
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Visible to followers and other users
    Public,
    /// Visible to the owner only
    #[default]
    Private,
}

impl Visibility {
    /// Map the store's `is_public` flag
    pub fn from_public_flag(is_public: bool) -> Self {
        if is_public {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }
}

/// Descriptive data carried alongside the waypoints
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteMetadata {
    pub name: Name,
    pub description: Option<Description>,
    pub visibility: Visibility,
}

impl RouteMetadata {
    /// Create private metadata with the given name
    pub fn new(name: &str) -> Result<Self, RouteError> {
        Ok(Self {
            name: bounded(name, "route name")?,
            description: None,
            visibility: Visibility::Private,
        })
    }

    pub fn with_description(mut self, description: &str) -> Result<Self, RouteError> {
        self.description = Some(bounded(description, "route description")?);
        Ok(self)
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

fn bounded<const N: usize>(text: &str, field: &'static str) -> Result<String<N>, RouteError> {
    let mut out = String::new();
    out.push_str(text)
        .map_err(|_| RouteError::TextTooLong { field, max: N })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::string::String as StdString;

    use super::*;

    #[test]
    fn test_waypoint_new() {
        let wp = RouteWaypoint::new(35.6762, 139.6503, 2);
        assert!((wp.lat - 35.6762).abs() < 1e-9);
        assert!((wp.lng - 139.6503).abs() < 1e-9);
        assert_eq!(wp.order, 2);
        assert!(wp.name.is_none());
    }

    #[test]
    fn test_waypoint_with_name() {
        let wp = RouteWaypoint::new(0.0, 0.0, 0).with_name("Trailhead").unwrap();
        assert_eq!(wp.name.as_deref(), Some("Trailhead"));
    }

    #[test]
    fn test_waypoint_name_too_long() {
        let long: StdString = "x".repeat(MAX_NAME_LEN + 1);
        let err = RouteWaypoint::new(0.0, 0.0, 0).with_name(&long).unwrap_err();
        assert_eq!(
            err,
            RouteError::TextTooLong {
                field: "waypoint name",
                max: MAX_NAME_LEN
            }
        );
    }

    #[test]
    fn test_metadata_builders() {
        let meta = RouteMetadata::new("Harbour loop")
            .unwrap()
            .with_description("Along the pier and back")
            .unwrap()
            .with_visibility(Visibility::Public);
        assert_eq!(meta.name.as_str(), "Harbour loop");
        assert_eq!(meta.description.as_deref(), Some("Along the pier and back"));
        assert_eq!(meta.visibility, Visibility::Public);
    }

    #[test]
    fn test_visibility_from_public_flag() {
        assert_eq!(Visibility::from_public_flag(true), Visibility::Public);
        assert_eq!(Visibility::from_public_flag(false), Visibility::Private);
        assert_eq!(Visibility::default(), Visibility::Private);
    }
}
