//! One-line text summary of a navigation state.

use core::fmt;

use wayfinder_core::display::{format_distance, format_duration};
use wayfinder_core::{format_location, NavigationPhase, NavigationState, WaypointIndex};

/// Human-readable status derived from a [`NavigationState`].
///
/// ```text
/// [Navigating] waypoint 2/3 (Pier) | next 120 m | remaining 1.4 km | ETA 5 min | at 40° 42' 46" N, 74° 0' 21" W
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    text: String,
}

impl StatusLine {
    pub fn from_state(state: &NavigationState) -> Self {
        let mut text = format!("[{}]", state.phase);

        match (state.phase, &state.current_route) {
            (NavigationPhase::Idle, _) | (_, None) => {
                text.push_str(" no route");
            }
            (NavigationPhase::Ready, Some(route)) => {
                text.push_str(&format!(
                    " '{}' ready, {} waypoints, {}",
                    route.metadata().name,
                    route.waypoint_count(),
                    format_distance(route.total_length_m())
                ));
            }
            (NavigationPhase::Completed, Some(route)) => {
                text.push_str(&format!(" '{}' complete", route.metadata().name));
            }
            (NavigationPhase::Navigating, Some(route)) => {
                if let WaypointIndex::At(i) = state.current_waypoint_index {
                    text.push_str(&format!(" waypoint {}/{}", i + 1, route.waypoint_count()));
                    if let Some(name) = route.waypoint_at(i).ok().and_then(|wp| wp.name.as_ref()) {
                        text.push_str(&format!(" ({})", name));
                    }
                }
                if let Some(next) = state.distance_to_next_waypoint {
                    text.push_str(&format!(" | next {}", format_distance(next)));
                }
                if let Some(remaining) = state.total_distance_remaining {
                    text.push_str(&format!(" | remaining {}", format_distance(remaining)));
                }
                if let Some(eta) = state.estimated_time_remaining {
                    text.push_str(&format!(" | ETA {}", format_duration(eta)));
                }
            }
        }

        if let Some(pos) = &state.last_position {
            text.push_str(&format!(" | at {}", format_location(pos.lat, pos.lng)));
        }

        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_core::{NavigationPosition, Route, RouteMetadata, RouteWaypoint};

    fn route() -> Route {
        Route::new(
            RouteMetadata::new("Harbour").unwrap(),
            [
                RouteWaypoint::new(40.7128, -74.006, 0),
                RouteWaypoint::new(40.7138, -74.006, 1).with_name("Pier").unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_idle_status() {
        let line = StatusLine::from_state(&NavigationState::default());
        assert_eq!(line.as_str(), "[Idle] no route");
    }

    #[test]
    fn test_navigating_status() {
        let state = NavigationState {
            phase: NavigationPhase::Navigating,
            current_route: Some(route()),
            current_waypoint_index: WaypointIndex::At(1),
            distance_to_next_waypoint: Some(120.0),
            total_distance_remaining: Some(1400.0),
            estimated_time_remaining: Some(300.0),
            bearing_to_next_waypoint: Some(0.0),
            last_position: Some(NavigationPosition::new(40.7128, -74.006, 0)),
        };
        assert_eq!(
            StatusLine::from_state(&state).to_string(),
            "[Navigating] waypoint 2/2 (Pier) | next 120 m | remaining 1.4 km | ETA 5 min \
             | at 40° 42' 46\" N, 74° 0' 21\" W"
        );
    }

    #[test]
    fn test_completed_status() {
        let state = NavigationState {
            phase: NavigationPhase::Completed,
            current_route: Some(route()),
            current_waypoint_index: WaypointIndex::Complete,
            ..Default::default()
        };
        assert_eq!(
            StatusLine::from_state(&state).as_str(),
            "[Completed] 'Harbour' complete"
        );
    }
}
