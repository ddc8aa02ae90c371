use wayfinder_core::{NavigationError, RouteError};

use crate::types::RouteId;

/// Errors that can occur during session and store operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid route: {0}")]
    Route(RouteError),

    #[error("Navigation error: {0}")]
    Navigation(NavigationError),

    #[error("Route not found: {0}")]
    RouteNotFound(RouteId),

    #[error("Route already exists: {0}")]
    RouteAlreadyExists(RouteId),

    #[error("Navigation session closed")]
    SessionClosed,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Record decode error: {0}")]
    Record(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Navigation session task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<RouteError> for SessionError {
    fn from(e: RouteError) -> Self {
        SessionError::Route(e)
    }
}

impl From<NavigationError> for SessionError {
    fn from(e: NavigationError) -> Self {
        SessionError::Navigation(e)
    }
}

impl From<toml::de::Error> for SessionError {
    fn from(e: toml::de::Error) -> Self {
        SessionError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SessionError::RouteNotFound(RouteId(42)).to_string(),
            "Route not found: Route(42)"
        );
        assert_eq!(
            SessionError::from(NavigationError::EmptyRoute).to_string(),
            "Navigation error: route is not navigable: no waypoints"
        );
        assert_eq!(
            SessionError::from(RouteError::DuplicateOrder { order: 1 }).to_string(),
            "Invalid route: duplicate waypoint order 1"
        );
    }
}
