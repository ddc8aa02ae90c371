//! Route source contract
//!
//! The relational store that holds `routes` and `route_points` is an
//! external collaborator. The session only needs to read a route by id,
//! so the contract is narrow and object safe.

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use log::debug;
use wayfinder_core::Route;

use crate::error::{Result, SessionError};
use crate::records::RouteRecord;
use crate::types::RouteId;

/// Read access to stored route definitions.
///
/// Implementations must be `Send + Sync` so they can be shared as
/// `Box<dyn RouteSource>` / `Arc<dyn RouteSource>`.
#[async_trait]
pub trait RouteSource: Send + Sync {
    /// Identifier of this source type (e.g., "memory", "rest").
    fn source_type(&self) -> &'static str;

    /// Fetch one route record by id.
    async fn fetch_route(&self, id: RouteId) -> Result<RouteRecord>;

    /// List the ids of all routes visible to the caller.
    async fn list_routes(&self) -> Result<Vec<RouteId>>;

    /// Fetch a route and validate it into the core model.
    async fn load_route(&self, id: RouteId) -> Result<Route> {
        let record = self.fetch_route(id).await?;
        let route = record.to_route()?;
        debug!(
            "loaded {} from {} source ({} waypoints)",
            id,
            self.source_type(),
            route.waypoint_count()
        );
        Ok(route)
    }
}

/// In-memory route source backed by a map of records.
#[derive(Debug, Default)]
pub struct InMemoryRouteSource {
    routes: BTreeMap<RouteId, RouteRecord>,
}

impl InMemoryRouteSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. Returns error if a route with the same id exists.
    pub fn insert(&mut self, record: RouteRecord) -> Result<()> {
        if self.routes.contains_key(&record.id) {
            return Err(SessionError::RouteAlreadyExists(record.id));
        }
        self.routes.insert(record.id, record);
        Ok(())
    }

    /// Parse a JSON array of route records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<RouteRecord> = serde_json::from_str(json)?;
        let mut source = Self::new();
        for record in records {
            source.insert(record)?;
        }
        Ok(source)
    }

    /// Load a JSON array of route records from a file.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_json_str(&content)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[async_trait]
impl RouteSource for InMemoryRouteSource {
    fn source_type(&self) -> &'static str {
        "memory"
    }

    async fn fetch_route(&self, id: RouteId) -> Result<RouteRecord> {
        self.routes
            .get(&id)
            .cloned()
            .ok_or(SessionError::RouteNotFound(id))
    }

    async fn list_routes(&self) -> Result<Vec<RouteId>> {
        Ok(self.routes.keys().copied().collect())
    }
}
