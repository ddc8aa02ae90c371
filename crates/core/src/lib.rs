//! wayfinder_core - Pure no_std route navigation logic for wayfinder
//!
//! This crate contains platform-agnostic algorithms and types
//! that can be tested on host without any feature flags or runtime dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library or allocator dependencies
//! - **Bounded storage**: Routes and strings use fixed-capacity `heapless` types
//!
//! # Modules
//!
//! - [`coordinate`]: Decimal degrees to degrees/minutes/seconds formatting
//! - [`route`]: Validated, order-sorted route model
//! - [`navigation`]: Great-circle geometry and the route progress tracker
//! - [`display`]: Distance and duration display strings

#![no_std]

pub mod coordinate;
pub mod display;
pub mod navigation;
pub mod route;

pub use coordinate::{format_coordinate, format_location, Hemisphere, Sexagesimal};
pub use navigation::{
    NavigationConfig, NavigationError, NavigationEvent, NavigationPhase, NavigationPosition,
    NavigationState, NavigationTracker, PositionOutcome, WaypointIndex,
};
pub use route::{Route, RouteError, RouteMetadata, RouteWaypoint, Visibility};
