//! wayfinder_session - Host-side glue around `wayfinder_core`
//!
//! - [`records`]: serde records for the store's routes and device fixes
//! - [`source`]: async route-source contract and an in-memory source
//! - [`config`]: TOML session configuration
//! - [`session`]: tokio task owning one navigation tracker
//! - [`status`]: one-line text summary of a navigation state

pub mod config;
pub mod error;
pub mod records;
pub mod session;
pub mod source;
pub mod status;
pub mod types;

pub use config::{NavigationSection, SessionConfig};
pub use error::{Result, SessionError};
pub use records::{parse_position_lines, PositionRecord, RoutePointRecord, RouteRecord};
pub use session::{NavigationSession, SessionCommand, SessionHandle};
pub use source::{InMemoryRouteSource, RouteSource};
pub use status::StatusLine;
pub use types::RouteId;
