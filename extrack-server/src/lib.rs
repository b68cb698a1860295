//! extrack-server: exercise tracker HTTP API
//!
//! Users are created by name, exercises are logged against a user, and a
//! user's log can be queried with an optional date window and entry cap.
//!
//! - [`models`]: validated client input
//! - [`db`]: the [`db::Store`] trait and its Postgres/in-memory backends
//! - [`http`]: axum router, handlers, and server lifecycle

pub mod db;
pub mod http;
pub mod models;

pub use db::{MemoryStore, PgStore, Store, StoreError};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
