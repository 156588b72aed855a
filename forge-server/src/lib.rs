//! forge-server: an in-memory workout log served over HTTP/JSON.
//!
//! The binary in `main.rs` wires these modules together; they are exposed as
//! a library so integration tests (and `forge-client`'s tests) can run the
//! exact same router against an ephemeral listener.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::ServerError;
pub use state::AppState;
pub use store::{MemoryStore, StoreError, WorkoutStore};
