//! forge-client: talk to a forge-server and keep a local view consistent with it.
//!
//! [`WorkoutClient`] issues the four HTTP operations. [`WorkoutLog`] is the
//! local projection a UI renders from; it only changes after the server has
//! confirmed a mutation, and it adopts server-assigned ids verbatim.

pub mod api;
pub mod error;
pub mod view;

pub use api::{WorkoutApi, WorkoutClient};
pub use error::ClientError;
pub use view::WorkoutLog;
