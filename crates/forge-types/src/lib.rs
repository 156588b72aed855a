//! Shared wire types for the forge workout log.
//!
//! Both `forge-server` and `forge-client` speak these shapes over HTTP/JSON.
//! Enable the `openapi` feature to derive `utoipa` schemas for them.

pub mod coerce;
pub mod workout;

pub use coerce::{parse_integer, CoercionError};
pub use workout::{
    CreateWorkoutRequest, DurationInput, MessageResponse, NewWorkout, WorkoutRecord,
    ALL_WORKOUTS_CLEARED, WORKOUT_ENDED,
};
