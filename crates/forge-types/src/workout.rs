use serde::{Deserialize, Serialize};

use crate::coerce::{parse_integer, CoercionError};

/// Confirmation returned by `DELETE /workouts/{id}`.
pub const WORKOUT_ENDED: &str = "Workout ended";
/// Confirmation returned by `DELETE /workouts`.
pub const ALL_WORKOUTS_CLEARED: &str = "All workouts cleared";

/// A single logged workout.
///
/// `id` is assigned by the server at creation time and is never reused while
/// the server process lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WorkoutRecord {
    pub id: i64,
    pub name: String,
    /// Minutes.
    pub duration: i64,
}

/// `duration` as submitted: a JSON integer or numeric text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum DurationInput {
    Minutes(i64),
    Text(String),
}

impl DurationInput {
    pub fn to_minutes(&self) -> Result<i64, CoercionError> {
        match self {
            DurationInput::Minutes(m) => Ok(*m),
            DurationInput::Text(s) => parse_integer("duration", s),
        }
    }
}

impl From<i64> for DurationInput {
    fn from(minutes: i64) -> Self {
        DurationInput::Minutes(minutes)
    }
}

impl From<i32> for DurationInput {
    fn from(minutes: i32) -> Self {
        DurationInput::Minutes(i64::from(minutes))
    }
}

impl From<&str> for DurationInput {
    fn from(text: &str) -> Self {
        DurationInput::Text(text.to_owned())
    }
}

impl From<String> for DurationInput {
    fn from(text: String) -> Self {
        DurationInput::Text(text)
    }
}

/// Body of `POST /workouts`.
///
/// Both fields are optional at the serde level so that a missing field is
/// reported as a [`CoercionError`] naming it rather than a generic decode error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateWorkoutRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<DurationInput>,
}

impl CreateWorkoutRequest {
    pub fn new(name: impl Into<String>, duration: impl Into<DurationInput>) -> Self {
        Self {
            name: Some(name.into()),
            duration: Some(duration.into()),
        }
    }

    /// Coerce the raw request into a [`NewWorkout`].
    ///
    /// The name is trimmed and must be non-empty; the duration must be an
    /// integer.
    pub fn validate(&self) -> Result<NewWorkout, CoercionError> {
        let name = self
            .name
            .as_deref()
            .ok_or(CoercionError::Missing("name"))?
            .trim();
        if name.is_empty() {
            return Err(CoercionError::Blank("name"));
        }
        let duration = self
            .duration
            .as_ref()
            .ok_or(CoercionError::Missing("duration"))?
            .to_minutes()?;
        Ok(NewWorkout {
            name: name.to_owned(),
            duration,
        })
    }
}

/// A validated creation request, ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkout {
    pub name: String,
    pub duration: i64,
}

/// `{ "message": ... }`, used for confirmations and error bodies alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
