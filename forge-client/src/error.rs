use thiserror::Error;

/// Errors returned by [`crate::WorkoutClient`] and [`crate::WorkoutLog`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, ...),
    /// or the response body could not be decoded.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The form was incomplete; nothing was sent.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A creation is already in flight.
    #[error("a workout submission is already pending")]
    SubmissionPending,
}

impl ClientError {
    /// Status code when the server answered with an error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Rejected { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
