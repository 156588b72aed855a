use std::future::Future;

use forge_types::{CreateWorkoutRequest, MessageResponse, WorkoutRecord};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ClientError;

/// The four workout operations a server exposes.
///
/// [`WorkoutClient`] implements this over HTTP; [`crate::WorkoutLog`] is
/// generic over it so the sync rules can be exercised without a network.
pub trait WorkoutApi: Send + Sync + 'static {
    fn list_all(&self) -> impl Future<Output = Result<Vec<WorkoutRecord>, ClientError>> + Send;

    fn create(
        &self,
        request: &CreateWorkoutRequest,
    ) -> impl Future<Output = Result<WorkoutRecord, ClientError>> + Send;

    fn end(&self, id: i64) -> impl Future<Output = Result<MessageResponse, ClientError>> + Send;

    fn clear(&self) -> impl Future<Output = Result<MessageResponse, ClientError>> + Send;
}

/// HTTP client for a forge-server.
#[derive(Debug, Clone)]
pub struct WorkoutClient {
    http: Client,
    base_url: String,
}

impl WorkoutClient {
    /// `base_url` includes the API prefix, e.g. `http://127.0.0.1:5000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn workouts_url(&self) -> String {
        format!("{}/workouts", self.base_url)
    }
}

impl WorkoutApi for WorkoutClient {
    async fn list_all(&self) -> Result<Vec<WorkoutRecord>, ClientError> {
        let response = self.http.get(self.workouts_url()).send().await?;
        decode(response).await
    }

    async fn create(&self, request: &CreateWorkoutRequest) -> Result<WorkoutRecord, ClientError> {
        let response = self
            .http
            .post(self.workouts_url())
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    async fn end(&self, id: i64) -> Result<MessageResponse, ClientError> {
        let url = format!("{}/{}", self.workouts_url(), id);
        let response = self.http.delete(url).send().await?;
        decode(response).await
    }

    async fn clear(&self) -> Result<MessageResponse, ClientError> {
        let response = self.http.delete(self.workouts_url()).send().await?;
        decode(response).await
    }
}

/// Decode a success body, or turn an error status into [`ClientError::Rejected`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    debug!(status = status.as_u16(), url = %response.url(), "response received");
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let text = response.text().await?;
    let message = serde_json::from_str::<MessageResponse>(&text)
        .map(|m| m.message)
        .unwrap_or(text);
    Err(ClientError::Rejected {
        status: status.as_u16(),
        message,
    })
}
