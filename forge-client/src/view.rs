use std::sync::{Mutex, MutexGuard, PoisonError};

use forge_types::{CreateWorkoutRequest, DurationInput, WorkoutRecord};
use tracing::{debug, warn};

use crate::api::WorkoutApi;
use crate::error::ClientError;

#[derive(Debug, Default)]
struct LocalView {
    /// Newest first, mirroring the server.
    records: Vec<WorkoutRecord>,
    submitting: bool,
}

/// A client-side projection of the server's workout list.
///
/// The projection is never authoritative. It changes only in response to
/// server answers:
/// - [`load`](Self::load) replaces it wholesale with the server's list;
/// - [`add`](Self::add) prepends the record *returned by the server*;
/// - [`end`](Self::end) and [`clear`](Self::clear) drop records only after a
///   success response.
///
/// Methods take `&self` so one log can be shared between UI tasks; while a
/// creation is in flight further submissions are refused.
pub struct WorkoutLog<A> {
    api: A,
    view: Mutex<LocalView>,
}

impl<A: WorkoutApi> WorkoutLog<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            view: Mutex::new(LocalView::default()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Current local records, newest first.
    pub fn workouts(&self) -> Vec<WorkoutRecord> {
        self.view().records.clone()
    }

    /// Whether a creation is awaiting the server.
    pub fn is_submitting(&self) -> bool {
        self.view().submitting
    }

    /// Replace local state with the server's full list.
    pub async fn load(&self) -> Result<(), ClientError> {
        let records = self.api.list_all().await?;
        debug!(count = records.len(), "workouts loaded");
        self.view().records = records;
        Ok(())
    }

    /// Submit a new workout and prepend the server's record on success.
    ///
    /// Blank `name` or `duration` is refused locally without a request.
    pub async fn add(
        &self,
        name: &str,
        duration: impl Into<DurationInput>,
    ) -> Result<WorkoutRecord, ClientError> {
        let duration = duration.into();
        if name.trim().is_empty() {
            return Err(ClientError::MissingField("name"));
        }
        if matches!(&duration, DurationInput::Text(t) if t.trim().is_empty()) {
            return Err(ClientError::MissingField("duration"));
        }

        let _pending = self.begin_submission()?;
        let request = CreateWorkoutRequest {
            name: Some(name.to_owned()),
            duration: Some(duration),
        };
        let record = self.api.create(&request).await?;
        self.view().records.insert(0, record.clone());
        Ok(record)
    }

    /// End (remove) a workout; local removal happens only after success.
    pub async fn end(&self, id: i64) -> Result<(), ClientError> {
        if let Err(e) = self.api.end(id).await {
            warn!(id, error = %e, "ending workout failed; local view unchanged");
            return Err(e);
        }
        self.view().records.retain(|w| w.id != id);
        Ok(())
    }

    /// Clear every workout; local state is emptied only after success.
    pub async fn clear(&self) -> Result<(), ClientError> {
        self.api.clear().await?;
        self.view().records.clear();
        Ok(())
    }

    fn begin_submission(&self) -> Result<SubmissionGuard<'_>, ClientError> {
        let mut view = self.view();
        if view.submitting {
            return Err(ClientError::SubmissionPending);
        }
        view.submitting = true;
        Ok(SubmissionGuard { view: &self.view })
    }

    fn view(&self) -> MutexGuard<'_, LocalView> {
        // The view is plain data; a panic elsewhere cannot leave it half-written.
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears the submitting flag however the submission ends.
struct SubmissionGuard<'a> {
    view: &'a Mutex<LocalView>,
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.view
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .submitting = false;
    }
}
