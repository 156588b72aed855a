//! Workout storage.
//!
//! [`WorkoutStore`] is the only way handlers touch the record set. The sole
//! implementation is [`MemoryStore`], which keeps records for the life of the
//! process. Every operation is a single atomic step with respect to the
//! others, so the newest-first order and id uniqueness hold under concurrent
//! requests.

mod id;
mod memory;

pub use id::IdGenerator;
pub use memory::MemoryStore;

use forge_types::WorkoutRecord;
use thiserror::Error;

/// Errors raised by a [`WorkoutStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record name was empty after trimming.
    #[error("workout name must not be empty")]
    EmptyName,

    /// Every id up to `i64::MAX` has been handed out.
    #[error("workout ids exhausted")]
    IdsExhausted,

    /// A previous operation panicked while holding the store lock.
    #[error("workout store lock poisoned")]
    Poisoned,
}

/// The canonical, newest-first sequence of workouts.
pub trait WorkoutStore: Send + Sync + 'static {
    /// Snapshot of every record, most recently created first.
    fn list_all(&self) -> Result<Vec<WorkoutRecord>, StoreError>;

    /// Create a record with a freshly minted id and put it at the front.
    fn add(&self, name: String, duration: i64) -> Result<WorkoutRecord, StoreError>;

    /// Remove the record with `id`. Returns whether one existed.
    fn remove_by_id(&self, id: i64) -> Result<bool, StoreError>;

    /// Remove every record.
    fn clear(&self) -> Result<(), StoreError>;

    /// Number of records currently held.
    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}
