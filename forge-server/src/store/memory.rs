use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use forge_types::WorkoutRecord;

use super::{IdGenerator, StoreError, WorkoutStore};

/// Milliseconds since the Unix epoch.
pub type Clock = fn() -> i64;

fn wall_clock_ms() -> i64 {
    Utc::now().timestamp_millis()
}

#[derive(Debug, Default)]
struct Inner {
    /// Newest first.
    records: VecDeque<WorkoutRecord>,
    ids: IdGenerator,
}

/// Process-lifetime, in-memory [`WorkoutStore`].
///
/// All state sits behind one mutex; each trait method takes it exactly once
/// and never across an `.await`.
#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    clock: Clock,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// An empty store using the wall clock for ids.
    pub fn new() -> Self {
        Self::with_clock(wall_clock_ms)
    }

    /// An empty store minting ids from `clock`.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            clock,
        }
    }

    /// A store pre-populated with `records`, given newest first.
    ///
    /// Ids minted afterwards are greater than every seeded id. Duplicate ids
    /// in `records` keep their first occurrence.
    pub fn with_records(records: impl IntoIterator<Item = WorkoutRecord>) -> Self {
        let mut inner = Inner::default();
        for record in records {
            if inner.records.iter().any(|r| r.id == record.id) {
                continue;
            }
            inner.ids.observe(record.id);
            inner.records.push_back(record);
        }
        Self {
            inner: Mutex::new(inner),
            clock: wall_clock_ms,
        }
    }

    /// The record the store starts with unless seeding is disabled.
    pub fn sample_record() -> WorkoutRecord {
        WorkoutRecord {
            id: 1,
            name: "Pushups".to_owned(),
            duration: 10,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl WorkoutStore for MemoryStore {
    fn list_all(&self) -> Result<Vec<WorkoutRecord>, StoreError> {
        Ok(self.lock()?.records.iter().cloned().collect())
    }

    fn add(&self, name: String, duration: i64) -> Result<WorkoutRecord, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        let mut inner = self.lock()?;
        let id = inner
            .ids
            .next((self.clock)())
            .ok_or(StoreError::IdsExhausted)?;
        let record = WorkoutRecord { id, name, duration };
        inner.records.push_front(record.clone());
        Ok(record)
    }

    fn remove_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.lock()?;
        let before = inner.records.len();
        inner.records.retain(|r| r.id != id);
        Ok(inner.records.len() != before)
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.lock()?.records.clear();
        Ok(())
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.records.len())
    }
}
