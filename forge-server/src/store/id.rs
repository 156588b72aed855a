/// Mints workout ids.
///
/// Ids follow wall-clock milliseconds so they read as creation timestamps,
/// but each one is strictly greater than the last: two records created in
/// the same millisecond (or across a clock step backwards) still get distinct,
/// ordered ids.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id given the current time in milliseconds.
    ///
    /// `None` once `i64::MAX` has been handed out.
    pub fn next(&mut self, now_ms: i64) -> Option<i64> {
        let id = now_ms.max(self.last.checked_add(1)?);
        self.last = id;
        Some(id)
    }

    /// Make sure future ids are greater than `id`.
    pub fn observe(&mut self, id: i64) {
        self.last = self.last.max(id);
    }
}
