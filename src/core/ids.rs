//! Transaction id generation.
//!
//! Ids come from the creation clock reading in milliseconds. Two adds inside the
//! same millisecond (or a clock that steps backwards) would collide, so the
//! generator remembers the last id it handed out and never issues one that is
//! not strictly greater.

/// Issues strictly increasing ids from clock readings.
#[derive(Clone, Debug, Default)]
pub struct IdGenerator {
    last_issued: Option<i64>,
}

impl IdGenerator {
    /// Creates a generator that has not issued anything yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last_issued: None }
    }

    /// Returns the id for a record created at `clock_millis`.
    ///
    /// The reading is used as-is when it is ahead of the last issued id, otherwise
    /// the last issued id is bumped by one. Returns `None`, issuing nothing, when
    /// the last issued id is already `i64::MAX`.
    pub fn next_id(&mut self, clock_millis: i64) -> Option<i64> {
        let id = match self.last_issued {
            Some(last) if clock_millis <= last => last.checked_add(1)?,
            _ => clock_millis,
        };
        self.last_issued = Some(id);
        Some(id)
    }

    /// Records an id issued elsewhere (e.g. restored from a snapshot) so later ids
    /// stay above it.
    pub fn observe(&mut self, id: i64) {
        if self.last_issued.is_none_or(|last| id > last) {
            self.last_issued = Some(id);
        }
    }

    /// Forgets every issued id.
    pub const fn reset(&mut self) {
        self.last_issued = None;
    }

    /// The most recent id issued or observed.
    #[must_use]
    pub const fn last_issued(&self) -> Option<i64> {
        self.last_issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_clock_reading_when_ahead() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id(1_000), Some(1_000));
        assert_eq!(ids.next_id(1_005), Some(1_005));
        assert_eq!(ids.last_issued(), Some(1_005));
    }

    #[test]
    fn test_same_tick_is_bumped() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id(1_000), Some(1_000));
        assert_eq!(ids.next_id(1_000), Some(1_001));
        assert_eq!(ids.next_id(1_000), Some(1_002));
        // Clock catches up past the bumped ids
        assert_eq!(ids.next_id(1_010), Some(1_010));
    }

    #[test]
    fn test_clock_going_backwards_stays_monotonic() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id(5_000), Some(5_000));
        assert_eq!(ids.next_id(4_000), Some(5_001));
    }

    #[test]
    fn test_observe_raises_floor() {
        let mut ids = IdGenerator::new();
        ids.observe(9_000);
        ids.observe(3_000);
        assert_eq!(ids.last_issued(), Some(9_000));
        assert_eq!(ids.next_id(8_000), Some(9_001));

        ids.reset();
        assert_eq!(ids.last_issued(), None);
        assert_eq!(ids.next_id(8_000), Some(8_000));
    }

    #[test]
    fn test_exhausted_at_max_issues_nothing() {
        let mut ids = IdGenerator::new();
        ids.observe(i64::MAX);
        assert_eq!(ids.next_id(1_000), None);
        assert_eq!(ids.next_id(i64::MAX), None);
        assert_eq!(ids.last_issued(), Some(i64::MAX));
    }
}
