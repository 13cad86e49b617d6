//! Identifier assignment for newly saved entries.

use chrono::Utc;

/// Produces identifiers for entries saved with the sentinel id.
pub trait IdSource {
    fn next_id(&mut self) -> u64;
}

/// Milliseconds since the Unix epoch at save time.
///
/// Two saves within the same millisecond get the same id. Nothing guards
/// against this; see [`crate::logs::SaveOutcome::Overwrote`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampIds;

impl IdSource for TimestampIds {
    fn next_id(&mut self) -> u64 {
        // Never hand out the sentinel, even with a clock set before 1970.
        Utc::now().timestamp_millis().max(1) as u64
    }
}

impl<F: FnMut() -> u64> IdSource for F {
    fn next_id(&mut self) -> u64 {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::SENTINEL_ID;

    #[test]
    fn timestamp_ids_are_recent_and_non_sentinel() {
        let before = Utc::now().timestamp_millis() as u64;
        let id = TimestampIds.next_id();
        assert_ne!(id, SENTINEL_ID);
        assert!(id >= before);
    }

    #[test]
    fn closures_are_id_sources() {
        let mut n: u64 = 10;
        let mut source = move || {
            n += 1;
            n
        };
        assert_eq!(source.next_id(), 11);
        assert_eq!(source.next_id(), 12);
    }
}
