//! Deferred stage transitions.
//!
//! A presentation beat plays out between a recorded answer and the next
//! question being shown. The core expresses that wait as a
//! pending transition plus a `tick()` the host calls -- no internal threads,
//! same discipline as a wall-clock timer engine. Tests drive `is_due` with
//! explicit timestamps.

use serde::{Deserialize, Serialize};

/// A scheduled stage advance. Dropping it abandons the transition; the
/// answer it follows is already stored, so nothing needs rolling back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAdvance {
    fire_at_epoch_ms: u64,
}

impl PendingAdvance {
    pub fn new(now_ms: u64, delay_ms: u64) -> Self {
        Self {
            fire_at_epoch_ms: now_ms.saturating_add(delay_ms),
        }
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.fire_at_epoch_ms
    }

    pub fn fire_at_epoch_ms(&self) -> u64 {
        self.fire_at_epoch_ms
    }
}

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_after_the_delay() {
        let pending = PendingAdvance::new(1_000, 1_800);
        assert!(!pending.is_due(1_000));
        assert!(!pending.is_due(2_799));
        assert!(pending.is_due(2_800));
        assert!(pending.is_due(10_000));
    }

    #[test]
    fn zero_delay_is_immediately_due() {
        let pending = PendingAdvance::new(500, 0);
        assert!(pending.is_due(500));
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let pending = PendingAdvance::new(u64::MAX, 100);
        assert_eq!(pending.fire_at_epoch_ms(), u64::MAX);
    }
}
