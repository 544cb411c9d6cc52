//! Fixed-period schedule driven by an external clock.
//!
//! The schedule never reads the time itself. The browser feeds it
//! `Date.now()` from a timer callback, tests feed it whatever virtual time they
//! like.

/// Ticks run in one catch-up burst at most; older missed ticks are dropped.
pub const MAX_CATCH_UP: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSchedule {
    period_ms: u64,
    next_due_ms: Option<u64>,
}

impl IntervalSchedule {
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            next_due_ms: None,
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Start counting periods from `now_ms`.
    pub fn arm(&mut self, now_ms: u64) {
        self.next_due_ms = Some(now_ms + self.period_ms);
    }

    pub fn is_armed(&self) -> bool {
        self.next_due_ms.is_some()
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        self.next_due_ms
    }

    /// Number of ticks that have come due by `now_ms`, capped at
    /// [`MAX_CATCH_UP`]. Consumes them.
    pub fn take_due(&mut self, now_ms: u64) -> u32 {
        let Some(mut next) = self.next_due_ms else {
            return 0;
        };

        let mut due = 0;
        while next <= now_ms {
            due += 1;
            next += self.period_ms;
        }
        if due > MAX_CATCH_UP {
            log::debug!("Dropping {} missed ticks", due - MAX_CATCH_UP);
            due = MAX_CATCH_UP;
        }

        self.next_due_ms = Some(next);
        due
    }
}
