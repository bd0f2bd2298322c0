// File: crates/hub-page/src/ready.rs
// Summary: Bounded wait-for-condition gate used before page bootstrap.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    TimedOut,
}

/// Polls a host-environment condition until it holds or a wait budget is
/// spent. Defaults mirror the page bootstrap: check every 80 ms for up to 3 s.
#[derive(Clone, Copy, Debug)]
pub struct ReadinessGate {
    pub interval: Duration,
    pub max_wait: Duration,
}

impl Default for ReadinessGate {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(80),
            max_wait: Duration::from_secs(3),
        }
    }
}

impl ReadinessGate {
    pub const fn new(interval: Duration, max_wait: Duration) -> Self {
        Self { interval, max_wait }
    }

    /// Poll `condition` until it returns true or the budget runs out. The
    /// condition is always checked at least once, so a zero budget still
    /// passes an already-ready environment.
    pub fn wait_until<F: FnMut() -> bool>(&self, mut condition: F) -> Readiness {
        let start = Instant::now();
        loop {
            if condition() {
                return Readiness::Ready;
            }
            if start.elapsed() >= self.max_wait {
                tracing::warn!(
                    max_wait_ms = self.max_wait.as_millis() as u64,
                    "environment not ready within the wait budget"
                );
                return Readiness::TimedOut;
            }
            std::thread::sleep(self.interval);
        }
    }
}
