use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// Per-client throttle enforcing minimum spacing between requests.
///
/// The API rejects more than two requests per second, so every call passes
/// through [`RateGate::acquire`] before any network I/O. The lock is held
/// across the sleep: the read-delay-write sequence is one atomic section, and
/// concurrent callers serialize on the gate instead of computing their delay
/// from a stale timestamp. Not a token bucket: bursts are never permitted and
/// idle time grants no credit.
pub(crate) struct RateGate {
    min_interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl RateGate {
    pub(crate) fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: Mutex::new(None),
        }
    }

    /// Block until `min_interval` has elapsed since the previous `acquire`
    /// returned, then record now as the new last-executed timestamp.
    pub(crate) async fn acquire(&self) {
        let mut last = self.last.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}
