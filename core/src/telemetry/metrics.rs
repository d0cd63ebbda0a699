use std::sync::Mutex;

/// Counters for poll and mirror activity.
#[derive(Debug, Default)]
pub struct SyncMetrics {
    inner: Mutex<Counters>,
}

#[derive(Debug, Default, Clone, Copy)]
struct Counters {
    applied: usize,
    failed: usize,
    pushes: usize,
}

impl SyncMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_applied(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.applied += 1;
        }
    }

    pub fn record_failed(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.failed += 1;
        }
    }

    pub fn record_push(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.pushes += 1;
        }
    }

    /// (applied polls, failed polls, track pushes)
    pub fn counts(&self) -> (usize, usize, usize) {
        self.inner
            .lock()
            .map(|counters| (counters.applied, counters.failed, counters.pushes))
            .unwrap_or((0, 0, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_track_each_event_kind() {
        let metrics = SyncMetrics::new();
        metrics.record_applied();
        metrics.record_applied();
        metrics.record_failed();
        metrics.record_push();
        assert_eq!(metrics.counts(), (2, 1, 1));
    }
}
