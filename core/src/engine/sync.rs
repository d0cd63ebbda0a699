use crate::engine::motion::MotionSwitch;
use crate::error::FetchError;
use crate::model::Snapshot;
use crate::telemetry::{SyncLog, SyncMetrics};
use std::time::SystemTime;

/// Applies poll results to the local view.
///
/// The engine is timer-agnostic: the caller owns the 200 ms cadence and
/// feeds each completion in arrival order. In-flight requests are never
/// cancelled and may complete out of send order; `frame_index` is
/// advisory, so every successful response is applied as-is.
#[derive(Debug, Default)]
pub struct SyncEngine {
    snapshot: Option<Snapshot>,
    motion: MotionSwitch,
    last_updated: Option<SystemTime>,
    torn_down: bool,
    log: SyncLog,
    metrics: SyncMetrics,
}

impl SyncEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the motion flag from the one-shot config load.
    pub fn seed_motion(&mut self, enabled: bool) {
        self.motion.set(enabled);
    }

    /// Wholesale replacement of the stored snapshot: re-derives the
    /// motion flag and stamps the wall-clock application time. Late
    /// responses arriving after teardown are discarded untouched.
    pub fn apply(&mut self, snapshot: Snapshot) {
        if self.torn_down {
            self.log.poll_discarded(snapshot.frame_index);
            return;
        }
        self.log
            .poll_applied(snapshot.frame_index, snapshot.total_targets());
        self.motion.set(snapshot.motion_enabled);
        self.snapshot = Some(snapshot);
        self.last_updated = Some(SystemTime::now());
        self.metrics.record_applied();
    }

    /// A failed poll retains the previous snapshot; nothing is surfaced
    /// to the operator and the next tick retries on schedule.
    pub fn fail(&mut self, error: &FetchError) {
        self.log.poll_failed(error);
        self.metrics.record_failed();
    }

    /// Optimistic flip; returns the value to report to the server. The
    /// next authoritative snapshot may override it.
    pub fn toggle_motion(&mut self) -> bool {
        self.motion.toggle()
    }

    /// Idempotent: the first call stops applying polls, later calls do
    /// nothing.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn motion_enabled(&self) -> bool {
        self.motion.enabled()
    }

    pub fn last_updated(&self) -> Option<SystemTime> {
        self.last_updated
    }

    /// Simulated plus server-echoed targets; zero before the first poll.
    pub fn total_targets(&self) -> usize {
        self.snapshot
            .as_ref()
            .map(Snapshot::total_targets)
            .unwrap_or(0)
    }

    pub fn metrics(&self) -> &SyncMetrics {
        &self.metrics
    }
}
