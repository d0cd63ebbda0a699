use crate::error::FetchError;
use log::debug;

/// Logging facade for synchronization events. There is no operator-
/// visible error channel; abandoned calls only reach the debug log.
#[derive(Debug, Default)]
pub struct SyncLog;

impl SyncLog {
    pub fn new() -> Self {
        Self
    }

    pub fn poll_applied(&self, frame_index: u64, total_targets: usize) {
        debug!("snapshot frame {frame_index} applied ({total_targets} targets)");
    }

    pub fn poll_failed(&self, error: &FetchError) {
        debug!("poll abandoned: {error}");
    }

    pub fn poll_discarded(&self, frame_index: u64) {
        debug!("late snapshot frame {frame_index} discarded after teardown");
    }

    pub fn push_scheduled(&self, track_count: usize) {
        debug!("mirroring {track_count} custom tracks");
    }
}
