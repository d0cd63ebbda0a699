/// Optimistic motion flag: flipped locally first, reported to the server
/// without waiting for an acknowledgement, and never rolled back. The
/// authoritative flag in the next snapshot may silently override the
/// optimistic value.
#[derive(Debug, Default)]
pub struct MotionSwitch {
    enabled: bool,
}

impl MotionSwitch {
    pub fn new() -> Self {
        Self { enabled: false }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Flips locally and returns the value to report.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Overwrite from an authoritative source (config seed or snapshot).
    pub fn set(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
