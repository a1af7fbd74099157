/// The single autoplay timer owned by a carousel.
///
/// There is exactly one slot: arming replaces whatever was there, so two
/// deadlines can never be pending at once.
#[derive(Debug, Clone, Default)]
pub struct AutoplayTimer {
    due_ms: Option<u64>,
    arms: u64,
}

impl AutoplayTimer {
    /// Clears any pending deadline and sets a new one `interval_ms` from now.
    pub fn arm(&mut self, now_ms: u64, interval_ms: u64) {
        self.clear();
        self.due_ms = Some(now_ms.saturating_add(interval_ms));
        self.arms += 1;
    }

    pub fn clear(&mut self) {
        self.due_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.due_ms.is_some()
    }

    pub fn due_ms(&self) -> Option<u64> {
        self.due_ms
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        self.due_ms.is_some_and(|due| now_ms >= due)
    }

    /// Total number of times the timer has been armed.
    pub fn arm_count(&self) -> u64 {
        self.arms
    }
}
