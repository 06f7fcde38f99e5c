/// Optional counters for monitoring a partition buffer.
///
/// Only updated when `Config::enable_metrics` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    pub enqueued: u64,
    pub dequeued: u64,
    pub deleted: u64,
    pub rejected: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements that entered the queue and have not left through `dequeue` or `delete`.
    ///
    /// Elements dropped by `clear` are still counted here.
    pub fn outstanding(&self) -> u64 {
        self.enqueued
            .saturating_sub(self.dequeued)
            .saturating_sub(self.deleted)
    }
}
