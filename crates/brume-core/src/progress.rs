/// Coarse bake-progress reporting. Purely observational; implementations
/// must not affect bake correctness.
pub trait ProgressSink {
    /// `fraction` is in `[0, 1]` and monotonically non-decreasing within
    /// one bake.
    fn report(&self, stage: &str, fraction: f32);
}

/// Discards all progress reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn report(&self, _stage: &str, _fraction: f32) {}
}

/// Forwards milestones to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn report(&self, stage: &str, fraction: f32) {
        log::info!("[bake {:>5.1}%] {stage}", fraction * 100.0);
    }
}
