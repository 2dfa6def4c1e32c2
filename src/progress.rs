// src/progress.rs
/// Lightweight progress reporting for the collection loop.
/// Frontends (CLI/tests) implement this to surface status to users.
pub trait Progress {
    /// Called once at the start with the number of items being sought.
    fn begin(&mut self, _target: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each page extraction with the running item count
    /// (capped at the target).
    fn page_done(&mut self, _page: usize, _collected: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
