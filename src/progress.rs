// src/progress.rs
/// Progress reporting for the per-team fetch sequence.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once with the number of fetches about to run.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one resource has been fetched and extracted.
    fn item_done(&mut self, _resource: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Writes one line per step to stderr.
pub struct StderrProgress {
    done: usize,
    total: usize,
}

impl StderrProgress {
    pub fn new() -> Self { Self { done: 0, total: 0 } }
}

impl Default for StderrProgress {
    fn default() -> Self { Self::new() }
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn item_done(&mut self, resource: &str) {
        self.done += 1;
        eprintln!("Fetched {resource} ({}/{})", self.done, self.total);
    }
}
