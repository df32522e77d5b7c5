use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 80;

/// Spinner shown while a batch of files is parsed. Cloning shares the same bar, so worker
/// threads can report completions directly.
#[derive(Clone)]
pub struct FileProgress {
    pb: ProgressBar,
}

impl FileProgress {
    pub fn new(total_files: u64) -> Self {
        Self::with_draw_target(total_files, ProgressDrawTarget::stderr())
    }

    fn with_draw_target(total_files: u64, target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::with_draw_target(Some(total_files), target)
            .with_style(Self::spinner_style())
            .with_message("Reading structures...");
        pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Self { pb }
    }

    pub fn file_done(&self, name: &str) {
        self.pb.inc(1);
        self.pb.set_message(name.to_string());
    }

    pub fn finish(&self) {
        self.pb.disable_steady_tick();
        self.pb.finish_and_clear();
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} [{pos}/{len}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}
