//! Progress reporter implementation
//!
//! Uses indicatif for a single byte progress bar with throughput and ETA.

use indicatif::{ProgressBar, ProgressBarIter, ProgressStyle};
use std::io::Read;
use std::time::{Duration, Instant};

/// Progress reporter for hashing one byte source
pub struct ProgressReporter {
    bar: ProgressBar,
    start_time: Instant,
    enabled: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter drawing to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{prefix:.bold.dim} [{bar:40.green/white}] {bytes}/{total_bytes} ({bytes_per_sec}, ETA {eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        bar.set_prefix("Hash");

        Self {
            bar,
            start_time: Instant::now(),
            enabled: true,
        }
    }

    /// Create a disabled progress reporter (no output)
    pub fn disabled() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            start_time: Instant::now(),
            enabled: false,
        }
    }

    /// Whether output is drawn
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Start tracking a source of `total_bytes`
    pub fn start(&mut self, total_bytes: u64) {
        self.start_time = Instant::now();
        self.bar.set_length(total_bytes);
        self.bar.set_position(0);
    }

    /// Wrap a reader so every read advances the bar
    pub fn wrap_read<R: Read>(&self, reader: R) -> ProgressBarIter<R> {
        self.bar.wrap_read(reader)
    }

    /// Bytes reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Time since `start`
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}
