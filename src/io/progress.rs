//! Progress display for batch map generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Maps: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many seeds of a batch have been handled
pub struct ProgressManager {
    bar: ProgressBar,
    generated: usize,
    skipped: usize,
    failed: usize,
}

impl ProgressManager {
    /// Create a progress bar for `total` seeds drawn to stderr
    pub fn new(total: usize) -> Self {
        Self::with_target(total, ProgressDrawTarget::stderr())
    }

    /// Create a progress bar that draws nowhere
    pub fn hidden(total: usize) -> Self {
        Self::with_target(total, ProgressDrawTarget::hidden())
    }

    fn with_target(total: usize, target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total as u64), target);
        bar.set_style(BATCH_STYLE.clone());

        Self {
            bar,
            generated: 0,
            skipped: 0,
            failed: 0,
        }
    }

    /// Show which seed is being generated
    pub fn start_seed(&self, seed: u64) {
        self.bar.set_message(format!("seed {seed}"));
    }

    /// Record a seed whose map was written
    pub fn complete_seed(&mut self) {
        self.generated += 1;
        self.bar.inc(1);
    }

    /// Record a seed whose outputs already existed
    pub fn skip_seed(&mut self) {
        self.skipped += 1;
        self.bar.inc(1);
    }

    /// Record a seed that could not produce a map
    pub fn fail_seed(&mut self) {
        self.failed += 1;
        self.bar.inc(1);
    }

    /// Seeds handled so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// `(generated, skipped, failed)` counts
    pub const fn totals(&self) -> (usize, usize, usize) {
        (self.generated, self.skipped, self.failed)
    }

    /// Close the bar with a summary message
    pub fn finish(&self) {
        self.bar.finish_with_message(format!(
            "{} generated, {} skipped, {} failed",
            self.generated, self.skipped, self.failed
        ));
    }
}
