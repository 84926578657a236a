//! Progress display for long Monte Carlo simulations

use crate::io::configuration::{MAX_UNTRACKED_SAMPLES, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Sampling [{{bar:{width}.cyan/blue}}] {{pos}}/{{len}}",
            width = PROGRESS_BAR_WIDTH
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar for one simulation, hidden for quiet or short runs
pub struct SimulationProgress {
    bar: Option<ProgressBar>,
}

impl SimulationProgress {
    /// Create a tracker for `samples` draws
    ///
    /// No bar is drawn when `quiet` is set or the run is short enough to
    /// finish without one.
    pub fn new(samples: usize, quiet: bool) -> Self {
        let bar = (!quiet && samples > MAX_UNTRACKED_SAMPLES).then(|| {
            let bar = ProgressBar::new(samples as u64);
            bar.set_style(PROGRESS_STYLE.clone());
            bar
        });

        Self { bar }
    }

    /// Whether a bar is being drawn
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Record the number of completed draws
    pub fn update(&self, completed: usize) {
        if let Some(bar) = &self.bar {
            bar.set_position(completed as u64);
        }
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
