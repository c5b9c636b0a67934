//! Spinner-based [`ProgressReporter`] for interactive runs.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use namewright_core::application::{ProgressReporter, RenameStage};

/// Shows the running stage on a spinner and leaves one line per finished
/// stage behind.
pub struct SpinnerProgress {
    bar: ProgressBar,
    color: bool,
}

impl SpinnerProgress {
    pub fn new(color: bool) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.blue} {msg}")
                .map(|style| style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "))
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar, color }
    }

    /// Remove the spinner line. Lines printed for finished stages stay.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressReporter for SpinnerProgress {
    fn stage_started(&self, stage: &RenameStage) {
        self.bar.set_message(stage.to_string());
    }

    fn stage_finished(&self, stage: &RenameStage, changed: usize) {
        let line = if self.color {
            format!(
                "{} {} {}",
                "\u{2713}".green().bold(),
                stage,
                format!("({changed} changed)").dimmed()
            )
        } else {
            format!("\u{2713} {stage} ({changed} changed)")
        };
        self.bar.println(line);
    }
}

impl Drop for SpinnerProgress {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
