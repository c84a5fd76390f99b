//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting for project creation using an indicatif spinner
//! - Silent progress for verbose runs and tests
//! - Styled listings and summaries (see [`display`])
//!
//! All progress reporting goes through the [`Reporter`] trait so operations
//! never print directly.

pub mod display;

use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for long-running operations
pub trait Reporter: Send + Sync {
    /// Start a new step, replacing the current message
    fn step(&mut self, message: &str);

    /// Report a non-fatal problem without stopping
    fn warn(&mut self, message: &str);

    /// Finish successfully
    fn finish(&mut self, message: &str);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Spinner-based reporter for interactive terminals
pub struct ConsoleReporter {
    spinner: ProgressBar,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self { spinner }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn step(&mut self, message: &str) {
        self.spinner.set_message(message.to_string());
    }

    fn warn(&mut self, message: &str) {
        self.spinner.suspend(|| {
            eprintln!("{} {}", Style::new().yellow().bold().apply_to("warning:"), message);
        });
    }

    fn finish(&mut self, message: &str) {
        self.spinner.finish_and_clear();
        println!("{} {}", Style::new().green().bold().apply_to("✓"), message);
    }

    fn abandon(&mut self) {
        self.spinner.abandon();
    }
}

/// Reporter that displays nothing
///
/// Warnings still reach the log.
#[derive(Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn step(&mut self, message: &str) {
        tracing::debug!(step = message, "progress");
    }

    fn warn(&mut self, message: &str) {
        tracing::warn!("{message}");
    }

    fn finish(&mut self, _message: &str) {}

    fn abandon(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_reporter_no_ops() {
        let mut reporter = SilentReporter;
        reporter.step("Composing base template");
        reporter.warn("frontend missing");
        reporter.finish("done");
        reporter.abandon();
    }

    #[test]
    fn test_console_reporter_tracks_step() {
        let mut reporter = ConsoleReporter::new();
        reporter.step("Rendering project");
        assert_eq!(reporter.spinner.message(), "Rendering project");
        reporter.abandon();
        assert!(reporter.spinner.is_finished());
    }
}
