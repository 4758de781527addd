//! UI/Progress presentation layer
//!
//! This module handles:
//! - Status lines for each deployment step
//! - An indicatif progress bar counting steps (only drawn on a terminal)
//! - Per-file detail lines in verbose mode
//! - Silent reporting for `--quiet`
//!
//! All status output goes through the [`Reporter`] trait so the pipeline does
//! not care which output mode was selected.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Reporter for deployment progress
pub trait Reporter {
    /// Set the number of steps the run will report
    fn start(&mut self, total_steps: u64);

    /// Announce and count a pipeline step
    fn step(&mut self, message: &str);

    /// Print a status line that is not a step of its own
    fn info(&mut self, message: &str);

    /// Print a detail line (verbose mode only)
    fn detail(&mut self, message: &str);

    /// Print a warning
    fn warn(&mut self, message: &str);

    /// Finish successfully with a summary line
    fn finish(&mut self, summary: &str);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Console reporter: status lines on stdout, progress bar on stderr
pub struct ConsoleReporter {
    bar: ProgressBar,
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bar = ProgressBar::new(0);
        bar.set_style(style);

        Self { bar, verbose }
    }

    fn print(&self, line: &str) {
        self.bar.suspend(|| println!("{line}"));
    }
}

impl Reporter for ConsoleReporter {
    fn start(&mut self, total_steps: u64) {
        self.bar.set_length(total_steps);
    }

    fn step(&mut self, message: &str) {
        self.print(message);
        self.bar.set_message(message.trim_end_matches('.').to_string());
        self.bar.inc(1);
    }

    fn info(&mut self, message: &str) {
        self.print(message);
    }

    fn detail(&mut self, message: &str) {
        if self.verbose {
            let line = format!("  {}", Style::new().dim().apply_to(message));
            self.print(&line);
        }
    }

    fn warn(&mut self, message: &str) {
        let line = format!("{} {}", Style::new().yellow().bold().apply_to("Warning:"), message);
        self.bar.suspend(|| eprintln!("{line}"));
    }

    fn finish(&mut self, summary: &str) {
        self.bar.finish_and_clear();
        println!("{}", Style::new().green().bold().apply_to(summary));
    }

    fn abandon(&mut self) {
        self.bar.abandon();
    }
}

/// Quiet reporter for `--quiet`
///
/// Drops all status output; warnings still go to stderr.
#[derive(Default)]
pub struct QuietReporter;

impl Reporter for QuietReporter {
    fn start(&mut self, _total_steps: u64) {}

    fn step(&mut self, _message: &str) {}

    fn info(&mut self, _message: &str) {}

    fn detail(&mut self, _message: &str) {}

    fn warn(&mut self, message: &str) {
        eprintln!("Warning: {message}");
    }

    fn finish(&mut self, _summary: &str) {}

    fn abandon(&mut self) {}
}

/// Build the reporter for the selected output mode
pub fn reporter(quiet: bool, verbose: bool) -> Box<dyn Reporter> {
    if quiet {
        Box::new(QuietReporter)
    } else {
        Box::new(ConsoleReporter::new(verbose))
    }
}
