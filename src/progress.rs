//! Progress bar display for equation rendering

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for one file's equation batch
pub struct ProgressDisplay {
    equation_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total equation count
    pub fn new(total_equations: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let equation_pb = ProgressBar::new(total_equations);
        equation_pb.set_style(style);

        Self { equation_pb }
    }

    /// Update to show the item currently being rendered
    pub fn update(&self, stem: &str, kind: &str) {
        self.equation_pb.set_message(format!("{stem} ({kind})"));
    }

    /// Increment equation progress
    pub fn inc(&self) {
        self.equation_pb.inc(1);
    }

    /// Print a line above the bar without breaking it
    pub fn println(&self, message: &str) {
        self.equation_pb.println(message);
    }

    /// Finish the bar
    pub fn finish(&self) {
        self.equation_pb.finish_and_clear();
    }
}
