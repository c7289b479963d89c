//! Collapse progress reporting for non-animated runs

use crate::algorithm::observer::StepObserver;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::spatial::grid::Grid;
use indicatif::{ProgressBar, ProgressStyle};

/// Step observer advancing an indicatif bar by one cell per collapse
pub struct ProgressObserver {
    bar: ProgressBar,
}

impl ProgressObserver {
    /// Create a bar sized for a `width` x `height` grid
    pub fn new(width: usize, height: usize) -> Self {
        let bar = ProgressBar::new((width * height) as u64);
        let template = format!("{{bar:{PROGRESS_BAR_WIDTH}}} {{pos}}/{{len}} cells");
        if let Ok(style) = ProgressStyle::with_template(&template) {
            bar.set_style(style);
        }
        Self { bar }
    }

    /// Clear the bar once generation ends
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl StepObserver for ProgressObserver {
    fn on_collapse(&mut self, _grid: &Grid) {
        self.bar.inc(1);
    }
}
