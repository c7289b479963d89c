//! Terminal rendering and per-step animation

use crate::algorithm::observer::StepObserver;
use crate::io::configuration::{ANSI_CLEAR, DEFAULT_FRAME_DELAY_MS, EMPTY_CELL_GLYPH};
use crate::spatial::grid::Grid;
use crate::spatial::position::Position;
use std::time::Duration;

/// Prints a grid as rows of space-separated tile labels
pub struct Renderer {
    labels: Vec<String>,
}

impl Renderer {
    /// Create a renderer with one label per tile id
    pub const fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Label for an assigned id; placeholder for 0 and unknown ids
    fn glyph(&self, id: u32) -> &str {
        id.checked_sub(1)
            .and_then(|index| self.labels.get(index as usize))
            .map_or(EMPTY_CELL_GLYPH, String::as_str)
    }

    /// Print the grid to stdout, one row per line
    // Writing to the terminal is this function's purpose
    #[allow(clippy::print_stdout)]
    pub fn print(&self, grid: &Grid) {
        for y in 0..grid.height() {
            let row: Vec<&str> = (0..grid.width())
                .map(|x| self.glyph(grid.tile(Position::new(x as i32, y as i32))))
                .collect();
            println!("{}", row.join(" "));
        }
    }
}

/// Step observer that repaints the terminal after every collapse
pub struct AnimatedRenderer {
    renderer: Renderer,
    frame_delay: Duration,
}

impl AnimatedRenderer {
    /// Create an animated renderer with the given frame delay
    pub const fn new(labels: Vec<String>, frame_delay: Duration) -> Self {
        Self {
            renderer: Renderer::new(labels),
            frame_delay,
        }
    }

    /// Animated renderer with the default frame delay
    pub const fn with_default_delay(labels: Vec<String>) -> Self {
        Self::new(labels, Duration::from_millis(DEFAULT_FRAME_DELAY_MS))
    }
}

impl StepObserver for AnimatedRenderer {
    // Writing to the terminal is this impl's purpose
    #[allow(clippy::print_stdout)]
    fn on_collapse(&mut self, grid: &Grid) {
        println!("{ANSI_CLEAR}");
        self.renderer.print(grid);
        std::thread::sleep(self.frame_delay);
    }
}
