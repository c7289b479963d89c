//! Observation seam for progressive rendering

use crate::spatial::grid::Grid;

/// Receives a synchronous notification after every collapse
///
/// Called inline between engine mutations, on the engine's thread, after each
/// hard or soft collapse. Implementations see the full current grid state and
/// must return before generation proceeds. Headless runs attach no observer
/// and pay nothing.
pub trait StepObserver {
    /// One cell has just been assigned; `grid` is the current state
    fn on_collapse(&mut self, grid: &Grid);
}
