//! Output grid state and boundary-tolerant cell accessors

use crate::spatial::position::Position;
use ndarray::Array2;

/// One output cell: assigned tile id plus the per-sweep visit flag
#[derive(Clone, Copy, Debug, Default)]
pub struct Cell {
    /// Assigned 1-based tile id, 0 while uncollapsed
    pub id: u32,
    /// Transient flag marking the cell as handled during the current sweep
    pub visited: bool,
}

/// Fixed-size 2-D grid of cells, row-major
///
/// Out-of-bounds reads behave as a neutral boundary: [`Grid::tile`] reports 0
/// (no constraint) and [`Grid::visited`] reports true so propagation stops at
/// the edge. Out-of-bounds writes are defined no-ops, never a fault.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Array2<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create an empty grid with every cell uncollapsed
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::default((height, width)),
            width,
            height,
        }
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether the position addresses a real cell
    pub const fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    fn cell(&self, pos: Position) -> Option<&Cell> {
        if self.in_bounds(pos) {
            self.cells.get((pos.y as usize, pos.x as usize))
        } else {
            None
        }
    }

    fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        if self.in_bounds(pos) {
            self.cells.get_mut((pos.y as usize, pos.x as usize))
        } else {
            None
        }
    }

    /// Tile id at `pos`, 0 when uncollapsed or out of bounds
    pub fn tile(&self, pos: Position) -> u32 {
        self.cell(pos).map_or(0, |cell| cell.id)
    }

    /// Assign a tile id; ignored out of bounds
    pub fn set_tile(&mut self, pos: Position, id: u32) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.id = id;
        }
    }

    /// Visit flag at `pos`, true out of bounds so sweeps stop at the edge
    pub fn visited(&self, pos: Position) -> bool {
        self.cell(pos).is_none_or(|cell| cell.visited)
    }

    /// Set the visit flag; ignored out of bounds
    pub fn set_visited(&mut self, pos: Position, state: bool) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.visited = state;
        }
    }

    /// Clear every visit flag ahead of the next sweep
    pub fn reset_visited(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
        }
    }

    /// Row-major iterator over all in-bounds positions
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height)
            .flat_map(move |y| (0..width).map(move |x| Position::new(x as i32, y as i32)))
    }

    /// Whether every cell holds an assigned tile
    pub fn is_fully_collapsed(&self) -> bool {
        self.cells.iter().all(|cell| cell.id != 0)
    }
}
