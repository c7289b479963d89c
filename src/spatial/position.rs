//! Integer grid coordinates

use std::ops::Add;

/// 2-D integer coordinate used for all grid addressing
///
/// Signed so neighbour offsets can step past the grid edge; the grid treats
/// such positions as boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column index, increasing rightward
    pub x: i32,
    /// Row index, increasing downward
    pub y: i32,
}

impl Position {
    /// Create a position from column and row indices
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}
