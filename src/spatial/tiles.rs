//! Tile catalogue and socket inference from example patterns
//!
//! A tile carries one socket list per side. Sockets are opaque tokens: two
//! tiles may sit next to each other in a direction exactly when the socket
//! lists on the facing sides share a token. [`TilesetBuilder`] mints tokens
//! by scanning every adjacent pair in an example grid.

use crate::io::error::{Result, WfcError};
use crate::spatial::position::Position;
use ndarray::Array2;

/// One of the four cardinal neighbour directions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Negative y
    Up,
    /// Positive x
    Right,
    /// Positive y
    Down,
    /// Negative x
    Left,
}

impl Direction {
    /// All directions in socket-side order
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// The side a neighbour in this direction presents back to us
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Offset from a cell to its neighbour in this direction
    pub const fn offset(self) -> Position {
        match self {
            Self::Up => Position::new(0, -1),
            Self::Right => Position::new(1, 0),
            Self::Down => Position::new(0, 1),
            Self::Left => Position::new(-1, 0),
        }
    }
}

/// A catalogue entry: 1-based id plus one socket list per side
#[derive(Clone, Debug)]
pub struct Tile {
    id: u32,
    sockets: [Vec<u32>; 4],
}

impl Tile {
    fn new(id: u32) -> Self {
        Self {
            id,
            sockets: [Vec::new(), Vec::new(), Vec::new(), Vec::new()],
        }
    }

    /// The 1-based catalogue id
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Socket tokens on the given side
    pub fn sockets(&self, side: Direction) -> &[u32] {
        let [up, right, down, left] = &self.sockets;
        match side {
            Direction::Up => up,
            Direction::Right => right,
            Direction::Down => down,
            Direction::Left => left,
        }
    }

    fn push_socket(&mut self, side: Direction, token: u32) {
        let [up, right, down, left] = &mut self.sockets;
        let list = match side {
            Direction::Up => up,
            Direction::Right => right,
            Direction::Down => down,
            Direction::Left => left,
        };
        list.push(token);
    }

    /// Whether `other` may sit adjacent to this tile in `direction`
    ///
    /// True when this tile's socket list on the `direction` side shares a
    /// token with `other`'s list on the opposing side.
    pub fn compatible(&self, other: &Self, direction: Direction) -> bool {
        let mine = self.sockets(direction);
        let theirs = other.sockets(direction.opposite());
        mine.iter().any(|token| theirs.contains(token))
    }
}

/// Ordered, read-only tile catalogue produced by [`TilesetBuilder`]
#[derive(Clone, Debug)]
pub struct Tileset {
    tiles: Vec<Tile>,
}

impl Tileset {
    /// Number of tiles in the catalogue
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalogue holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Look up a tile by its 1-based id; 0 and out-of-range ids yield `None`
    pub fn get(&self, id: u32) -> Option<&Tile> {
        id.checked_sub(1)
            .and_then(|index| self.tiles.get(index as usize))
    }

    /// Iterate over the tiles in id order
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }
}

impl<'a> IntoIterator for &'a Tileset {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Derives tile sockets from an example pattern
///
/// Each time a scanned pair is not yet compatible a fresh token is minted and
/// pushed onto the two facing socket lists. Tokens are never removed or
/// merged, so compatibility can become transitive through shared tokens.
/// Re-running the scan on the same example mints nothing new.
#[derive(Debug)]
pub struct TilesetBuilder {
    tiles: Vec<Tile>,
    next_token: u32,
}

impl TilesetBuilder {
    /// Create a builder for a catalogue of `tile_count` tiles, ids `1..=count`
    pub fn new(tile_count: usize) -> Self {
        let tiles = (1..=tile_count as u32).map(Tile::new).collect();
        Self {
            tiles,
            next_token: 0,
        }
    }

    /// Infer sockets from a rectangular example grid of 1-based tile ids
    ///
    /// Every horizontally and vertically adjacent pair observed in the
    /// example ends up mutually compatible. A catalogue id that is never
    /// adjacent to anything keeps empty socket lists and is incompatible
    /// with everything, itself included; no collapsibility check is made.
    ///
    /// # Errors
    ///
    /// Returns [`WfcError::InvalidPattern`] if the example references an id
    /// outside the catalogue.
    pub fn infer(mut self, example: &Array2<u32>) -> Result<Tileset> {
        let (rows, cols) = example.dim();
        for y in 0..rows {
            for x in 0..cols {
                let centre = self.tile_index(example, (y, x))?;
                if x + 1 < cols {
                    let right = self.tile_index(example, (y, x + 1))?;
                    self.join(centre, Direction::Right, right);
                }
                if y + 1 < rows {
                    let down = self.tile_index(example, (y + 1, x))?;
                    self.join(centre, Direction::Down, down);
                }
            }
        }
        Ok(Tileset { tiles: self.tiles })
    }

    fn tile_index(&self, example: &Array2<u32>, at: (usize, usize)) -> Result<usize> {
        let id = example.get(at).copied().unwrap_or(0);
        match id.checked_sub(1).map(|index| index as usize) {
            Some(index) if index < self.tiles.len() => Ok(index),
            _ => Err(WfcError::InvalidPattern {
                reason: format!(
                    "example references tile id {id} outside the catalogue of {} tiles",
                    self.tiles.len()
                ),
            }),
        }
    }

    /// Mint a shared token unless the pair is already compatible
    fn join(&mut self, centre: usize, direction: Direction, neighbour: usize) {
        let already = match (self.tiles.get(centre), self.tiles.get(neighbour)) {
            (Some(a), Some(b)) => a.compatible(b, direction),
            _ => true,
        };
        if already {
            return;
        }

        let token = self.next_token;
        self.next_token += 1;
        if let Some(tile) = self.tiles.get_mut(centre) {
            tile.push_socket(direction, token);
        }
        if let Some(tile) = self.tiles.get_mut(neighbour) {
            tile.push_socket(direction.opposite(), token);
        }
    }
}
