//! Generation engine: hard and soft collapse over a LIFO propagation stack

use crate::algorithm::observer::StepObserver;
use crate::algorithm::possibility::possibilities;
use crate::io::error::{Result, WfcError};
use crate::spatial::grid::Grid;
use crate::spatial::position::Position;
use crate::spatial::tiles::{Direction, Tileset};
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Generation strategy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Sweep until every cell is collapsed, reseeding each sweep at the
    /// unassigned cell with the fewest remaining possibilities
    #[default]
    Robust,
    /// Single flood from one random seed, hard-collapsing every reached cell
    ///
    /// Terminates after one stack drain, with no entropy re-scan. Without a
    /// tile compatible with everything the random picks contradict almost
    /// surely; that trade-off is part of the mode, not a defect.
    Fast,
}

/// Wave function collapse engine
///
/// Owns the output grid for the duration of a run, borrows the read-only
/// tileset, and threads every random choice (seed cell, hard-collapse pick,
/// neighbour shuffle, tie break) through one injected rng so runs are
/// reproducible under a fixed seed. Single-threaded throughout; the optional
/// observer runs inline between mutations.
pub struct Engine<'a> {
    tileset: &'a Tileset,
    grid: Grid,
    rng: StdRng,
    stack: Vec<Position>,
    observer: Option<&'a mut dyn StepObserver>,
}

impl<'a> Engine<'a> {
    /// Create an engine over an empty `width` x `height` grid
    pub fn new(tileset: &'a Tileset, width: usize, height: usize, rng: StdRng) -> Self {
        Self {
            tileset,
            grid: Grid::new(width, height),
            rng,
            stack: Vec::new(),
            observer: None,
        }
    }

    /// Attach a collapse observer for progressive rendering
    pub fn set_observer(&mut self, observer: &'a mut dyn StepObserver) {
        self.observer = Some(observer);
    }

    /// The grid in its current state, partial if generation failed
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the engine, releasing the grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Run generation to completion in the given mode
    ///
    /// Robust mode returns `Ok` only with a fully collapsed grid; fast mode
    /// returns `Ok` once its single flood ends, collapsed or not.
    ///
    /// # Errors
    ///
    /// [`WfcError::Contradiction`] the instant any cell runs out of legal
    /// tiles. The grid keeps whatever partial assignment existed at that
    /// moment for diagnostics.
    pub fn generate(&mut self, mode: Mode) -> Result<()> {
        if self.grid.width() == 0 || self.grid.height() == 0 {
            return Ok(());
        }

        let mut seed = self.random_position();
        loop {
            self.stack.clear();
            self.propagate(seed, true)?;
            while let Some(pos) = self.stack.pop() {
                self.propagate(pos, mode == Mode::Fast)?;
            }

            if mode == Mode::Fast {
                return Ok(());
            }

            self.grid.reset_visited();
            match self.lowest_entropy()? {
                Some(next) => seed = next,
                None => return Ok(()),
            }
        }
    }

    /// Handle one stack position
    ///
    /// Skips collapsed, out-of-bounds, and already-visited positions. A hard
    /// step picks uniformly at random among the candidates; a soft step only
    /// assigns when exactly one candidate remains. Either way the four
    /// neighbours are pushed in shuffled order.
    fn propagate(&mut self, pos: Position, hard: bool) -> Result<()> {
        if self.grid.tile(pos) != 0 || !self.grid.in_bounds(pos) || self.grid.visited(pos) {
            return Ok(());
        }
        self.grid.set_visited(pos, true);

        let candidates = possibilities(self.tileset, &self.grid, pos).to_vec();
        if candidates.is_empty() {
            return Err(WfcError::Contradiction { position: pos });
        }

        let choice = if hard {
            candidates.choose(&mut self.rng).copied()
        } else {
            match candidates.as_slice() {
                [only] => Some(*only),
                _ => None,
            }
        };
        if let Some(id) = choice {
            self.grid.set_tile(pos, id);
            if let Some(observer) = &mut self.observer {
                observer.on_collapse(&self.grid);
            }
        }

        let mut directions = Direction::ALL;
        directions.shuffle(&mut self.rng);
        for direction in directions {
            self.stack.push(pos + direction.offset());
        }
        Ok(())
    }

    /// Scan for the unassigned cell with the fewest remaining candidates
    ///
    /// Ties are broken uniformly at random. `None` means no unassigned cell
    /// remains and generation is complete.
    ///
    /// # Errors
    ///
    /// [`WfcError::Contradiction`] if any unassigned cell has zero
    /// possibilities.
    fn lowest_entropy(&mut self) -> Result<Option<Position>> {
        let mut best: Option<(usize, Vec<Position>)> = None;
        for pos in self.grid.positions() {
            if self.grid.tile(pos) != 0 {
                continue;
            }
            let count = possibilities(self.tileset, &self.grid, pos).count();
            if count == 0 {
                return Err(WfcError::Contradiction { position: pos });
            }
            if best.as_ref().is_none_or(|(min, _)| count < *min) {
                best = Some((count, vec![pos]));
            } else if let Some((min, ties)) = &mut best {
                if count == *min {
                    ties.push(pos);
                }
            }
        }

        match best {
            Some((_, ties)) => Ok(ties.choose(&mut self.rng).copied()),
            None => Ok(None),
        }
    }

    fn random_position(&mut self) -> Position {
        let x = self.rng.random_range(0..self.grid.width()) as i32;
        let y = self.rng.random_range(0..self.grid.height()) as i32;
        Position::new(x, y)
    }
}
