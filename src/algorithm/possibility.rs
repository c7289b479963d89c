//! Per-cell possibility computation against assigned neighbours

use crate::algorithm::candidates::CandidateSet;
use crate::spatial::grid::Grid;
use crate::spatial::position::Position;
use crate::spatial::tiles::{Direction, Tileset};

/// Compute the tile ids that can legally occupy `pos`
///
/// An already-assigned cell has no possibilities. Unassigned and boundary
/// neighbours impose no constraint; each assigned neighbour keeps only the
/// candidates whose socket list on the facing side shares a token with the
/// neighbour's opposing list. A candidate falls out as soon as one
/// directional test fails. An empty result is a contradiction at `pos`.
pub fn possibilities(tileset: &Tileset, grid: &Grid, pos: Position) -> CandidateSet {
    if grid.tile(pos) != 0 {
        return CandidateSet::none(tileset.len());
    }

    let mut candidates = CandidateSet::all(tileset.len());
    for direction in Direction::ALL {
        let neighbour_id = grid.tile(pos + direction.offset());
        let Some(neighbour) = tileset.get(neighbour_id) else {
            continue;
        };
        for tile in tileset {
            if candidates.contains(tile.id()) && !tile.compatible(neighbour, direction) {
                candidates.eliminate(tile.id());
            }
        }
    }
    candidates
}
