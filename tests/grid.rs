//! Boundary semantics of the output grid accessors

use wavetile::spatial::grid::Grid;
use wavetile::spatial::position::Position;

#[test]
fn test_bounds_checks() {
    let grid = Grid::new(4, 3);
    assert!(grid.in_bounds(Position::new(0, 0)));
    assert!(grid.in_bounds(Position::new(3, 2)));
    assert!(!grid.in_bounds(Position::new(4, 0)));
    assert!(!grid.in_bounds(Position::new(0, 3)));
    assert!(!grid.in_bounds(Position::new(-1, 0)));
    assert!(!grid.in_bounds(Position::new(0, -1)));
}

// Out-of-bounds positions read as the neutral boundary: no tile, already
// visited, so propagation never crosses the edge
#[test]
fn test_out_of_bounds_reads_are_boundary() {
    let grid = Grid::new(2, 2);
    assert_eq!(grid.tile(Position::new(-1, 0)), 0);
    assert_eq!(grid.tile(Position::new(0, 5)), 0);
    assert!(grid.visited(Position::new(-1, 0)));
    assert!(grid.visited(Position::new(2, 0)));
    assert!(!grid.visited(Position::new(1, 1)));
}

#[test]
fn test_out_of_bounds_writes_are_ignored() {
    let mut grid = Grid::new(2, 2);
    grid.set_tile(Position::new(-1, -1), 7);
    grid.set_visited(Position::new(5, 5), true);
    for pos in grid.positions() {
        assert_eq!(grid.tile(pos), 0);
        assert!(!grid.visited(pos));
    }
}

#[test]
fn test_tile_assignment_round_trip() {
    let mut grid = Grid::new(3, 3);
    let pos = Position::new(1, 2);
    assert_eq!(grid.tile(pos), 0);
    grid.set_tile(pos, 4);
    assert_eq!(grid.tile(pos), 4);
    assert_eq!(grid.tile(Position::new(2, 1)), 0);
}

#[test]
fn test_reset_visited_clears_every_flag() {
    let mut grid = Grid::new(3, 2);
    for pos in grid.positions().collect::<Vec<_>>() {
        grid.set_visited(pos, true);
    }
    grid.reset_visited();
    for pos in grid.positions() {
        assert!(!grid.visited(pos));
    }
}

#[test]
fn test_positions_are_row_major() {
    let grid = Grid::new(2, 2);
    let order: Vec<Position> = grid.positions().collect();
    assert_eq!(
        order,
        vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(0, 1),
            Position::new(1, 1),
        ]
    );
}

#[test]
fn test_is_fully_collapsed() {
    let mut grid = Grid::new(2, 1);
    assert!(!grid.is_fully_collapsed());
    grid.set_tile(Position::new(0, 0), 1);
    assert!(!grid.is_fully_collapsed());
    grid.set_tile(Position::new(1, 0), 2);
    assert!(grid.is_fully_collapsed());
}
