//! Socket inference from example patterns

use ndarray::{Array2, array};
use wavetile::WfcError;
use wavetile::spatial::tiles::{Direction, Tile, Tileset, TilesetBuilder};

fn build(tile_count: usize, example: &Array2<u32>) -> Tileset {
    match TilesetBuilder::new(tile_count).infer(example) {
        Ok(tileset) => tileset,
        Err(error) => unreachable!("builder rejected a valid example: {error}"),
    }
}

fn tile(tileset: &Tileset, id: u32) -> &Tile {
    match tileset.get(id) {
        Some(tile) => tile,
        None => unreachable!("missing tile {id}"),
    }
}

#[test]
fn test_single_pair_mints_one_shared_token() {
    let tileset = build(2, &array![[1_u32, 2]]);
    let one = tile(&tileset, 1);
    let two = tile(&tileset, 2);

    assert_eq!(one.sockets(Direction::Right).len(), 1);
    assert_eq!(one.sockets(Direction::Right), two.sockets(Direction::Left));

    assert!(one.sockets(Direction::Up).is_empty());
    assert!(one.sockets(Direction::Down).is_empty());
    assert!(one.sockets(Direction::Left).is_empty());
    assert!(two.sockets(Direction::Up).is_empty());
    assert!(two.sockets(Direction::Down).is_empty());
    assert!(two.sockets(Direction::Right).is_empty());
}

// Every pair observed adjacent in the example must come out mutually
// compatible in the observed direction
#[test]
fn test_observed_pairs_are_compatible() {
    let tileset = build(4, &array![[1_u32, 2], [3, 4]]);
    let one = tile(&tileset, 1);
    let two = tile(&tileset, 2);
    let three = tile(&tileset, 3);
    let four = tile(&tileset, 4);

    assert!(one.compatible(two, Direction::Right));
    assert!(two.compatible(one, Direction::Left));
    assert!(three.compatible(four, Direction::Right));
    assert!(one.compatible(three, Direction::Down));
    assert!(three.compatible(one, Direction::Up));
    assert!(two.compatible(four, Direction::Down));

    // Never adjacent in the example
    assert!(!one.compatible(four, Direction::Right));
    assert!(!one.compatible(two, Direction::Down));
}

#[test]
fn test_catalogue_tile_absent_from_example_stays_isolated() {
    let tileset = build(3, &array![[1_u32, 2]]);
    let three = tile(&tileset, 3);

    for side in Direction::ALL {
        assert!(three.sockets(side).is_empty());
    }
    for direction in Direction::ALL {
        assert!(!three.compatible(three, direction));
        assert!(!three.compatible(tile(&tileset, 1), direction));
    }
}

#[test]
fn test_repeated_pairs_reuse_tokens() {
    let tileset = build(2, &array![[1_u32, 2, 1, 2]]);
    // The second (1, 2) pair is already compatible, so no second token
    assert_eq!(tile(&tileset, 1).sockets(Direction::Right).len(), 1);
    assert_eq!(tile(&tileset, 2).sockets(Direction::Left).len(), 1);
    // (2, 1) is a distinct pairing and minted its own token
    assert_eq!(tile(&tileset, 2).sockets(Direction::Right).len(), 1);
    assert_eq!(tile(&tileset, 1).sockets(Direction::Left).len(), 1);
}

#[test]
fn test_self_adjacency() {
    let tileset = build(1, &array![[1_u32, 1]]);
    let one = tile(&tileset, 1);
    assert!(one.compatible(one, Direction::Right));
    assert!(one.compatible(one, Direction::Left));
    assert!(!one.compatible(one, Direction::Down));
}

// Token identities may differ between derivations, but compatibility
// behaviour must not
#[test]
fn test_rederivation_is_behaviourally_identical() {
    let example = array![[1_u32, 2, 1], [2, 1, 2]];
    let first = build(2, &example);
    let second = build(2, &example);

    for a in 1..=2 {
        for b in 1..=2 {
            for direction in Direction::ALL {
                assert_eq!(
                    tile(&first, a).compatible(tile(&first, b), direction),
                    tile(&second, a).compatible(tile(&second, b), direction),
                    "divergent compatibility for ({a}, {b}) {direction:?}"
                );
            }
        }
    }
}

#[test]
fn test_out_of_range_example_id_rejected() {
    let result = TilesetBuilder::new(2).infer(&array![[1_u32, 3]]);
    assert!(matches!(result, Err(WfcError::InvalidPattern { .. })));

    let zero = TilesetBuilder::new(2).infer(&array![[0_u32, 1]]);
    assert!(matches!(zero, Err(WfcError::InvalidPattern { .. })));
}

#[test]
fn test_lookup_by_id() {
    let tileset = build(2, &array![[1_u32, 2]]);
    assert_eq!(tileset.len(), 2);
    assert!(!tileset.is_empty());
    assert_eq!(tile(&tileset, 1).id(), 1);
    assert_eq!(tile(&tileset, 2).id(), 2);
    assert!(tileset.get(0).is_none());
    assert!(tileset.get(3).is_none());
}
