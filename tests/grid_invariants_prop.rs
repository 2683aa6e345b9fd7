//! Property tests for grid-wide invariants.
//!
//! - Invalid coordinates read as `None` and ignore writes.
//! - Movement and rotation never produce an out-of-bounds piece.
//! - Stamped pieces read back exactly.
//! - Connectivity does not depend on the start cell.
//! - Cascading row clears leave no full row behind.

use proptest::prelude::*;
use playfield::core::Grid;
use playfield::types::{Color, Coordinate, Piece, Vector};

const W: u16 = 8;
const H: u16 = 12;

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-3i32..(W as i32 + 3), -3i32..(H as i32 + 3)).prop_map(|(x, y)| Coordinate::new(x, y))
}

fn in_bounds() -> impl Strategy<Value = Coordinate> {
    (0i32..W as i32, 0i32..H as i32).prop_map(|(x, y)| Coordinate::new(x, y))
}

fn color() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::ALL.to_vec())
}

/// Grid with random values in 0..=3 (roughly a quarter empty)
fn grid() -> impl Strategy<Value = Grid> {
    prop::collection::vec(0i32..=3, (W as usize) * (H as usize)).prop_map(|values| {
        let mut grid = Grid::with_size(W, H).unwrap();
        for (i, value) in values.into_iter().enumerate() {
            let c = Coordinate::new((i % W as usize) as i32, (i / W as usize) as i32);
            grid.set_value(c, value);
        }
        grid
    })
}

fn piece() -> impl Strategy<Value = Piece> {
    prop::collection::vec(in_bounds(), 1..5)
        .prop_map(|coords| Piece::from_coordinates(coords, 1, Color::Cyan))
}

fn direction() -> impl Strategy<Value = Vector> {
    prop::sample::select(vec![Vector::LEFT, Vector::RIGHT, Vector::UP, Vector::DOWN])
}

proptest! {
    #[test]
    fn invalid_coordinates_are_inert(mut g in grid(), c in coordinate(), v in 1i32..9) {
        prop_assume!(!g.is_valid_coordinate(c));
        let before = g.clone();

        prop_assert_eq!(g.get_cell(c), None);
        g.set_value(c, v);
        g.set_color(c, Color::Red);
        prop_assert_eq!(g, before);
    }

    #[test]
    fn movement_stays_in_bounds(g in grid(), p in piece(), dir in direction()) {
        if let Some(moved) = g.move_piece(&p, dir) {
            prop_assert_eq!(moved.len(), p.len());
            prop_assert!(moved.coordinates().all(|c| g.is_valid_coordinate(c)));
            prop_assert!(moved
                .coordinates()
                .all(|c| g.is_inactive(c) || p.contains(c)));
        }
        let projected = g.drop_path(&p);
        prop_assert!(projected.coordinates().all(|c| g.is_valid_coordinate(c)));
    }

    #[test]
    fn rotation_stays_in_bounds(
        g in grid(),
        p in piece(),
        origin in in_bounds(),
        cw in any::<bool>(),
    ) {
        if let Some(rotated) = g.rotate_piece(&p, origin, cw) {
            prop_assert!(rotated.coordinates().all(|c| g.is_valid_coordinate(c)));
            let back = g.rotate_piece(&rotated, origin, !cw);
            if let Some(back) = back {
                prop_assert_eq!(back, p);
            }
        }
    }

    #[test]
    fn stamp_reads_back(
        coords in prop::collection::hash_set(in_bounds(), 1..8),
        v in 1i32..9,
        col in color(),
    ) {
        let mut g = Grid::with_size(W, H).unwrap();
        let p = Piece::from_coordinates(coords, v, col);
        g.stamp_piece(&p);

        let read: Piece = p.coordinates().filter_map(|c| g.get_cell(c)).collect();
        prop_assert_eq!(read, p);
    }

    #[test]
    fn connectivity_is_start_independent(g in grid(), start in in_bounds()) {
        let mut group: Vec<_> = g
            .find_connected_cells(start)
            .into_iter()
            .map(|c| c.coordinate)
            .collect();
        group.sort();

        for &member in &group {
            let mut other: Vec<_> = g
                .find_connected_cells(member)
                .into_iter()
                .map(|c| c.coordinate)
                .collect();
            other.sort();
            prop_assert_eq!(&other, &group);
        }
    }

    #[test]
    fn cascade_clear_leaves_no_full_rows(
        mut g in grid(),
        full in prop::collection::vec(0usize..H as usize, 0..6),
    ) {
        for y in &full {
            g.fill_area(
                Coordinate::new(0, *y as i32),
                Coordinate::new(W as i32 - 1, *y as i32),
                1,
                Color::Gray,
            );
        }
        let full_before = g.full_rows().len();
        let active_before = g.active_count();

        let cleared = g.clear_full_rows();

        prop_assert_eq!(cleared, full_before);
        prop_assert!(g.full_rows().is_empty());
        prop_assert_eq!(g.active_count(), active_before - cleared * W as usize);
    }
}
