//! Transform engine - rotation and mirroring
//!
//! Rotation is 90 degrees about an arbitrary origin, with `y` growing
//! downwards:
//!
//! | Direction | Relative `(rx, ry)` maps to |
//! |-----------|-----------------------------|
//! | clockwise | `(-ry, rx)` |
//! | counter-clockwise | `(ry, -rx)` |
//!
//! Rotations validate like movement (bounds + non-self collision) and are
//! all-or-nothing. Mirroring is pure geometry with no validation.

use crate::grid::Grid;
use crate::types::{Axis, Bounds, Coordinate, Piece, Vector};

/// Rotate `c` by 90 degrees about `origin`.
///
/// `None` when the result does not fit in `i32`, which only happens far
/// outside any grid.
pub fn rotate_coordinate(
    c: Coordinate,
    origin: Coordinate,
    clockwise: bool,
) -> Option<Coordinate> {
    let rel = c.checked_sub(origin)?;
    let turned = if clockwise {
        Vector::new(rel.y.checked_neg()?, rel.x)
    } else {
        Vector::new(rel.y, rel.x.checked_neg()?)
    };
    origin.checked_add(turned)
}

/// Bounding box of every cell, or `None` for an empty piece
pub fn piece_bounds(piece: &Piece) -> Option<Bounds> {
    let mut coords = piece.coordinates();
    let first = coords.next()?;
    let bounds = coords.fold(
        Bounds {
            min: first,
            max: first,
        },
        |b, c| Bounds {
            min: Coordinate::new(b.min.x.min(c.x), b.min.y.min(c.y)),
            max: Coordinate::new(b.max.x.max(c.x), b.max.y.max(c.y)),
        },
    );
    Some(bounds)
}

/// Mirror `piece` on `axis` about the center of its bounding box.
///
/// The reflection of `v` in `[min, max]` is `min + max - v`, which always
/// lands on a grid position inside the same box.
pub fn mirror_piece(piece: &Piece, axis: Axis) -> Piece {
    let Some(bounds) = piece_bounds(piece) else {
        return Piece::default();
    };
    piece.map_coordinates(|c| match axis {
        Axis::X => Coordinate::new(reflect(c.x, bounds.min.x, bounds.max.x), c.y),
        Axis::Y => Coordinate::new(c.x, reflect(c.y, bounds.min.y, bounds.max.y)),
    })
}

/// `min + max - v` without intermediate overflow; `v` is in `[min, max]`
fn reflect(v: i32, min: i32, max: i32) -> i32 {
    let mirrored = i64::from(min) + i64::from(max) - i64::from(v);
    i32::try_from(mirrored).unwrap_or(v)
}

impl Grid {
    /// Rotate `piece` 90 degrees about `origin`.
    ///
    /// `None` if any rotated cell is out of bounds or lands on an active cell
    /// outside the piece, or if the piece is empty.
    pub fn rotate_piece(
        &self,
        piece: &Piece,
        origin: Coordinate,
        clockwise: bool,
    ) -> Option<Piece> {
        if piece.is_empty() {
            return None;
        }
        piece
            .try_map_coordinates(|c| rotate_coordinate(c, origin, clockwise))
            .filter(|candidate| self.can_place(candidate, piece))
    }

    /// Rotate with kick offsets.
    ///
    /// Tries the plain rotation first, then the rotated piece shifted by each
    /// kick in order. Returns the first placement that fits together with the
    /// kick applied ([`Vector::ZERO`] for the plain rotation).
    pub fn rotate_piece_with_kicks(
        &self,
        piece: &Piece,
        origin: Coordinate,
        clockwise: bool,
        kicks: &[Vector],
    ) -> Option<(Piece, Vector)> {
        if piece.is_empty() {
            return None;
        }
        let rotated = piece.try_map_coordinates(|c| rotate_coordinate(c, origin, clockwise))?;

        std::iter::once(Vector::ZERO)
            .chain(kicks.iter().copied())
            .find_map(|kick| {
                let candidate = rotated.translated(kick)?;
                self.can_place(&candidate, piece).then_some((candidate, kick))
            })
    }

    /// See [`piece_bounds`]
    pub fn piece_bounds(&self, piece: &Piece) -> Option<Bounds> {
        piece_bounds(piece)
    }

    /// See [`mirror_piece`]
    pub fn mirror_piece(&self, piece: &Piece, axis: Axis) -> Piece {
        mirror_piece(piece, axis)
    }
}
