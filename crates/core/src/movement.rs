//! Movement engine - validated translation and path projection
//!
//! A piece usually lives in the grid while it moves, so its own cells are
//! active. Validation therefore ignores collisions with cells of the
//! *original* piece; any other active cell, or any out-of-bounds coordinate,
//! rejects the whole move. Rejection is `None` and the input is untouched.

use log::trace;

use crate::grid::Grid;
use crate::types::{Cell, Coordinate, Piece, Vector};

impl Grid {
    /// Whether `candidate` fits: every coordinate in bounds, and every active
    /// cell under it belonging to `original`
    pub fn can_place(&self, candidate: &Piece, original: &Piece) -> bool {
        candidate
            .coordinates()
            .all(|c| self.is_free_for(c, original))
    }

    #[inline]
    fn is_free_for(&self, c: Coordinate, original: &Piece) -> bool {
        self.is_valid_coordinate(c) && (self.is_inactive(c) || original.contains(c))
    }

    /// Translate every cell of `piece` by `direction`.
    ///
    /// Returns the moved piece, or `None` if any destination is out of
    /// bounds (including past the `i32` range) or collides with an active
    /// cell outside the piece. An empty piece is rejected.
    pub fn move_piece(&self, piece: &Piece, direction: Vector) -> Option<Piece> {
        if piece.is_empty() {
            return None;
        }
        let moved = piece
            .translated(direction)
            .filter(|candidate| self.can_place(candidate, piece));
        if moved.is_none() {
            trace!("move by ({}, {}) rejected", direction.x, direction.y);
        }
        moved
    }

    pub fn move_piece_left(&self, piece: &Piece) -> Option<Piece> {
        self.move_piece(piece, Vector::LEFT)
    }

    pub fn move_piece_right(&self, piece: &Piece) -> Option<Piece> {
        self.move_piece(piece, Vector::RIGHT)
    }

    pub fn move_piece_up(&self, piece: &Piece) -> Option<Piece> {
        self.move_piece(piece, Vector::UP)
    }

    pub fn move_piece_down(&self, piece: &Piece) -> Option<Piece> {
        self.move_piece(piece, Vector::DOWN)
    }

    /// Translate a lone cell. Rejected if the destination is out of bounds
    /// or active.
    pub fn move_cell(&self, cell: &Cell, direction: Vector) -> Option<Cell> {
        cell.coordinate
            .checked_add(direction)
            .filter(|&target| self.is_valid_coordinate(target) && self.is_inactive(target))
            .map(|target| cell.at(target))
    }

    /// Last valid position reached by moving down repeatedly
    pub fn drop_path(&self, piece: &Piece) -> Piece {
        self.project(piece, Vector::DOWN)
    }

    /// Last valid position reached by moving up repeatedly
    pub fn rise_path(&self, piece: &Piece) -> Piece {
        self.project(piece, Vector::UP)
    }

    /// Last valid position reached by moving left repeatedly
    pub fn reach_path_left(&self, piece: &Piece) -> Piece {
        self.project(piece, Vector::LEFT)
    }

    /// Last valid position reached by moving right repeatedly
    pub fn reach_path_right(&self, piece: &Piece) -> Piece {
        self.project(piece, Vector::RIGHT)
    }

    /// Step `piece` along `direction` until the next step fails.
    ///
    /// Every step is validated against the starting piece, which is the one
    /// whose cells are actually in the grid.
    fn project(&self, piece: &Piece, direction: Vector) -> Piece {
        if piece.is_empty() || direction == Vector::ZERO {
            return piece.clone();
        }
        let mut current = piece.clone();
        while let Some(candidate) = current
            .translated(direction)
            .filter(|candidate| self.can_place(candidate, piece))
        {
            current = candidate;
        }
        current
    }
}
