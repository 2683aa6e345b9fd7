//! Region engine - rectangular fills and stamping

use crate::grid::Grid;
use crate::types::{Cell, Color, Coordinate, Piece, EMPTY_VALUE};

impl Grid {
    /// Write `value`/`color` to every cell of the rectangle spanned by two
    /// opposite corners. Corner order does not matter; the rectangle is
    /// clamped to the grid.
    pub fn fill_area(&mut self, start: Coordinate, end: Coordinate, value: i32, color: Color) {
        let max_x = self.width() as i32 - 1;
        let max_y = self.height() as i32 - 1;
        let x0 = start.x.min(end.x).max(0);
        let x1 = start.x.max(end.x).min(max_x);
        let y0 = start.y.min(end.y).max(0);
        let y1 = start.y.max(end.y).min(max_y);

        for y in y0..=y1 {
            for x in x0..=x1 {
                let c = Coordinate::new(x, y);
                self.set_value(c, value);
                self.set_color(c, color);
            }
        }
    }

    /// [`Grid::fill_area`] with the empty value and color
    pub fn clear_area(&mut self, start: Coordinate, end: Coordinate) {
        self.fill_area(start, end, EMPTY_VALUE, Color::Blank);
    }

    /// Write a cell's value and color at its own coordinate.
    ///
    /// No collision check: callers validate placement first.
    pub fn stamp_cell(&mut self, cell: &Cell) {
        self.set_value(cell.coordinate, cell.value);
        self.set_color(cell.coordinate, cell.color);
    }

    /// Commit every cell of `piece` into the grid
    pub fn stamp_piece(&mut self, piece: &Piece) {
        for cell in piece {
            self.stamp_cell(cell);
        }
    }

    /// Clear every coordinate the piece covers
    pub fn erase_piece(&mut self, piece: &Piece) {
        for c in piece.coordinates() {
            self.clear_cell(c);
        }
    }

    /// Erase `from`, then stamp `to`: commits a move of a piece that lives
    /// in the grid while it moves
    pub fn relocate_piece(&mut self, from: &Piece, to: &Piece) {
        self.erase_piece(from);
        self.stamp_piece(to);
    }

    /// True if any coordinate is out of bounds or already active
    pub fn is_area_occupied(&self, coordinates: &[Coordinate]) -> bool {
        coordinates
            .iter()
            .any(|&c| !self.is_valid_coordinate(c) || self.is_active(c))
    }
}
