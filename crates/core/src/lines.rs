//! Line engine - row/column fullness, clearing, shifting and compaction
//!
//! Line indices are `usize`; an out-of-range index is never an error:
//! `is_*_full` answers `false`, `is_*_empty` answers `true`, and clears and
//! shifts do nothing.

use log::debug;

use crate::grid::Grid;

impl Grid {
    /// Check if row `y` is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_active()))
    }

    /// Check if row `y` has no active cell
    pub fn is_row_empty(&self, y: usize) -> bool {
        self.row(y)
            .map_or(true, |row| row.iter().all(|cell| cell.is_inactive()))
    }

    /// Check if column `x` is completely filled
    pub fn is_column_full(&self, x: usize) -> bool {
        if x >= self.width() as usize {
            return false;
        }
        self.column_cells(x).all(|idx| self.cells[idx].is_active())
    }

    /// Check if column `x` has no active cell
    pub fn is_column_empty(&self, x: usize) -> bool {
        if x >= self.width() as usize {
            return true;
        }
        self.column_cells(x).all(|idx| self.cells[idx].is_inactive())
    }

    /// Flat indices of column `x`, top to bottom
    fn column_cells(&self, x: usize) -> impl Iterator<Item = usize> {
        let width = self.width() as usize;
        (0..self.height() as usize).map(move |y| y * width + x)
    }

    /// Reset every cell in row `y` to empty
    pub fn clear_row(&mut self, y: usize) {
        if y >= self.height() as usize {
            return;
        }
        let width = self.width() as usize;
        for idx in y * width..(y + 1) * width {
            self.clear_index(idx);
        }
    }

    /// Reset every cell in column `x` to empty
    pub fn clear_column(&mut self, x: usize) {
        if x >= self.width() as usize {
            return;
        }
        let width = self.width() as usize;
        for y in 0..self.height() as usize {
            self.clear_index(y * width + x);
        }
    }

    /// Push rows `0..from_y` down by one, overwriting row `from_y`, and
    /// clear row 0
    pub fn shift_rows_down(&mut self, from_y: usize) {
        let height = self.height() as usize;
        if from_y >= height {
            return;
        }
        let width = self.width() as usize;
        for y in (1..=from_y).rev() {
            for x in 0..width {
                self.copy_contents((y - 1) * width + x, y * width + x);
            }
        }
        self.clear_row(0);
    }

    /// Pull rows `from_y + 1..height` up by one, overwriting row `from_y`,
    /// and clear the bottom row
    pub fn shift_rows_up(&mut self, from_y: usize) {
        let height = self.height() as usize;
        if from_y >= height {
            return;
        }
        let width = self.width() as usize;
        for y in from_y..height - 1 {
            for x in 0..width {
                self.copy_contents((y + 1) * width + x, y * width + x);
            }
        }
        self.clear_row(height - 1);
    }

    /// Push columns `0..from_x` right by one, overwriting column `from_x`,
    /// and clear column 0
    pub fn shift_columns_right(&mut self, from_x: usize) {
        let width = self.width() as usize;
        if from_x >= width {
            return;
        }
        for y in 0..self.height() as usize {
            let row = y * width;
            for x in (1..=from_x).rev() {
                self.copy_contents(row + x - 1, row + x);
            }
        }
        self.clear_column(0);
    }

    /// Pull columns `from_x + 1..width` left by one, overwriting column
    /// `from_x`, and clear the rightmost column
    pub fn shift_columns_left(&mut self, from_x: usize) {
        let width = self.width() as usize;
        if from_x >= width {
            return;
        }
        for y in 0..self.height() as usize {
            let row = y * width;
            for x in from_x..width - 1 {
                self.copy_contents(row + x + 1, row + x);
            }
        }
        self.clear_column(width - 1);
    }

    /// Clear every full row, compacting the rows above into the gap.
    ///
    /// Scans bottom to top. After a clear the same index is examined again,
    /// since the row that slid into it may itself be full.
    /// Returns the number of rows cleared.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = self.height() as usize;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.clear_row(row);
                self.shift_rows_down(row);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        if cleared > 0 {
            debug!("cleared {} full rows", cleared);
        }
        cleared
    }

    /// Clear every full column, compacting the columns to its left into the
    /// gap. Transposed [`Grid::clear_full_rows`]: scans right to left and
    /// re-examines the same index after each clear.
    pub fn clear_full_columns(&mut self) -> usize {
        let mut cleared = 0;
        let mut x = self.width() as usize;
        while x > 0 {
            let column = x - 1;
            if self.is_column_full(column) {
                self.clear_column(column);
                self.shift_columns_right(column);
                cleared += 1;
            } else {
                x -= 1;
            }
        }
        if cleared > 0 {
            debug!("cleared {} full columns", cleared);
        }
        cleared
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Grid;
    use crate::types::{Color, Coordinate};

    #[test]
    fn test_row_fullness_out_of_range() {
        let grid = Grid::from_values(&[&[1, 1], &[0, 0]]);
        assert!(grid.is_row_full(0));
        assert!(!grid.is_row_full(1));
        assert!(!grid.is_row_full(2));
        assert!(grid.is_row_empty(1));
        assert!(grid.is_row_empty(2));
        assert!(!grid.is_column_full(2));
        assert!(grid.is_column_empty(2));
    }

    #[test]
    fn test_clear_full_rows_rechecks_same_index() {
        let mut grid = Grid::from_values(&[&[1, 1, 1], &[7, 0, 0], &[1, 1, 1]]);
        assert_eq!(grid.clear_full_rows(), 2);
        assert_eq!(
            grid.to_values(),
            vec![vec![0, 0, 0], vec![0, 0, 0], vec![7, 0, 0]]
        );
    }

    #[test]
    fn test_clear_full_rows_consecutive() {
        let mut grid = Grid::from_values(&[
            &[0, 2, 0],
            &[3, 3, 3],
            &[4, 4, 4],
            &[5, 0, 5],
        ]);
        assert_eq!(grid.clear_full_rows(), 2);
        assert_eq!(
            grid.to_values(),
            vec![vec![0, 0, 0], vec![0, 0, 0], vec![0, 2, 0], vec![5, 0, 5]]
        );
    }

    #[test]
    fn test_shift_keeps_coordinates_with_slots() {
        let mut grid = Grid::from_values(&[&[1, 0], &[0, 0]]);
        grid.set_color(Coordinate::new(0, 0), Color::Red);
        grid.shift_rows_down(1);

        let moved = grid.get_cell(Coordinate::new(0, 1)).unwrap();
        assert_eq!(moved.value, 1);
        assert_eq!(moved.color, Color::Red);
        assert_eq!(moved.coordinate, Coordinate::new(0, 1));
        assert!(grid.is_row_empty(0));
    }

    #[test]
    fn test_shift_rows_up() {
        let mut grid = Grid::from_values(&[&[1], &[2], &[3]]);
        grid.shift_rows_up(0);
        assert_eq!(grid.to_values(), vec![vec![2], vec![3], vec![0]]);
    }

    #[test]
    fn test_column_shifts() {
        let mut grid = Grid::from_values(&[&[1, 2, 3]]);
        grid.shift_columns_right(2);
        assert_eq!(grid.to_values(), vec![vec![0, 1, 2]]);

        grid.shift_columns_left(0);
        assert_eq!(grid.to_values(), vec![vec![1, 2, 0]]);
    }

    #[test]
    fn test_clear_full_columns() {
        let mut grid = Grid::from_values(&[
            &[1, 6, 1, 1],
            &[1, 0, 1, 1],
        ]);
        assert_eq!(grid.clear_full_columns(), 3);
        assert_eq!(grid.to_values(), vec![vec![0, 0, 0, 6], vec![0, 0, 0, 0]]);
    }
}
