//! Grid module - canonical cell storage
//!
//! The grid is a `width x height` array of cells stored as a flat, row-major
//! vector (`y * width + x`) for cache locality. Every stored cell carries the
//! coordinate of its own slot; that invariant is established by [`Grid::reset`]
//! and preserved by every mutator, which only ever touches `value` and `color`.
//!
//! Invalid coordinates are never an error: reads return `None`, writes are
//! silently ignored. Movement and rotation rely on that leniency at the edges.

use log::debug;

use crate::config::GridConfig;
use crate::error::Result;
use crate::types::{Cell, Color, Coordinate, EMPTY_VALUE};

/// The playfield: a fixed-size grid of cells plus every engine operation.
///
/// Line, region, movement, transform, analysis and persistence operations
/// are implemented in their own modules as further `impl Grid` blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub(crate) config: GridConfig,
    /// Flat array of cells, row-major order (y * width + x)
    pub(crate) cells: Vec<Cell>,
}

impl Grid {
    /// Create a new, all-empty grid
    pub fn new(config: GridConfig) -> Self {
        let mut grid = Self {
            config,
            cells: Vec::with_capacity(config.area()),
        };
        grid.reset();
        grid
    }

    /// Create a grid of the given size
    pub fn with_size(width: u16, height: u16) -> Result<Self> {
        Ok(Self::new(GridConfig::new(width, height)?))
    }

    /// (Re)populate every cell as empty with coordinate metadata matching
    /// its slot
    pub fn reset(&mut self) {
        let width = self.width() as i32;
        let height = self.height() as i32;
        self.cells.clear();
        for y in 0..height {
            for x in 0..width {
                self.cells.push(Cell::empty(Coordinate::new(x, y)));
            }
        }
        debug!("grid reset to {}x{}", width, height);
    }

    pub fn config(&self) -> GridConfig {
        self.config
    }

    pub fn width(&self) -> u16 {
        self.config.width()
    }

    pub fn height(&self) -> u16 {
        self.config.height()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Never true for a grid built from a valid config
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    pub(crate) fn index(&self, c: Coordinate) -> Option<usize> {
        if !self.is_valid_coordinate(c) {
            return None;
        }
        Some(c.y as usize * self.width() as usize + c.x as usize)
    }

    /// `0 <= x < width` and `0 <= y < height`
    #[inline]
    pub fn is_valid_coordinate(&self, c: Coordinate) -> bool {
        c.x >= 0 && c.x < self.width() as i32 && c.y >= 0 && c.y < self.height() as i32
    }

    /// Get the cell at `c`, or `None` if out of bounds
    pub fn get_cell(&self, c: Coordinate) -> Option<Cell> {
        self.index(c).map(|idx| self.cells[idx])
    }

    /// Set the value at `c`; ignored if out of bounds
    pub fn set_value(&mut self, c: Coordinate, value: i32) {
        if let Some(idx) = self.index(c) {
            self.cells[idx].value = value;
        }
    }

    /// Set the color at `c`; ignored if out of bounds
    pub fn set_color(&mut self, c: Coordinate, color: Color) {
        if let Some(idx) = self.index(c) {
            self.cells[idx].color = color;
        }
    }

    /// Reset value and color at `c` together; ignored if out of bounds
    pub fn clear_cell(&mut self, c: Coordinate) {
        if let Some(idx) = self.index(c) {
            self.cells[idx].value = EMPTY_VALUE;
            self.cells[idx].color = Color::Blank;
        }
    }

    /// In bounds and `value > 0`
    pub fn is_active(&self, c: Coordinate) -> bool {
        self.get_cell(c).is_some_and(|cell| cell.is_active())
    }

    /// Out of bounds counts as inactive
    pub fn is_inactive(&self, c: Coordinate) -> bool {
        !self.is_active(c)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row `y` as a slice, or `None` if out of range
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height() as usize {
            return None;
        }
        let width = self.width() as usize;
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width() as usize)
    }

    /// Number of active cells
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_active()).count()
    }

    /// Copy value and color from one slot to another (both must be valid
    /// flat indices); coordinates stay with their slots
    #[inline]
    pub(crate) fn copy_contents(&mut self, from: usize, to: usize) {
        let Cell { value, color, .. } = self.cells[from];
        self.cells[to].value = value;
        self.cells[to].color = color;
    }

    #[inline]
    pub(crate) fn clear_index(&mut self, idx: usize) {
        self.cells[idx].value = EMPTY_VALUE;
        self.cells[idx].color = Color::Blank;
    }

    /// Build a grid from rows of values for testing (colors left blank)
    #[cfg(test)]
    pub(crate) fn from_values(rows: &[&[i32]]) -> Self {
        let height = rows.len() as u16;
        let width = rows.first().map_or(0, |r| r.len()) as u16;
        let mut grid = Self::with_size(width, height).expect("test grid dimensions");
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width as usize);
            for (x, &value) in row.iter().enumerate() {
                grid.set_value(Coordinate::new(x as i32, y as i32), value);
            }
        }
        grid
    }

    /// Convert to rows of values for testing/display
    #[cfg(test)]
    pub(crate) fn to_values(&self) -> Vec<Vec<i32>> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.value).collect())
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}
