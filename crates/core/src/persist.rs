//! Persistence - grid <-> JSON blob
//!
//! The blob is the grid's rows, top to bottom, each an array of cells:
//!
//! ```json
//! [[{"value":0,"color":"blank","coordinate":{"x":0,"y":0}}, ...], ...]
//! ```
//!
//! There is no version tag. Decoding checks the shape and that every stored
//! coordinate matches its position, so a blob from a differently sized or
//! corrupted grid is rejected instead of loaded.

use log::debug;

use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::grid::Grid;
use crate::types::Cell;

impl Grid {
    /// Encode the grid as a JSON blob
    pub fn serialize(&self) -> Result<String> {
        let rows: Vec<&[Cell]> = self.rows().collect();
        Ok(serde_json::to_string(&rows)?)
    }

    /// Replace the grid contents with a blob of the same dimensions.
    ///
    /// On error the grid is left untouched.
    pub fn deserialize(&mut self, blob: &str) -> Result<()> {
        let rows: Vec<Vec<Cell>> = serde_json::from_str(blob)?;
        let cells = decode_rows(self.config(), &rows)?;
        self.cells = cells;
        debug!("loaded {}x{} grid blob", self.width(), self.height());
        Ok(())
    }

    /// Build a grid sized by the blob itself
    pub fn from_blob(blob: &str) -> Result<Grid> {
        let rows: Vec<Vec<Cell>> = serde_json::from_str(blob)?;
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let config = GridConfig::new(
            u16::try_from(width).unwrap_or(u16::MAX),
            u16::try_from(height).unwrap_or(u16::MAX),
        )?;
        let cells = decode_rows(config, &rows)?;
        debug!("built {}x{} grid from blob", width, height);
        Ok(Grid { config, cells })
    }
}

/// Validate decoded rows against `config` and flatten them
fn decode_rows(config: GridConfig, rows: &[Vec<Cell>]) -> Result<Vec<Cell>> {
    let width = config.width() as usize;
    let height = config.height() as usize;
    let mismatch = |w: usize| GridError::ShapeMismatch {
        expected_width: config.width(),
        expected_height: config.height(),
        width: w,
        height: rows.len(),
    };

    if rows.len() != height {
        return Err(mismatch(rows.first().map_or(0, Vec::len)));
    }
    if let Some(row) = rows.iter().find(|row| row.len() != width) {
        return Err(mismatch(row.len()));
    }

    let mut cells = Vec::with_capacity(config.area());
    for (y, row) in rows.iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let c = cell.coordinate;
            if c.x != x as i32 || c.y != y as i32 {
                return Err(GridError::CoordinateMismatch {
                    x,
                    y,
                    claimed_x: c.x,
                    claimed_y: c.y,
                });
            }
            cells.push(*cell);
        }
    }
    Ok(cells)
}
