//! Playfield engine - grid storage and the algorithms that run over it
//!
//! This crate owns a rectangular grid of cells and provides piece movement,
//! rotation, collision detection, line clearing, region stamping and
//! connectivity analysis. It has **no** dependency on rendering, input or
//! timing: callers drive it once per tick or input event and read results
//! back synchronously.
//!
//! # Module Structure
//!
//! Everything hangs off the single [`Grid`] type; each module contributes one
//! group of operations:
//!
//! - [`grid`]: storage, bounds checks, raw accessors
//! - [`lines`]: row/column fullness, clearing, shifting, cascading clears
//! - [`region`]: rectangular fills and stamping pieces into the grid
//! - [`movement`]: validated translation and drop/rise/reach projection
//! - [`transform`]: rotation about an origin, mirroring, bounding boxes
//! - [`analysis`]: full-line scans, neighbors, flood-fill connectivity
//! - [`persist`]: JSON blob save/restore
//!
//! # Failure model
//!
//! - Out-of-bounds coordinates never fail: reads give `None`, writes no-op
//! - Blocked moves and rotations give `None`; the input piece is untouched
//! - Only configuration and blob decoding return [`GridError`]
//!
//! # Example
//!
//! ```
//! use playfield_core::{Grid, GridConfig};
//! use playfield_core::types::{Color, Coordinate, Piece};
//!
//! let mut grid = Grid::new(GridConfig::default());
//!
//! // A horizontal bar at the top of the playfield
//! let bar = Piece::from_coordinates((3..7).map(|x| Coordinate::new(x, 0)), 1, Color::Cyan);
//! assert!(!grid.is_area_occupied(&bar.coordinates().collect::<Vec<_>>()));
//!
//! // Hard drop and lock it in
//! let landed = grid.drop_path(&bar);
//! assert!(landed.coordinates().all(|c| c.y == 19));
//! grid.stamp_piece(&landed);
//!
//! // Complete the bottom row and clear it
//! grid.fill_area(Coordinate::new(0, 19), Coordinate::new(2, 19), 2, Color::Red);
//! grid.fill_area(Coordinate::new(7, 19), Coordinate::new(9, 19), 2, Color::Red);
//! assert_eq!(grid.clear_full_rows(), 1);
//! assert_eq!(grid.active_count(), 0);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod grid;
pub mod lines;
pub mod movement;
pub mod persist;
pub mod region;
pub mod transform;

pub use playfield_types as types;

// Re-export commonly used types for convenience
pub use config::GridConfig;
pub use error::{GridError, Result};
pub use grid::Grid;
pub use transform::{mirror_piece, piece_bounds, rotate_coordinate};
