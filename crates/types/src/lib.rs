//! Core types module - shared data structures and constants
//!
//! This crate defines the plain values the playfield engine passes around.
//! Everything here is a value type: no type holds a reference to a grid, so
//! pieces can be proposed, compared and thrown away freely.
//!
//! # Coordinates
//!
//! - `x` is the column, growing to the right (`0..width`)
//! - `y` is the row, growing downwards (`0..height`); `y = 0` is the top row
//!
//! # Cells
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `value` | `0` = empty, `> 0` = occupied (the number is free for caller semantics) |
//! | `color` | cosmetic palette entry, ignored by all collision logic |
//! | `coordinate` | where the cell lives (or would live, for a piece) |
//!
//! # Examples
//!
//! ```
//! use playfield_types::{Cell, Color, Coordinate, Piece, Vector};
//!
//! let piece = Piece::from_coordinates(
//!     [Coordinate::new(4, 0), Coordinate::new(5, 0)],
//!     3,
//!     Color::Cyan,
//! );
//! assert_eq!(piece.len(), 2);
//!
//! let moved = piece.translated(Vector::DOWN).unwrap();
//! assert!(moved.contains(Coordinate::new(4, 1)));
//! assert!(!moved.contains(Coordinate::new(4, 0)));
//!
//! let cell = Cell::new(Coordinate::new(0, 0), 1, Color::Red);
//! assert!(cell.is_active());
//! ```

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Default playfield width in cells (10 columns)
pub const DEFAULT_WIDTH: u16 = 10;

/// Default playfield height in cells (20 rows)
pub const DEFAULT_HEIGHT: u16 = 20;

/// Width and height of the fixed preview grid
pub const PREVIEW_SIZE: u16 = 4;

/// Value stored in an empty cell
pub const EMPTY_VALUE: i32 = 0;

/// Integer grid position.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `self + delta`, or `None` if either axis overflows `i32`.
    ///
    /// No grid is wider than `u16::MAX`, so an overflowing step is always
    /// out of bounds; engine code uses this instead of `+`.
    pub fn checked_add(self, delta: Vector) -> Option<Coordinate> {
        Some(Coordinate::new(
            self.x.checked_add(delta.x)?,
            self.y.checked_add(delta.y)?,
        ))
    }

    /// `self - other`, or `None` if either axis overflows `i32`
    pub fn checked_sub(self, other: Coordinate) -> Option<Vector> {
        Some(Vector::new(
            self.x.checked_sub(other.x)?,
            self.y.checked_sub(other.y)?,
        ))
    }
}

/// Translation delta between two coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0, 0);
    pub const LEFT: Vector = Vector::new(-1, 0);
    pub const RIGHT: Vector = Vector::new(1, 0);
    /// Towards row 0
    pub const UP: Vector = Vector::new(0, -1);
    /// Towards the last row
    pub const DOWN: Vector = Vector::new(0, 1);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add<Vector> for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Vector) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Vector;

    fn sub(self, rhs: Coordinate) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Fixed display palette
///
/// Colors are purely cosmetic: collision, fullness and connectivity only
/// ever look at [`Cell::value`]. `Blank` is the color of an empty cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Blank,
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
    White,
    Gray,
}

impl Color {
    /// Every palette entry, `Blank` first
    pub const ALL: [Color; 11] = [
        Color::Blank,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Cyan,
        Color::Blue,
        Color::Purple,
        Color::Pink,
        Color::White,
        Color::Gray,
    ];

    /// Parse color from its lowercase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use playfield_types::Color;
    ///
    /// assert_eq!(Color::from_str("cyan"), Some(Color::Cyan));
    /// assert_eq!(Color::from_str("GRAY"), Some(Color::Gray));
    /// assert_eq!(Color::from_str("mauve"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|color| color.as_str().eq_ignore_ascii_case(s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blank => "blank",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Cyan => "cyan",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::White => "white",
            Color::Gray => "gray",
        }
    }
}

/// A single grid position: occupancy value, display color and coordinate.
///
/// The same type is used for cells stored in a grid and for the members of a
/// [`Piece`]; a piece's cells carry the coordinates they *would* occupy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub value: i32,
    pub color: Color,
    pub coordinate: Coordinate,
}

impl Cell {
    pub const fn new(coordinate: Coordinate, value: i32, color: Color) -> Self {
        Self {
            value,
            color,
            coordinate,
        }
    }

    /// An empty cell at `coordinate`
    pub const fn empty(coordinate: Coordinate) -> Self {
        Self::new(coordinate, EMPTY_VALUE, Color::Blank)
    }

    /// `value > 0`
    pub fn is_active(&self) -> bool {
        self.value > EMPTY_VALUE
    }

    pub fn is_inactive(&self) -> bool {
        !self.is_active()
    }

    /// Same value and color, different position
    pub fn at(self, coordinate: Coordinate) -> Self {
        Self { coordinate, ..self }
    }
}

/// Axis to mirror a piece on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Mirror x coordinates (left/right flip); rows are untouched
    X,
    /// Mirror y coordinates (top/bottom flip); columns are untouched
    Y,
}

/// Inclusive bounding box of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl Bounds {
    pub fn width(&self) -> u64 {
        u64::from(self.max.x.abs_diff(self.min.x)) + 1
    }

    pub fn height(&self) -> u64 {
        u64::from(self.max.y.abs_diff(self.min.y)) + 1
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        c.x >= self.min.x && c.x <= self.max.x && c.y >= self.min.y && c.y <= self.max.y
    }
}

/// A rigid group of cells that moves and rotates as one unit.
///
/// Pieces are values: engine operations never mutate their input piece, they
/// return a new one (or reject the request).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Piece {
    cells: Vec<Cell>,
}

impl Piece {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Build a piece whose cells all share `value` and `color`
    pub fn from_coordinates(
        coordinates: impl IntoIterator<Item = Coordinate>,
        value: i32,
        color: Color,
    ) -> Self {
        coordinates
            .into_iter()
            .map(|c| Cell::new(c, value, color))
            .collect()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().map(|cell| cell.coordinate)
    }

    /// Whether any member cell sits at `c`
    pub fn contains(&self, c: Coordinate) -> bool {
        self.cells.iter().any(|cell| cell.coordinate == c)
    }

    /// Move every cell by `delta` (pure geometry, no collision checks).
    ///
    /// `None` if any coordinate would overflow `i32`.
    pub fn translated(&self, delta: Vector) -> Option<Piece> {
        self.try_map_coordinates(|c| c.checked_add(delta))
    }

    /// Rebuild the piece with each coordinate passed through `f`, keeping
    /// values and colors
    pub fn map_coordinates(&self, mut f: impl FnMut(Coordinate) -> Coordinate) -> Piece {
        self.cells
            .iter()
            .map(|cell| cell.at(f(cell.coordinate)))
            .collect()
    }

    /// Like [`Piece::map_coordinates`], but gives up on the first `None`
    pub fn try_map_coordinates(
        &self,
        mut f: impl FnMut(Coordinate) -> Option<Coordinate>,
    ) -> Option<Piece> {
        self.cells
            .iter()
            .map(|cell| f(cell.coordinate).map(|c| cell.at(c)))
            .collect()
    }
}

impl FromIterator<Cell> for Piece {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Piece {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
