//! Grid configuration
//!
//! The size of a grid is a value chosen at construction time. The standard
//! playfield and the small preview grid are both just [`GridConfig`]s.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH, PREVIEW_SIZE};

/// Grid dimensions, fixed for the lifetime of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGridConfig")]
pub struct GridConfig {
    width: u16,
    height: u16,
}

#[derive(Deserialize)]
struct RawGridConfig {
    width: u16,
    height: u16,
}

impl TryFrom<RawGridConfig> for GridConfig {
    type Error = GridError;

    fn try_from(raw: RawGridConfig) -> Result<Self> {
        GridConfig::new(raw.width, raw.height)
    }
}

impl GridConfig {
    /// Create a configuration, rejecting zero-sized grids
    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// The fixed 4x4 next-piece preview grid
    pub const fn preview() -> Self {
        Self {
            width: PREVIEW_SIZE,
            height: PREVIEW_SIZE,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for GridConfig {
    /// Standard 10x20 playfield
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            GridConfig::new(0, 5),
            Err(GridError::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(GridConfig::new(5, 0).is_err());
        assert!(GridConfig::new(1, 1).is_ok());
    }

    #[test]
    fn presets() {
        let standard = GridConfig::default();
        assert_eq!((standard.width(), standard.height()), (10, 20));
        assert_eq!(standard.area(), 200);

        let preview = GridConfig::preview();
        assert_eq!((preview.width(), preview.height()), (4, 4));
    }

    #[test]
    fn deserialize_validates() {
        let ok: GridConfig = serde_json::from_str(r#"{"width": 8, "height": 12}"#).unwrap();
        assert_eq!((ok.width(), ok.height()), (8, 12));

        let bad = serde_json::from_str::<GridConfig>(r#"{"width": 0, "height": 12}"#);
        assert!(bad.is_err());
    }
}
