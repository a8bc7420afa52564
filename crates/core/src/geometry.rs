//! Grid primitives for the packing engine.
//!
//! All positions and extents are integer grid units, not pixels. Callers
//! discretise continuous layout space before handing sizes to the packer,
//! typically as `ceil(pixel_size / grid_unit)`.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position on the integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinates {
    /// Horizontal grid coordinate.
    pub x: i32,
    /// Vertical grid coordinate.
    pub y: i32,
}

impl Coordinates {
    /// Creates a new coordinate pair.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this position translated by `offset` (component-wise sum).
    pub fn translated(&self, offset: Coordinates) -> Coordinates {
        Coordinates::new(self.x + offset.x, self.y + offset.y)
    }
}

/// An extent on the integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    /// Horizontal extent in grid units.
    pub width: i32,
    /// Vertical extent in grid units.
    pub height: i32,
}

impl Size {
    /// Creates a new extent.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns the covered area in grid cells.
    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// Returns the extent rotated 90°, i.e. with width and height swapped.
    pub fn rotated(&self) -> Size {
        Size::new(self.height, self.width)
    }

    /// Validates that both dimensions are at least one grid unit.
    pub fn validate(&self) -> Result<()> {
        if self.width < 1 || self.height < 1 {
            return Err(Error::InvalidItemSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
