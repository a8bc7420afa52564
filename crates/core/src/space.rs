//! Space model: free rectangles, committed allocations, and the growable
//! packed space itself.
//!
//! Invariant maintained by the packing operations: the rectangles in
//! [`PackedSpace::free`] and the oriented footprints of
//! [`PackedSpace::allocations`] exactly tile the local bounding box
//! `[0, width) x [0, height)` with no overlaps and nothing outside it.

use crate::geometry::{Coordinates, Size};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle of free area inside a packed space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Space {
    /// Top-left corner in local grid coordinates.
    pub location: Coordinates,
    /// Extent in grid units.
    pub size: Size,
}

impl Space {
    /// Creates a rectangle from raw coordinates and extents.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            location: Coordinates::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Creates a rectangle from a corner and an extent.
    pub fn from_parts(location: Coordinates, size: Size) -> Self {
        Self { location, size }
    }

    /// The exclusive right edge coordinate.
    pub fn right(&self) -> i32 {
        self.location.x + self.size.width
    }

    /// The exclusive bottom edge coordinate.
    pub fn bottom(&self) -> i32 {
        self.location.y + self.size.height
    }

    /// The covered area in grid cells.
    pub fn area(&self) -> i64 {
        self.size.area()
    }

    /// Whether `other` lies entirely within this rectangle.
    pub fn contains(&self, other: &Space) -> bool {
        other.location.x >= self.location.x
            && other.location.y >= self.location.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Whether this rectangle and `other` share any grid cell.
    pub fn intersects(&self, other: &Space) -> bool {
        self.location.x < other.right()
            && other.location.x < self.right()
            && self.location.y < other.bottom()
            && other.location.y < self.bottom()
    }
}

/// A committed placement of one item.
///
/// `size` is the extent exactly as the caller requested it. When
/// `horizontal` is `false` the item was placed rotated 90°, so the
/// occupied footprint has width and height swapped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllocatedSpace<T> {
    /// Top-left corner of the occupied footprint, in local coordinates.
    pub location: Coordinates,
    /// Requested extent, unrotated.
    pub size: Size,
    /// `true` when the item keeps its natural orientation.
    pub horizontal: bool,
    /// Opaque caller-supplied key. Uniqueness across allocations is the
    /// caller's responsibility and is not checked here.
    pub value: T,
}

impl<T> AllocatedSpace<T> {
    /// The axis-aligned rectangle actually occupied on the grid.
    pub fn footprint(&self) -> Space {
        let size = if self.horizontal {
            self.size
        } else {
            self.size.rotated()
        };
        Space::from_parts(self.location, size)
    }
}

/// The growable bounding box together with its free list and allocations.
///
/// `origin` is the world-space offset of the local `(0, 0)` corner; it
/// only ever moves left/up as the box grows in those directions, and
/// `size` only ever grows. One `PackedSpace` is exclusively owned per
/// packing session and mutated in place by every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackedSpace<T> {
    /// World-space offset of the local origin.
    pub origin: Coordinates,
    /// Current bounding-box extent.
    pub size: Size,
    /// Free rectangles available for placement.
    pub free: Vec<Space>,
    /// Committed allocations, in insertion order.
    pub allocations: Vec<AllocatedSpace<T>>,
}

impl<T> PackedSpace<T> {
    /// The local bounding box, anchored at `(0, 0)`.
    pub fn bounds(&self) -> Space {
        Space::from_parts(Coordinates::default(), self.size)
    }

    /// Total area occupied by allocations, in grid cells.
    pub fn allocated_area(&self) -> i64 {
        self.allocations.iter().map(|a| a.footprint().area()).sum()
    }

    /// Total area of the free list, in grid cells.
    pub fn free_area(&self) -> i64 {
        self.free.iter().map(Space::area).sum()
    }

    /// Fraction of the bounding box covered by allocations (0.0 - 1.0).
    pub fn utilization(&self) -> f64 {
        let total = self.size.area();
        if total == 0 {
            return 0.0;
        }
        self.allocated_area() as f64 / total as f64
    }

    /// Translates a local position into world coordinates.
    pub fn to_world(&self, local: Coordinates) -> Coordinates {
        local.translated(self.origin)
    }
}

impl<T: PartialEq> PackedSpace<T> {
    /// Looks up the allocation carrying `value`.
    ///
    /// Returns the first match; callers are expected to keep keys unique.
    pub fn find(&self, value: &T) -> Option<&AllocatedSpace<T>> {
        self.allocations.iter().find(|a| a.value == *value)
    }
}
