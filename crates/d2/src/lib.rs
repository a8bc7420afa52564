//! # Growpack 2D
//!
//! Dynamic 2D rectangle packing for the growpack engine.
//!
//! Items arrive one at a time and each receives a non-overlapping position
//! inside a bounding box that grows on demand. Placement is biased toward
//! the box centre, each item may be used in its natural orientation or
//! rotated 90°, and leftover area is returned to the free list through a
//! guillotine split. Layout is a pure function of the ordered allocation
//! sequence: replaying the same keys and sizes reproduces the same layout.

pub mod allocator;
pub mod expander;
pub mod finder;

// Re-exports
pub use allocator::{allocate_space, initialise_space, remaining_spaces, Placement};
pub use expander::{expand_bottom, expand_left, expand_right, expand_top};
pub use finder::{
    allocate_free_space, find_free_horizontal_space, find_free_vertical_space, FitOrdering,
};
pub use growpack_core::{AllocatedSpace, Coordinates, Error, PackedSpace, Result, Size, Space};
