//! # Growpack
//!
//! Dynamic 2D rectangle packing over a bounding box that grows on demand.
//!
//! Items are allocated one at a time; each receives a non-overlapping
//! position, in its natural orientation or rotated 90°, biased toward the
//! box centre. Leftover area returns to the free list through a
//! guillotine split, and the box grows outward in all four directions
//! whenever nothing fits, so a well-formed item is never refused.
//!
//! ## Quick Start
//!
//! ```rust
//! use growpack::{allocate_space, initialise_space, Coordinates, Size};
//!
//! # fn main() -> growpack::core::Result<()> {
//! let mut space = initialise_space(Coordinates::default(), Size::new(4, 2), "headline")?;
//! allocate_space(&mut space, Size::new(3, 3), "badge")?;
//!
//! for item in &space.allocations {
//!     let world = space.to_world(item.location);
//!     println!("{} at ({}, {}), rotated: {}", item.value, world.x, world.y, !item.horizontal);
//! }
//! # Ok(()) }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support for the space model

/// Shared space model.
pub use growpack_core as core;

/// 2D packing algorithms.
pub use growpack_d2 as d2;

// Re-export commonly used types at root level
pub use growpack_core::{AllocatedSpace, Coordinates, Error, PackedSpace, Result, Size, Space};
pub use growpack_d2::{allocate_space, initialise_space, FitOrdering, Placement};
