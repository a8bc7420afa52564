//! # Growpack Core
//!
//! Shared space model for the growpack packing engine.
//!
//! This crate holds the data structures and invariants used by the 2D
//! packing algorithms: grid primitives, free rectangles, committed
//! allocations, and the growable [`PackedSpace`] itself. It contains no
//! packing logic of its own.
//!
//! ## Core Components
//!
//! - **Grid primitives**: [`Coordinates`], [`Size`]
//! - **Space model**: [`Space`], [`AllocatedSpace`], [`PackedSpace`]
//! - **Errors**: [`Error`], [`Result`]
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod space;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{Coordinates, Size};
pub use space::{AllocatedSpace, PackedSpace, Space};
