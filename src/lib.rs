// src/lib.rs
//! Bothy
//!
//! Parametric room layout generation: walls, framed windows, doors and hole
//! cut-outs described as placement records for any 3D rendering back end.

pub mod config;
pub mod error;
pub mod gfx;
pub mod layout;
pub mod prelude;
pub mod presets;

// Re-export main types for convenience
pub use error::{LayoutError, Result};
pub use layout::{generate_room_layout, PlacementRecord, RoomDimensions};
