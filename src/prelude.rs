//! # Bothy Prelude
//!
//! Commonly used types in one import.
//!
//! ```rust
//! use bothy::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let dims = RoomDimensions::new(6.0, 4.0, 3.0, 0.1);
//!     let records = RoomLayoutBuilder::new(dims)
//!         .add_opening(WallId::Front, Opening::window(1.5, 1.0, 0.0, 0.3))
//!         .generate()?;
//!     let scene = SceneDescription::new(records).with_light(Light::ambient(0x404040));
//!     assert_eq!(scene.statistics().hole_count, 1);
//!     Ok(())
//! }
//! ```

// Re-export error and configuration types
pub use crate::config::{LayoutConfig, MaterialTags};
pub use crate::error::{LayoutError, Result};

// Re-export layout generation
pub use crate::layout::{
    add_glass_to_wall_holes, create_wall_with_holes, door_fixtures, generate_room_layout,
    generate_room_layout_with, place_opening_with_frame, wall_placement, FramedOpening, HoleSpec,
    MaterialTag, Opening, OpeningKind, PlacementRecord, RoomDimensions, RoomLayoutBuilder, Shape,
    WallId, WallOrientation, WallPanel, WallSpec,
};

// Re-export rendering-side descriptions
pub use crate::gfx::camera::{CameraDescriptor, OrbitControls};
pub use crate::gfx::geometry::{GeometryData, Vertex3D};
pub use crate::gfx::light::Light;
pub use crate::gfx::material::{Material, MaterialLibrary};
pub use crate::gfx::scene::{RenderBackend, SceneDescription, SceneStatistics};

// Re-export common external dependencies
pub use cgmath::{Euler, Rad, Vector2, Vector3};
