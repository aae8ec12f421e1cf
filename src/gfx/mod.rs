//! # Graphics Module
//!
//! Rendering-side descriptions consumed by a rendering back end. Nothing in here
//! talks to a GPU: meshes, materials, lights and the camera are plain data that a
//! [`RenderBackend`](scene::RenderBackend) turns into its own resources.
//!
//! - **Geometry** ([`geometry`]) - meshes for box, plane, circle and ring records
//! - **Materials** ([`material`]) - tag to PBR parameter resolution
//! - **Lights** ([`light`]) - ambient and directional light descriptors
//! - **Camera** ([`camera`]) - perspective camera pose and orbit-controls parameters
//! - **Scene** ([`scene`]) - the full description and the back-end trait

pub mod camera;
pub mod geometry;
pub mod light;
pub mod material;
pub mod scene;

// Re-export commonly used types
pub use scene::{RenderBackend, SceneDescription};
