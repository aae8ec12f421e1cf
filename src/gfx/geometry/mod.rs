//! # Procedural Geometry Generation
//!
//! Builds triangle meshes for every [`Shape`] a placement record can carry, so a
//! back end does not need external model files for the room.
//!
//! ## Supported Primitives
//!
//! - **Box**: cuboid with per-face normals
//! - **Plane**: flat rectangle in the XY plane facing +Z
//! - **Circle**: triangle fan in the XY plane facing +Z
//! - **Ring**: annulus in the XY plane facing +Z
//!
//! ## Usage
//!
//! ```rust
//! use bothy::gfx::geometry::{generate_box, generate_ring};
//!
//! let wall = generate_box(20.0, 7.0, 0.1);
//! assert_eq!(wall.triangle_count(), 12);
//!
//! let ring = generate_ring(0.2, 0.24, 32);
//! assert_eq!(ring.triangle_count(), 64);
//! ```

pub mod primitives;
pub mod vertex;

pub use primitives::*;
pub use vertex::Vertex3D;

use crate::layout::record::Shape;

/// Represents generated geometry data ready for GPU upload
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            tex_coords: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Builds the mesh for a placement record's shape
    pub fn from_shape(shape: &Shape) -> Self {
        match *shape {
            Shape::Box {
                width,
                height,
                depth,
            } => generate_box(width, height, depth),
            Shape::Plane { width, height } => generate_plane(width, height, 1, 1),
            Shape::Circle { radius, segments } => generate_circle(radius, segments),
            Shape::Ring {
                inner_radius,
                outer_radius,
                segments,
            } => generate_ring(inner_radius, outer_radius, segments),
        }
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds as (min, max)
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let first = *self.vertices.first()?;
        Some(self.vertices.iter().fold((first, first), |(mut lo, mut hi), v| {
            for axis in 0..3 {
                lo[axis] = lo[axis].min(v[axis]);
                hi[axis] = hi[axis].max(v[axis]);
            }
            (lo, hi)
        }))
    }

    /// Interleaves positions and normals into the GPU vertex format
    pub fn to_vertices(&self) -> Vec<Vertex3D> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, position)| Vertex3D {
                position: *position,
                normal: self.normals.get(i).copied().unwrap_or([0.0, 0.0, 1.0]),
            })
            .collect()
    }
}

impl Default for GeometryData {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_shape_box_bounds() {
        let data = GeometryData::from_shape(&Shape::Box {
            width: 8.0,
            height: 4.0,
            depth: 0.11,
        });
        let (lo, hi) = data.bounds().unwrap();
        assert!((hi[0] - lo[0] - 8.0).abs() < 1e-6);
        assert!((hi[1] - lo[1] - 4.0).abs() < 1e-6);
        assert!((hi[2] - lo[2] - 0.11).abs() < 1e-6);
    }

    #[test]
    fn test_vertices_are_castable() {
        let data = GeometryData::from_shape(&Shape::Plane {
            width: 1.0,
            height: 1.0,
        });
        let vertices = data.to_vertices();
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), vertices.len() * std::mem::size_of::<Vertex3D>());
        assert_eq!(vertices[0].normal, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_empty_geometry_has_no_bounds() {
        assert!(GeometryData::default().bounds().is_none());
    }
}
