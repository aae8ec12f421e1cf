//! # Primitive Shape Generation
//!
//! This module contains functions to generate the primitive shapes used by
//! room layouts. All shapes are centred on the origin and generated with proper
//! normals and texture coordinates.

use super::GeometryData;
use std::f32::consts::PI;

/// Generate a box centred at the origin
///
/// # Arguments
/// * `width` - Extent along X
/// * `height` - Extent along Y
/// * `depth` - Extent along Z
///
/// Each face has outward normals and UV coordinates from 0 to 1.
pub fn generate_box(width: f32, height: f32, depth: f32) -> GeometryData {
    let mut data = GeometryData::new();

    let (x, y, z) = (width * 0.5, height * 0.5, depth * 0.5);

    let positions = [
        // Front face
        [-x, -y,  z], [ x, -y,  z], [ x,  y,  z], [-x,  y,  z],
        // Back face
        [-x, -y, -z], [-x,  y, -z], [ x,  y, -z], [ x, -y, -z],
        // Left face
        [-x, -y, -z], [-x, -y,  z], [-x,  y,  z], [-x,  y, -z],
        // Right face
        [ x, -y,  z], [ x, -y, -z], [ x,  y, -z], [ x,  y,  z],
        // Top face
        [-x,  y,  z], [ x,  y,  z], [ x,  y, -z], [-x,  y, -z],
        // Bottom face
        [-x, -y, -z], [ x, -y, -z], [ x, -y,  z], [-x, -y,  z],
    ];

    let tex_coords = [
        [0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0],
        [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0],
        [1.0, 0.0], [0.0, 0.0], [0.0, 1.0], [1.0, 1.0],
        [0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0],
        [0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0],
        [0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0],
    ];

    let face_normals: [[f32; 3]; 6] = [
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
        [-1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
    ];

    data.vertices = positions.to_vec();
    data.tex_coords = tex_coords.to_vec();
    data.normals = face_normals
        .iter()
        .flat_map(|n| std::iter::repeat(*n).take(4))
        .collect();

    // Two triangles per face, counter-clockwise
    data.indices = (0..6u32)
        .flat_map(|face| {
            let i = face * 4;
            [i, i + 1, i + 2, i + 2, i + 3, i]
        })
        .collect();

    data
}

/// Generate a plane in the XY plane
///
/// # Arguments
/// * `width` - Width of the plane (X direction)
/// * `height` - Height of the plane (Y direction)
/// * `width_segments` - Number of subdivisions along width
/// * `height_segments` - Number of subdivisions along height
///
/// Returns a plane centred at the origin with its normal along +Z.
pub fn generate_plane(width: f32, height: f32, width_segments: u32, height_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let w_segs = width_segments.max(1);
    let h_segs = height_segments.max(1);

    for y in 0..=h_segs {
        let v = y as f32 / h_segs as f32;
        let pos_y = (v - 0.5) * height;

        for x in 0..=w_segs {
            let u = x as f32 / w_segs as f32;
            let pos_x = (u - 0.5) * width;

            data.vertices.push([pos_x, pos_y, 0.0]);
            data.normals.push([0.0, 0.0, 1.0]);
            data.tex_coords.push([u, v]);
        }
    }

    // Counter-clockwise when viewed from +Z
    for y in 0..h_segs {
        for x in 0..w_segs {
            let i = y * (w_segs + 1) + x;
            let next_row = i + w_segs + 1;

            data.indices.push(i);
            data.indices.push(i + 1);
            data.indices.push(next_row);

            data.indices.push(next_row);
            data.indices.push(i + 1);
            data.indices.push(next_row + 1);
        }
    }

    data
}

/// Generate a flat disc as a triangle fan around the origin
///
/// # Arguments
/// * `radius` - Disc radius
/// * `segments` - Number of rim segments (at least 3)
pub fn generate_circle(radius: f32, segments: u32) -> GeometryData {
    let mut data = GeometryData::new();
    let segs = segments.max(3);

    data.vertices.push([0.0, 0.0, 0.0]);
    data.normals.push([0.0, 0.0, 1.0]);
    data.tex_coords.push([0.5, 0.5]);

    for i in 0..=segs {
        let angle = i as f32 * 2.0 * PI / segs as f32;
        let (sin_a, cos_a) = angle.sin_cos();

        data.vertices.push([radius * cos_a, radius * sin_a, 0.0]);
        data.normals.push([0.0, 0.0, 1.0]);
        data.tex_coords.push([0.5 + 0.5 * cos_a, 0.5 + 0.5 * sin_a]);
    }

    for i in 1..=segs {
        data.indices.push(0);
        data.indices.push(i);
        data.indices.push(i + 1);
    }

    data
}

/// Generate a flat annulus around the origin
///
/// # Arguments
/// * `inner_radius` - Radius of the hole
/// * `outer_radius` - Outer radius
/// * `segments` - Number of segments around the ring (at least 3)
pub fn generate_ring(inner_radius: f32, outer_radius: f32, segments: u32) -> GeometryData {
    let mut data = GeometryData::new();
    let segs = segments.max(3);

    for i in 0..=segs {
        let t = i as f32 / segs as f32;
        let (sin_a, cos_a) = (t * 2.0 * PI).sin_cos();

        data.vertices.push([inner_radius * cos_a, inner_radius * sin_a, 0.0]);
        data.normals.push([0.0, 0.0, 1.0]);
        data.tex_coords.push([t, 0.0]);

        data.vertices.push([outer_radius * cos_a, outer_radius * sin_a, 0.0]);
        data.normals.push([0.0, 0.0, 1.0]);
        data.tex_coords.push([t, 1.0]);
    }

    for i in 0..segs {
        let inner = i * 2;
        let outer = inner + 1;
        let next_inner = inner + 2;
        let next_outer = inner + 3;

        data.indices.push(inner);
        data.indices.push(outer);
        data.indices.push(next_outer);

        data.indices.push(inner);
        data.indices.push(next_outer);
        data.indices.push(next_inner);
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_generation() {
        let cube = generate_box(1.0, 1.0, 1.0);
        assert_eq!(cube.vertices.len(), 24); // 6 faces * 4 vertices
        assert_eq!(cube.indices.len(), 36); // 6 faces * 2 triangles * 3 indices
        assert_eq!(cube.normals.len(), 24);
        assert_eq!(cube.triangle_count(), 12);
    }

    #[test]
    fn test_plane_generation() {
        let plane = generate_plane(2.0, 2.0, 2, 2);
        assert_eq!(plane.vertices.len(), 9); // 3x3 grid
        assert_eq!(plane.indices.len(), 24); // 4 quads * 2 triangles * 3 indices
    }

    #[test]
    fn test_circle_generation() {
        let circle = generate_circle(0.5, 16);
        assert_eq!(circle.vertex_count(), 18); // centre + 17 rim vertices
        assert_eq!(circle.triangle_count(), 16);
        assert!(circle.indices.iter().all(|&i| (i as usize) < circle.vertex_count()));
    }

    #[test]
    fn test_ring_generation() {
        let ring = generate_ring(0.5, 0.6, 8);
        assert_eq!(ring.vertex_count(), 18);
        assert_eq!(ring.triangle_count(), 16);
        assert!(ring.indices.iter().all(|&i| (i as usize) < ring.vertex_count()));
        let r = ring.vertices[1];
        assert!(((r[0] * r[0] + r[1] * r[1]).sqrt() - 0.6).abs() < 1e-6);
    }
}
