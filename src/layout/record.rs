//! # Placement Records
//!
//! The output unit of the generator. A [`PlacementRecord`] is a declarative
//! description of one renderable shape: what it is, where it sits, how it is
//! rotated and which material tag the back end should resolve for it. Records
//! own no renderer resources.

use cgmath::{Euler, Matrix4, Rad, Vector3};

/// Material tag for referencing materials in the rendering back end
pub type MaterialTag = String;

/// Shape of a placement record, in the record's local frame.
///
/// Planes, circles and rings lie in the local XY plane facing +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Box { width: f32, height: f32, depth: f32 },
    Plane { width: f32, height: f32 },
    Circle { radius: f32, segments: u32 },
    Ring { inner_radius: f32, outer_radius: f32, segments: u32 },
}

impl Shape {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Box { .. } => "box",
            Shape::Plane { .. } => "plane",
            Shape::Circle { .. } => "circle",
            Shape::Ring { .. } => "ring",
        }
    }
}

/// A box volume the back end must subtract from its host record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoleSpec {
    /// Box extents (width, height, depth) in the host wall's local frame
    pub size: Vector3<f32>,
    /// World-space centre of the box
    pub position: Vector3<f32>,
    pub rotation: Euler<Rad<f32>>,
}

impl HoleSpec {
    pub fn transform(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position) * Matrix4::from(self.rotation)
    }
}

/// One renderable shape with its pose, material tag and shadow flags.
///
/// Shadow flags are advisory and passed straight through to the back end.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRecord {
    pub name: String,
    pub shape: Shape,
    pub position: Vector3<f32>,
    pub rotation: Euler<Rad<f32>>,
    pub material: MaterialTag,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    /// Hole volumes to subtract before the record is displayed
    pub holes: Vec<HoleSpec>,
}

impl PlacementRecord {
    /// Creates a record that casts and receives shadows and has no holes
    pub fn new(
        name: impl Into<String>,
        shape: Shape,
        position: Vector3<f32>,
        rotation: Euler<Rad<f32>>,
        material: &str,
    ) -> Self {
        Self {
            name: name.into(),
            shape,
            position,
            rotation,
            material: material.to_string(),
            cast_shadow: true,
            receive_shadow: true,
            holes: Vec::new(),
        }
    }

    /// Builder pattern: Set shadow flags
    pub fn with_shadows(mut self, cast: bool, receive: bool) -> Self {
        self.cast_shadow = cast;
        self.receive_shadow = receive;
        self
    }

    /// Builder pattern: Attach hole volumes
    pub fn with_holes(mut self, holes: Vec<HoleSpec>) -> Self {
        self.holes = holes;
        self
    }

    /// Whether the back end has to run a boolean subtraction for this record
    pub fn requires_subtraction(&self) -> bool {
        !self.holes.is_empty()
    }

    /// Model matrix: translation * rotation (Euler XYZ)
    pub fn transform(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position) * Matrix4::from(self.rotation)
    }
}

/// Rotation of `angle` radians about the vertical axis
pub fn yaw(angle: f32) -> Euler<Rad<f32>> {
    Euler::new(Rad(0.0), Rad(angle), Rad(0.0))
}

/// Rotation of `angle` radians about the X axis
pub fn pitch(angle: f32) -> Euler<Rad<f32>> {
    Euler::new(Rad(angle), Rad(0.0), Rad(0.0))
}

pub fn no_rotation() -> Euler<Rad<f32>> {
    yaw(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Vector4, Zero};

    #[test]
    fn test_record_defaults() {
        let record = PlacementRecord::new(
            "cube",
            Shape::Box { width: 1.0, height: 1.0, depth: 1.0 },
            Vector3::zero(),
            no_rotation(),
            "cube",
        );
        assert!(record.cast_shadow);
        assert!(record.receive_shadow);
        assert!(!record.requires_subtraction());
        assert_eq!(record.shape.kind_name(), "box");
    }

    #[test]
    fn test_transform_translates_origin() {
        let record = PlacementRecord::new(
            "plane",
            Shape::Plane { width: 2.0, height: 2.0 },
            Vector3::new(1.0, 2.0, 3.0),
            pitch(-std::f32::consts::FRAC_PI_2),
            "ground",
        );
        let origin = record.transform() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!((origin.x - 1.0).abs() < 1e-6);
        assert!((origin.y - 2.0).abs() < 1e-6);
        assert!((origin.z - 3.0).abs() < 1e-6);
    }
}
