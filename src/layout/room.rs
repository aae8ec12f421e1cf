//! # Room Shell
//!
//! Room dimensions, the six wall identities and wall placement.
//!
//! The room is centred on the origin in X and Z with the floor at `y = 0`.
//! Left and right walls are rotated ±90° about the vertical axis; every other
//! wall is unrotated. The wall orientation is carried as an explicit enum so
//! callers never have to recover it from a rotation angle.

use std::f32::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use cgmath::{Euler, Rad, Vector2, Vector3};
use log::warn;

use super::record::{no_rotation, yaw, MaterialTag, PlacementRecord, Shape};
use crate::config::{LayoutConfig, MaterialTags};
use crate::error::{ensure_positive, LayoutError, Result};

/// Interior extents of a room, in model-space units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomDimensions {
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub wall_thickness: f32,
}

impl RoomDimensions {
    pub fn new(width: f32, depth: f32, height: f32, wall_thickness: f32) -> Self {
        Self {
            width,
            depth,
            height,
            wall_thickness,
        }
    }

    /// Rejects non-positive or non-finite dimensions.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("width", self.width)?;
        ensure_positive("depth", self.depth)?;
        ensure_positive("height", self.height)?;
        ensure_positive("wall_thickness", self.wall_thickness)?;

        let smallest = self.width.min(self.depth).min(self.height);
        if self.wall_thickness * 2.0 >= smallest {
            warn!(
                "wall thickness {} is not small against the smallest room extent {}",
                self.wall_thickness, smallest
            );
        }
        Ok(())
    }
}

/// The six faces of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallId {
    Floor,
    Ceiling,
    Front,
    Back,
    Left,
    Right,
}

impl WallId {
    pub const ALL: [WallId; 6] = [
        WallId::Floor,
        WallId::Ceiling,
        WallId::Front,
        WallId::Back,
        WallId::Left,
        WallId::Right,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WallId::Floor => "floor",
            WallId::Ceiling => "ceiling",
            WallId::Front => "front",
            WallId::Back => "back",
            WallId::Left => "left",
            WallId::Right => "right",
        }
    }

    pub fn orientation(&self) -> WallOrientation {
        match self {
            WallId::Floor | WallId::Ceiling => WallOrientation::Horizontal,
            WallId::Front | WallId::Back => WallOrientation::FrontBack,
            WallId::Left | WallId::Right => WallOrientation::LeftRight,
        }
    }
}

impl fmt::Display for WallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WallId {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        let wall = match s.trim().to_ascii_lowercase().as_str() {
            "floor" => WallId::Floor,
            "ceiling" => WallId::Ceiling,
            "front" => WallId::Front,
            "back" => WallId::Back,
            "left" => WallId::Left,
            "right" => WallId::Right,
            _ => {
                return Err(LayoutError::invalid_argument(format!(
                    "unknown wall identity '{}'",
                    s
                )))
            }
        };
        Ok(wall)
    }
}

/// Which way a wall faces. Decides the axis frame pieces are displaced along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallOrientation {
    /// Floor and ceiling
    Horizontal,
    /// Unrotated vertical walls spanning the room width (X)
    FrontBack,
    /// Vertical walls rotated ±90° about Y, spanning the room depth (Z)
    LeftRight,
}

/// A wall resolved against concrete room dimensions.
///
/// `size` is given in the wall's local frame: width along the local X axis,
/// height along Y and thickness along Z for vertical walls.
#[derive(Debug, Clone, PartialEq)]
pub struct WallPanel {
    pub id: WallId,
    pub size: Vector3<f32>,
    pub position: Vector3<f32>,
    pub material: MaterialTag,
}

impl WallPanel {
    pub fn resolve(dims: &RoomDimensions, id: WallId, tags: &MaterialTags) -> Self {
        let t = dims.wall_thickness;
        let (size, position, material) = match id {
            WallId::Floor => (
                Vector3::new(dims.width, t, dims.depth),
                Vector3::new(0.0, t / 2.0, 0.0),
                &tags.floor,
            ),
            WallId::Ceiling => (
                Vector3::new(dims.width, t, dims.depth),
                Vector3::new(0.0, dims.height - t / 2.0, 0.0),
                &tags.ceiling,
            ),
            WallId::Front => (
                Vector3::new(dims.width, dims.height, t),
                Vector3::new(0.0, dims.height / 2.0, -dims.depth / 2.0),
                &tags.wall,
            ),
            WallId::Back => (
                Vector3::new(dims.width, dims.height, t),
                Vector3::new(0.0, dims.height / 2.0, dims.depth / 2.0),
                &tags.wall,
            ),
            WallId::Left => (
                Vector3::new(dims.depth, dims.height, t),
                Vector3::new(-dims.width / 2.0, dims.height / 2.0, 0.0),
                &tags.wall,
            ),
            WallId::Right => (
                Vector3::new(dims.depth, dims.height, t),
                Vector3::new(dims.width / 2.0, dims.height / 2.0, 0.0),
                &tags.wall,
            ),
        };

        Self {
            id,
            size,
            position,
            material: material.clone(),
        }
    }

    pub fn orientation(&self) -> WallOrientation {
        self.id.orientation()
    }

    pub fn rotation(&self) -> Euler<Rad<f32>> {
        match self.id {
            WallId::Left => yaw(FRAC_PI_2),
            WallId::Right => yaw(-FRAC_PI_2),
            _ => no_rotation(),
        }
    }

    /// World direction of the wall's local +X axis.
    ///
    /// Left/right walls run along the room depth, everything else along the width.
    pub fn horizontal_axis(&self) -> Vector3<f32> {
        match self.id {
            WallId::Left => Vector3::new(0.0, 0.0, -1.0),
            WallId::Right => Vector3::new(0.0, 0.0, 1.0),
            _ => Vector3::new(1.0, 0.0, 0.0),
        }
    }

    /// World direction of the wall's local +Z axis
    pub fn normal(&self) -> Vector3<f32> {
        match self.id {
            WallId::Left => Vector3::new(1.0, 0.0, 0.0),
            WallId::Right => Vector3::new(-1.0, 0.0, 0.0),
            WallId::Floor | WallId::Ceiling => Vector3::new(0.0, 1.0, 0.0),
            WallId::Front | WallId::Back => Vector3::new(0.0, 0.0, 1.0),
        }
    }

    /// Extent of the wall along its normal
    pub fn thickness(&self) -> f32 {
        match self.orientation() {
            WallOrientation::Horizontal => self.size.y,
            _ => self.size.z,
        }
    }

    /// Maps an in-plane offset (along the wall, up) to a world position.
    pub fn local_to_world(&self, offset: Vector2<f32>) -> Vector3<f32> {
        self.position + self.horizontal_axis() * offset.x + Vector3::unit_y() * offset.y
    }

    /// Fails for walls that cannot hold openings (floor and ceiling).
    pub fn ensure_vertical(&self) -> Result<()> {
        if self.orientation() == WallOrientation::Horizontal {
            return Err(LayoutError::invalid_argument(format!(
                "the {} cannot hold openings",
                self.id
            )));
        }
        Ok(())
    }

    pub fn to_record(&self) -> PlacementRecord {
        PlacementRecord::new(
            format!("{}_wall", self.id),
            Shape::Box {
                width: self.size.x,
                height: self.size.y,
                depth: self.size.z,
            },
            self.position,
            self.rotation(),
            &self.material,
        )
    }
}

/// Places one of the six walls of a room as a box record.
pub fn wall_placement(
    dims: &RoomDimensions,
    wall: WallId,
    config: &LayoutConfig,
) -> Result<PlacementRecord> {
    dims.validate()?;
    config.validate()?;
    Ok(WallPanel::resolve(dims, wall, &config.materials).to_record())
}
