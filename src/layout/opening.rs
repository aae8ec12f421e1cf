//! # Openings and Frames
//!
//! Windows, doors and solid window panels placed on a host wall, each bordered
//! by four frame bars.

use std::fmt;

use cgmath::{Vector2, Vector3};
use log::debug;

use super::record::{PlacementRecord, Shape};
use super::room::{RoomDimensions, WallId, WallPanel};
use crate::config::{LayoutConfig, MaterialTags};
use crate::error::{ensure_positive, Result};

/// What fills an opening
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningKind {
    /// Hole cut into the wall, filled with a glass pane
    Window,
    /// Hole cut into the wall, filled with a door leaf and its fixtures
    Door,
    /// Solid window panel laid over an uncut wall
    Panel,
}

impl fmt::Display for OpeningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OpeningKind::Window => "window",
            OpeningKind::Door => "door",
            OpeningKind::Panel => "panel",
        })
    }
}

impl OpeningKind {
    /// Whether this kind needs a hole subtracted from its host wall
    pub fn cuts_hole(&self) -> bool {
        matches!(self, OpeningKind::Window | OpeningKind::Door)
    }

    /// Whether the frame closes below the opening. Doors stand on the floor
    /// and get no bottom bar in a generated room.
    pub fn has_sill(&self) -> bool {
        !matches!(self, OpeningKind::Door)
    }
}

/// A rectangular opening on a wall.
///
/// `local_position` is the offset of the opening's centre from the wall's
/// centre: `x` along the wall, `y` up. Openings are not checked against the
/// wall bounds or against each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opening {
    pub width: f32,
    pub height: f32,
    pub local_position: Vector2<f32>,
    pub frame_thickness: Option<f32>,
    pub kind: OpeningKind,
}

impl Opening {
    pub fn new(width: f32, height: f32, local_position: Vector2<f32>, kind: OpeningKind) -> Self {
        Self {
            width,
            height,
            local_position,
            frame_thickness: None,
            kind,
        }
    }

    pub fn window(width: f32, height: f32, x: f32, y: f32) -> Self {
        Self::new(width, height, Vector2::new(x, y), OpeningKind::Window)
    }

    /// A door standing on the floor of a wall `wall_height` tall
    pub fn door(width: f32, height: f32, x: f32, wall_height: f32) -> Self {
        let y = (height - wall_height) / 2.0;
        Self::new(width, height, Vector2::new(x, y), OpeningKind::Door)
    }

    pub fn panel(width: f32, height: f32, x: f32, y: f32) -> Self {
        Self::new(width, height, Vector2::new(x, y), OpeningKind::Panel)
    }

    /// Builder pattern: Set frame thickness
    pub fn with_frame_thickness(mut self, thickness: f32) -> Self {
        self.frame_thickness = Some(thickness);
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("opening width", self.width)?;
        ensure_positive("opening height", self.height)?;
        if let Some(frame) = self.frame_thickness {
            ensure_positive("frame thickness", frame)?;
        }
        Ok(())
    }

    pub fn frame_thickness_or(&self, default: f32) -> f32 {
        self.frame_thickness.unwrap_or(default)
    }
}

/// A wall together with the openings cut into or laid over it.
#[derive(Debug, Clone, PartialEq)]
pub struct WallSpec {
    pub wall: WallId,
    pub openings: Vec<Opening>,
}

impl WallSpec {
    pub fn new(wall: WallId) -> Self {
        Self {
            wall,
            openings: Vec::new(),
        }
    }

    /// Builder pattern: Add an opening
    pub fn with_opening(mut self, opening: Opening) -> Self {
        self.openings.push(opening);
        self
    }

    /// Resolves position and rotation of the wall inside `dims`
    pub fn panel(&self, dims: &RoomDimensions, tags: &MaterialTags) -> WallPanel {
        WallPanel::resolve(dims, self.wall, tags)
    }
}

/// Primary opening record plus its frame bars in top, bottom, left, right order
#[derive(Debug, Clone, PartialEq)]
pub struct FramedOpening {
    pub opening: PlacementRecord,
    pub frame: [PlacementRecord; 4],
}

impl FramedOpening {
    pub fn top(&self) -> &PlacementRecord {
        &self.frame[0]
    }

    pub fn bottom(&self) -> &PlacementRecord {
        &self.frame[1]
    }

    pub fn left(&self) -> &PlacementRecord {
        &self.frame[2]
    }

    pub fn right(&self) -> &PlacementRecord {
        &self.frame[3]
    }
}

/// Places an opening and the four bars framing it on `wall`.
///
/// Top and bottom bars span `width + 2 * frame_thickness` so they cover the
/// corners; side bars span the opening height. Bars are displaced along the
/// wall's horizontal axis, which is the room depth for left/right walls and
/// the room width for front/back walls.
pub fn place_opening_with_frame(
    wall: &WallPanel,
    opening: &Opening,
    label: &str,
    frame_thickness: f32,
    frame_material: &str,
    config: &LayoutConfig,
) -> Result<FramedOpening> {
    config.validate()?;
    wall.ensure_vertical()?;
    opening.validate()?;
    ensure_positive("frame thickness", frame_thickness)?;

    let center = wall.local_to_world(opening.local_position);
    let rotation = wall.rotation();
    let axis = wall.horizontal_axis();
    let up = Vector3::unit_y();

    let (w, h, f) = (opening.width, opening.height, frame_thickness);

    let (primary_material, primary_depth) = match opening.kind {
        OpeningKind::Door => (&config.materials.door, wall.thickness()),
        OpeningKind::Window | OpeningKind::Panel => (
            &config.materials.window,
            wall.thickness() + config.hole_epsilon,
        ),
    };
    let primary = PlacementRecord::new(
        label,
        Shape::Box {
            width: w,
            height: h,
            depth: primary_depth,
        },
        center,
        rotation,
        primary_material,
    );

    let horizontal_bar = Shape::Box {
        width: w + 2.0 * f,
        height: f,
        depth: config.frame_depth,
    };
    let vertical_bar = Shape::Box {
        width: f,
        height: h,
        depth: config.frame_depth,
    };
    let vertical_offset = up * (h / 2.0 + f / 2.0);
    let horizontal_offset = axis * (w / 2.0 + f / 2.0);

    let bar = |side: &str, shape: Shape, position: Vector3<f32>| {
        PlacementRecord::new(
            format!("{}.frame_{}", label, side),
            shape,
            position,
            rotation,
            frame_material,
        )
    };

    let frame = [
        bar("top", horizontal_bar, center + vertical_offset),
        bar("bottom", horizontal_bar, center - vertical_offset),
        bar("left", vertical_bar, center - horizontal_offset),
        bar("right", vertical_bar, center + horizontal_offset),
    ];

    debug!(
        "placed {} '{}' ({}x{}) on the {} wall at {:?}",
        opening.kind, label, w, h, wall.id, center
    );

    Ok(FramedOpening {
        opening: primary,
        frame,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn front_wall() -> WallPanel {
        let dims = RoomDimensions::new(20.0, 15.0, 7.0, 0.1);
        WallPanel::resolve(&dims, WallId::Front, &MaterialTags::default())
    }

    #[test]
    fn test_door_rests_on_floor() {
        let door = Opening::door(1.0, 2.2, 3.0, 7.0);
        assert!((door.local_position.y - (-2.4)).abs() < 1e-6);
        assert_eq!(door.kind, OpeningKind::Door);
    }

    #[test]
    fn test_frame_pieces_sizes() {
        let config = LayoutConfig::default();
        let opening = Opening::window(2.0, 1.5, 0.0, 0.0);
        let framed =
            place_opening_with_frame(&front_wall(), &opening, "w", 0.2, "frame", &config).unwrap();

        match framed.top().shape {
            Shape::Box { width, height, .. } => {
                assert!((width - 2.4).abs() < 1e-6);
                assert!((height - 0.2).abs() < 1e-6);
            }
            other => panic!("unexpected shape {:?}", other),
        }
        match framed.left().shape {
            Shape::Box { width, height, .. } => {
                assert!((width - 0.2).abs() < 1e-6);
                assert!((height - 1.5).abs() < 1e-6);
            }
            other => panic!("unexpected shape {:?}", other),
        }
        assert_eq!(framed.opening.material, "window");
        assert!(framed.frame.iter().all(|r| r.material == "frame"));
    }

    #[test]
    fn test_invalid_opening_rejected() {
        let config = LayoutConfig::default();
        let opening = Opening::window(0.0, 1.5, 0.0, 0.0);
        assert!(
            place_opening_with_frame(&front_wall(), &opening, "w", 0.2, "frame", &config).is_err()
        );
        let opening = Opening::window(1.0, 1.5, 0.0, 0.0).with_frame_thickness(-1.0);
        assert!(opening.validate().is_err());
    }
}
