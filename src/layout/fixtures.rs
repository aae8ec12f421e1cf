//! Door fixtures: a round porthole pane, the ring framing it and a handle.
//!
//! All placements are fractions of the door extents.

use cgmath::Vector3;

use super::opening::Opening;
use super::record::{PlacementRecord, Shape};
use super::room::WallPanel;
use crate::config::LayoutConfig;
use crate::error::Result;

/// Porthole centre, as a fraction of door height measured from the door bottom
pub const PORTHOLE_HEIGHT_FRACTION: f32 = 0.75;
/// Porthole radius, as a fraction of door width
pub const PORTHOLE_RADIUS_FRACTION: f32 = 0.2;
/// Outer ring radius relative to the porthole radius
pub const RING_OUTER_SCALE: f32 = 1.2;
/// Handle centre, as a fraction of door height measured from the door bottom
pub const HANDLE_HEIGHT_FRACTION: f32 = 0.45;
/// Handle offset from the door's vertical centre line, as a fraction of door width
pub const HANDLE_INSET_FRACTION: f32 = 0.4;
pub const HANDLE_SIZE: [f32; 3] = [0.05, 0.2, 0.08];

/// Porthole glass, ring and handle for a door on `wall`.
pub fn door_fixtures(
    wall: &WallPanel,
    door: &Opening,
    label: &str,
    config: &LayoutConfig,
) -> Result<Vec<PlacementRecord>> {
    config.validate()?;
    wall.ensure_vertical()?;
    door.validate()?;

    let center = wall.local_to_world(door.local_position);
    let bottom = center - Vector3::unit_y() * (door.height / 2.0);
    let normal = wall.normal();
    let rotation = wall.rotation();
    let face = wall.thickness() / 2.0;

    let radius = door.width * PORTHOLE_RADIUS_FRACTION;
    let porthole_center = Vector3::new(
        center.x,
        bottom.y + door.height * PORTHOLE_HEIGHT_FRACTION,
        center.z,
    );

    let glass = PlacementRecord::new(
        format!("{}.porthole_glass", label),
        Shape::Circle {
            radius,
            segments: config.circle_segments,
        },
        porthole_center + normal * (face + config.glass_offset),
        rotation,
        &config.materials.glass,
    )
    .with_shadows(false, false);

    let ring = PlacementRecord::new(
        format!("{}.porthole_ring", label),
        Shape::Ring {
            inner_radius: radius,
            outer_radius: radius * RING_OUTER_SCALE,
            segments: config.circle_segments,
        },
        porthole_center + normal * (face + 2.0 * config.glass_offset),
        rotation,
        &config.materials.frame,
    );

    let [hw, hh, hd] = HANDLE_SIZE;
    let handle_center = Vector3::new(center.x, bottom.y + door.height * HANDLE_HEIGHT_FRACTION, center.z)
        + wall.horizontal_axis() * (door.width * HANDLE_INSET_FRACTION)
        + normal * (face + hd / 2.0);
    let handle = PlacementRecord::new(
        format!("{}.handle", label),
        Shape::Box {
            width: hw,
            height: hh,
            depth: hd,
        },
        handle_center,
        rotation,
        &config.materials.handle,
    );

    Ok(vec![glass, ring, handle])
}
