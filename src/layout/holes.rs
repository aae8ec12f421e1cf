//! # Hole Cutting and Glass Fill
//!
//! A wall with openings is emitted once, carrying one hole volume per opening.
//! The subtraction itself is left to the back end's CSG facility. Each hole
//! is then paired with a thin glass pane sitting just off the wall face.

use cgmath::Vector3;
use log::debug;

use super::opening::Opening;
use super::record::{HoleSpec, PlacementRecord, Shape};
use super::room::WallPanel;
use crate::config::LayoutConfig;
use crate::error::Result;

/// Emits `wall` as a record tagged with one hole volume per opening.
///
/// Each hole is `width x height x (thickness + hole_epsilon)`, centred on the
/// opening and sharing the wall's rotation.
pub fn create_wall_with_holes(
    wall: &WallPanel,
    openings: &[Opening],
    config: &LayoutConfig,
) -> Result<PlacementRecord> {
    config.validate()?;
    if !openings.is_empty() {
        wall.ensure_vertical()?;
    }

    let depth = wall.thickness() + config.hole_epsilon;
    let holes = openings
        .iter()
        .map(|opening| -> Result<HoleSpec> {
            opening.validate()?;
            Ok(HoleSpec {
                size: Vector3::new(opening.width, opening.height, depth),
                position: wall.local_to_world(opening.local_position),
                rotation: wall.rotation(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("{} wall carries {} hole(s)", wall.id, holes.len());
    Ok(wall.to_record().with_holes(holes))
}

/// Emits one glass pane per opening, offset from the wall centre by half the
/// wall thickness plus `glass_offset` along the wall normal.
pub fn add_glass_to_wall_holes(
    wall: &WallPanel,
    openings: &[Opening],
    config: &LayoutConfig,
) -> Result<Vec<PlacementRecord>> {
    glass_panes(wall, openings.iter().enumerate(), config)
}

/// Glass panes for openings paired with their index among all openings of
/// the wall, so pane `glass{i}` fills opening `{kind}{i}`.
pub(crate) fn glass_panes<'a>(
    wall: &WallPanel,
    openings: impl IntoIterator<Item = (usize, &'a Opening)>,
    config: &LayoutConfig,
) -> Result<Vec<PlacementRecord>> {
    config.validate()?;
    let openings: Vec<(usize, &Opening)> = openings.into_iter().collect();
    if !openings.is_empty() {
        wall.ensure_vertical()?;
    }

    let standoff = wall.normal() * (wall.thickness() / 2.0 + config.glass_offset);
    openings
        .into_iter()
        .map(|(i, opening)| -> Result<PlacementRecord> {
            opening.validate()?;
            Ok(PlacementRecord::new(
                format!("{}_wall.glass{}", wall.id, i),
                Shape::Plane {
                    width: opening.width,
                    height: opening.height,
                },
                wall.local_to_world(opening.local_position) + standoff,
                wall.rotation(),
                &config.materials.glass,
            )
            .with_shadows(false, false))
        })
        .collect()
}
