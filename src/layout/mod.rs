//! # Room Layout Generation
//!
//! Turns room dimensions and per-wall opening specifications into a flat list of
//! [`PlacementRecord`]s. Generation is pure: the same input always yields the same
//! records and nothing is registered anywhere. A rendering back end consumes the
//! list and builds its own scene graph from it.
//!
//! ## Output order
//!
//! Walls are emitted in [`WallId::ALL`] order. Each wall record is followed by
//! the glass panes of its windows, then for every opening in input order its
//! primary record (door leaf or solid panel), its frame bars and, for doors,
//! the porthole and handle fixtures. Doors rest on the floor and are framed on
//! three sides only.
//!
//! Openings are numbered per wall in input order regardless of kind, and a
//! window's pane carries the same number: `front_wall.window1` is filled by
//! `front_wall.glass1`.
//!
//! ## Usage
//!
//! ```rust
//! use bothy::layout::{generate_room_layout, Opening, RoomDimensions, WallId, WallSpec};
//!
//! let dims = RoomDimensions::new(20.0, 15.0, 7.0, 0.1);
//! let walls = [WallSpec::new(WallId::Front).with_opening(Opening::window(8.0, 4.0, -5.0, 0.0))];
//! let records = generate_room_layout(&dims, &walls).unwrap();
//! assert!(records.iter().any(|r| r.name == "front_wall.glass0"));
//! ```

pub mod fixtures;
pub mod holes;
pub mod opening;
pub mod record;
pub mod room;

pub use fixtures::door_fixtures;
pub use holes::{add_glass_to_wall_holes, create_wall_with_holes};
pub use opening::{place_opening_with_frame, FramedOpening, Opening, OpeningKind, WallSpec};
pub use record::{HoleSpec, MaterialTag, PlacementRecord, Shape};
pub use room::{wall_placement, RoomDimensions, WallId, WallOrientation, WallPanel};

use log::{info, warn};

use crate::config::LayoutConfig;
use crate::error::Result;

/// Generates the full layout of a room with the default configuration.
pub fn generate_room_layout(
    dims: &RoomDimensions,
    walls: &[WallSpec],
) -> Result<Vec<PlacementRecord>> {
    generate_room_layout_with(dims, walls, &LayoutConfig::default())
}

/// Generates the full layout of a room with an explicit configuration.
pub fn generate_room_layout_with(
    dims: &RoomDimensions,
    walls: &[WallSpec],
    config: &LayoutConfig,
) -> Result<Vec<PlacementRecord>> {
    generate(dims, walls, config, &WallId::ALL)
}

fn generate(
    dims: &RoomDimensions,
    walls: &[WallSpec],
    config: &LayoutConfig,
    emitted: &[WallId],
) -> Result<Vec<PlacementRecord>> {
    dims.validate()?;
    config.validate()?;

    for spec in walls.iter().filter(|spec| !emitted.contains(&spec.wall)) {
        warn!(
            "skipping {} opening(s) on the omitted {} wall",
            spec.openings.len(),
            spec.wall
        );
    }

    let mut records = Vec::new();

    for &wall_id in WallId::ALL.iter().filter(|id| emitted.contains(*id)) {
        let openings: Vec<Opening> = walls
            .iter()
            .filter(|spec| spec.wall == wall_id)
            .flat_map(|spec| spec.openings.iter().copied())
            .collect();

        let wall = WallPanel::resolve(dims, wall_id, &config.materials);

        let cut: Vec<Opening> = openings
            .iter()
            .filter(|o| o.kind.cuts_hole())
            .copied()
            .collect();
        let windows = openings
            .iter()
            .enumerate()
            .filter(|(_, o)| o.kind == OpeningKind::Window);

        records.push(create_wall_with_holes(&wall, &cut, config)?);
        records.extend(holes::glass_panes(&wall, windows, config)?);

        for (i, opening) in openings.iter().enumerate() {
            let label = format!("{}_wall.{}{}", wall_id, opening.kind, i);
            let framed = place_opening_with_frame(
                &wall,
                opening,
                &label,
                opening.frame_thickness_or(config.frame_thickness),
                &config.materials.frame,
                config,
            )?;

            let FramedOpening {
                opening: primary,
                frame: [top, bottom, left, right],
            } = framed;
            if opening.kind != OpeningKind::Window {
                records.push(primary);
            }
            records.push(top);
            if opening.kind.has_sill() {
                records.push(bottom);
            }
            records.extend([left, right]);

            if opening.kind == OpeningKind::Door {
                records.extend(door_fixtures(&wall, opening, &label, config)?);
            }
        }
    }

    info!(
        "generated {} placement records for a {}x{}x{} room",
        records.len(),
        dims.width,
        dims.depth,
        dims.height
    );
    Ok(records)
}

/// Builder for room layouts
///
/// ```rust
/// use bothy::layout::{Opening, RoomDimensions, RoomLayoutBuilder, WallId};
///
/// let records = RoomLayoutBuilder::new(RoomDimensions::new(10.0, 8.0, 3.0, 0.1))
///     .without_wall(WallId::Ceiling)
///     .add_opening(WallId::Left, Opening::window(2.0, 1.2, 0.0, 0.3))
///     .generate()
///     .unwrap();
/// assert!(records.iter().all(|r| r.name != "ceiling_wall"));
/// ```
#[derive(Debug, Clone)]
pub struct RoomLayoutBuilder {
    dims: RoomDimensions,
    config: LayoutConfig,
    walls: Vec<WallSpec>,
    emitted: Vec<WallId>,
}

impl RoomLayoutBuilder {
    pub fn new(dims: RoomDimensions) -> Self {
        Self {
            dims,
            config: LayoutConfig::default(),
            walls: Vec::new(),
            emitted: WallId::ALL.to_vec(),
        }
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn add_opening(mut self, wall: WallId, opening: Opening) -> Self {
        match self.walls.iter_mut().find(|spec| spec.wall == wall) {
            Some(spec) => spec.openings.push(opening),
            None => self.walls.push(WallSpec::new(wall).with_opening(opening)),
        }
        self
    }

    pub fn add_wall(mut self, spec: WallSpec) -> Self {
        self.walls.push(spec);
        self
    }

    /// Leaves a wall out of the output, e.g. the ceiling of a room viewed from above
    pub fn without_wall(mut self, wall: WallId) -> Self {
        self.emitted.retain(|id| *id != wall);
        self
    }

    pub fn generate(&self) -> Result<Vec<PlacementRecord>> {
        generate(&self.dims, &self.walls, &self.config, &self.emitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_room_has_six_walls() {
        let dims = RoomDimensions::new(4.0, 3.0, 2.5, 0.1);
        let records = generate_room_layout(&dims, &[]).unwrap();
        assert_eq!(records.len(), 6);
        assert!(records.iter().all(|r| !r.requires_subtraction()));
    }

    #[test]
    fn test_window_emits_hole_glass_and_frame() {
        let dims = RoomDimensions::new(4.0, 3.0, 2.5, 0.1);
        let walls = [WallSpec::new(WallId::Back).with_opening(Opening::window(1.0, 1.0, 0.0, 0.2))];
        let records = generate_room_layout(&dims, &walls).unwrap();
        // 6 walls + 1 glass + 4 frame bars
        assert_eq!(records.len(), 11);
        let back = records.iter().find(|r| r.name == "back_wall").unwrap();
        assert_eq!(back.holes.len(), 1);
    }

    #[test]
    fn test_panel_does_not_cut_hole() {
        let dims = RoomDimensions::new(4.0, 3.0, 2.5, 0.1);
        let records = RoomLayoutBuilder::new(dims)
            .add_opening(WallId::Right, Opening::panel(1.0, 1.0, 0.0, 0.0))
            .generate()
            .unwrap();
        let right = records.iter().find(|r| r.name == "right_wall").unwrap();
        assert!(!right.requires_subtraction());
        assert!(records.iter().any(|r| r.name == "right_wall.panel0"));
    }

    #[test]
    fn test_door_emits_leaf_and_fixtures() {
        let dims = RoomDimensions::new(4.0, 3.0, 2.5, 0.1);
        let records = RoomLayoutBuilder::new(dims)
            .add_opening(WallId::Front, Opening::door(0.9, 2.0, 1.0, dims.height))
            .generate()
            .unwrap();
        // 6 walls + leaf + 3 frame bars + 3 fixtures
        assert_eq!(records.len(), 13);
        assert!(records.iter().any(|r| r.name == "front_wall.door0.handle"));
        assert!(records.iter().all(|r| r.name != "front_wall.door0.frame_bottom"));
    }

    #[test]
    fn test_door_frame_stays_above_room_base() {
        let dims = RoomDimensions::new(20.0, 15.0, 7.0, 0.1);
        let records = RoomLayoutBuilder::new(dims)
            .add_opening(WallId::Back, Opening::door(1.2, 2.4, 0.0, dims.height))
            .generate()
            .unwrap();

        let frame: Vec<&PlacementRecord> = records
            .iter()
            .filter(|r| r.name.starts_with("back_wall.door0.frame_"))
            .collect();
        assert_eq!(frame.len(), 3);
        for piece in frame {
            let Shape::Box { height, .. } = piece.shape else {
                panic!("{} is not a box", piece.name);
            };
            assert!(
                piece.position.y - height / 2.0 > -1e-5,
                "{} reaches below the floor",
                piece.name
            );
        }
    }

    #[test]
    fn test_glass_shares_index_with_its_window() {
        let dims = RoomDimensions::new(20.0, 15.0, 7.0, 0.1);
        let records = RoomLayoutBuilder::new(dims)
            .add_opening(WallId::Front, Opening::door(1.0, 2.2, -4.0, dims.height))
            .add_opening(WallId::Front, Opening::window(2.0, 1.5, 3.0, 0.5))
            .generate()
            .unwrap();

        let frame_top = records
            .iter()
            .find(|r| r.name == "front_wall.window1.frame_top")
            .unwrap();
        let glass = records.iter().find(|r| r.name == "front_wall.glass1").unwrap();
        assert!((glass.position.x - frame_top.position.x).abs() < 1e-5);
        assert!(records.iter().all(|r| r.name != "front_wall.glass0"));
    }

    #[test]
    fn test_openings_on_floor_rejected() {
        let dims = RoomDimensions::new(4.0, 3.0, 2.5, 0.1);
        let walls = [WallSpec::new(WallId::Floor).with_opening(Opening::window(1.0, 1.0, 0.0, 0.0))];
        assert!(generate_room_layout(&dims, &walls).is_err());
    }

    #[test]
    fn test_omitted_wall_skips_its_openings() {
        let dims = RoomDimensions::new(4.0, 3.0, 2.5, 0.1);
        let records = RoomLayoutBuilder::new(dims)
            .without_wall(WallId::Front)
            .add_opening(WallId::Front, Opening::window(1.0, 1.0, 0.0, 0.0))
            .generate()
            .unwrap();
        assert_eq!(records.len(), 5);
    }
}
