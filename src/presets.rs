//! Ready-made scenes.
//!
//! - [`starter_scene`]: a green cube floating over a red ground plane, lit by an
//!   ambient and a shadow-casting directional light.
//! - [`demo_room`]: a 20 x 15 x 7 room with two framed windows on the front
//!   wall, a door on the back wall and a solid window panel on the left wall.

use cgmath::Vector3;

use crate::error::Result;
use crate::gfx::camera::{CameraDescriptor, OrbitControls};
use crate::gfx::light::Light;
use crate::gfx::scene::SceneDescription;
use crate::layout::record::{no_rotation, pitch, PlacementRecord, Shape};
use crate::layout::{Opening, RoomDimensions, RoomLayoutBuilder, WallId};

pub const DEMO_ROOM: RoomDimensions = RoomDimensions {
    width: 20.0,
    depth: 15.0,
    height: 7.0,
    wall_thickness: 0.1,
};

pub fn starter_scene() -> SceneDescription {
    let cube = PlacementRecord::new(
        "cube",
        Shape::Box {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
        },
        Vector3::new(1.0, 2.0, 1.0),
        no_rotation(),
        "cube",
    )
    .with_shadows(true, false);

    let ground = PlacementRecord::new(
        "ground",
        Shape::Plane {
            width: 20.0,
            height: 20.0,
        },
        Vector3::new(0.0, 0.0, 0.0),
        no_rotation(),
        "ground",
    )
    .with_shadows(false, true);

    let camera = CameraDescriptor::default()
        .with_position(Vector3::new(0.0, -3.0, 5.0))
        .with_rotation(pitch(0.5));

    SceneDescription::new(vec![cube, ground])
        .with_light(Light::ambient(0x404040))
        .with_light(Light::directional(0xffffff, 1.0, Vector3::new(-1.0, 1.0, 1.0)).with_shadows())
        .with_camera(camera)
}

pub fn demo_room() -> Result<SceneDescription> {
    let dims = DEMO_ROOM;
    let records = RoomLayoutBuilder::new(dims)
        .without_wall(WallId::Ceiling)
        .add_opening(WallId::Front, Opening::window(8.0, 4.0, -5.0, 0.0))
        .add_opening(WallId::Front, Opening::window(4.0, 3.0, 5.0, 0.5))
        .add_opening(WallId::Back, Opening::door(1.2, 2.4, 6.0, dims.height))
        .add_opening(
            WallId::Left,
            Opening::panel(3.0, 2.0, 0.0, 0.5).with_frame_thickness(0.15),
        )
        .generate()?;

    let camera = CameraDescriptor::default()
        .with_position(Vector3::new(0.0, 12.0, 22.0))
        .with_rotation(pitch(-0.45));
    let controls = OrbitControls::default().with_target(Vector3::new(0.0, dims.height / 2.0, 0.0));

    Ok(SceneDescription::new(records)
        .with_light(Light::ambient(0x404040))
        .with_light(Light::directional(0xffffff, 1.0, Vector3::new(-10.0, 20.0, 10.0)).with_shadows())
        .with_camera(camera)
        .with_controls(controls))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_scene() {
        let scene = starter_scene();
        assert_eq!(scene.get_object_names(), vec!["cube", "ground"]);
        assert_eq!(scene.lights.len(), 2);
        assert!(scene.lights[1].casts_shadow());
        assert!(scene.materials.get_material("cube").is_some());
    }

    #[test]
    fn test_demo_room() {
        let scene = demo_room().unwrap();
        let stats = scene.statistics();
        // two windows and the door cut holes, the panel does not
        assert_eq!(stats.hole_count, 3);
        assert!(scene.records.iter().all(|r| r.name != "ceiling_wall"));
        assert!(scene.controls.is_some());
    }
}
