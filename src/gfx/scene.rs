//! # Scene Description
//!
//! A [`SceneDescription`] bundles everything a rendering back end needs to build
//! its scene graph once at startup: placement records, lights, the camera and
//! the material library resolving record tags.
//!
//! The back end is abstracted by [`RenderBackend`]. It is asked to instantiate a
//! node per record, to subtract hole boxes from nodes that carry them, and to add
//! the finished nodes, lights and camera to its scene. The description itself
//! never touches renderer state.

use log::{debug, info};

use super::camera::{CameraDescriptor, OrbitControls};
use super::geometry::GeometryData;
use super::light::Light;
use super::material::{Material, MaterialLibrary};
use crate::error::Result;
use crate::layout::record::{HoleSpec, PlacementRecord};

/// External capabilities a rendering back end provides
pub trait RenderBackend {
    /// Back-end handle for one scene-graph node
    type Node;

    /// Builds a node for `record` from its mesh and resolved material
    fn instantiate(
        &mut self,
        record: &PlacementRecord,
        mesh: &GeometryData,
        material: &Material,
    ) -> Result<Self::Node>;

    /// Boolean subtraction of the box `hole` from `target`
    fn subtract_box(
        &mut self,
        target: Self::Node,
        hole: &HoleSpec,
        hole_mesh: &GeometryData,
    ) -> Result<Self::Node>;

    /// Registers a finished node with the back end's scene
    fn add_node(&mut self, node: Self::Node);

    fn add_light(&mut self, light: &Light);

    fn set_camera(&mut self, camera: &CameraDescriptor, controls: Option<&OrbitControls>);
}

/// Everything needed to build a scene, as plain data
#[derive(Debug, Clone)]
pub struct SceneDescription {
    pub records: Vec<PlacementRecord>,
    pub lights: Vec<Light>,
    pub camera: CameraDescriptor,
    pub controls: Option<OrbitControls>,
    pub materials: MaterialLibrary,
}

impl SceneDescription {
    /// Creates a description with the default camera and material palette
    pub fn new(records: Vec<PlacementRecord>) -> Self {
        Self {
            records,
            lights: Vec::new(),
            camera: CameraDescriptor::default(),
            controls: None,
            materials: MaterialLibrary::with_default_palette(),
        }
    }

    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    pub fn with_camera(mut self, camera: CameraDescriptor) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_controls(mut self, controls: OrbitControls) -> Self {
        self.controls = Some(controls);
        self
    }

    pub fn with_materials(mut self, materials: MaterialLibrary) -> Self {
        self.materials = materials;
        self
    }

    /// Hands the whole description to `backend`.
    ///
    /// Stops at the first back-end error; nodes added before it stay added.
    pub fn submit<B: RenderBackend>(&self, backend: &mut B) -> Result<SceneStatistics> {
        for record in &self.records {
            let mesh = GeometryData::from_shape(&record.shape);
            let material = self.materials.resolve(&record.material);
            let mut node = backend.instantiate(record, &mesh, material)?;

            for hole in &record.holes {
                let hole_mesh = super::geometry::generate_box(hole.size.x, hole.size.y, hole.size.z);
                node = backend.subtract_box(node, hole, &hole_mesh)?;
            }

            debug!("submitted '{}' ({})", record.name, record.shape.kind_name());
            backend.add_node(node);
        }

        for light in &self.lights {
            backend.add_light(light);
        }
        backend.set_camera(&self.camera, self.controls.as_ref());

        let stats = self.statistics();
        info!(
            "submitted {} objects ({} triangles, {} holes) and {} lights",
            stats.object_count, stats.total_triangles, stats.hole_count, stats.light_count
        );
        Ok(stats)
    }

    /// Gets statistics about the scene
    pub fn statistics(&self) -> SceneStatistics {
        let meshes: Vec<GeometryData> = self
            .records
            .iter()
            .map(|r| GeometryData::from_shape(&r.shape))
            .collect();

        SceneStatistics {
            object_count: self.records.len(),
            light_count: self.lights.len(),
            hole_count: self.records.iter().map(|r| r.holes.len()).sum(),
            total_triangles: meshes.iter().map(|m| m.triangle_count()).sum(),
            total_vertices: meshes.iter().map(|m| m.vertex_count()).sum(),
        }
    }

    /// Gets all record names for display
    pub fn get_object_names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }
}

/// Scene statistics for debugging and UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneStatistics {
    pub object_count: usize,
    pub light_count: usize,
    pub hole_count: usize,
    pub total_triangles: usize,
    pub total_vertices: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;
    use crate::layout::record::{no_rotation, Shape};
    use cgmath::Vector3;

    /// Back end that records every call
    #[derive(Default)]
    struct RecordingBackend {
        nodes: Vec<(String, usize)>,
        subtractions: usize,
        lights: usize,
        camera_set: bool,
        fail_on: Option<String>,
    }

    impl RenderBackend for RecordingBackend {
        type Node = (String, usize);

        fn instantiate(
            &mut self,
            record: &PlacementRecord,
            mesh: &GeometryData,
            _material: &Material,
        ) -> Result<Self::Node> {
            if self.fail_on.as_deref() == Some(record.name.as_str()) {
                return Err(LayoutError::backend("out of memory"));
            }
            Ok((record.name.clone(), mesh.triangle_count()))
        }

        fn subtract_box(
            &mut self,
            target: Self::Node,
            _hole: &HoleSpec,
            _hole_mesh: &GeometryData,
        ) -> Result<Self::Node> {
            self.subtractions += 1;
            Ok(target)
        }

        fn add_node(&mut self, node: Self::Node) {
            self.nodes.push(node);
        }

        fn add_light(&mut self, _light: &Light) {
            self.lights += 1;
        }

        fn set_camera(&mut self, _camera: &CameraDescriptor, _controls: Option<&OrbitControls>) {
            self.camera_set = true;
        }
    }

    fn cube() -> PlacementRecord {
        PlacementRecord::new(
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
    }

    #[test]
    fn test_submit_drives_backend() {
        let hole = HoleSpec {
            size: Vector3::new(0.5, 0.5, 1.1),
            position: Vector3::new(1.0, 2.0, 1.0),
            rotation: no_rotation(),
        };
        let scene = SceneDescription::new(vec![cube().with_holes(vec![hole])])
            .with_light(Light::ambient(0x404040));

        let mut backend = RecordingBackend::default();
        let stats = scene.submit(&mut backend).unwrap();

        assert_eq!(backend.nodes, vec![("cube".to_string(), 12)]);
        assert_eq!(backend.subtractions, 1);
        assert_eq!(backend.lights, 1);
        assert!(backend.camera_set);
        assert_eq!(stats.hole_count, 1);
        assert_eq!(stats.total_triangles, 12);
    }

    #[test]
    fn test_submit_propagates_backend_errors() {
        let scene = SceneDescription::new(vec![cube()]);
        let mut backend = RecordingBackend {
            fail_on: Some("cube".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            scene.submit(&mut backend),
            Err(LayoutError::Backend(_))
        ));
        assert!(backend.nodes.is_empty());
        assert!(!backend.camera_set);
    }
}
