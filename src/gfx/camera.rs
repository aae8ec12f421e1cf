//! Declarative camera pose and orbit-controls parameters.
//!
//! Interaction (dragging, zooming, damping over time) belongs to the back end;
//! these types only describe the starting state.

use cgmath::{perspective, Deg, Euler, InnerSpace, Matrix4, Rad, SquareMatrix, Vector3};

use crate::layout::record::no_rotation;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Perspective camera placed by position and Euler rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraDescriptor {
    pub fovy: Deg<f32>,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
    pub position: Vector3<f32>,
    pub rotation: Euler<Rad<f32>>,
}

impl Default for CameraDescriptor {
    fn default() -> Self {
        Self {
            fovy: Deg(75.0),
            aspect: 16.0 / 9.0,
            znear: 0.1,
            zfar: 1000.0,
            position: Vector3::new(0.0, 0.0, 5.0),
            rotation: no_rotation(),
        }
    }
}

impl CameraDescriptor {
    pub fn with_position(mut self, position: Vector3<f32>) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Euler<Rad<f32>>) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }

    /// View matrix: inverse of the camera's world transform
    pub fn view_matrix(&self) -> Matrix4<f32> {
        let world = Matrix4::from_translation(self.position) * Matrix4::from(self.rotation);
        world.invert().unwrap_or_else(Matrix4::identity)
    }

    /// Projection * view, in wgpu clip space
    pub fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let proj = OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * self.view_matrix()
    }
}

/// Starting parameters for orbit-style camera controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitControls {
    pub target: Vector3<f32>,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub min_distance: Option<f32>,
    pub max_distance: Option<f32>,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vector3::new(0.0, 0.0, 0.0),
            enable_damping: true,
            damping_factor: 0.05,
            min_distance: None,
            max_distance: None,
        }
    }
}

impl OrbitControls {
    pub fn with_target(mut self, target: Vector3<f32>) -> Self {
        self.target = target;
        self
    }

    /// Distance from `camera` to the orbit target, clamped to the bounds
    pub fn distance(&self, camera: &CameraDescriptor) -> f32 {
        (camera.position - self.target).magnitude().clamp(
            self.min_distance.unwrap_or(f32::EPSILON),
            self.max_distance.unwrap_or(f32::MAX),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector4;

    #[test]
    fn test_view_matrix_moves_camera_to_origin() {
        let camera = CameraDescriptor::default().with_position(Vector3::new(1.0, 2.0, 3.0));
        let eye = camera.view_matrix() * Vector4::new(1.0, 2.0, 3.0, 1.0);
        assert!(eye.x.abs() < 1e-5 && eye.y.abs() < 1e-5 && eye.z.abs() < 1e-5);
    }

    #[test]
    fn test_view_projection_maps_depth_range_to_unit_interval() {
        let camera = CameraDescriptor::default().with_aspect(1.0);
        let vp = camera.build_view_projection_matrix();
        let ndc = |p: Vector4<f32>| {
            let clip = vp * p;
            Vector3::new(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w)
        };

        // camera at z = 5 looking down -Z
        let near = ndc(Vector4::new(0.0, 0.0, 5.0 - camera.znear, 1.0));
        assert!(near.x.abs() < 1e-5 && near.y.abs() < 1e-5);
        assert!(near.z.abs() < 1e-3);

        let far = ndc(Vector4::new(0.0, 0.0, 5.0 - camera.zfar, 1.0));
        assert!((far.z - 1.0).abs() < 1e-3);

        let mid = ndc(Vector4::new(0.0, 0.0, 0.0, 1.0));
        assert!(mid.z > 0.0 && mid.z < 1.0);

        // a point on the upper edge of the 75 degree frustum
        let half = (37.5f32).to_radians().tan() * 5.0;
        let top = ndc(Vector4::new(0.0, half, 0.0, 1.0));
        assert!((top.y - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_orbit_distance_clamped() {
        let camera = CameraDescriptor::default();
        let mut controls = OrbitControls::default();
        assert!((controls.distance(&camera) - 5.0).abs() < 1e-6);
        controls.max_distance = Some(2.0);
        assert_eq!(controls.distance(&camera), 2.0);
    }
}
