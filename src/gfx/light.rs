//! Declarative light descriptors handed to the rendering back end.

use cgmath::Vector3;

use super::material::hex_to_rgba;

/// A light the back end should add to its scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Uniform light with no direction and no shadows
    Ambient { color: [f32; 3], intensity: f32 },
    /// Light shining from `position` towards the origin
    Directional {
        color: [f32; 3],
        intensity: f32,
        position: Vector3<f32>,
        cast_shadow: bool,
    },
}

impl Light {
    pub fn ambient(rgb: u32) -> Self {
        let [r, g, b, _] = hex_to_rgba(rgb);
        Light::Ambient {
            color: [r, g, b],
            intensity: 1.0,
        }
    }

    pub fn directional(rgb: u32, intensity: f32, position: Vector3<f32>) -> Self {
        let [r, g, b, _] = hex_to_rgba(rgb);
        Light::Directional {
            color: [r, g, b],
            intensity,
            position,
            cast_shadow: false,
        }
    }

    /// Builder pattern: Enable shadow casting (directional lights only)
    pub fn with_shadows(self) -> Self {
        match self {
            Light::Directional {
                color,
                intensity,
                position,
                ..
            } => Light::Directional {
                color,
                intensity,
                position,
                cast_shadow: true,
            },
            ambient => ambient,
        }
    }

    pub fn casts_shadow(&self) -> bool {
        matches!(
            self,
            Light::Directional {
                cast_shadow: true,
                ..
            }
        )
    }
}
