//! # Layout Configuration
//!
//! Tunables for the room layout generator. Every value has a sensible default so
//! `LayoutConfig::default()` reproduces the demo room; individual values are
//! overridden with the builder-style `with_*` setters.
//!
//! ```rust
//! use bothy::config::LayoutConfig;
//!
//! let config = LayoutConfig::default()
//!     .with_frame_thickness(0.2)
//!     .with_glass_material("frosted_glass");
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{ensure_positive, Result};
use crate::layout::record::MaterialTag;

/// Extra depth added to every hole box so the subtraction cleanly pierces both
/// faces of the wall.
pub const DEFAULT_HOLE_EPSILON: f32 = 0.01;

/// Distance between a wall face and the glass pane filling one of its holes.
pub const DEFAULT_GLASS_OFFSET: f32 = 0.001;

pub const DEFAULT_FRAME_THICKNESS: f32 = 0.1;
pub const DEFAULT_FRAME_DEPTH: f32 = 0.15;
pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 32;

/// Material tags assigned to each record role.
///
/// Tags are opaque strings resolved by the rendering back end, typically through
/// a [`MaterialLibrary`](crate::gfx::material::MaterialLibrary).
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialTags {
    pub wall: MaterialTag,
    pub floor: MaterialTag,
    pub ceiling: MaterialTag,
    pub glass: MaterialTag,
    pub frame: MaterialTag,
    pub window: MaterialTag,
    pub door: MaterialTag,
    pub handle: MaterialTag,
}

impl Default for MaterialTags {
    fn default() -> Self {
        Self {
            wall: "wall".to_string(),
            floor: "floor".to_string(),
            ceiling: "ceiling".to_string(),
            glass: "glass".to_string(),
            frame: "frame".to_string(),
            window: "window".to_string(),
            door: "door".to_string(),
            handle: "handle".to_string(),
        }
    }
}

/// Generator tunables
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub hole_epsilon: f32,
    pub glass_offset: f32,
    /// Used for openings that do not carry their own frame thickness
    pub frame_thickness: f32,
    /// Depth of frame bars measured along the wall normal
    pub frame_depth: f32,
    /// Tessellation hint written into circle and ring records
    pub circle_segments: u32,
    pub materials: MaterialTags,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            hole_epsilon: DEFAULT_HOLE_EPSILON,
            glass_offset: DEFAULT_GLASS_OFFSET,
            frame_thickness: DEFAULT_FRAME_THICKNESS,
            frame_depth: DEFAULT_FRAME_DEPTH,
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
            materials: MaterialTags::default(),
        }
    }
}

impl LayoutConfig {
    /// Checks that every numeric tunable is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("hole_epsilon", self.hole_epsilon)?;
        ensure_positive("glass_offset", self.glass_offset)?;
        ensure_positive("frame_thickness", self.frame_thickness)?;
        ensure_positive("frame_depth", self.frame_depth)?;
        ensure_positive("circle_segments", self.circle_segments as f32)?;
        Ok(())
    }

    /// Builder pattern: Set hole epsilon
    pub fn with_hole_epsilon(mut self, epsilon: f32) -> Self {
        self.hole_epsilon = epsilon;
        self
    }

    /// Builder pattern: Set glass offset
    pub fn with_glass_offset(mut self, offset: f32) -> Self {
        self.glass_offset = offset;
        self
    }

    /// Builder pattern: Set default frame thickness
    pub fn with_frame_thickness(mut self, thickness: f32) -> Self {
        self.frame_thickness = thickness;
        self
    }

    /// Builder pattern: Set frame depth
    pub fn with_frame_depth(mut self, depth: f32) -> Self {
        self.frame_depth = depth;
        self
    }

    /// Builder pattern: Set circle segments (clamped to at least 3)
    pub fn with_circle_segments(mut self, segments: u32) -> Self {
        self.circle_segments = segments.max(3);
        self
    }

    pub fn with_wall_material(mut self, tag: &str) -> Self {
        self.materials.wall = tag.to_string();
        self
    }

    pub fn with_glass_material(mut self, tag: &str) -> Self {
        self.materials.glass = tag.to_string();
        self
    }

    pub fn with_frame_material(mut self, tag: &str) -> Self {
        self.materials.frame = tag.to_string();
        self
    }

    pub fn with_door_material(mut self, tag: &str) -> Self {
        self.materials.door = tag.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LayoutConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.materials.glass, "glass");
    }

    #[test]
    fn test_zero_glass_offset_rejected() {
        let config = LayoutConfig::default().with_glass_offset(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_setters() {
        let config = LayoutConfig::default()
            .with_frame_thickness(0.25)
            .with_circle_segments(1)
            .with_door_material("oak");
        assert_eq!(config.frame_thickness, 0.25);
        assert_eq!(config.circle_segments, 3);
        assert_eq!(config.materials.door, "oak");
    }
}
