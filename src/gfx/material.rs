//! Material system for PBR rendering
//!
//! Placement records only carry a material tag. The [`MaterialLibrary`] resolves
//! tags to PBR parameters the rendering back end can turn into its own materials.

use std::collections::HashMap;

use log::warn;

use crate::layout::record::MaterialTag;

/// Tag of the fallback material
pub const DEFAULT_MATERIAL: &str = "default";

/// Material definition with PBR properties
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub base_color: [f32; 4],
    pub metallic: f32,
    pub roughness: f32,
    pub emissive: [f32; 3],
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: DEFAULT_MATERIAL.to_string(),
            base_color: [0.8, 0.8, 0.8, 1.0],
            metallic: 0.0,
            roughness: 0.5,
            emissive: [0.0, 0.0, 0.0],
        }
    }
}

impl Material {
    /// Creates a new material with basic PBR properties
    ///
    /// # Arguments
    /// * `name` - Unique name for this material
    /// * `base_color` - RGBA base color
    /// * `metallic` - Metallic factor (0.0 = dielectric, 1.0 = metallic)
    /// * `roughness` - Surface roughness (0.0 = mirror, 1.0 = rough)
    pub fn new(name: &str, base_color: [f32; 4], metallic: f32, roughness: f32) -> Self {
        Self {
            name: name.to_string(),
            base_color,
            metallic: metallic.clamp(0.0, 1.0),
            roughness: roughness.clamp(0.0, 1.0),
            emissive: [0.0, 0.0, 0.0],
        }
    }

    /// Creates an opaque material from a 0xRRGGBB color
    pub fn from_hex(name: &str, rgb: u32, metallic: f32, roughness: f32) -> Self {
        Self::new(name, hex_to_rgba(rgb), metallic, roughness)
    }

    /// Builder pattern: Set base color from RGB values
    pub fn with_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.base_color = [r, g, b, self.base_color[3]];
        self
    }

    /// Builder pattern: Set alpha transparency
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.base_color[3] = alpha.clamp(0.0, 1.0);
        self
    }

    /// Builder pattern: Set emissive color
    pub fn with_emission(mut self, r: f32, g: f32, b: f32) -> Self {
        self.emissive = [r, g, b];
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.base_color[3] < 1.0
    }
}

/// Converts 0xRRGGBB to linear-range RGBA components with alpha 1
pub fn hex_to_rgba(rgb: u32) -> [f32; 4] {
    let channel = |shift: u32| ((rgb >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0), 1.0]
}

/// Tag to material lookup with a default fallback
#[derive(Debug, Clone)]
pub struct MaterialLibrary {
    materials: HashMap<MaterialTag, Material>,
    default_material: Material,
}

impl Default for MaterialLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialLibrary {
    /// Creates an empty library holding only the default material
    pub fn new() -> Self {
        Self {
            materials: HashMap::new(),
            default_material: Material::default(),
        }
    }

    /// Library pre-filled with materials for every tag the generator and the
    /// presets emit.
    pub fn with_default_palette() -> Self {
        let mut library = Self::new();
        library.add_material(Material::from_hex("wall", 0xe8e2d6, 0.0, 0.9));
        library.add_material(Material::from_hex("floor", 0x8b6b4a, 0.0, 0.7));
        library.add_material(Material::from_hex("ceiling", 0xf5f5f5, 0.0, 0.9));
        library.add_material(Material::from_hex("glass", 0x9fd3ff, 0.0, 0.05).with_alpha(0.3));
        library.add_material(Material::from_hex("frame", 0x3b3b3b, 0.2, 0.6));
        library.add_material(Material::from_hex("window", 0xcfe8ff, 0.0, 0.2).with_alpha(0.6));
        library.add_material(Material::from_hex("door", 0x6e4b2a, 0.0, 0.8));
        library.add_material(Material::from_hex("handle", 0xc0c0c0, 1.0, 0.3));
        library.add_material(Material::from_hex("cube", 0x00ff00, 0.0, 0.5));
        library.add_material(Material::from_hex("ground", 0xff0000, 1.0, 0.5));
        library
    }

    /// Adds a material, replacing any material with the same name
    pub fn add_material(&mut self, material: Material) {
        self.materials.insert(material.name.clone(), material);
    }

    pub fn get_material(&self, tag: &str) -> Option<&Material> {
        self.materials.get(tag)
    }

    pub fn get_material_mut(&mut self, tag: &str) -> Option<&mut Material> {
        self.materials.get_mut(tag)
    }

    pub fn default_material(&self) -> &Material {
        &self.default_material
    }

    /// Resolves a tag, falling back to the default material for unknown tags
    pub fn resolve(&self, tag: &str) -> &Material {
        match self.get_material(tag) {
            Some(material) => material,
            None => {
                warn!("unknown material tag '{}', using default material", tag);
                &self.default_material
            }
        }
    }

    /// Lists all material tags, sorted
    pub fn list_materials(&self) -> Vec<&MaterialTag> {
        let mut tags: Vec<_> = self.materials.keys().collect();
        tags.sort();
        tags
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgba() {
        assert_eq!(hex_to_rgba(0x00ff00), [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(hex_to_rgba(0xff0000), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_default_palette_covers_layout_tags() {
        let library = MaterialLibrary::with_default_palette();
        let tags = crate::config::MaterialTags::default();
        for tag in [
            &tags.wall,
            &tags.floor,
            &tags.ceiling,
            &tags.glass,
            &tags.frame,
            &tags.window,
            &tags.door,
            &tags.handle,
        ] {
            assert!(library.get_material(tag).is_some(), "missing {}", tag);
        }
        assert!(library.resolve("glass").is_transparent());
    }

    #[test]
    fn test_unknown_tag_falls_back_to_default() {
        let library = MaterialLibrary::new();
        assert_eq!(library.resolve("marble").name, DEFAULT_MATERIAL);
        assert!(library.is_empty());
    }

    #[test]
    fn test_parameters_clamped() {
        let material = Material::new("m", [1.0; 4], 2.0, -1.0);
        assert_eq!(material.metallic, 1.0);
        assert_eq!(material.roughness, 0.0);
    }
}
