//! Surface material parameters referenced by meshes.

use corelib::{CimString, Color3};

/// Classic phong-style material. Colors are unclamped; `diffuse_texture`
/// indexes the owning model's texture list.
#[derive(Clone, Debug)]
pub struct Material {
    pub name: CimString,
    pub ambient: Color3,
    pub diffuse: Color3,
    pub specular: Color3,
    pub emissive: Color3,
    pub opacity: f32,
    pub shininess: f32,
    pub diffuse_texture: Option<u32>,
}

impl Material {
    pub fn new(name: &str) -> Self {
        Self {
            name: CimString::from(name),
            ..Self::default()
        }
    }

    /// True if the material reflects no light at all.
    pub fn is_unlit_black(&self) -> bool {
        self.ambient.is_black()
            && self.diffuse.is_black()
            && self.specular.is_black()
            && self.emissive.is_black()
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: CimString::new(),
            ambient: Color3::default(),
            diffuse: Color3::default(),
            specular: Color3::default(),
            emissive: Color3::default(),
            opacity: 1.0,
            shininess: 0.0,
            diffuse_texture: None,
        }
    }
}
