//! Model data graph: meshes, materials, textures and the node tree,
//! all rooted in a single-owner [`Model`] container.

use thiserror::Error;

pub mod material;
pub mod mesh;
pub mod model;
pub mod texture;

pub use corelib::{CimString, Color3, Color4};
pub use material::Material;
pub use mesh::Mesh;
pub use model::{Model, Node, NodeId, NodeKind};
pub use texture::{Texel, Texture, TextureData};

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("node id {0} is out of bounds")]
    InvalidNode(u32),

    #[error("model already has a root node")]
    RootAlreadySet,

    #[error("mesh '{name}': {reason}")]
    InvalidMesh { name: String, reason: String },
}
