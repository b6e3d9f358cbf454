//! Asset integration layer: the seam to external scene readers and
//! decoding of embedded compressed textures.

pub mod import;
pub mod texture;

pub use import::{ImportedMesh, ImportedScene, SceneSource, load_model};
pub use texture::{checker, compressed_from_file_bytes, decode_embedded};
