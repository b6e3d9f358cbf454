//! Importer seam: external readers hand over flat scene payloads, and
//! `load_model` assembles them into a [`Model`].
//!
//! File-format parsing itself (OBJ, FBX, glTF, ...) lives entirely in the
//! external reader behind [`SceneSource`]; this module only shapes the
//! result.

use std::path::Path;

use anyhow::{Context, Result, bail};
use corelib::CimResult;

use scene::{Mesh, Model, Node, NodeKind};

/// Mesh payload produced by an external reader: parallel per-vertex arrays
/// plus triangulated face indices, three per face.
#[derive(Clone, Debug, Default)]
pub struct ImportedMesh {
    pub name: String,
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    /// First UV channel only; readers exposing several channels drop the
    /// rest.
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

#[derive(Clone, Debug, Default)]
pub struct ImportedScene {
    pub meshes: Vec<ImportedMesh>,
}

/// Boundary to the external scene reader. A failed read returns
/// `CimError::Failure` carrying the reader's own error string.
pub trait SceneSource {
    fn read_scene(&mut self, path: &Path) -> CimResult<ImportedScene>;
}

/// Read a scene through `source` and assemble a model: a group root named
/// after the file stem, one object node per mesh.
pub fn load_model(source: &mut dyn SceneSource, path: impl AsRef<Path>) -> Result<Model> {
    let path = path.as_ref();
    log::info!("Importing model from {}", path.display());

    let scene = source
        .read_scene(path)
        .with_context(|| format!("Failed to read scene from {}", path.display()))?;
    if scene.meshes.is_empty() {
        bail!("Scene {} contains no meshes", path.display());
    }

    let mut model = Model::new();
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("model");
    let root = model.add_root(Node::new(stem, NodeKind::Group))?;

    for (i, imported) in scene.meshes.into_iter().enumerate() {
        let node_name = if imported.name.is_empty() {
            format!("mesh_{i}")
        } else {
            imported.name.clone()
        };

        let mesh = to_mesh(imported);
        mesh.validate()
            .with_context(|| format!("Mesh {i} of {} failed validation", path.display()))?;
        let index = model.add_mesh(mesh);
        model.add_child(root, Node::new(&node_name, NodeKind::Object { meshes: vec![index] }))?;
    }

    log::info!(
        "Imported {} from {}: {} meshes, {} nodes",
        stem,
        path.display(),
        model.meshes().len(),
        model.node_count()
    );
    Ok(model)
}

fn to_mesh(imported: ImportedMesh) -> Mesh {
    let mut mesh = Mesh::new(&imported.name);
    mesh.positions = imported.positions;
    mesh.normals = imported.normals;
    mesh.uvs = imported.uvs;
    mesh.indices = imported.indices;
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::CimError;

    struct StubSource(CimResult<ImportedScene>);

    impl SceneSource for StubSource {
        fn read_scene(&mut self, _path: &Path) -> CimResult<ImportedScene> {
            match &self.0 {
                Ok(scene) => Ok(scene.clone()),
                Err(CimError::Failure(msg)) => Err(CimError::Failure(msg.clone())),
                Err(CimError::OutOfMemory) => Err(CimError::OutOfMemory),
            }
        }
    }

    fn triangle(name: &str) -> ImportedMesh {
        ImportedMesh {
            name: name.to_owned(),
            positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            normals: vec![[0.0, 0.0, 1.0]; 3],
            uvs: vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn builds_group_root_with_object_children() {
        let mut source = StubSource(Ok(ImportedScene {
            meshes: vec![triangle("tri"), triangle("")],
        }));
        let model = load_model(&mut source, "assets/teapot.obj").expect("import");

        let root = model.root().expect("root");
        let root_node = model.node(root).unwrap();
        assert_eq!(root_node.name.as_str(), "teapot");
        assert!(matches!(root_node.kind, NodeKind::Group));
        assert_eq!(root_node.children().len(), 2);

        let names: Vec<&str> = root_node
            .children()
            .iter()
            .map(|&id| model.node(id).unwrap().name.as_str())
            .collect();
        assert_eq!(names, ["tri", "mesh_1"]);
        assert_eq!(model.collect_mesh_indices(root), [0, 1]);
        assert_eq!(model.meshes().len(), 2);
    }

    #[test]
    fn reader_failure_surfaces_its_message() {
        let mut source = StubSource(Err(CimError::Failure(
            "unsupported chunk at offset 42".to_owned(),
        )));
        let err = load_model(&mut source, "broken.fbx").unwrap_err();
        assert!(format!("{err:#}").contains("unsupported chunk at offset 42"));
    }

    #[test]
    fn empty_scene_is_an_error() {
        let mut source = StubSource(Ok(ImportedScene::default()));
        assert!(load_model(&mut source, "empty.obj").is_err());
    }

    #[test]
    fn invalid_mesh_is_rejected() {
        let mut bad = triangle("bad");
        bad.indices = vec![0, 1, 7];
        let mut source = StubSource(Ok(ImportedScene { meshes: vec![bad] }));
        let err = load_model(&mut source, "bad.obj").unwrap_err();
        assert!(format!("{err:#}").contains("out of range"));
    }
}
