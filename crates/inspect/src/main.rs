//! Entry point for the inspect tool: decode a texture file or build a demo
//! model and print what the data graph holds.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use scene::{Color3, Material, Mesh, Model, Node, NodeKind};

fn parse_texture_arg() -> Option<PathBuf> {
    // Accept: --texture=path/to/image.png
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix("--texture=") {
            return Some(PathBuf::from(val));
        }
    }
    None
}

fn parse_demo_arg() -> bool {
    std::env::args().any(|arg| arg == "--demo")
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Some(path) = parse_texture_arg() {
        return inspect_texture(&path);
    }
    if parse_demo_arg() {
        return inspect_demo();
    }

    eprintln!("Usage: inspect --texture=FILE | --demo");
    Ok(())
}

fn inspect_texture(path: &Path) -> Result<()> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let tex = asset::compressed_from_file_bytes(path, bytes);
    log::info!(
        "Compressed payload: {} bytes, hint '{}'",
        tex.width(),
        tex.format_hint_str()
    );

    let decoded = asset::decode_embedded(&tex)?;
    println!(
        "{}: {}x{} texels",
        path.display(),
        decoded.width(),
        decoded.height()
    );
    Ok(())
}

fn inspect_demo() -> Result<()> {
    let mut model = Model::new();

    let mut quad = Mesh::new("quad");
    quad.positions = vec![
        [-0.5, -0.5, 0.0],
        [0.5, -0.5, 0.0],
        [0.5, 0.5, 0.0],
        [-0.5, 0.5, 0.0],
    ];
    quad.normals = vec![[0.0, 0.0, 1.0]; 4];
    quad.uvs = vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
    quad.indices = vec![0, 1, 2, 0, 2, 3];
    quad.validate()?;

    let tex_index = model.add_texture(asset::checker(64));
    let mut material = Material::new("checker");
    material.diffuse = Color3::splat(0.8);
    material.diffuse_texture = Some(tex_index);
    quad.material = Some(model.add_material(material));
    let mesh_index = model.add_mesh(quad);

    let root = model.add_root(Node::new("demo", NodeKind::Group))?;
    model.add_child(
        root,
        Node::new("quad", NodeKind::Object { meshes: vec![mesh_index] }),
    )?;

    println!(
        "Nodes: {}  Meshes: {}  Materials: {}  Textures: {}",
        model.node_count(),
        model.meshes().len(),
        model.materials().len(),
        model.textures().len()
    );
    model.walk(|_, node, world| {
        let kind = match &node.kind {
            NodeKind::Group => "group".to_owned(),
            NodeKind::Object { meshes } => format!("object, meshes {meshes:?}"),
        };
        let t = world.w_axis;
        println!(
            "  {} ({kind}) at [{:.2}, {:.2}, {:.2}]",
            node.name, t.x, t.y, t.z
        );
    });
    for mesh in model.meshes() {
        println!(
            "  mesh '{}': {} vertices, {} triangles",
            mesh.name,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
    }
    Ok(())
}
