//! The model container: an arena of scene nodes plus the mesh, material and
//! texture lists they reference.
//!
//! Nodes are stored in a flat arena and addressed by [`NodeId`]; parents keep
//! ordered child id lists. Ownership stays tree-shaped and single-owner, but
//! dropping the model frees the arena in one pass instead of walking the tree
//! recursively, so arbitrarily deep hierarchies cannot overflow the stack.

use corelib::CimString;
use glam::Mat4;

use crate::SceneError;
use crate::material::Material;
use crate::mesh::Mesh;
use crate::texture::Texture;

/// Handle to a node inside one [`Model`]. Ids from one model are meaningless
/// in another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a node contributes to the scene. Only object nodes reference meshes;
/// groups are pure structure and traversal skips them when gathering
/// geometry.
#[derive(Clone, Debug, Default)]
pub enum NodeKind {
    #[default]
    Group,
    Object {
        /// Indices into the owning model's mesh list, in draw order.
        meshes: Vec<u32>,
    },
}

/// One scene-graph node: a name, a local transform and ordered children.
#[derive(Clone, Debug)]
pub struct Node {
    pub name: CimString,
    /// Local transform relative to the parent, column-major.
    pub transform: Mat4,
    pub kind: NodeKind,
    children: Vec<NodeId>,
}

impl Node {
    pub fn new(name: &str, kind: NodeKind) -> Self {
        Self {
            name: CimString::from(name),
            transform: Mat4::IDENTITY,
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    /// Child ids in attachment order.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Root owner of a loaded model: node arena, meshes, materials, textures.
/// Everything is released exactly once when the model drops.
#[derive(Debug, Default)]
pub struct Model {
    nodes: Vec<Node>,
    root: Option<NodeId>,
    meshes: Vec<Mesh>,
    materials: Vec<Material>,
    textures: Vec<Texture>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `node` as the root. Fails if a root already exists.
    pub fn add_root(&mut self, node: Node) -> Result<NodeId, SceneError> {
        if self.root.is_some() {
            return Err(SceneError::RootAlreadySet);
        }
        let id = self.push_node(node);
        self.root = Some(id);
        Ok(id)
    }

    /// Attach `node` under `parent`, after its existing children.
    pub fn add_child(&mut self, parent: NodeId, node: Node) -> Result<NodeId, SceneError> {
        if parent.index() >= self.nodes.len() {
            return Err(SceneError::InvalidNode(parent.0));
        }
        let id = self.push_node(node);
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }

    fn push_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Preorder traversal of the subtree rooted at `start`, `start`
    /// included. Children are visited in attachment order. Yields nothing
    /// for a foreign id.
    pub fn descendants(&self, start: NodeId) -> Descendants<'_> {
        let stack = if start.index() < self.nodes.len() {
            vec![start]
        } else {
            Vec::new()
        };
        Descendants { model: self, stack }
    }

    /// Visit every node from the root down with its accumulated world
    /// transform (product of ancestor locals, root's parent = identity).
    pub fn walk<F>(&self, mut f: F)
    where
        F: FnMut(NodeId, &Node, Mat4),
    {
        let Some(root) = self.root else {
            return;
        };
        let mut stack = vec![(root, Mat4::IDENTITY)];
        while let Some((id, parent_world)) = stack.pop() {
            let node = &self.nodes[id.index()];
            let world = parent_world * node.transform;
            f(id, node, world);
            for &child in node.children.iter().rev() {
                stack.push((child, world));
            }
        }
    }

    /// Mesh indices referenced by object nodes in the subtree under `start`,
    /// in preorder. Group nodes carry no meshes and only contribute
    /// structure.
    pub fn collect_mesh_indices(&self, start: NodeId) -> Vec<u32> {
        let mut out = Vec::new();
        for id in self.descendants(start) {
            if let NodeKind::Object { meshes } = &self.nodes[id.index()].kind {
                out.extend_from_slice(meshes);
            }
        }
        out
    }

    pub fn add_mesh(&mut self, mesh: Mesh) -> u32 {
        self.meshes.push(mesh);
        (self.meshes.len() - 1) as u32
    }

    pub fn add_material(&mut self, material: Material) -> u32 {
        self.materials.push(material);
        (self.materials.len() - 1) as u32
    }

    pub fn add_texture(&mut self, texture: Texture) -> u32 {
        self.textures.push(texture);
        (self.textures.len() - 1) as u32
    }

    #[inline]
    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    #[inline]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    #[inline]
    pub fn textures(&self) -> &[Texture] {
        &self.textures
    }
}

/// Iterator returned by [`Model::descendants`].
pub struct Descendants<'a> {
    model: &'a Model,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let node = &self.model.nodes[id.index()];
        for &child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(id)
    }
}
