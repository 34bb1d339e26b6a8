mod material;
mod object;

pub use material::{Color, Material, Side};
pub use object::MeshObject;

use slotmap::SlotMap;
use tracing::{debug, info};

use crate::error::{Result, SceneError};
use crate::operations::creation::{create_outsole, BoxParams, MakeBox};
use crate::operations::query::{Aabb, BoundingBox};
use crate::operations::transform::Transform;
use crate::tessellation::TriangleMesh;

slotmap::new_key_type! {
    /// Unique identifier for a node in the scene graph.
    pub struct NodeId;
}

/// What a scene node holds.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A container that only carries a transform and children.
    Group,
    /// A renderable mesh.
    Mesh {
        /// Geometry in the node's local frame.
        mesh: TriangleMesh,
        /// Surface description.
        material: Material,
    },
}

/// Data associated with a scene node.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Human-readable name.
    pub name: String,
    /// Placement relative to the parent.
    pub transform: Transform,
    /// Parent node; `None` only for the root.
    pub parent: Option<NodeId>,
    /// Child nodes in insertion order.
    pub children: Vec<NodeId>,
    /// Node payload.
    pub kind: NodeKind,
}

/// A mesh ready to draw: its world placement, geometry and material.
#[derive(Debug, Clone, Copy)]
pub struct RenderItem<'a> {
    /// The node the mesh belongs to.
    pub id: NodeId,
    /// Accumulated placement from the root.
    pub world: Transform,
    /// Local geometry.
    pub mesh: &'a TriangleMesh,
    /// Surface description.
    pub material: &'a Material,
}

/// Hierarchical container for everything drawn in one frame.
///
/// Nodes live in an arena and reference each other via typed IDs
/// (generational indices). The root is a group named `"Scene"`.
#[derive(Debug)]
pub struct Scene {
    background: Color,
    nodes: SlotMap<NodeId, NodeData>,
    root: NodeId,
}

impl Scene {
    /// Creates an empty scene with the given background color.
    #[must_use]
    pub fn new(background: Color) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(NodeData {
            name: "Scene".into(),
            transform: Transform::identity(),
            parent: None,
            children: Vec::new(),
            kind: NodeKind::Group,
        });
        Self {
            background,
            nodes,
            root,
        }
    }

    /// Returns the background color.
    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    /// Replaces the background color.
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// Returns the root group.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the scene holds only its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Returns a reference to the node data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not in the scene.
    pub fn node(&self, id: NodeId) -> Result<&NodeData> {
        self.nodes
            .get(id)
            .ok_or_else(|| SceneError::NodeNotFound(format!("{id:?}")).into())
    }

    /// Returns a mutable reference to the node data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not in the scene.
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeData> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| SceneError::NodeNotFound(format!("{id:?}")).into())
    }

    /// Returns the children of a node.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not in the scene.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(&self.node(id)?.children)
    }

    /// Adds an empty group under `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` is missing or is not a group.
    pub fn add_group(&mut self, parent: NodeId, name: impl Into<String>) -> Result<NodeId> {
        self.insert_child(parent, name.into(), Transform::identity(), NodeKind::Group)
    }

    /// Adds a renderable object under `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` is missing or is not a group.
    pub fn add_object(&mut self, parent: NodeId, object: MeshObject) -> Result<NodeId> {
        let MeshObject {
            name,
            mesh,
            material,
            transform,
        } = object;
        self.insert_child(parent, name, transform, NodeKind::Mesh { mesh, material })
    }

    /// Finds the first node with the given name, depth-first from the root.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let node = self.nodes.get(id)?;
            if node.name == name {
                return Some(id);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }

    /// Accumulates transforms from the root down to `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the node or one of its ancestors is missing.
    pub fn world_transform(&self, id: NodeId) -> Result<Transform> {
        let mut chain = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.node(current)?;
            chain.push(node.transform);
            cursor = node.parent;
        }
        Ok(chain
            .iter()
            .rev()
            .fold(Transform::identity(), |world, local| world.then(local)))
    }

    /// Returns every mesh in the subtree of `id`, depth-first in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not in the scene.
    pub fn render_items(&self, id: NodeId) -> Result<Vec<RenderItem<'_>>> {
        let mut items = Vec::new();
        let mut stack = vec![(id, self.world_transform(id)?)];
        while let Some((current, world)) = stack.pop() {
            let node = self.node(current)?;
            if let NodeKind::Mesh { mesh, material } = &node.kind {
                items.push(RenderItem {
                    id: current,
                    world,
                    mesh,
                    material,
                });
            }
            for &child in node.children.iter().rev() {
                let local = self.node(child)?.transform;
                stack.push((child, world.then(&local)));
            }
        }
        Ok(items)
    }

    /// Returns every mesh in the scene, depth-first in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the graph references a missing node.
    pub fn meshes(&self) -> Result<Vec<RenderItem<'_>>> {
        self.render_items(self.root)
    }

    /// World-space bounds of all meshes under `id`, or `None` if it holds no geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not in the scene.
    pub fn world_bounding_box(&self, id: NodeId) -> Result<Option<Aabb>> {
        let mut bounds: Option<Aabb> = None;
        for item in self.render_items(id)? {
            if item.mesh.vertices.is_empty() {
                continue;
            }
            let aabb = BoundingBox::new(item.mesh)
                .with_transform(item.world)
                .execute()?;
            bounds = Some(bounds.map_or(aabb, |b| b.union(&aabb)));
        }
        Ok(bounds)
    }

    fn insert_child(
        &mut self,
        parent: NodeId,
        name: String,
        transform: Transform,
        kind: NodeKind,
    ) -> Result<NodeId> {
        let parent_node = self.node(parent)?;
        if !matches!(parent_node.kind, NodeKind::Group) {
            return Err(SceneError::NotAGroup(parent_node.name.clone()).into());
        }

        let is_mesh = matches!(kind, NodeKind::Mesh { .. });
        let id = self.nodes.insert(NodeData {
            name,
            transform,
            parent: Some(parent),
            children: Vec::new(),
            kind,
        });
        self.node_mut(parent)?.children.push(id);
        debug!(name = %self.nodes[id].name, mesh = is_mesh, "added scene node");
        Ok(id)
    }
}

/// Background of the shoe viewer.
pub const SHOE_BACKGROUND: Color = Color::from_hex(0xf0f0f0);

/// Name of the group that holds every shoe component.
pub const SHOE_GROUP: &str = "ShoeGroup";

/// Builds the shoe scene: a light-grey background and a `ShoeGroup` holding a
/// blue unit placeholder cube and the stadium outsole.
///
/// # Errors
///
/// Returns an error if a component fails to build.
pub fn build_shoe_scene() -> Result<Scene> {
    let mut scene = Scene::new(SHOE_BACKGROUND);
    let group = scene.add_group(scene.root(), SHOE_GROUP)?;

    let cube = MakeBox::new(BoxParams::default()).execute()?;
    let material = Material::with_color(Color::from_hex(0x0077ff));
    scene.add_object(group, MeshObject::new("PlaceholderCube", cube, material))?;

    scene.add_object(group, create_outsole()?)?;

    info!(nodes = scene.len(), "built shoe scene");
    Ok(scene)
}
