//! Flat scene with single selection
//!
//! Simple list-based scene graph: no hierarchy and no spatial acceleration.
//! Picking is a linear nearest-hit search in insertion order, which is
//! plenty for an interactively edited scene.

use super::{Node, NodeId, PrimitiveFactory, SceneError, ShapeFactory};
use crate::config::{Config, ConfigError, SceneConfig};
use crate::foundation::math::{CameraTransform, Vec3};
use crate::physics::Ray;
use crate::render::RenderTarget;
use log::{debug, trace, warn};

/// The selected node together with where it was grabbed
///
/// Only exists between a successful pick and the next pick, so the hit depth
/// and hit point can never be read for an unselected node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Node that won the pick
    pub node: NodeId,

    /// Ray parameter of the hit; locked for every drag until the next pick
    pub depth: f32,

    /// Camera-space point the cursor currently holds the node by
    pub hit_point: Vec3,
}

/// Ordered collection of shapes with at most one selected
///
/// `F` resolves shape tags for [`Scene::place`].
#[derive(Debug)]
pub struct Scene<F = PrimitiveFactory> {
    /// Insertion order is render order and the picking tie-break
    nodes: Vec<Box<dyn Node>>,

    selection: Option<Selection>,

    config: SceneConfig,

    factory: F,
}

impl Scene<PrimitiveFactory> {
    /// Empty scene with the built-in shapes and default configuration
    pub fn new() -> Self {
        Self::with_factory(PrimitiveFactory)
    }
}

impl Default for Scene<PrimitiveFactory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ShapeFactory> Scene<F> {
    /// Empty scene using `factory` for placement
    pub fn with_factory(factory: F) -> Self {
        Self {
            nodes: Vec::new(),
            selection: None,
            config: SceneConfig::default(),
            factory,
        }
    }

    /// Empty scene with explicit configuration
    pub fn with_config(config: SceneConfig, factory: F) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            nodes: Vec::new(),
            selection: None,
            config,
            factory,
        })
    }

    /// Active configuration
    pub const fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Draw every node in insertion order
    pub fn render(&self, target: &mut dyn RenderTarget) {
        for node in &self.nodes {
            node.render(target);
        }
    }

    /// Append a node; it is pickable and rendered from now on
    pub fn add_node(&mut self, node: Box<dyn Node>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Select the node nearest along a camera-space ray
    ///
    /// Every node is deselected first, so a miss leaves nothing selected.
    /// Among equal distances the earliest inserted node wins.
    pub fn pick(
        &mut self,
        ray_origin: Vec3,
        ray_direction: Vec3,
        camera_to_world: &CameraTransform,
    ) -> Result<Option<NodeId>, SceneError> {
        let ray = validated_ray(ray_origin, ray_direction)?;

        self.deselect();

        let mut closest: Option<(usize, f32)> = None;
        for (index, node) in self.nodes.iter().enumerate() {
            let Some(distance) = node.ray_test(&ray, camera_to_world) else {
                continue;
            };
            if !distance.is_finite() {
                warn!("Ignoring non-finite hit distance {} from node#{}", distance, index);
                continue;
            }
            match closest {
                Some((_, best)) if distance >= best => {}
                _ => closest = Some((index, distance)),
            }
        }

        let Some((index, depth)) = closest else {
            debug!("Pick missed all {} nodes", self.nodes.len());
            return Ok(None);
        };

        let id = NodeId::new(index);
        self.nodes[index].set_selected(true);
        self.selection = Some(Selection {
            node: id,
            depth,
            hit_point: ray.point_at(depth),
        });
        debug!("Picked {} at depth {:.3}", id, depth);
        Ok(Some(id))
    }

    /// Drag the selected node so it stays under the cursor ray
    ///
    /// The node slides at the depth recorded by the last pick. The camera-space
    /// offset since the previous call is mapped to world space as a direction
    /// and applied as a translation. Does nothing when nothing is selected.
    /// A camera matrix that turns the offset non-finite fails with
    /// [`SceneError::SingularTransform`] and leaves the node in place.
    pub fn move_selected(
        &mut self,
        ray_origin: Vec3,
        ray_direction: Vec3,
        camera_to_world: &CameraTransform,
    ) -> Result<(), SceneError> {
        let Some(selection) = self.selection.as_mut() else {
            return Ok(());
        };
        let ray = validated_ray(ray_origin, ray_direction)?;

        let new_position = ray.point_at(selection.depth);
        let delta = new_position - selection.hit_point;
        let world_delta = camera_to_world.transform_direction(delta);
        if !world_delta.iter().all(|c| c.is_finite()) {
            warn!("Rejecting non-finite drag offset {:?} for {}", world_delta, selection.node);
            return Err(SceneError::SingularTransform);
        }

        self.nodes[selection.node.index()].translate(world_delta);
        selection.hit_point = new_position;
        trace!(
            "Moved {} by ({:.3}, {:.3}, {:.3})",
            selection.node, world_delta.x, world_delta.y, world_delta.z
        );
        Ok(())
    }

    /// Create a shape of the given tag under the cursor
    ///
    /// The shape is anchored `place_depth` along the camera-space ray and
    /// converted to world space through the inverse transpose of
    /// `camera_to_world`. On any error no node is added.
    pub fn place(
        &mut self,
        kind: &str,
        ray_origin: Vec3,
        ray_direction: Vec3,
        camera_to_world: &CameraTransform,
    ) -> Result<NodeId, SceneError> {
        let mut node = self.factory.create_shape(kind)?;
        let ray = validated_ray(ray_origin, ray_direction)?;

        let anchor = ray.point_at(self.config.place_depth);
        let world = camera_to_world
            .transform_position_placement(anchor)
            .ok_or(SceneError::SingularTransform)?;

        node.set_color(self.config.default_color);
        node.translate(world);
        let id = self.add_node(node);
        debug!(
            "Placed {} {} at ({:.3}, {:.3}, {:.3})",
            kind, id, world.x, world.y, world.z
        );
        Ok(id)
    }

    /// Grow or shrink the selected node by the configured step
    pub fn scale_selected(&mut self, up: bool) {
        let factor = if up { self.config.scale_up } else { self.config.scale_down };
        if let Some(node) = self.selected_node_mut() {
            node.scale(factor);
        }
    }

    /// Cycle the selected node through the color palette
    pub fn rotate_selected_color(&mut self, forwards: bool) {
        if let Some(node) = self.selected_node_mut() {
            node.rotate_color(forwards);
        }
    }

    /// Clear the selection and every node's selection flag
    pub fn deselect(&mut self) {
        for node in &mut self.nodes {
            node.set_selected(false);
        }
        self.selection = None;
    }

    /// Id of the selected node
    pub fn selected(&self) -> Option<NodeId> {
        self.selection.map(|s| s.node)
    }

    /// Selected node with its locked depth and hit point
    pub const fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Node by id
    pub fn node(&self, id: NodeId) -> Option<&dyn Node> {
        self.nodes.get(id.index()).map(|node| &**node)
    }

    /// Mutable node by id
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut (dyn Node + 'static)> {
        self.nodes.get_mut(id.index()).map(|node| &mut **node)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &dyn Node> + '_ {
        self.nodes.iter().map(|node| &**node)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn selected_node_mut(&mut self) -> Option<&mut (dyn Node + 'static)> {
        let id = self.selected()?;
        self.node_mut(id)
    }
}

fn validated_ray(origin: Vec3, direction: Vec3) -> Result<Ray, SceneError> {
    Ray::new(origin, direction).map_err(|err| {
        warn!("Rejecting ray origin={:?} direction={:?}: {}", origin, direction, err);
        SceneError::from(err)
    })
}
