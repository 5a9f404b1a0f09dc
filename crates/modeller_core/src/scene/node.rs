//! Node capability interface

use super::ShapeKind;
use crate::foundation::math::{CameraTransform, Color, Vec3};
use crate::physics::Ray;
use crate::render::RenderTarget;
use std::fmt;

/// Position of a node inside its [`Scene`](super::Scene)
///
/// Nodes are never removed, so an id stays valid for the lifetime of the
/// scene that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Insertion index of the node
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Contract every placeable shape satisfies
///
/// The scene only ever talks to shapes through this trait. Selection
/// exclusivity, hit depth and hit point are the scene's business; a node just
/// stores the flag it is given.
pub trait Node: fmt::Debug {
    /// Tag of the shape, also used by the backend to choose a mesh
    fn kind(&self) -> ShapeKind;

    /// Describe this node to a render target
    fn render(&self, target: &mut dyn RenderTarget);

    /// Intersect a camera-space ray with this node
    ///
    /// Returns the ray parameter of the nearest hit, in units of
    /// `ray.direction`, or `None` on a miss.
    fn ray_test(&self, ray: &Ray, camera_to_world: &CameraTransform) -> Option<f32>;

    /// Set the selection flag
    fn set_selected(&mut self, selected: bool);

    /// Current selection flag
    fn is_selected(&self) -> bool;

    /// Offset the node by a world-space vector
    fn translate(&mut self, offset: Vec3);

    /// Multiply the node's scale uniformly
    fn scale(&mut self, factor: f32);

    /// Set the flat color
    fn set_color(&mut self, color: Color);

    /// Current flat color
    fn color(&self) -> Color;

    /// Step to the next (or previous) palette color
    fn rotate_color(&mut self, forwards: bool);

    /// World-space position of the node's origin
    fn position(&self) -> Vec3;
}
