//! Scene editing
//!
//! A flat, ordered list of independently placed shapes with single-selection
//! semantics. The caller converts cursor input into a camera-space ray and
//! the current camera-to-world transform; [`Scene`] does the rest:
//!
//! ```text
//! click        → Scene::pick           (nearest hit becomes the selection)
//! drag         → Scene::move_selected  (slide at the depth locked by the pick)
//! click-place  → Scene::place          (new shape at a fixed camera depth)
//! ```

mod error;
mod factory;
mod node;
mod primitive;
mod scene_graph;

#[cfg(test)]
mod tests;

pub use error::SceneError;
pub use factory::{PrimitiveFactory, ShapeFactory, ShapeKind};
pub use node::{Node, NodeId};
pub use primitive::{Cube, Primitive, Sphere};
pub use scene_graph::{Scene, Selection};
