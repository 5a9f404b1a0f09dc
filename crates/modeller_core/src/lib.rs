//! # Modeller Core
//!
//! The interactive scene-editing core of a 3D modeller.
//!
//! ## Features
//!
//! - **Picking**: nearest-hit selection along a camera-space cursor ray
//! - **Drag-move**: the selected shape slides at the depth it was grabbed at
//! - **Placement**: new shapes appear a fixed distance in front of the camera
//! - **Pluggable shapes**: any type implementing [`scene::Node`], created by tag
//!   through a [`scene::ShapeFactory`]
//!
//! Rendering backends, input handling and camera control live in the host
//! application. The host turns each click or drag into a ray plus the current
//! camera-to-world matrix and calls into [`scene::Scene`].
//!
//! ## Quick Start
//!
//! ```rust
//! use modeller_core::prelude::*;
//!
//! fn main() -> Result<(), SceneError> {
//!     let mut scene = Scene::new();
//!     let camera = CameraTransform::identity();
//!     let forward = Vec3::new(0.0, 0.0, -1.0);
//!
//!     let sphere = scene.place("sphere", Vec3::zeros(), forward, &camera)?;
//!     assert_eq!(scene.pick(Vec3::zeros(), forward, &camera)?, Some(sphere));
//!
//!     // Drag a little to the right
//!     scene.move_selected(Vec3::zeros(), Vec3::new(0.05, 0.0, -1.0), &camera)?;
//!
//!     let mut queue = DrawQueue::new();
//!     scene.render(&mut queue);
//!     assert_eq!(queue.len(), 1);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod physics;
pub mod render;
pub mod scene;

/// Common imports for core users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, SceneConfig},
        foundation::math::{CameraTransform, Color, Mat4, Vec3},
        physics::Ray,
        render::{DrawCommand, DrawQueue, RenderTarget},
        scene::{Node, NodeId, PrimitiveFactory, Scene, SceneError, Selection, ShapeFactory, ShapeKind},
    };
}
