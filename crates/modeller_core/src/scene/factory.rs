//! Shape construction by tag

use super::{Cube, Node, SceneError, Sphere};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tag of a built-in shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Unit sphere
    Sphere,
    /// Unit cube
    Cube,
}

impl ShapeKind {
    /// Every built-in kind
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Sphere, ShapeKind::Cube];

    /// Tag used by `Scene::place`
    pub const fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cube => "cube",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SceneError::UnknownShapeKind(s.to_string()))
    }
}

/// Creates nodes from a shape tag
///
/// Hosts with their own shape variants implement this and hand it to
/// [`Scene::with_factory`](super::Scene::with_factory).
pub trait ShapeFactory {
    /// Build a fresh node for `kind`
    ///
    /// Fails with [`SceneError::UnknownShapeKind`] for tags it does not know.
    fn create_shape(&self, kind: &str) -> Result<Box<dyn Node>, SceneError>;
}

/// Factory for the built-in [`Sphere`] and [`Cube`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimitiveFactory;

impl ShapeFactory for PrimitiveFactory {
    fn create_shape(&self, kind: &str) -> Result<Box<dyn Node>, SceneError> {
        let node: Box<dyn Node> = match kind.parse::<ShapeKind>()? {
            ShapeKind::Sphere => Box::new(Sphere::new()),
            ShapeKind::Cube => Box::new(Cube::new()),
        };
        Ok(node)
    }
}
