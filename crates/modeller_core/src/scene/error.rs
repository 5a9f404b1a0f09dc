//! Scene operation errors

use crate::physics::RayError;
use thiserror::Error;

/// Failure of a scene operation
///
/// Every variant is reported synchronously to the caller of the operation
/// that produced it, and the scene is left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The shape factory does not know this tag
    #[error("Unknown shape kind: {0}")]
    UnknownShapeKind(String),

    /// Ray direction is zero-length or a component is not finite
    #[error("Degenerate ray: {0}")]
    DegenerateRay(#[from] RayError),

    /// The camera transform cannot be inverted, or maps to non-finite values
    #[error("Camera transform is singular or not finite")]
    SingularTransform,
}
