//! Ray intersection primitives
//!
//! Narrow-phase tests that node variants use to answer "did this ray hit me,
//! and at what distance". Distances are always expressed in units of the
//! ray's own direction vector, which is never renormalised.

pub mod collision;

pub use collision::{Ray, RayError, BoundingSphere, AABB};
