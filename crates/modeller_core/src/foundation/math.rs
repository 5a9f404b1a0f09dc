//! Math utilities and types
//!
//! Provides the vector and matrix aliases used by the scene core, the RGB
//! [`Color`] type, and [`CameraTransform`], which keeps the camera-space to
//! world-space mapping of directions and positions as two separate operations.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Matrix4, Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// RGB color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
}

impl Color {
    /// Palette used when cycling a node's color
    pub const PALETTE: [Color; 10] = [
        Color::new(1.0, 1.0, 1.0),
        Color::new(0.05, 0.05, 0.9),
        Color::new(0.05, 0.9, 0.05),
        Color::new(0.9, 0.05, 0.05),
        Color::new(0.4, 0.0, 0.4),
        Color::new(0.2, 0.2, 0.2),
        Color::new(0.5, 0.5, 0.5),
        Color::new(0.7, 0.0, 0.7),
        Color::new(0.2, 0.7, 0.7),
        Color::new(0.3, 0.3, 0.3),
    ];

    /// Neutral grey given to freshly placed shapes
    pub const PLACEMENT_GREY: Color = Color::new(0.4, 0.4, 0.4);

    /// Create a color from its components
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Whether every component is a finite number
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::PLACEMENT_GREY
    }
}

impl From<[f32; 3]> for Color {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Camera-to-world transform handed in by the caller on every interaction
///
/// Directions (`w = 0`) and positions (`w = 1`) go through distinct methods so
/// a drag delta can never pick up the camera's translation by accident.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    matrix: Mat4,
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl CameraTransform {
    /// Camera frame coincides with the world frame
    pub fn identity() -> Self {
        Self { matrix: Mat4::identity() }
    }

    /// Wrap a camera-to-world matrix
    pub const fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }

    /// The wrapped matrix
    pub const fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    /// Map a camera-space direction into world space
    ///
    /// Multiplies `(v.x, v.y, v.z, 0)`, so only the linear part of the matrix
    /// contributes.
    pub fn transform_direction(&self, v: Vec3) -> Vec3 {
        (self.matrix * Vec4::new(v.x, v.y, v.z, 0.0)).xyz()
    }

    /// Map a camera-space point through the matrix as `(p.x, p.y, p.z, 1)`
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        (self.matrix * Vec4::new(p.x, p.y, p.z, 1.0)).xyz()
    }

    /// Map a camera-space anchor to the world position a new shape is placed at
    ///
    /// Applies the inverse of the transpose of the matrix to `(p.x, p.y, p.z, 1)`
    /// and keeps the first three components. This agrees with the direct
    /// inverse mapping only for a pure orthonormal rotation; see DESIGN.md.
    /// Returns `None` when the matrix is singular or the result is not finite.
    pub fn transform_position_placement(&self, p: Vec3) -> Option<Vec3> {
        let inverse_transpose = self.matrix.transpose().try_inverse()?;
        Some((inverse_transpose * Vec4::new(p.x, p.y, p.z, 1.0)).xyz())
            .filter(|world| world.iter().all(|c| c.is_finite()))
    }

    /// Matrix taking camera-space coordinates into the local frame of a node
    /// whose model matrix is `model`
    pub fn local_from_camera(&self, model: &Mat4) -> Option<Mat4> {
        model.try_inverse().map(|world_to_local| world_to_local * self.matrix)
    }
}

impl From<Mat4> for CameraTransform {
    fn from(matrix: Mat4) -> Self {
        Self::from_matrix(matrix)
    }
}

/// Math constants
pub mod constants {
    /// Pi / 2
    pub const HALF_PI: f32 = std::f32::consts::FRAC_PI_2;
}

/// Extension trait for Mat4 with additional convenience methods
pub trait Mat4Ext {
    /// Create a rotation matrix around the X axis
    fn rotation_x(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Y axis
    fn rotation_y(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Z axis
    fn rotation_z(angle: f32) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn rotation_x(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::x_axis(), angle)
    }

    fn rotation_y(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::y_axis(), angle)
    }

    fn rotation_z(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::z_axis(), angle)
    }
}
