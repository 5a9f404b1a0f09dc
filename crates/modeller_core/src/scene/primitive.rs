//! Built-in primitive shapes
//!
//! [`Sphere`] and [`Cube`] share a [`Primitive`] core holding translation,
//! scale, color and the selection flag. Both are unit-sized around their
//! origin; ray tests run in the node's local frame, where the shape is a
//! fixed sphere or box.

use super::{Node, ShapeKind};
use crate::foundation::math::{CameraTransform, Color, Mat4, Vec3};
use crate::physics::{BoundingSphere, Ray, AABB};
use crate::render::{DrawCommand, RenderTarget};

/// Radius of the unit sphere and half-extent of the unit cube
const HALF_SIZE: f32 = 0.5;

/// Transform, color and selection state shared by the built-in shapes
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    translation: Vec3,
    scaling: Vec3,
    color: Color,
    color_index: usize,
    selected: bool,
}

impl Default for Primitive {
    fn default() -> Self {
        Self {
            translation: Vec3::zeros(),
            scaling: Vec3::new(1.0, 1.0, 1.0),
            color: Color::PALETTE[0],
            color_index: 0,
            selected: false,
        }
    }
}

impl Primitive {
    /// Local-to-world matrix: scale about the origin, then translate
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.translation) * Mat4::new_nonuniform_scaling(&self.scaling)
    }

    /// Current per-axis scale
    pub const fn scaling(&self) -> Vec3 {
        self.scaling
    }

    /// The camera-space ray re-expressed in this primitive's local frame
    ///
    /// `None` when the model or camera matrix is singular.
    fn local_ray(&self, ray: &Ray, camera_to_world: &CameraTransform) -> Option<Ray> {
        let local_from_camera = camera_to_world.local_from_camera(&self.model_matrix())?;
        Some(ray.transformed(&local_from_camera))
    }

    fn draw_command(&self, kind: ShapeKind) -> DrawCommand {
        DrawCommand {
            kind,
            model: self.model_matrix(),
            color: self.color,
            selected: self.selected,
        }
    }

    fn rotate_color(&mut self, forwards: bool) {
        let len = Color::PALETTE.len();
        self.color_index = if forwards {
            (self.color_index + 1) % len
        } else {
            (self.color_index + len - 1) % len
        };
        self.color = Color::PALETTE[self.color_index];
    }
}

/// Sphere of radius 0.5 centred on the node origin
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sphere {
    core: Primitive,
}

impl Sphere {
    /// Unit sphere at the world origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared transform and color state
    pub const fn primitive(&self) -> &Primitive {
        &self.core
    }
}

/// Axis-aligned cube of side 1 centred on the node origin
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cube {
    core: Primitive,
}

impl Cube {
    /// Unit cube at the world origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared transform and color state
    pub const fn primitive(&self) -> &Primitive {
        &self.core
    }
}

impl Node for Sphere {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Sphere
    }

    fn render(&self, target: &mut dyn RenderTarget) {
        target.draw(self.core.draw_command(self.kind()));
    }

    fn ray_test(&self, ray: &Ray, camera_to_world: &CameraTransform) -> Option<f32> {
        let local = self.core.local_ray(ray, camera_to_world)?;
        BoundingSphere::new(Vec3::zeros(), HALF_SIZE).intersect_ray(&local)
    }

    fn set_selected(&mut self, selected: bool) {
        self.core.selected = selected;
    }

    fn is_selected(&self) -> bool {
        self.core.selected
    }

    fn translate(&mut self, offset: Vec3) {
        self.core.translation += offset;
    }

    fn scale(&mut self, factor: f32) {
        self.core.scaling *= factor;
    }

    fn set_color(&mut self, color: Color) {
        self.core.color = color;
    }

    fn color(&self) -> Color {
        self.core.color
    }

    fn rotate_color(&mut self, forwards: bool) {
        self.core.rotate_color(forwards);
    }

    fn position(&self) -> Vec3 {
        self.core.translation
    }
}

impl Node for Cube {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Cube
    }

    fn render(&self, target: &mut dyn RenderTarget) {
        target.draw(self.core.draw_command(self.kind()));
    }

    fn ray_test(&self, ray: &Ray, camera_to_world: &CameraTransform) -> Option<f32> {
        let local = self.core.local_ray(ray, camera_to_world)?;
        AABB::from_center_extents(Vec3::zeros(), Vec3::repeat(HALF_SIZE)).intersect_ray(&local)
    }

    fn set_selected(&mut self, selected: bool) {
        self.core.selected = selected;
    }

    fn is_selected(&self) -> bool {
        self.core.selected
    }

    fn translate(&mut self, offset: Vec3) {
        self.core.translation += offset;
    }

    fn scale(&mut self, factor: f32) {
        self.core.scaling *= factor;
    }

    fn set_color(&mut self, color: Color) {
        self.core.color = color;
    }

    fn color(&self) -> Color {
        self.core.color
    }

    fn rotate_color(&mut self, forwards: bool) {
        self.core.rotate_color(forwards);
    }

    fn position(&self) -> Vec3 {
        self.core.translation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Mat4Ext;
    use crate::render::DrawQueue;
    use approx::assert_relative_eq;

    fn forward_ray() -> Ray {
        Ray::new(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0)).unwrap()
    }

    #[test]
    fn test_sphere_hit_distance_after_translate() {
        let mut sphere = Sphere::new();
        sphere.translate(Vec3::new(0.0, 0.0, -10.0));

        let t = sphere.ray_test(&forward_ray(), &CameraTransform::identity()).unwrap();
        assert_relative_eq!(t, 9.5, epsilon = 1e-5);
    }

    #[test]
    fn test_cube_hit_distance_after_scale() {
        let mut cube = Cube::new();
        cube.translate(Vec3::new(0.0, 0.0, -10.0));
        cube.scale(2.0);
        assert_eq!(cube.primitive().scaling(), Vec3::repeat(2.0));

        let t = cube.ray_test(&forward_ray(), &CameraTransform::identity()).unwrap();
        assert_relative_eq!(t, 9.0, epsilon = 1e-5);
    }

    #[test]
    fn test_ray_test_uses_camera_transform() {
        let mut cube = Cube::new();
        cube.translate(Vec3::new(10.0, 0.0, 0.0));

        // Camera looking down its -Z, turned a quarter to the right (world +X)
        let camera = CameraTransform::from_matrix(Mat4::rotation_y(-std::f32::consts::FRAC_PI_2));

        let t = cube.ray_test(&forward_ray(), &camera).unwrap();
        assert_relative_eq!(t, 9.5, epsilon = 1e-4);
        assert!(cube.ray_test(&forward_ray(), &CameraTransform::identity()).is_none());
    }

    #[test]
    fn test_miss_when_offset() {
        let mut sphere = Sphere::new();
        sphere.translate(Vec3::new(3.0, 0.0, -10.0));
        assert!(sphere.ray_test(&forward_ray(), &CameraTransform::identity()).is_none());
    }

    #[test]
    fn test_rotate_color_wraps() {
        let mut cube = Cube::new();
        cube.rotate_color(false);
        assert_eq!(cube.color(), Color::PALETTE[Color::PALETTE.len() - 1]);
        cube.rotate_color(true);
        cube.rotate_color(true);
        assert_eq!(cube.color(), Color::PALETTE[1]);
    }

    #[test]
    fn test_render_reports_state() {
        let mut sphere = Sphere::new();
        sphere.translate(Vec3::new(1.0, 2.0, 3.0));
        sphere.set_selected(true);
        sphere.set_color(Color::new(0.1, 0.2, 0.3));

        let mut queue = DrawQueue::new();
        sphere.render(&mut queue);

        let command = &queue.commands()[0];
        assert_eq!(command.kind, ShapeKind::Sphere);
        assert!(command.selected);
        assert_eq!(command.color, Color::new(0.1, 0.2, 0.3));
        assert_eq!(command.model, sphere.primitive().model_matrix());
    }
}
