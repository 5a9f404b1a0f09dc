//! Scene-level behaviour tests
//!
//! [`ProbeNode`] reports a fixed hit distance so picking order can be tested
//! without any geometry; the built-in primitives cover the geometric cases.

mod picking;

use crate::foundation::math::{CameraTransform, Color, Vec3};
use crate::physics::Ray;
use crate::render::{DrawCommand, RenderTarget};
use crate::scene::{Node, Scene, ShapeKind};

/// Node that answers every ray test with the same result
#[derive(Debug, Clone)]
pub(super) struct ProbeNode {
    distance: Option<f32>,
    selected: bool,
    translation: Vec3,
    color: Color,
}

impl ProbeNode {
    pub(super) fn hit(distance: f32) -> Box<dyn Node> {
        Box::new(Self::with(Some(distance)))
    }

    pub(super) fn miss() -> Box<dyn Node> {
        Box::new(Self::with(None))
    }

    fn with(distance: Option<f32>) -> Self {
        Self {
            distance,
            selected: false,
            translation: Vec3::zeros(),
            color: Color::default(),
        }
    }
}

impl Node for ProbeNode {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Cube
    }

    fn render(&self, target: &mut dyn RenderTarget) {
        target.draw(DrawCommand {
            kind: self.kind(),
            model: crate::foundation::math::Mat4::new_translation(&self.translation),
            color: self.color,
            selected: self.selected,
        });
    }

    fn ray_test(&self, _ray: &Ray, _camera_to_world: &CameraTransform) -> Option<f32> {
        self.distance
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn translate(&mut self, offset: Vec3) {
        self.translation += offset;
    }

    fn scale(&mut self, _factor: f32) {}

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn color(&self) -> Color {
        self.color
    }

    fn rotate_color(&mut self, _forwards: bool) {}

    fn position(&self) -> Vec3 {
        self.translation
    }
}

pub(super) fn forward() -> Vec3 {
    Vec3::new(0.0, 0.0, -1.0)
}

pub(super) fn identity() -> CameraTransform {
    CameraTransform::identity()
}

/// Number of nodes whose selection flag is set
pub(super) fn selected_count(scene: &Scene) -> usize {
    scene.nodes().filter(|node| node.is_selected()).count()
}
