//! Recorded draw commands

use super::RenderTarget;
use crate::foundation::math::{Color, Mat4};
use crate::scene::ShapeKind;

/// Everything a backend needs to draw one primitive
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Which mesh to draw
    pub kind: ShapeKind,

    /// Local-to-world matrix of the node
    pub model: Mat4,

    /// Flat color of the node
    pub color: Color,

    /// Whether to draw the selection highlight
    pub selected: bool,
}

/// Render target that keeps every submitted command, in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawQueue {
    commands: Vec<DrawCommand>,
}

impl DrawQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands submitted since the last clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of queued commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been queued
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all queued commands, keeping the allocation for the next frame
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl RenderTarget for DrawQueue {
    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}
