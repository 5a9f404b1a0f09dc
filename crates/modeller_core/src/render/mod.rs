//! Render dispatch seam
//!
//! The core never talks to a graphics API. Nodes describe themselves to a
//! [`RenderTarget`], and the host application turns those descriptions into
//! draw calls. [`DrawQueue`] is the in-crate target: it records commands in
//! submission order, which is enough for headless hosts and tests.

mod draw_queue;

pub use draw_queue::{DrawCommand, DrawQueue};

/// Receiver of per-node draw requests
pub trait RenderTarget {
    /// Submit one shape for drawing
    fn draw(&mut self, command: DrawCommand);
}
