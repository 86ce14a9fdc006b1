//! wgpu rendering module
//!
//! The game draws nothing but flat-colored rectangles. The simulation side
//! hands over rectangles and colors through `Canvas`; `RenderState` turns them
//! into triangles on the GPU.

pub mod error;
pub mod pipeline;
pub mod quads;
pub mod vertex;

pub use error::{RenderError, ShaderStage};
pub use pipeline::{RenderState, ShaderSources};
pub use vertex::{Color, Vertex, colors};

use crate::sim::{GameState, Rect};

/// Anything that can draw a batch of colored rectangles in one call
pub trait Canvas {
    /// Draw `rects[i]` filled with `colors[i]`.
    ///
    /// Fails with `RenderError::BatchMismatch` when the slices differ in
    /// length; nothing is drawn in that case.
    fn draw_rectangles(&mut self, rects: &[Rect], colors: &[Color]) -> Result<(), RenderError>;
}

/// Draw the current state. Reads the state only.
pub fn render<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) -> Result<(), RenderError> {
    let (rects, colors) = quads::scene(state);
    canvas.draw_rectangles(&rects, &colors)
}
