//! Quad generation for screen-space rectangles
//!
//! Converts court rectangles into clip-space triangles. Nothing here touches
//! the GPU, so the whole vertex stream can be checked in tests.

use glam::Vec2;

use super::error::RenderError;
use super::vertex::{Color, Vertex, colors};
use crate::sim::{GameState, Rect};

/// Vertices emitted per rectangle (two triangles)
pub const VERTICES_PER_QUAD: usize = 6;

/// Map a court point to clip space, flipping y so the court's top is +1
#[inline]
pub fn to_clip(point: Vec2, screen: Vec2) -> Vec2 {
    Vec2::new(
        point.x / screen.x * 2.0 - 1.0,
        -point.y / screen.y * 2.0 + 1.0,
    )
}

/// Two triangles covering `rect`: (TL, BR, BL) then (TL, TR, BR)
pub fn quad(rect: &Rect, color: Color, screen: Vec2) -> [Vertex; VERTICES_PER_QUAD] {
    let [top_left, top_right, bottom_left, bottom_right] =
        rect.corners().map(|corner| to_clip(corner, screen));
    let rgb = color.to_array();
    let v = |p: Vec2| Vertex::new(p.x, p.y, rgb);

    [
        v(top_left),
        v(bottom_right),
        v(bottom_left),
        v(top_left),
        v(top_right),
        v(bottom_right),
    ]
}

/// Build the vertex stream for a batch; `rects[i]` is drawn with `colors[i]`
pub fn build_vertices(
    rects: &[Rect],
    colors: &[Color],
    screen: Vec2,
) -> Result<Vec<Vertex>, RenderError> {
    if rects.len() != colors.len() {
        return Err(RenderError::BatchMismatch {
            rects: rects.len(),
            colors: colors.len(),
        });
    }

    let mut vertices = Vec::with_capacity(rects.len() * VERTICES_PER_QUAD);
    for (rect, color) in rects.iter().zip(colors) {
        vertices.extend_from_slice(&quad(rect, *color, screen));
    }
    Ok(vertices)
}

/// What to draw this frame: ball, left paddle, right paddle
pub fn scene(state: &GameState) -> ([Rect; 3], [Color; 3]) {
    (
        [
            state.ball.rect(&state.tuning),
            state.paddles.left.rect(),
            state.paddles.right.rect(),
        ],
        [colors::BALL, colors::LEFT_PADDLE, colors::RIGHT_PADDLE],
    )
}
