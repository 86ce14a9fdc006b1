//! Frame clock and per-frame orchestration
//!
//! Each frame draws the current state and only then advances the simulation,
//! so what is on screen lags the physics by one frame.

use std::time::Instant;

use crate::renderer::{self, Canvas, RenderError};
use crate::sim::{GameEvent, GameState, tick};

/// Measures the time between frames
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self { last: now }
    }

    /// Seconds since the previous call (or since creation)
    pub fn advance(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        elapsed
    }
}

/// Render the state as it is, then advance it by `elapsed` seconds
pub fn run_frame<C: Canvas + ?Sized>(
    state: &mut GameState,
    canvas: &mut C,
    elapsed: f32,
) -> Result<Vec<GameEvent>, RenderError> {
    renderer::render(state, canvas)?;
    Ok(tick(state, elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Color;
    use crate::sim::Rect;
    use glam::Vec2;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingCanvas {
        frames: Vec<Vec<Rect>>,
    }

    impl Canvas for RecordingCanvas {
        fn draw_rectangles(&mut self, rects: &[Rect], _colors: &[Color]) -> Result<(), RenderError> {
            self.frames.push(rects.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_clock_measures_elapsed() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);
        assert_eq!(clock.advance(start + Duration::from_millis(250)), 0.25);
        assert_eq!(clock.advance(start + Duration::from_millis(500)), 0.25);
    }

    #[test]
    fn test_clock_never_goes_negative() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start + Duration::from_secs(1));
        assert_eq!(clock.advance(start), 0.0);
    }

    #[test]
    fn test_frame_draws_before_update() {
        let mut state = GameState::new(8);
        state.paused = false;
        state.ball.pos = Vec2::new(100.0, 100.0);
        state.ball.vel = Vec2::new(100.0, 0.0);
        let mut canvas = RecordingCanvas::default();

        run_frame(&mut state, &mut canvas, 0.5).unwrap();
        assert_eq!(canvas.frames[0][0].x, 100.0, "drawn before moving");
        assert_eq!(state.ball.pos.x, 150.0);

        run_frame(&mut state, &mut canvas, 0.5).unwrap();
        assert_eq!(canvas.frames[1][0].x, 150.0);
    }
}
