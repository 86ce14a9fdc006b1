//! Data-driven game parameters
//!
//! The simulation never reads `consts` directly; it reads a `Tuning` so tests
//! can run on smaller or oddly shaped courts.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Side;

/// Court, ball and paddle parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub court_width: f32,
    pub court_height: f32,
    pub ball_size: f32,
    pub max_ball_speed: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            court_width: SCREEN_WIDTH as f32,
            court_height: SCREEN_HEIGHT as f32,
            ball_size: BALL_SIZE,
            max_ball_speed: MAX_BALL_SPEED,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_margin: PADDLE_MARGIN,
        }
    }
}

impl Tuning {
    #[inline]
    pub fn court_size(&self) -> Vec2 {
        Vec2::new(self.court_width, self.court_height)
    }

    #[inline]
    pub fn half_paddle_height(&self) -> f32 {
        self.paddle_height / 2.0
    }

    /// Top-left corner of the ball when it sits in the middle of the court
    pub fn serve_position(&self) -> Vec2 {
        Vec2::new(
            self.court_width / 2.0 - self.ball_size / 2.0,
            self.court_height / 2.0 - self.ball_size / 2.0,
        )
    }

    /// Largest x the ball may reach before the left player scores
    #[inline]
    pub fn ball_max_x(&self) -> f32 {
        self.court_width - self.ball_size
    }

    /// Largest y the ball may reach before bouncing off the bottom wall
    #[inline]
    pub fn ball_max_y(&self) -> f32 {
        self.court_height - self.ball_size
    }

    /// Largest y a paddle's top edge may take
    #[inline]
    pub fn paddle_max_y(&self) -> f32 {
        self.court_height - self.paddle_height
    }

    /// Fixed x of a paddle's left edge
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.court_width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Starting y of a paddle's top edge (vertically centered)
    pub fn paddle_start_y(&self) -> f32 {
        self.court_height / 2.0 - self.half_paddle_height()
    }
}
