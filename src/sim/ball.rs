//! The ball: movement, wall bounces, paddle hits and scoring
//!
//! The ball never owns the paddles. The game state lends it the paddle table
//! for the duration of one update so it can read their rectangles and credit
//! points.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::paddle::{Paddles, Side};
use super::state::GameEvent;
use crate::tuning::Tuning;

/// Direction the ball travels after a reset.
///
/// Straight up and straight down are deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServeDirection {
    UpRight,
    Right,
    DownRight,
    DownLeft,
    Left,
    UpLeft,
}

impl ServeDirection {
    pub const ALL: [ServeDirection; 6] = [
        ServeDirection::UpRight,
        ServeDirection::Right,
        ServeDirection::DownRight,
        ServeDirection::DownLeft,
        ServeDirection::Left,
        ServeDirection::UpLeft,
    ];

    /// Pick a direction uniformly
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Velocity at full speed on each populated axis
    pub fn velocity(self, max_speed: f32) -> Vec2 {
        let (x, y) = match self {
            ServeDirection::UpRight => (1.0, -1.0),
            ServeDirection::Right => (1.0, 0.0),
            ServeDirection::DownRight => (1.0, 1.0),
            ServeDirection::DownLeft => (-1.0, 1.0),
            ServeDirection::Left => (-1.0, 0.0),
            ServeDirection::UpLeft => (-1.0, -1.0),
        };
        Vec2::new(x * max_speed, y * max_speed)
    }
}

/// New ball velocity after hitting a paddle whose top edge is at `paddle_y`.
///
/// Hits near the paddle center come off fast and flat, hits near the ends
/// slower and steeper. The vertical direction of `velocity` is kept; both
/// magnitudes are recomputed. The returned x speed is always positive.
pub fn bounce(ball_y: f32, velocity: Vec2, paddle_y: f32, tuning: &Tuning) -> Vec2 {
    let max_speed = tuning.max_ball_speed;
    let half_paddle = tuning.half_paddle_height();

    let ball_center_y = ball_y + tuning.ball_size / 2.0;
    let paddle_center_y = paddle_y + half_paddle;
    let normalized_distance = ((paddle_center_y - ball_center_y).abs() / half_paddle).min(1.0);

    let speed_scale_x = (1.0 - normalized_distance).max(0.5);
    let speed_scale_y = normalized_distance.max(0.5);

    let x_speed = (max_speed * speed_scale_x + max_speed / 2.0).min(max_speed);
    let y_speed = (max_speed * speed_scale_y).copysign(velocity.y);
    Vec2::new(x_speed, y_speed)
}

/// The single ball in play
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Pixels per second
    pub vel: Vec2,
}

impl Ball {
    /// Create a ball already served from the center
    pub fn new<R: Rng>(tuning: &Tuning, rng: &mut R) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
        };
        ball.reset(tuning, rng);
        ball
    }

    pub fn rect(&self, tuning: &Tuning) -> Rect {
        Rect::from_origin(self.pos, tuning.ball_size, tuning.ball_size)
    }

    /// Re-center the ball and serve it in a random direction
    pub fn reset<R: Rng>(&mut self, tuning: &Tuning, rng: &mut R) -> ServeDirection {
        let direction = ServeDirection::random(rng);
        self.serve(direction, tuning);
        direction
    }

    /// Re-center the ball and serve it in `direction`
    pub fn serve(&mut self, direction: ServeDirection, tuning: &Tuning) {
        self.pos = tuning.serve_position();
        self.vel = direction.velocity(tuning.max_ball_speed);
    }

    /// Advance one frame.
    ///
    /// Steps run in a fixed order: move, exit left, exit right, wall bounce,
    /// left paddle, right paddle. Both exit checks always run, so the right
    /// check sees the position produced by a reset in the left check.
    pub fn update<R: Rng>(
        &mut self,
        elapsed: f32,
        paddles: &mut Paddles,
        tuning: &Tuning,
        rng: &mut R,
        events: &mut Vec<GameEvent>,
    ) {
        self.pos += self.vel * elapsed;

        if self.pos.x < 0.0 {
            self.score_point(Side::Left.opponent(), paddles, tuning, rng, events);
        }

        if self.pos.x > tuning.ball_max_x() {
            self.score_point(Side::Right.opponent(), paddles, tuning, rng, events);
        }

        // No position correction: the flip takes effect on the next frame
        if self.pos.y < 0.0 || self.pos.y > tuning.ball_max_y() {
            self.vel.y = -self.vel.y;
            events.push(GameEvent::WallBounce);
        }

        let ball_rect = self.rect(tuning);

        let left = paddles.left.rect();
        if left.intersects(&ball_rect) {
            self.vel = bounce(self.pos.y, self.vel, left.y, tuning);
            events.push(GameEvent::PaddleHit {
                side: Side::Left,
                velocity: self.vel,
            });
        }

        let right = paddles.right.rect();
        if right.intersects(&ball_rect) {
            self.vel = bounce(self.pos.y, self.vel, right.y, tuning);
            self.vel.x = -self.vel.x;
            events.push(GameEvent::PaddleHit {
                side: Side::Right,
                velocity: self.vel,
            });
        }
    }

    fn score_point<R: Rng>(
        &mut self,
        scorer: Side,
        paddles: &mut Paddles,
        tuning: &Tuning,
        rng: &mut R,
        events: &mut Vec<GameEvent>,
    ) {
        paddles[scorer].increment_score();
        events.push(GameEvent::PointScored { scorer });
        let direction = self.reset(tuning, rng);
        events.push(GameEvent::BallServed { direction });
    }
}
