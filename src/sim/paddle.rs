//! Player paddles

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::tuning::Tuning;

/// Which side of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The side that scores when the ball leaves the court past this one
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Player color name used in the window title
    pub fn player_name(self) -> &'static str {
        match self {
            Side::Left => "Red",
            Side::Right => "Blue",
        }
    }
}

/// A player-controlled paddle
///
/// Moves only on the vertical axis and never leaves the court.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    side: Side,
    score: u32,
    rect: Rect,
    /// Pixels per second, negative is up
    vertical_speed: f32,
    /// Lowest allowed value for `rect.y`
    max_y: f32,
}

impl Paddle {
    pub fn new(side: Side, tuning: &Tuning) -> Self {
        Self {
            side,
            score: 0,
            rect: Rect::new(
                tuning.paddle_x(side),
                tuning.paddle_start_y(),
                tuning.paddle_width,
                tuning.paddle_height,
            ),
            vertical_speed: 0.0,
            max_y: tuning.paddle_max_y(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn vertical_speed(&self) -> f32 {
        self.vertical_speed
    }

    /// Move by `vertical_speed * elapsed`, then clamp to the court
    pub fn update(&mut self, elapsed: f32) {
        self.rect.y += self.vertical_speed * elapsed;
        if self.rect.y > self.max_y {
            self.rect.y = self.max_y;
        }
        if self.rect.y < 0.0 {
            self.rect.y = 0.0;
        }
    }

    pub fn set_vertical_speed(&mut self, vertical_speed: f32) {
        self.vertical_speed = vertical_speed;
    }

    pub fn increment_score(&mut self) {
        self.score += 1;
    }
}

/// Both paddles, indexable by `Side`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddles {
    pub left: Paddle,
    pub right: Paddle,
}

impl Paddles {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            left: Paddle::new(Side::Left, tuning),
            right: Paddle::new(Side::Right, tuning),
        }
    }

    pub fn update(&mut self, elapsed: f32) {
        self.left.update(elapsed);
        self.right.update(elapsed);
    }

    /// Scores as `(left, right)`
    pub fn scores(&self) -> (u32, u32) {
        (self.left.score(), self.right.score())
    }
}

impl Index<Side> for Paddles {
    type Output = Paddle;

    fn index(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

impl IndexMut<Side> for Paddles {
    fn index_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
