//! Game state aggregate
//!
//! One `GameState` owns everything the simulation touches: both paddles, the
//! ball, the RNG and the pause/title flags.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::ball::{Ball, ServeDirection};
use super::paddle::{Paddles, Side};
use crate::tuning::Tuning;

/// Things that happened during one simulation step
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    /// `scorer` earned a point
    PointScored { scorer: Side },
    /// Ball was re-centered and sent in `direction`
    BallServed { direction: ServeDirection },
    /// Ball touched the top or bottom wall
    WallBounce,
    /// Ball came off a paddle with `velocity`
    PaddleHit { side: Side, velocity: Vec2 },
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub tuning: Tuning,
    pub paddles: Paddles,
    pub ball: Ball,
    /// Simulation is frozen while set; starts paused
    pub paused: bool,
    /// Window title is stale and must be rebuilt
    pub title_dirty: bool,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game on the default court
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(Tuning::default(), seed)
    }

    pub fn with_tuning(tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::new(&tuning, &mut rng);
        Self {
            seed,
            tuning,
            paddles: Paddles::new(&tuning),
            ball,
            paused: true,
            title_dirty: true,
            rng,
        }
    }

    /// Flip the pause flag, returning the new value
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn set_paddle_speed(&mut self, side: Side, vertical_speed: f32) {
        self.paddles[side].set_vertical_speed(vertical_speed);
    }

    /// Score line shown in the window title
    pub fn title(&self) -> String {
        let (left, right) = self.paddles.scores();
        format!(
            "{}: {}, {}: {}",
            Side::Left.player_name(),
            left,
            Side::Right.player_name(),
            right
        )
    }

    /// The new title if the score changed since the last call
    pub fn take_title_refresh(&mut self) -> Option<String> {
        if !self.title_dirty {
            return None;
        }
        self.title_dirty = false;
        Some(self.title())
    }

    /// JSON dump of the state for diagnostics
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
