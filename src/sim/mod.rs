//! Simulation module
//!
//! All gameplay logic lives here:
//! - Screen-space rectangles with strict containment
//! - Paddles clamped to the court
//! - Ball movement, wall and paddle bounces, scoring
//! - No rendering or platform dependencies

pub mod ball;
pub mod geometry;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::{Ball, ServeDirection, bounce};
pub use geometry::{Point, Rect};
pub use paddle::{Paddle, Paddles, Side};
pub use state::{GameEvent, GameState};
pub use tick::tick;
