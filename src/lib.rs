//! GL Pong - a two-player paddle and ball arcade game
//!
//! Core modules:
//! - `sim`: Simulation (geometry, paddles, ball physics, scoring, game state)
//! - `tuning`: Court dimensions and speed parameters
//! - `input`: Keyboard to paddle command mapping
//! - `renderer`: wgpu pipeline that draws flat-colored quads
//! - `game_loop`: Frame clock and the per-frame render/update orchestration
//! - `app`: winit window and event loop wiring

pub mod app;
pub mod game_loop;
pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Window size in physical pixels (the court fills the whole window)
    pub const SCREEN_WIDTH: u32 = 640;
    pub const SCREEN_HEIGHT: u32 = 480;

    /// Title shown until the first score line replaces it
    pub const WINDOW_TITLE: &str = "GLPong";

    /// Ball defaults
    pub const BALL_SIZE: f32 = 15.0;
    /// Pixels per second on each axis
    pub const MAX_BALL_SPEED: f32 = 200.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Pixels per second while a movement key is held
    pub const PADDLE_SPEED: f32 = 200.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_MARGIN: f32 = 10.0;
}
