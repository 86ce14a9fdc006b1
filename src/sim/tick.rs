//! Variable timestep simulation step
//!
//! Advances the game by however long the last frame took.

use super::state::{GameEvent, GameState};

/// Advance the game state by `elapsed` seconds.
///
/// A no-op while paused: nothing moves, velocities set by input are kept for
/// when play resumes. Otherwise the ball moves first, then the left and right
/// paddles.
pub fn tick(state: &mut GameState, elapsed: f32) -> Vec<GameEvent> {
    if state.paused {
        return Vec::new();
    }

    let mut events = Vec::new();
    state.ball.update(
        elapsed,
        &mut state.paddles,
        &state.tuning,
        &mut state.rng,
        &mut events,
    );
    state.paddles.update(elapsed);

    let mut scored = false;
    for event in &events {
        match event {
            GameEvent::PointScored { scorer } => {
                scored = true;
                state.title_dirty = true;
                log::info!("Point to {}: {}", scorer.player_name(), state.title());
            }
            GameEvent::BallServed { direction } => {
                log::debug!("Ball served {:?}", direction);
            }
            GameEvent::PaddleHit { side, velocity } => {
                log::debug!("{:?} paddle hit, ball velocity {}", side, velocity);
            }
            GameEvent::WallBounce => {}
        }
    }

    if scored && log::log_enabled!(log::Level::Debug) {
        match state.snapshot_json() {
            Ok(json) => log::debug!("State after point: {}", json),
            Err(e) => log::warn!("Failed to serialize state: {}", e),
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Side;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_tick_paused_is_noop() {
        let mut state = GameState::new(12345);
        state.set_paddle_speed(Side::Left, -200.0);
        let before = state.clone();
        let events = tick(&mut state, 0.5);
        assert!(events.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn test_tick_moves_ball_then_paddles() {
        let mut state = GameState::new(12345);
        state.paused = false;
        state.ball.pos = Vec2::new(300.0, 200.0);
        state.ball.vel = Vec2::new(100.0, 100.0);
        state.set_paddle_speed(Side::Right, 200.0);
        tick(&mut state, 0.1);
        assert_eq!(state.ball.pos, Vec2::new(310.0, 210.0));
        assert_eq!(state.paddles.right.rect().y, 210.0);
        assert_eq!(state.paddles.left.rect().y, 190.0);
    }

    #[test]
    fn test_tick_point_marks_title_dirty() {
        let mut state = GameState::new(12345);
        state.paused = false;
        state.title_dirty = false;
        state.ball.pos = Vec2::new(0.0, 200.0);
        state.ball.vel = Vec2::new(-200.0, 0.0);
        let events = tick(&mut state, 0.1);
        assert!(state.title_dirty);
        assert_eq!(state.paddles.scores(), (0, 1));
        assert!(events.contains(&GameEvent::PointScored {
            scorer: Side::Right
        }));
    }

    #[test]
    fn test_centered_hit_on_left_paddle() {
        let mut state = GameState::new(12345);
        state.paused = false;
        // Ball center lines up with the paddle center (190 + 50) after moving
        state.ball.pos = Vec2::new(30.0, 232.5);
        state.ball.vel = Vec2::new(-200.0, 0.0);
        let events = tick(&mut state, 0.05);
        assert_eq!(state.ball.pos, Vec2::new(20.0, 232.5));
        assert_eq!(state.ball.vel, Vec2::new(200.0, 100.0));
        assert_eq!(
            events,
            vec![GameEvent::PaddleHit {
                side: Side::Left,
                velocity: Vec2::new(200.0, 100.0),
            }]
        );
    }

    #[test]
    fn test_point_resets_ball_and_title() {
        let mut state = GameState::new(4);
        state.paused = false;
        assert_eq!(state.take_title_refresh().as_deref(), Some("Red: 0, Blue: 0"));

        state.ball.pos = Vec2::new(630.0, 100.0);
        state.ball.vel = Vec2::new(200.0, 200.0);
        tick(&mut state, 0.1);
        assert_eq!(state.ball.pos, Vec2::new(312.5, 232.5));
        assert_eq!(state.ball.vel.x.abs(), 200.0);
        assert_eq!(state.take_title_refresh().as_deref(), Some("Red: 1, Blue: 0"));
        assert_eq!(state.take_title_refresh(), None);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);
        state1.paused = false;
        state2.paused = false;

        for _ in 0..2000 {
            tick(&mut state1, 1.0 / 60.0);
            tick(&mut state2, 1.0 / 60.0);
        }

        assert_eq!(state1, state2);
    }

    proptest! {
        #[test]
        fn paused_ticks_change_nothing(
            seed in any::<u64>(),
            left_speed in -400.0f32..400.0,
            steps in proptest::collection::vec(0.0f32..5.0, 1..10),
        ) {
            let mut state = GameState::new(seed);
            state.set_paddle_speed(Side::Left, left_speed);
            state.title_dirty = false;
            let before = state.clone();
            for elapsed in steps {
                tick(&mut state, elapsed);
            }
            prop_assert_eq!(state, before);
        }

        #[test]
        fn scores_only_grow_by_one_per_exit(
            seed in any::<u64>(),
            steps in proptest::collection::vec(0.0f32..0.05, 1..400),
        ) {
            let mut state = GameState::new(seed);
            state.paused = false;
            for elapsed in steps {
                let (left_before, right_before) = state.paddles.scores();
                let events = tick(&mut state, elapsed);
                let (left, right) = state.paddles.scores();
                let left_points = events
                    .iter()
                    .filter(|e| **e == GameEvent::PointScored { scorer: Side::Left })
                    .count() as u32;
                let right_points = events
                    .iter()
                    .filter(|e| **e == GameEvent::PointScored { scorer: Side::Right })
                    .count() as u32;
                prop_assert_eq!(left, left_before + left_points);
                prop_assert_eq!(right, right_before + right_points);
                prop_assert!(left_points <= 1 && right_points <= 1);
            }
        }

        #[test]
        fn ball_speed_stays_bounded(
            seed in any::<u64>(),
            steps in proptest::collection::vec(0.0f32..0.05, 1..400),
        ) {
            let mut state = GameState::new(seed);
            state.paused = false;
            let max = state.tuning.max_ball_speed;
            for elapsed in steps {
                tick(&mut state, elapsed);
                prop_assert!(state.ball.vel.x.abs() <= max);
                prop_assert!(state.ball.vel.y.abs() <= max);
            }
        }
    }
}
