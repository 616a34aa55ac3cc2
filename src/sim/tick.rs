//! Per-tick simulation step
//!
//! Core game loop that advances the round by one step of `dt` seconds.

use super::collision::resolve_collisions;
use super::state::{GameEvent, GamePhase, GameState};

/// Input intents for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Held: steer left
    pub move_left: bool,
    /// Held: steer right
    pub move_right: bool,
    /// Jump if standing on something
    pub jump: bool,
    /// Start a new round (only honoured after game over)
    pub reset: bool,
    /// End the session
    pub quit: bool,
}

/// Advance the game state by one step
///
/// Order within a live tick: jump, steer, integrate, collide, extend the
/// world ahead of the camera, age temporary platforms, drop platforms behind
/// the camera, move the camera, score, death check.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.quit && state.phase != GamePhase::Quit {
        log::info!("Quit requested in round {}", state.round);
        state.phase = GamePhase::Quit;
        return;
    }

    match state.phase {
        GamePhase::Quit => return,
        GamePhase::GameOver => {
            if input.reset {
                state.reset();
            }
            return;
        }
        GamePhase::Playing => {}
    }

    // Negative, NaN or infinite steps would poison the state
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    state.time_ticks += 1;

    let tuning = &state.tuning;
    let body = &mut state.body;
    let was_on_ground = body.on_ground;

    if input.jump && body.jump(tuning) {
        state.events.push(GameEvent::Jumped);
    }
    body.apply_input(input.move_left, input.move_right, dt, tuning);
    body.integrate(dt, tuning);

    let collision = resolve_collisions(body, state.world.platforms(), dt, tuning);
    if let (Some(platform_id), false) = (collision.landed_on, was_on_ground) {
        state.events.push(GameEvent::Landed { platform_id });
    }
    if let Some(platform_id) = collision.bumped {
        state.events.push(GameEvent::HeadBump { platform_id });
    }
    if let Some(platform_id) = collision.side_hit {
        state.events.push(GameEvent::SideHit { platform_id });
    }

    // World upkeep runs against the camera position from the previous tick
    state
        .world
        .generate_until(state.camera.x + tuning.lookahead_distance);
    let report = state.world.update(dt, &body.contact_rect());
    state.events.extend(
        report
            .activated
            .into_iter()
            .map(|id| GameEvent::PlatformActivated { id }),
    );
    state.events.extend(
        report
            .expired
            .into_iter()
            .map(|id| GameEvent::PlatformExpired { id }),
    );
    state.world.cleanup(state.camera.x);

    state.camera.follow(
        tuning.camera_target(body.pos.x),
        dt,
        tuning.camera_smooth_rate,
    );

    state.score = (body.pos.x / tuning.score_unit).floor() as i64;

    if body.pos.y > tuning.death_y {
        state.die();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn new_state(seed: u64) -> GameState {
        GameState::new(Tuning::default(), seed).expect("default tuning is valid")
    }

    fn run_right() -> TickInput {
        TickInput {
            move_right: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_resting_on_ground_stays_grounded() {
        let mut state = new_state(1);
        state.body.pos.y = GROUND_Y - PLAYER_HEIGHT;
        state.body.on_ground = true;

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.body.on_ground);
        assert_eq!(state.body.vel.y, 0.0);
        assert_eq!(state.body.pos.y, GROUND_Y - PLAYER_HEIGHT);
        assert!(state.is_alive());
    }

    #[test]
    fn test_spawn_falls_onto_ground() {
        let mut state = new_state(1);
        for _ in 0..60 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert!(state.body.on_ground);
        assert_eq!(state.body.pos.y, GROUND_Y - PLAYER_HEIGHT);
        assert!(
            state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::Landed { platform_id: 0 }))
        );
    }

    #[test]
    fn test_jump_leaves_ground() {
        let mut state = new_state(1);
        state.body.pos.y = GROUND_Y - PLAYER_HEIGHT;
        state.body.on_ground = true;

        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump, SIM_DT);
        assert!(!state.body.on_ground);
        assert!(state.body.vel.y < 0.0);
        assert!(state.body.pos.y < GROUND_Y - PLAYER_HEIGHT);
        assert!(state.events.contains(&GameEvent::Jumped));
    }

    #[test]
    fn test_running_into_side_kills() {
        let mut state = new_state(1);
        // Just right of the ground's right face, below its top, running left
        // (integration moves it 4.7 units first, the lateral pass another 4.7 into the ground)
        state.body.pos = Vec2::new(GROUND_X + GROUND_WIDTH + 5.0, GROUND_Y + 10.0);
        state.body.vel.x = -PLAYER_SPEED;
        let run_left = TickInput {
            move_left: true,
            ..Default::default()
        };

        tick(&mut state, &run_left, SIM_DT);
        assert!(state.body.pos.y > DEATH_Y);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::SideHit { platform_id: 0 }));
    }

    #[test]
    fn test_score_tracks_x_then_freezes() {
        let mut state = new_state(3);
        state.body.pos.y = GROUND_Y - PLAYER_HEIGHT;
        state.body.on_ground = true;
        for _ in 0..30 {
            tick(&mut state, &run_right(), SIM_DT);
            assert!(state.is_alive());
            assert_eq!(state.score, (state.body.pos.x / 10.0).floor() as i64);
        }

        state.body.pos.y = DEATH_Y + 500.0;
        state.body.vel.y = 0.0;
        tick(&mut state, &run_right(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        let frozen_score = state.score;
        let frozen_body = state.body.clone();
        let frozen_len = state.world.len();
        assert_eq!(state.highscore(), frozen_score.max(0));

        for _ in 0..10 {
            tick(&mut state, &run_right(), SIM_DT);
        }
        assert_eq!(state.score, frozen_score);
        assert_eq!(state.body, frozen_body);
        assert_eq!(state.world.len(), frozen_len);
    }

    #[test]
    fn test_reset_starts_next_round() {
        let mut state = new_state(5);
        let reset = TickInput {
            reset: true,
            ..Default::default()
        };

        // Ignored while alive
        tick(&mut state, &reset, SIM_DT);
        assert_eq!(state.round, 1);

        state.body.pos.y = DEATH_Y + 1.0;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);

        tick(&mut state, &reset, SIM_DT);
        assert_eq!(state.round, 2);
        assert!(state.is_alive());
        assert_eq!(state.score, 0);
        assert_eq!(state.camera.x, 0.0);
        assert_eq!(state.body.pos, Vec2::new(SPAWN_X, SPAWN_Y));
        assert_eq!(state.world.len(), 1);
    }

    #[test]
    fn test_quit_is_terminal() {
        let mut state = new_state(5);
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        tick(&mut state, &quit, SIM_DT);
        assert_eq!(state.phase, GamePhase::Quit);

        let before = state.body.clone();
        tick(&mut state, &run_right(), SIM_DT);
        tick(
            &mut state,
            &TickInput {
                reset: true,
                ..Default::default()
            },
            SIM_DT,
        );
        assert_eq!(state.phase, GamePhase::Quit);
        assert_eq!(state.body, before);
    }

    #[test]
    fn test_world_stays_ahead_of_camera() {
        let mut state = new_state(9);
        state.body.pos.y = GROUND_Y - PLAYER_HEIGHT;
        state.body.on_ground = true;
        for _ in 0..120 {
            let camera_before = state.camera.x;
            tick(&mut state, &run_right(), SIM_DT);
            if !state.is_alive() {
                break;
            }
            assert!(state.world.frontier() >= camera_before + GEN_AHEAD);
        }
        assert!(state.camera.x > 0.0);
    }

    #[test]
    fn test_bad_dt_does_not_poison_state() {
        let mut state = new_state(2);
        tick(&mut state, &run_right(), f32::NAN);
        tick(&mut state, &run_right(), -1.0);
        tick(&mut state, &run_right(), f32::INFINITY);
        assert!(state.body.pos.is_finite());
        assert!(state.body.vel.is_finite());
        assert!(state.camera.x.is_finite());
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = new_state(99999);
        let mut state2 = new_state(99999);

        let inputs = [
            run_right(),
            TickInput {
                jump: true,
                move_right: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                move_left: true,
                ..Default::default()
            },
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut state1, input, SIM_DT);
                tick(&mut state2, input, SIM_DT);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.body, state2.body);
        assert_eq!(state1.world.platforms(), state2.world.platforms());
        assert_eq!(state1.score, state2.score);
    }
}
