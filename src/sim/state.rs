//! Game state and core simulation types
//!
//! One `GameState` spans a whole session: rounds come and go, the
//! highscore board stays.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::camera::Camera;
use super::world::World;
use crate::error::ConfigError;
use crate::highscores::{HighScores, RoundResult};
use crate::round_seed;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Round in progress
    Playing,
    /// Body fell out of the world; waiting for a reset
    GameOver,
    /// Session ended; nothing advances any more
    Quit,
}

/// Something the presentation layer may want to react to (sound, flashes, HUD)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RoundStarted { round: u32 },
    Jumped,
    Landed { platform_id: u32 },
    HeadBump { platform_id: u32 },
    SideHit { platform_id: u32 },
    PlatformActivated { id: u32 },
    PlatformExpired { id: u32 },
    /// `rank` is the board position the round took, if any
    Died { score: i64, rank: Option<usize> },
    NewHighscore { score: i64 },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Validated balance numbers
    pub tuning: Tuning,
    /// Session seed; each round derives its own from this
    pub seed: u64,
    /// Current round (1-based)
    pub round: u32,
    pub phase: GamePhase,
    pub body: Body,
    pub world: World<Pcg32>,
    pub camera: Camera,
    /// floor(body.x / score_unit) while alive, frozen after death
    pub score: i64,
    /// Best round results this session
    pub highscores: HighScores,
    /// Ticks simulated in the current round
    pub time_ticks: u64,
    /// Events raised since the presentation layer last drained them
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Start a session with its first round already running
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let round = 1;
        let world = World::from_valid(&tuning, Self::round_rng(seed, round));
        let body = Body::spawn(&tuning);
        log::info!("Round {round} started (seed {seed})");

        Ok(Self {
            tuning,
            seed,
            round,
            phase: GamePhase::Playing,
            body,
            world,
            camera: Camera::default(),
            score: 0,
            highscores: HighScores::new(),
            time_ticks: 0,
            events: vec![GameEvent::RoundStarted { round }],
        })
    }

    fn round_rng(seed: u64, round: u32) -> Pcg32 {
        Pcg32::seed_from_u64(round_seed(seed, round))
    }

    pub fn is_alive(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Best score this session, 0 until a positive round ends
    pub fn highscore(&self) -> i64 {
        self.highscores.best()
    }

    /// Rebuild body, world and camera for the next round
    ///
    /// Only honoured after game over; returns whether a new round started.
    pub fn reset(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            return false;
        }
        self.round += 1;
        self.world = World::from_valid(&self.tuning, Self::round_rng(self.seed, self.round));
        self.body = Body::spawn(&self.tuning);
        self.camera = Camera::default();
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::RoundStarted { round: self.round });
        log::info!("Round {} started", self.round);
        true
    }

    /// End the round: freeze the score and post it to the board
    pub(crate) fn die(&mut self) {
        self.phase = GamePhase::GameOver;
        let rank = self.highscores.record(RoundResult {
            score: self.score,
            round: self.round,
            distance: self.body.pos.x,
        });
        log::info!(
            "Round {} over: score {} at x={:.0} after {} ticks",
            self.round,
            self.score,
            self.body.pos.x,
            self.time_ticks
        );

        self.events.push(GameEvent::Died {
            score: self.score,
            rank,
        });
        if rank == Some(1) {
            self.events.push(GameEvent::NewHighscore { score: self.score });
            log::info!("New highscore: {}", self.score);
        }
    }

    /// Hand over and clear the pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
