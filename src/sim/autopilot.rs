//! Demo mode - the game plays itself
//!
//! Holds right and hops off ledges just before running out of floor. Good
//! enough for attract screens and soak runs, not for high scores.

use super::state::{GamePhase, GameState};
use super::tick::TickInput;

/// How close the body's leading edge gets to a ledge end before jumping
pub const DEFAULT_EDGE_MARGIN: f32 = 24.0;

/// Tolerance when deciding which platform the body is standing on
const SUPPORT_TOLERANCE: f32 = 1.5;

/// Scripted driver producing one `TickInput` per tick
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    pub edge_margin: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            edge_margin: DEFAULT_EDGE_MARGIN,
        }
    }
}

impl Autopilot {
    pub fn drive(&self, state: &GameState) -> TickInput {
        match state.phase {
            GamePhase::GameOver => {
                return TickInput {
                    reset: true,
                    ..Default::default()
                };
            }
            GamePhase::Quit => return TickInput::default(),
            GamePhase::Playing => {}
        }

        let mut input = TickInput {
            move_right: true,
            ..Default::default()
        };
        if !state.body.on_ground {
            return input;
        }

        let body = state.body.rect();
        let feet = body.bottom();
        let platforms = state.world.platforms();

        // Ledge under the feet; missing means we are about to drop anyway
        let support = platforms.iter().find(|p| {
            (p.rect.top() - feet).abs() <= SUPPORT_TOLERANCE
                && p.rect.overlaps_x(body.left(), body.right())
        });
        let near_edge = support
            .map(|p| body.right() + self.edge_margin >= p.right())
            .unwrap_or(true);

        // A higher ledge right in front would be run into side-first
        let wall_ahead = platforms
            .iter()
            .filter(|p| p.rect.left() >= body.right())
            .take_while(|p| p.rect.left() - body.right() <= self.edge_margin)
            .any(|p| p.rect.top() < feet - SUPPORT_TOLERANCE);

        input.jump = near_edge || wall_ahead;
        input
    }
}
