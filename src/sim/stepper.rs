//! Fixed-timestep driver
//!
//! Turns variable frame times into whole `SIM_DT` ticks so a round plays the
//! same regardless of frame rate.

use super::state::GameState;
use super::tick::{TickInput, tick};
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Accumulates frame time and runs ticks at the fixed rate
#[derive(Debug, Clone, Default)]
pub struct Stepper {
    accumulator: f32,
    /// Input applied to every tick; `jump` and `reset` are cleared once consumed
    pub input: TickInput,
}

impl Stepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one frame of wall time and run the ticks it covers
    ///
    /// Returns the number of ticks run (at most `MAX_SUBSTEPS`).
    pub fn advance(&mut self, state: &mut GameState, frame_dt: f32) -> u32 {
        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.jump = false;
            self.input.reset = false;
        }
        substeps
    }

    /// Fraction of a tick left in the accumulator, for render interpolation
    pub fn alpha(&self) -> f32 {
        (self.accumulator / SIM_DT).clamp(0.0, 1.0)
    }
}
