//! Ledge Runner entry point
//!
//! Headless soak runner: the autopilot plays a number of rounds through the
//! fixed-step driver and the results are logged. A windowed front end drives
//! the same `Stepper` with real input instead.
//!
//! Usage: `ledge-runner [seed] [rounds] [tuning.json]`

#[cfg(not(target_arch = "wasm32"))]
use ledge_runner::Tuning;

/// Give up on a round after this many simulated seconds
#[cfg(not(target_arch = "wasm32"))]
const MAX_ROUND_SECONDS: f32 = 300.0;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ledge_runner::Snapshot;
    use ledge_runner::consts::SIM_DT;
    use ledge_runner::sim::{Autopilot, GameEvent, GamePhase, GameState, Stepper};

    env_logger::init();
    log::info!("Ledge Runner (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = parse_arg(args.next(), "seed", 1u64);
    let rounds = parse_arg(args.next(), "rounds", 3u32);
    let tuning = match args.next() {
        Some(path) => load_tuning(&path),
        None => Tuning::default(),
    };

    let mut state = match GameState::new(tuning, seed) {
        Ok(state) => state,
        Err(err) => {
            log::error!("Cannot start: {err}");
            std::process::exit(1);
        }
    };

    let pilot = Autopilot::default();
    let mut stepper = Stepper::new();
    let max_frames = (MAX_ROUND_SECONDS / SIM_DT) as u32;

    for _ in 0..rounds {
        if state.phase == GamePhase::GameOver {
            stepper.input = pilot.drive(&state);
            stepper.advance(&mut state, SIM_DT);
        }

        let mut frames = 0;
        while state.is_alive() && frames < max_frames {
            stepper.input = pilot.drive(&state);
            stepper.advance(&mut state, SIM_DT);
            frames += 1;

            for event in state.drain_events() {
                match event {
                    GameEvent::Died { score, rank } => match rank {
                        Some(rank) => println!("round {}: score {score} (#{rank})", state.round),
                        None => println!("round {}: score {score}", state.round),
                    },
                    GameEvent::NewHighscore { score } => println!("  new highscore {score}"),
                    _ => {}
                }
            }
        }

        if state.is_alive() {
            log::warn!(
                "Round {} still alive after {MAX_ROUND_SECONDS}s at x={:.0}, moving on",
                state.round,
                state.body.pos.x
            );
            println!("round {}: survived, score {}", state.round, state.score);
            break;
        }
    }

    println!("highscore {}", state.highscore());
    match serde_json::to_string_pretty(&Snapshot::capture(&state)) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Snapshot serialization failed: {err}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Headless runner is native-only
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_arg<T: std::str::FromStr>(arg: Option<String>, name: &str, default: T) -> T {
    match arg {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::error!("Invalid {name} `{raw}`");
            std::process::exit(2);
        }),
        None => default,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> Tuning {
    let loaded = std::fs::read_to_string(path)
        .map_err(|err| err.to_string())
        .and_then(|json| Tuning::from_json(&json).map_err(|err| err.to_string()));
    match loaded {
        Ok(tuning) => {
            log::info!("Loaded tuning from {path}");
            tuning
        }
        Err(err) => {
            log::error!("Cannot load tuning from {path}: {err}");
            std::process::exit(1);
        }
    }
}
