//! Headless session runner.
//!
//! Drives the simulation with a simple autoplay policy (aim at the
//! nearest enemy, hold the trigger) so balance and determinism can be
//! exercised without a headset attached.
//!
//! Usage: arcshot-app [CONFIG.json] [--seed N] [--ticks N]

use std::error::Error;
use std::fs;

use arcshot_core::config::GameConfig;
use arcshot_core::input::{AimRay, InputFrame, PlayerCommand};
use arcshot_core::state::{EntityDetail, GameSnapshot};
use arcshot_core::types::{Direction, Position};
use arcshot_sim::{SimConfig, SimulationEngine};

/// Host tick rate the runner simulates (seconds per tick).
const DT: f64 = 1.0 / 60.0;

struct Args {
    config_path: Option<String>,
    seed: u64,
    ticks: u64,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut args = Args {
        config_path: None,
        seed: 0,
        ticks: 18_000,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed requires a value")?;
                args.seed = value.parse()?;
            }
            "--ticks" => {
                let value = iter.next().ok_or("--ticks requires a value")?;
                args.ticks = value.parse()?;
            }
            path if !path.starts_with('-') => args.config_path = Some(path.to_string()),
            other => return Err(format!("unknown argument: {other}").into()),
        }
    }
    Ok(args)
}

/// Aim at the nearest live enemy and fire every tick.
fn autoplay_frame(snapshot: &GameSnapshot) -> InputFrame {
    let origin = Position::new(0.0, 0.0, 1.5);
    let direction = snapshot
        .entities
        .iter()
        .filter(|e| matches!(e.detail, EntityDetail::Enemy { .. }))
        .min_by(|a, b| {
            origin
                .range_to(&a.position)
                .total_cmp(&origin.range_to(&b.position))
        })
        .map(|e| origin.direction_to(&e.position))
        .unwrap_or(Direction::new(0.0, 1.0, 0.0));
    InputFrame {
        aim: Some(AimRay { origin, direction }),
        trigger_pulses: 1,
        player_position: Position::default(),
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            GameConfig::from_json_str(&json)?
        }
        None => GameConfig::default(),
    };

    let mut engine = SimulationEngine::new(SimConfig {
        seed: args.seed,
        config,
    })?;
    engine.enqueue_command(PlayerCommand::Start);

    log::info!("running {} ticks at {DT:.4}s (seed {})", args.ticks, args.seed);

    let mut snapshot = engine.tick(&InputFrame::idle(), DT);
    for _ in 1..args.ticks {
        let frame = autoplay_frame(&snapshot);
        snapshot = engine.tick(&frame, DT);
        if snapshot.phase == arcshot_core::enums::GamePhase::GameOver {
            break;
        }
    }

    println!(
        "{}",
        serde_json::json!({
            "ticks": snapshot.time.tick,
            "elapsed_secs": snapshot.time.elapsed_secs,
            "phase": snapshot.phase,
            "wave": snapshot.wave.index,
            "score": snapshot.player.score,
            "health": snapshot.player.health,
        })
    );
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
