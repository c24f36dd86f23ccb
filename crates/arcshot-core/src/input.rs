//! Player input and session commands.
//!
//! The engine consumes input as an immutable snapshot per tick — an aim
//! ray plus discrete trigger pulses — never live mutable input state.
//! Gesture-to-trigger translation is the platform collaborator's job.

use serde::{Deserialize, Serialize};

use crate::types::{Direction, Position};

/// An aim ray sampled by the input collaborator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AimRay {
    pub origin: Position,
    pub direction: Direction,
}

/// One tick's worth of input, sampled before the tick runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InputFrame {
    /// Aim sample for this tick. `None` means tracking was lost; the
    /// engine holds the last known aim and suppresses trigger pulses
    /// until a sample returns.
    pub aim: Option<AimRay>,
    /// Discrete trigger pulses since the previous tick.
    pub trigger_pulses: u32,
    /// Player head/body position sample.
    pub player_position: Position,
}

impl InputFrame {
    /// An idle frame: valid aim at the origin, no pulses.
    pub fn idle() -> Self {
        Self {
            aim: Some(AimRay {
                origin: Position::default(),
                direction: Direction::new(0.0, 1.0, 0.0),
            }),
            trigger_pulses: 0,
            player_position: Position::default(),
        }
    }
}

/// Session-level commands, validated and queued for processing at the
/// next tick boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new session from Idle or GameOver.
    Start,
    /// Pause the simulation.
    Pause,
    /// Resume from pause.
    Resume,
    /// Discard the session: flushes pending spawns and timed effects
    /// atomically at the tick boundary, then returns to Idle.
    Reset,
}
