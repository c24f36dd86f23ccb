//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy kind. Stats (health, speed, size, points) come from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Baseline enemy.
    #[default]
    Basic,
    /// Low health, high speed.
    Fast,
    /// High health, slow, high point value.
    Tank,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Basic, EnemyKind::Fast, EnemyKind::Tank];
}

/// Power-up kind. Each grants a timed effect when collected;
/// reapplication refreshes the duration rather than stacking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Halved fire cooldown.
    RapidFire,
    /// Three bullets per trigger pulse, fanned horizontally.
    SpreadShot,
    /// Enemy speed halved.
    FreezeTime,
    /// Absorb pool that soaks breach damage before health.
    Shield,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::RapidFire,
        PowerUpKind::SpreadShot,
        PowerUpKind::FreezeTime,
        PowerUpKind::Shield,
    ];
}

/// Top-level game phase. `GameOver` halts all wave transitions and
/// spawning until an external `Reset` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session running yet.
    #[default]
    Idle,
    Active,
    Paused,
    GameOver,
}

/// Wave lifecycle phase within an active session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// The scheduler still has composition entries to emit.
    #[default]
    Spawning,
    /// Spawning complete; at least one enemy from this wave still alive.
    Draining,
    /// Zero enemies alive; inter-wave delay elapsing.
    Cooldown,
}

/// Priority attached to an adaptation recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecommendPriority {
    /// Reward for sustained performance.
    Normal,
    /// Corrective assist.
    High,
    /// Player is about to be overwhelmed.
    Urgent,
}
