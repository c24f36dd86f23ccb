//! Events emitted by the simulation for the presentation layer.
//!
//! The core never pushes to a UI framework; it produces a typed event
//! sequence per tick that the host polls from the snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{EntityId, Position};

/// Discrete events produced during one tick, in occurrence order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// An enemy entered the arena.
    EnemySpawned {
        id: EntityId,
        kind: EnemyKind,
        position: Position,
    },
    /// A power-up appeared in the world.
    PowerUpSpawned {
        id: EntityId,
        kind: PowerUpKind,
        position: Position,
    },
    /// A bullet left the player's aim origin.
    BulletFired { id: EntityId },
    /// A bullet resolved against an enemy.
    Hit {
        bullet_id: EntityId,
        enemy_id: EntityId,
        /// True when the hit reduced the enemy to zero health.
        killed: bool,
        /// Points awarded (zero unless killed).
        points: u32,
    },
    /// An enemy reached the minimum-approach radius: it damages the
    /// player and is removed in the same tick.
    Breach { enemy_id: EntityId },
    /// The player collected a power-up.
    PowerUpCollected { id: EntityId, kind: PowerUpKind },
    /// A timed effect ran out.
    EffectExpired { kind: PowerUpKind },
    /// A new wave began spawning.
    WaveStarted { index: u32 },
    /// All of a wave's enemies were resolved (killed or breached).
    WaveCompleted { index: u32 },
    /// The adaptation engine requested a power-up spawn.
    AdaptationTriggered {
        kind: PowerUpKind,
        priority: RecommendPriority,
    },
    /// Player health reached zero.
    GameOver { score: u64, wave: u32 },
}
