//! Game state snapshot — the read-only view handed to the presentation
//! layer after each tick.
//!
//! The renderer reads entity views by stable id; the event list carries
//! everything discrete (spawns, hits, wave changes) so the presentation
//! layer never diffs snapshots to detect them.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{EntityId, Position, SimTime, Velocity};

/// Complete per-tick snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: WaveView,
    pub player: PlayerView,
    pub entities: Vec<EntityView>,
    /// Events produced during this tick, in occurrence order.
    pub events: Vec<SimEvent>,
}

/// One live entity, identified by stable id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub position: Position,
    pub velocity: Velocity,
    pub detail: EntityDetail,
}

/// Variant-specific fields of an entity view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "variant")]
pub enum EntityDetail {
    Enemy { kind: EnemyKind, health: i32 },
    Bullet { lifetime_secs: f64 },
    PowerUp { kind: PowerUpKind },
}

/// Wave progress for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    /// 1-based wave index; 0 before the first wave starts.
    pub index: u32,
    pub phase: WavePhase,
    /// Enemies spawned so far from the current wave's composition.
    pub spawned: u32,
    /// Composition entries not yet spawned.
    pub remaining_to_spawn: u32,
    /// Live enemies right now.
    pub live_enemies: u32,
    /// Seconds left in Cooldown (zero otherwise).
    pub cooldown_remaining_secs: f64,
    /// Current wave speed multiplier.
    pub speed_multiplier: f64,
}

/// A timed effect currently applied to the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveEffectView {
    pub kind: PowerUpKind,
    pub remaining_secs: f64,
}

/// Player status for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub health: u32,
    /// Remaining shield absorb points (zero when no shield).
    pub shield_points: u32,
    pub score: u64,
    pub combo: u32,
    pub active_effects: Vec<ActiveEffectView>,
    pub position: Position,
}
