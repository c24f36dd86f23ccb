//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Direction, EntityId, Position};

/// Enemy combat state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyState {
    pub kind: EnemyKind,
    /// Remaining health. Never negative; zero schedules removal.
    pub health: i32,
    /// Base speed (m/s) before wave and effect multipliers.
    pub base_speed: f64,
    /// Score awarded on kill.
    pub point_value: u32,
    /// Simulation time at which this enemy spawned (for reaction metrics).
    pub spawned_at_secs: f64,
    /// Latched once the enemy crosses the near-miss radius.
    pub near_miss_recorded: bool,
    /// Latched on the first bullet hit (for reaction-time sampling).
    pub first_hit_recorded: bool,
}

/// Bullet flight state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletState {
    /// Damage applied to the enemy it resolves against.
    pub damage: i32,
    /// Remaining flight time in seconds; removal is scheduled at <= 0.
    pub lifetime_secs: f64,
    /// Launch origin (aim-ray origin at fire time).
    pub origin: Position,
    /// Fixed flight direction; bullets do not home.
    pub direction: Direction,
    /// Set when the bullet has already been scheduled for removal,
    /// so timeout and collision can never both remove it.
    pub spent: bool,
}

/// A collectible power-up placed in the world.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUpState {
    pub kind: PowerUpKind,
}

/// Marks an entity as an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks an entity as a player bullet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet;

/// Marks an entity as a collectible power-up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp;

/// Stable identifier component attached to every entity at creation.
/// See `EntityId` for the reuse guarantee.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StableId(pub EntityId);
