//! Baseline tuning values.
//!
//! These seed `GameConfig::default()`; a loaded config replaces them
//! wholesale. Nothing in the simulation reads these directly.

/// Largest delta-time accepted per tick (seconds). Larger host deltas are
/// clamped before integration so a frame hitch cannot tunnel an enemy
/// past the breach radius.
pub const MAX_TICK_DT: f64 = 1.0 / 30.0;

/// Hard cap on simultaneously live entities across all variants.
pub const MAX_ACTIVE_ENTITIES: usize = 200;

// --- Player ---

/// Starting and maximum player health.
pub const PLAYER_MAX_HEALTH: u32 = 10;

/// Minimum time between accepted trigger pulses (seconds).
pub const FIRE_COOLDOWN_SECS: f64 = 0.25;

/// Combo ceiling.
pub const MAX_COMBO: u32 = 10;

/// Seconds without a hit before the combo resets to zero.
pub const COMBO_TIMEOUT_SECS: f64 = 3.0;

// --- Enemies ---

pub const BASIC_HEALTH: i32 = 2;
pub const BASIC_SPEED: f64 = 1.0;
pub const BASIC_RADIUS: f64 = 0.25;
pub const BASIC_POINTS: u32 = 10;

pub const FAST_HEALTH: i32 = 1;
pub const FAST_SPEED: f64 = 2.5;
pub const FAST_RADIUS: f64 = 0.18;
pub const FAST_POINTS: u32 = 15;

pub const TANK_HEALTH: i32 = 6;
pub const TANK_SPEED: f64 = 0.6;
pub const TANK_RADIUS: f64 = 0.4;
pub const TANK_POINTS: u32 = 30;

// --- Bullets ---

pub const BULLET_SPEED: f64 = 12.0;
pub const BULLET_DAMAGE: i32 = 1;
pub const BULLET_RADIUS: f64 = 0.05;

/// Bullet flight time (seconds). Equals max range / speed.
pub const BULLET_LIFETIME_SECS: f64 = 2.0;

// --- Spawning ---

/// Horizontal spawn circle radius around the player (meters).
pub const SPAWN_RADIUS: f64 = 8.0;

/// Interval between successive scheduled spawns within a wave (seconds).
pub const SPAWN_CADENCE_SECS: f64 = 1.2;

/// Vertical spawn band (meters, z-up).
pub const SPAWN_HEIGHT_MIN: f64 = 0.8;
pub const SPAWN_HEIGHT_MAX: f64 = 2.2;

/// Minimum angular separation from the two most recent spawn angles
/// (radians). Pure uniform draws clump visibly at small sample counts.
pub const SPAWN_MIN_ANGLE_SEPARATION: f64 = 0.5;

// --- Waves ---

/// Delay between a wave draining and the next one spawning (seconds).
pub const INTER_WAVE_DELAY_SECS: f64 = 4.0;

/// Every Nth wave is a boss wave.
pub const BOSS_WAVE_INTERVAL: u32 = 5;

/// Boss wave composition: this many Tank enemies, overriding the formula.
pub const BOSS_TANK_COUNT: u32 = 10;

// --- Power-ups ---

pub const RAPID_FIRE_DURATION_SECS: f64 = 8.0;
pub const SPREAD_SHOT_DURATION_SECS: f64 = 8.0;
pub const FREEZE_TIME_DURATION_SECS: f64 = 5.0;
pub const SHIELD_DURATION_SECS: f64 = 10.0;

/// Chance that a killed enemy drops a power-up.
pub const POWERUP_DROP_CHANCE: f64 = 0.08;

/// Distance from the aim origin at which a power-up is collected (meters).
pub const POWERUP_PICKUP_RADIUS: f64 = 0.6;

/// Enemy speed multiplier while FreezeTime is active.
pub const FREEZE_SPEED_FACTOR: f64 = 0.5;

/// Half-angle of the spread-shot fan (radians).
pub const SPREAD_SHOT_ANGLE: f64 = 0.15;

/// Fire cooldown multiplier while RapidFire is active.
pub const RAPID_FIRE_COOLDOWN_FACTOR: f64 = 0.5;

/// Breach decrements absorbed by an active Shield.
pub const SHIELD_POINTS: u32 = 3;

// --- Player proximity ---

/// Minimum-approach radius: an enemy inside this breaches (meters).
pub const BREACH_RADIUS: f64 = 0.5;

/// Inner warning radius: crossing it counts as a near-miss (meters).
pub const NEAR_MISS_RADIUS: f64 = 1.5;

// --- Adaptation ---

/// Interval between adaptation evaluations (seconds of sim time).
pub const ADAPTATION_INTERVAL_SECS: f64 = 1.0;

/// Decayed shot count required before the accuracy rule may fire.
pub const ADAPTATION_MIN_SHOTS: f64 = 20.0;

/// Accuracy below this triggers the SpreadShot assist.
pub const ADAPTATION_LOW_ACCURACY: f64 = 0.35;

/// Near-miss count at or above this triggers FreezeTime/Shield.
pub const ADAPTATION_NEAR_MISS_THRESHOLD: u32 = 3;

/// Combo level at or above this triggers the RapidFire reward.
pub const ADAPTATION_COMBO_THRESHOLD: u32 = 5;

/// Per-interval decay applied to the windowed shot/hit counters.
pub const ADAPTATION_ACCURACY_DECAY: f64 = 0.97;
