//! Game configuration — every balance number the simulation consumes.
//!
//! All tunables are externally supplied (JSON via serde); `Default` carries
//! the documented baseline. Malformed tables are fatal at startup:
//! `validate` returns a typed error and the loader never substitutes
//! defaults for individual bad fields.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::{EnemyKind, PowerUpKind};

/// Configuration validation failure. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{field}` must be positive, got {value}")]
    NonPositive { field: String, value: f64 },
    #[error("`{field}` must be a probability in [0, 1], got {value}")]
    NotAProbability { field: String, value: f64 },
    #[error("`{low_field}` ({low}) must not exceed `{high_field}` ({high})")]
    InvertedRange {
        low_field: String,
        low: f64,
        high_field: String,
        high: f64,
    },
    #[error("`{field}` must be at least {min}, got {value}")]
    BelowMinimum { field: String, min: u64, value: u64 },
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Per-kind enemy stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyKindConfig {
    pub health: i32,
    /// Base speed in m/s, before the wave multiplier.
    pub speed: f64,
    /// Collision radius in meters.
    pub radius: f64,
    /// Score awarded on kill.
    pub points: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyTable {
    pub basic: EnemyKindConfig,
    pub fast: EnemyKindConfig,
    pub tank: EnemyKindConfig,
}

impl EnemyTable {
    pub fn for_kind(&self, kind: EnemyKind) -> &EnemyKindConfig {
        match kind {
            EnemyKind::Basic => &self.basic,
            EnemyKind::Fast => &self.fast,
            EnemyKind::Tank => &self.tank,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletConfig {
    pub speed: f64,
    pub damage: i32,
    pub radius: f64,
    pub lifetime_secs: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// Horizontal circle radius around the player's last known position.
    pub radius: f64,
    /// Seconds between successive spawns within a wave.
    pub cadence_secs: f64,
    pub height_min: f64,
    pub height_max: f64,
    /// Minimum angular separation from the two most recent spawn angles.
    pub min_angle_separation: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveConfig {
    pub inter_wave_delay_secs: f64,
    /// Every Nth wave uses the boss override composition.
    pub boss_interval: u32,
    /// Tank count for boss waves (overrides the standard formula).
    pub boss_tank_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpConfig {
    pub rapid_fire_secs: f64,
    pub spread_shot_secs: f64,
    pub freeze_time_secs: f64,
    pub shield_secs: f64,
    /// Chance a killed enemy drops a power-up.
    pub drop_chance: f64,
    pub pickup_radius: f64,
    /// Enemy speed multiplier while FreezeTime is active.
    pub freeze_speed_factor: f64,
    /// Half-angle of the spread-shot fan (radians).
    pub spread_angle: f64,
    /// Fire cooldown multiplier while RapidFire is active.
    pub rapid_fire_cooldown_factor: f64,
    /// Breach decrements absorbed by a fresh Shield.
    pub shield_points: u32,
}

impl PowerUpConfig {
    pub fn duration_for(&self, kind: PowerUpKind) -> f64 {
        match kind {
            PowerUpKind::RapidFire => self.rapid_fire_secs,
            PowerUpKind::SpreadShot => self.spread_shot_secs,
            PowerUpKind::FreezeTime => self.freeze_time_secs,
            PowerUpKind::Shield => self.shield_secs,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub max_health: u32,
    pub fire_cooldown_secs: f64,
    pub max_combo: u32,
    pub combo_timeout_secs: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptationConfig {
    /// Seconds of sim time between evaluations (decoupled from tick rate).
    pub interval_secs: f64,
    /// Decayed shot count required before the accuracy rule may fire.
    pub min_shot_samples: f64,
    pub low_accuracy_threshold: f64,
    pub near_miss_threshold: u32,
    pub combo_threshold: u32,
    /// Per-interval decay of the windowed shot/hit counters.
    pub accuracy_decay: f64,
}

/// Complete simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub max_tick_dt: f64,
    pub max_active_entities: usize,
    pub breach_radius: f64,
    pub near_miss_radius: f64,
    pub player: PlayerConfig,
    pub enemies: EnemyTable,
    pub bullet: BulletConfig,
    pub spawn: SpawnConfig,
    pub waves: WaveConfig,
    pub powerups: PowerUpConfig,
    pub adaptation: AdaptationConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_tick_dt: MAX_TICK_DT,
            max_active_entities: MAX_ACTIVE_ENTITIES,
            breach_radius: BREACH_RADIUS,
            near_miss_radius: NEAR_MISS_RADIUS,
            player: PlayerConfig {
                max_health: PLAYER_MAX_HEALTH,
                fire_cooldown_secs: FIRE_COOLDOWN_SECS,
                max_combo: MAX_COMBO,
                combo_timeout_secs: COMBO_TIMEOUT_SECS,
            },
            enemies: EnemyTable {
                basic: EnemyKindConfig {
                    health: BASIC_HEALTH,
                    speed: BASIC_SPEED,
                    radius: BASIC_RADIUS,
                    points: BASIC_POINTS,
                },
                fast: EnemyKindConfig {
                    health: FAST_HEALTH,
                    speed: FAST_SPEED,
                    radius: FAST_RADIUS,
                    points: FAST_POINTS,
                },
                tank: EnemyKindConfig {
                    health: TANK_HEALTH,
                    speed: TANK_SPEED,
                    radius: TANK_RADIUS,
                    points: TANK_POINTS,
                },
            },
            bullet: BulletConfig {
                speed: BULLET_SPEED,
                damage: BULLET_DAMAGE,
                radius: BULLET_RADIUS,
                lifetime_secs: BULLET_LIFETIME_SECS,
            },
            spawn: SpawnConfig {
                radius: SPAWN_RADIUS,
                cadence_secs: SPAWN_CADENCE_SECS,
                height_min: SPAWN_HEIGHT_MIN,
                height_max: SPAWN_HEIGHT_MAX,
                min_angle_separation: SPAWN_MIN_ANGLE_SEPARATION,
            },
            waves: WaveConfig {
                inter_wave_delay_secs: INTER_WAVE_DELAY_SECS,
                boss_interval: BOSS_WAVE_INTERVAL,
                boss_tank_count: BOSS_TANK_COUNT,
            },
            powerups: PowerUpConfig {
                rapid_fire_secs: RAPID_FIRE_DURATION_SECS,
                spread_shot_secs: SPREAD_SHOT_DURATION_SECS,
                freeze_time_secs: FREEZE_TIME_DURATION_SECS,
                shield_secs: SHIELD_DURATION_SECS,
                drop_chance: POWERUP_DROP_CHANCE,
                pickup_radius: POWERUP_PICKUP_RADIUS,
                freeze_speed_factor: FREEZE_SPEED_FACTOR,
                spread_angle: SPREAD_SHOT_ANGLE,
                rapid_fire_cooldown_factor: RAPID_FIRE_COOLDOWN_FACTOR,
                shield_points: SHIELD_POINTS,
            },
            adaptation: AdaptationConfig {
                interval_secs: ADAPTATION_INTERVAL_SECS,
                min_shot_samples: ADAPTATION_MIN_SHOTS,
                low_accuracy_threshold: ADAPTATION_LOW_ACCURACY,
                near_miss_threshold: ADAPTATION_NEAR_MISS_THRESHOLD,
                combo_threshold: ADAPTATION_COMBO_THRESHOLD,
                accuracy_decay: ADAPTATION_ACCURACY_DECAY,
            },
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Any failure is fatal to startup.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every invariant the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("max_tick_dt", self.max_tick_dt)?;
        positive("max_active_entities", self.max_active_entities as f64)?;
        positive("breach_radius", self.breach_radius)?;
        if self.near_miss_radius <= self.breach_radius {
            return Err(ConfigError::InvertedRange {
                low_field: "breach_radius".into(),
                low: self.breach_radius,
                high_field: "near_miss_radius".into(),
                high: self.near_miss_radius,
            });
        }

        positive("player.max_health", self.player.max_health as f64)?;
        positive("player.fire_cooldown_secs", self.player.fire_cooldown_secs)?;
        positive("player.combo_timeout_secs", self.player.combo_timeout_secs)?;

        for (name, kind) in [
            ("enemies.basic", &self.enemies.basic),
            ("enemies.fast", &self.enemies.fast),
            ("enemies.tank", &self.enemies.tank),
        ] {
            if kind.health <= 0 {
                return Err(ConfigError::NonPositive {
                    field: format!("{name}.health"),
                    value: kind.health as f64,
                });
            }
            if kind.speed <= 0.0 {
                return Err(ConfigError::NonPositive {
                    field: format!("{name}.speed"),
                    value: kind.speed,
                });
            }
            if kind.radius <= 0.0 {
                return Err(ConfigError::NonPositive {
                    field: format!("{name}.radius"),
                    value: kind.radius,
                });
            }
        }

        positive("bullet.speed", self.bullet.speed)?;
        positive("bullet.damage", self.bullet.damage as f64)?;
        positive("bullet.radius", self.bullet.radius)?;
        positive("bullet.lifetime_secs", self.bullet.lifetime_secs)?;

        positive("spawn.radius", self.spawn.radius)?;
        positive("spawn.cadence_secs", self.spawn.cadence_secs)?;
        if self.spawn.height_min > self.spawn.height_max {
            return Err(ConfigError::InvertedRange {
                low_field: "spawn.height_min".into(),
                low: self.spawn.height_min,
                high_field: "spawn.height_max".into(),
                high: self.spawn.height_max,
            });
        }
        if self.spawn.min_angle_separation < 0.0
            || self.spawn.min_angle_separation > std::f64::consts::PI
        {
            return Err(ConfigError::NotAProbability {
                field: "spawn.min_angle_separation (radians in [0, pi])".into(),
                value: self.spawn.min_angle_separation,
            });
        }

        positive(
            "waves.inter_wave_delay_secs",
            self.waves.inter_wave_delay_secs,
        )?;
        if self.waves.boss_interval < 2 {
            return Err(ConfigError::BelowMinimum {
                field: "waves.boss_interval".into(),
                min: 2,
                value: self.waves.boss_interval as u64,
            });
        }
        if self.waves.boss_tank_count == 0 {
            return Err(ConfigError::BelowMinimum {
                field: "waves.boss_tank_count".into(),
                min: 1,
                value: 0,
            });
        }

        for (field, value) in [
            ("powerups.rapid_fire_secs", self.powerups.rapid_fire_secs),
            ("powerups.spread_shot_secs", self.powerups.spread_shot_secs),
            ("powerups.freeze_time_secs", self.powerups.freeze_time_secs),
            ("powerups.shield_secs", self.powerups.shield_secs),
            ("powerups.pickup_radius", self.powerups.pickup_radius),
            ("powerups.spread_angle", self.powerups.spread_angle),
        ] {
            positive(field, value)?;
        }
        probability("powerups.drop_chance", self.powerups.drop_chance)?;
        probability(
            "powerups.freeze_speed_factor",
            self.powerups.freeze_speed_factor,
        )?;
        probability(
            "powerups.rapid_fire_cooldown_factor",
            self.powerups.rapid_fire_cooldown_factor,
        )?;

        positive("adaptation.interval_secs", self.adaptation.interval_secs)?;
        positive(
            "adaptation.min_shot_samples",
            self.adaptation.min_shot_samples,
        )?;
        probability(
            "adaptation.low_accuracy_threshold",
            self.adaptation.low_accuracy_threshold,
        )?;
        probability("adaptation.accuracy_decay", self.adaptation.accuracy_decay)?;

        Ok(())
    }
}

fn positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive {
            field: field.into(),
            value,
        })
    }
}

fn probability(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::NotAProbability {
            field: field.into(),
            value,
        })
    }
}
