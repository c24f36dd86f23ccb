//! Spawn scheduler — turns wave compositions and power-up requests into
//! entities, one cadence interval at a time.

use std::collections::VecDeque;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use arcshot_core::components::{EnemyState, PowerUpState};
use arcshot_core::config::GameConfig;
use arcshot_core::enums::{EnemyKind, PowerUpKind};
use arcshot_core::events::SimEvent;
use arcshot_core::types::{Position, Velocity};

use crate::store::EntityStore;

/// How many spawn angles the anti-clustering check remembers.
const RECENT_ANGLES: usize = 2;

/// Redraw attempts before accepting a clustered angle anyway.
const ANGLE_REDRAWS: usize = 8;

/// A power-up spawn waiting to be executed.
#[derive(Debug, Clone, Copy)]
struct PendingPowerUp {
    kind: PowerUpKind,
    position: Position,
}

/// Schedules enemy spawns for the current wave plus any pending power-up
/// spawns (kill drops and adaptation requests). All timing is countdown
/// fields decremented by the supplied dt — no independent timers.
#[derive(Debug, Default)]
pub struct SpawnScheduler {
    /// Flattened, ordered composition of the current wave.
    composition: Vec<EnemyKind>,
    cursor: usize,
    cadence_remaining: f64,
    recent_angles: VecDeque<f64>,
    pending_powerups: VecDeque<PendingPowerUp>,
}

impl SpawnScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new wave's composition and restart the cadence clock.
    /// The first spawn fires on the next tick.
    pub fn load_wave(&mut self, composition: &[(EnemyKind, u32)]) {
        self.composition.clear();
        for &(kind, count) in composition {
            for _ in 0..count {
                self.composition.push(kind);
            }
        }
        self.cursor = 0;
        self.cadence_remaining = 0.0;
    }

    /// True when the composition is exhausted. Distinct from wave
    /// completion, which additionally requires zero live enemies.
    pub fn spawning_complete(&self) -> bool {
        self.cursor >= self.composition.len()
    }

    pub fn spawned_count(&self) -> u32 {
        self.cursor as u32
    }

    pub fn remaining_to_spawn(&self) -> u32 {
        (self.composition.len() - self.cursor) as u32
    }

    /// Queue a power-up for placement this tick or as soon as capacity
    /// allows.
    pub fn queue_powerup(&mut self, kind: PowerUpKind, position: Position) {
        self.pending_powerups.push_back(PendingPowerUp { kind, position });
    }

    /// Discard everything queued — wave reset and game-over flush both
    /// happen atomically at the tick boundary.
    pub fn flush(&mut self) {
        self.composition.clear();
        self.cursor = 0;
        self.cadence_remaining = 0.0;
        self.recent_angles.clear();
        self.pending_powerups.clear();
    }

    /// Execute due spawns. Respects the entity cap: at capacity the
    /// cursor does not advance, so delayed composition entries are not
    /// lost.
    pub fn run(
        &mut self,
        store: &mut EntityStore,
        rng: &mut ChaCha8Rng,
        config: &GameConfig,
        player_position: Position,
        elapsed_secs: f64,
        dt: f64,
        events: &mut Vec<SimEvent>,
    ) {
        self.run_enemies(store, rng, config, player_position, elapsed_secs, dt, events);
        self.run_powerups(store, config, events);
    }

    fn run_enemies(
        &mut self,
        store: &mut EntityStore,
        rng: &mut ChaCha8Rng,
        config: &GameConfig,
        player_position: Position,
        elapsed_secs: f64,
        dt: f64,
        events: &mut Vec<SimEvent>,
    ) {
        if self.spawning_complete() {
            return;
        }

        self.cadence_remaining -= dt;
        while self.cadence_remaining <= 0.0 && !self.spawning_complete() {
            if store.len() >= config.max_active_entities {
                // At capacity: delay a full cadence interval and retry.
                self.cadence_remaining = config.spawn.cadence_secs;
                return;
            }

            let kind = self.composition[self.cursor];
            let position = self.pick_position(rng, config, player_position);
            let stats = config.enemies.for_kind(kind);
            let velocity = Velocity::along(
                position.direction_to(&player_position),
                stats.speed,
            );
            let id = store.create_enemy(
                EnemyState {
                    kind,
                    health: stats.health,
                    base_speed: stats.speed,
                    point_value: stats.points,
                    spawned_at_secs: elapsed_secs,
                    near_miss_recorded: false,
                    first_hit_recorded: false,
                },
                position,
                velocity,
            );
            events.push(SimEvent::EnemySpawned { id, kind, position });

            self.cursor += 1;
            self.cadence_remaining += config.spawn.cadence_secs;
        }
    }

    fn run_powerups(
        &mut self,
        store: &mut EntityStore,
        config: &GameConfig,
        events: &mut Vec<SimEvent>,
    ) {
        while let Some(pending) = self.pending_powerups.front().copied() {
            if store.len() >= config.max_active_entities {
                return;
            }
            self.pending_powerups.pop_front();
            let id = store.create_powerup(PowerUpState { kind: pending.kind }, pending.position);
            events.push(SimEvent::PowerUpSpawned {
                id,
                kind: pending.kind,
                position: pending.position,
            });
        }
    }

    /// Pick a spawn position on the horizontal circle around the player.
    ///
    /// The angle is a uniform draw, redrawn while it lands within the
    /// minimum separation of the two most recent spawn angles — pure
    /// uniform sampling clumps visibly at small counts. After a bounded
    /// number of redraws the last draw is accepted.
    fn pick_position(
        &mut self,
        rng: &mut ChaCha8Rng,
        config: &GameConfig,
        player_position: Position,
    ) -> Position {
        let tau = std::f64::consts::TAU;
        let mut angle = rng.gen_range(0.0..tau);
        for _ in 0..ANGLE_REDRAWS {
            let clustered = self
                .recent_angles
                .iter()
                .any(|&recent| angular_distance(angle, recent) < config.spawn.min_angle_separation);
            if !clustered {
                break;
            }
            angle = rng.gen_range(0.0..tau);
        }

        self.recent_angles.push_back(angle);
        while self.recent_angles.len() > RECENT_ANGLES {
            self.recent_angles.pop_front();
        }

        let height = if config.spawn.height_max > config.spawn.height_min {
            rng.gen_range(config.spawn.height_min..config.spawn.height_max)
        } else {
            config.spawn.height_min
        };

        Position::new(
            player_position.x + config.spawn.radius * angle.sin(),
            player_position.y + config.spawn.radius * angle.cos(),
            height,
        )
    }
}

/// Shortest angular distance between two angles in radians.
fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(std::f64::consts::TAU);
    diff.min(std::f64::consts::TAU - diff)
}
