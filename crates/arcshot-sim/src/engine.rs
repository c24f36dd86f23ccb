//! Simulation engine — owns all state and advances it one tick at a time.
//!
//! The host render loop calls [`SimulationEngine::tick`] with the sampled
//! input frame and the frame delta; the engine clamps the delta, runs the
//! systems in a fixed order, commits deferred removals, and returns a
//! snapshot. Session commands are queued and applied at the next tick
//! boundary, never mid-tick.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use arcshot_core::config::{ConfigError, GameConfig};
use arcshot_core::enums::{GamePhase, PowerUpKind, RecommendPriority};
use arcshot_core::events::SimEvent;
use arcshot_core::input::{AimRay, InputFrame, PlayerCommand};
use arcshot_core::state::GameSnapshot;
use arcshot_core::types::{Direction, Position, SimTime, Velocity};

use arcshot_adapt::{recommend, PlayerProfile};

use crate::player::PlayerState;
use crate::store::EntityStore;
use crate::systems::spawner::SpawnScheduler;
use crate::systems::waves::{self, WaveState};
use crate::systems::{collision, movement, snapshot};

/// Engine construction parameters.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed. The same seed and input sequence reproduce a session
    /// exactly.
    pub seed: u64,
    pub config: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            config: GameConfig::default(),
        }
    }
}

pub struct SimulationEngine {
    config: GameConfig,
    seed: u64,
    rng: ChaCha8Rng,
    store: EntityStore,
    time: SimTime,
    phase: GamePhase,
    wave: WaveState,
    scheduler: SpawnScheduler,
    player: PlayerState,
    profile: PlayerProfile,
    /// Seconds until the next adaptation evaluation.
    adaptation_countdown: f64,
    /// Last valid aim sample, held across tracking loss.
    last_aim: AimRay,
    commands: VecDeque<PlayerCommand>,
    /// Events accumulated during the current tick.
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Build an engine from a validated configuration.
    pub fn new(sim_config: SimConfig) -> Result<Self, ConfigError> {
        sim_config.config.validate()?;
        let adaptation_interval = sim_config.config.adaptation.interval_secs;
        let player = PlayerState::new(&sim_config.config);
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(sim_config.seed),
            seed: sim_config.seed,
            store: EntityStore::new(),
            time: SimTime::default(),
            phase: GamePhase::Idle,
            wave: WaveState::first(),
            scheduler: SpawnScheduler::new(),
            player,
            profile: PlayerProfile::default(),
            adaptation_countdown: adaptation_interval,
            last_aim: AimRay {
                origin: Position::default(),
                direction: Direction::new(0.0, 1.0, 0.0),
            },
            commands: VecDeque::new(),
            events: Vec::new(),
            config: sim_config.config,
        })
    }

    /// Queue a session command for the next tick boundary.
    pub fn enqueue_command(&mut self, command: PlayerCommand) {
        self.commands.push_back(command);
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. `dt` is clamped to `max_tick_dt`, so a stalled host
    /// frame produces one bounded sim step rather than a tunnelling jump.
    pub fn tick(&mut self, input: &InputFrame, dt: f64) -> GameSnapshot {
        let dt = dt.clamp(0.0, self.config.max_tick_dt);

        self.process_commands();

        if self.phase == GamePhase::Active {
            self.time.advance(dt);
            self.run_systems(input, dt);
            self.store.commit_removals();
        }

        snapshot::build(
            &self.store,
            self.time,
            self.phase,
            &self.wave,
            &self.scheduler,
            &self.player,
            &mut self.events,
        )
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.commands.pop_front() {
            match command {
                PlayerCommand::Start => {
                    if matches!(self.phase, GamePhase::Idle | GamePhase::GameOver) {
                        self.reset_session();
                        self.phase = GamePhase::Active;
                        self.scheduler
                            .load_wave(&waves::composition(self.wave.index, &self.config.waves));
                        self.events.push(SimEvent::WaveStarted {
                            index: self.wave.index,
                        });
                        log::info!("session started (seed {})", self.seed);
                    }
                }
                PlayerCommand::Pause => {
                    if self.phase == GamePhase::Active {
                        self.phase = GamePhase::Paused;
                    }
                }
                PlayerCommand::Resume => {
                    if self.phase == GamePhase::Paused {
                        self.phase = GamePhase::Active;
                    }
                }
                PlayerCommand::Reset => {
                    self.reset_session();
                    self.phase = GamePhase::Idle;
                    log::info!("session reset");
                }
            }
        }
    }

    /// Wipe session state atomically: entities, pending spawns, timed
    /// effects, profile, clocks. The RNG is reseeded so a restarted
    /// session replays identically for the same inputs.
    fn reset_session(&mut self) {
        self.store.clear();
        self.scheduler.flush();
        self.player = PlayerState::new(&self.config);
        self.profile = PlayerProfile::default();
        self.wave = WaveState::first();
        self.time = SimTime::default();
        self.adaptation_countdown = self.config.adaptation.interval_secs;
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.events.clear();
    }

    fn run_systems(&mut self, input: &InputFrame, dt: f64) {
        // Input: hold the last aim across tracking loss, and suppress
        // trigger pulses while no sample is available.
        self.player.position = input.player_position;
        let pulses = match input.aim {
            Some(aim) => {
                self.last_aim = aim;
                input.trigger_pulses
            }
            None => 0,
        };

        self.player.fire_cooldown = (self.player.fire_cooldown - dt).max(0.0);
        self.fire(pulses);

        movement::run(
            &mut self.store,
            &self.config,
            self.player.position,
            waves::speed_multiplier(self.wave.index),
            self.player.effect_active(PowerUpKind::FreezeTime),
            dt,
        );

        collision::run(
            &mut self.store,
            &self.config,
            &mut self.player,
            &mut self.profile,
            &mut self.scheduler,
            &mut self.rng,
            self.last_aim.origin,
            self.time.elapsed_secs,
            &mut self.events,
        );

        for kind in self.player.tick_effects(dt) {
            self.events.push(SimEvent::EffectExpired { kind });
        }
        self.player.tick_combo(dt);

        if self.player.health == 0 {
            self.game_over();
            return;
        }

        waves::run(
            &mut self.wave,
            &mut self.scheduler,
            self.store.enemy_count(),
            dt,
            &self.config.waves,
            &mut self.events,
        );

        self.run_adaptation(dt);

        self.scheduler.run(
            &mut self.store,
            &mut self.rng,
            &self.config,
            self.player.position,
            self.time.elapsed_secs,
            dt,
            &mut self.events,
        );
    }

    /// Fire bullets for the accepted trigger pulses. The cooldown gates
    /// volleys; SpreadShot turns one volley into a three-bullet fan and
    /// RapidFire shortens the cooldown.
    fn fire(&mut self, pulses: u32) {
        for _ in 0..pulses {
            if self.player.fire_cooldown > 0.0 {
                break;
            }

            let mut cooldown = self.config.player.fire_cooldown_secs;
            if self.player.effect_active(PowerUpKind::RapidFire) {
                cooldown *= self.config.powerups.rapid_fire_cooldown_factor;
            }
            self.player.fire_cooldown = cooldown;

            let spread = self.config.powerups.spread_angle;
            let directions = if self.player.effect_active(PowerUpKind::SpreadShot) {
                vec![
                    self.last_aim.direction.rotated_about_z(-spread),
                    self.last_aim.direction,
                    self.last_aim.direction.rotated_about_z(spread),
                ]
            } else {
                vec![self.last_aim.direction]
            };

            for direction in directions {
                if self.store.len() >= self.config.max_active_entities {
                    break;
                }
                let id = self.store.create_bullet(
                    arcshot_core::components::BulletState {
                        damage: self.config.bullet.damage,
                        lifetime_secs: self.config.bullet.lifetime_secs,
                        origin: self.last_aim.origin,
                        direction,
                        spent: false,
                    },
                    self.last_aim.origin,
                    Velocity::along(direction, self.config.bullet.speed),
                );
                self.events.push(SimEvent::BulletFired { id });
                self.profile.record_shot();
            }
        }
    }

    /// Evaluate the adaptation rules at their own cadence, decoupled from
    /// the tick rate. A recommendation is dropped rather than queued when
    /// the same kind is already active on the player or already lying in
    /// the world uncollected.
    fn run_adaptation(&mut self, dt: f64) {
        self.adaptation_countdown -= dt;
        if self.adaptation_countdown > 0.0 {
            return;
        }
        self.adaptation_countdown += self.config.adaptation.interval_secs;

        self.profile.decay(self.config.adaptation.accuracy_decay);

        let Some(rec) = recommend(&self.profile, self.player.combo, &self.config.adaptation)
        else {
            return;
        };
        if rec.priority == RecommendPriority::Urgent {
            self.profile.consume_near_misses();
        }
        if self.player.effect_active(rec.kind) || self.live_powerup_of(rec.kind) {
            return;
        }

        self.events.push(SimEvent::AdaptationTriggered {
            kind: rec.kind,
            priority: rec.priority,
        });
        log::debug!("adaptation: {:?} ({:?})", rec.kind, rec.priority);
        self.scheduler
            .queue_powerup(rec.kind, self.placement_position());
    }

    fn live_powerup_of(&self, kind: PowerUpKind) -> bool {
        self.store
            .world()
            .query::<&arcshot_core::components::PowerUpState>()
            .iter()
            .any(|(_, state)| state.kind == kind)
    }

    /// Place adaptation spawns a couple of meters out along the current
    /// aim, where the player is already looking.
    fn placement_position(&self) -> Position {
        let origin = self.last_aim.origin;
        let dir = self.last_aim.direction;
        Position::new(
            origin.x + dir.x * 2.0,
            origin.y + dir.y * 2.0,
            (origin.z + dir.z * 2.0).max(0.5),
        )
    }

    fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.scheduler.flush();
        self.player.clear_effects();
        self.events.push(SimEvent::GameOver {
            score: self.player.score,
            wave: self.wave.index,
        });
        log::info!(
            "game over at wave {} with score {}",
            self.wave.index,
            self.player.score
        );
    }
}

#[cfg(test)]
impl SimulationEngine {
    pub(crate) fn store(&self) -> &EntityStore {
        &self.store
    }

    pub(crate) fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    pub(crate) fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    /// Spawn an enemy directly, bypassing the scheduler.
    pub(crate) fn spawn_enemy_at(
        &mut self,
        kind: arcshot_core::enums::EnemyKind,
        position: Position,
    ) -> arcshot_core::types::EntityId {
        let stats = self.config.enemies.for_kind(kind);
        let velocity = Velocity::along(
            position.direction_to(&self.player.position),
            stats.speed,
        );
        self.store.create_enemy(
            arcshot_core::components::EnemyState {
                kind,
                health: stats.health,
                base_speed: stats.speed,
                point_value: stats.points,
                spawned_at_secs: self.time.elapsed_secs,
                near_miss_recorded: false,
                first_hit_recorded: false,
            },
            position,
            velocity,
        )
    }
}
