//! Wave controller — tracks the wave state machine and difficulty scaling.
//!
//! Difficulty is a pure function of the wave index, recomputed at wave
//! start and never mutated mid-wave.

use arcshot_core::config::WaveConfig;
use arcshot_core::enums::{EnemyKind, WavePhase};
use arcshot_core::events::SimEvent;

use crate::systems::spawner::SpawnScheduler;

/// Wave progression state.
#[derive(Debug, Clone)]
pub struct WaveState {
    /// 1-based wave index.
    pub index: u32,
    pub phase: WavePhase,
    /// Seconds left in Cooldown; unused in other phases.
    pub cooldown_remaining: f64,
}

impl WaveState {
    pub fn first() -> Self {
        Self {
            index: 1,
            phase: WavePhase::Spawning,
            cooldown_remaining: 0.0,
        }
    }
}

/// Total enemies composed for a standard wave.
pub fn enemy_count(index: u32) -> u32 {
    (3 + 2 * index).max(5)
}

/// Enemy speed multiplier for a wave.
pub fn speed_multiplier(index: u32) -> f64 {
    1.0 + 0.1 * index as f64
}

/// Ordered composition for a wave. Boss waves (every Nth) are a fixed
/// Tank-only override, not a scaled instance of the standard formula.
pub fn composition(index: u32, config: &WaveConfig) -> Vec<(EnemyKind, u32)> {
    if index % config.boss_interval == 0 {
        return vec![(EnemyKind::Tank, config.boss_tank_count)];
    }

    let total = enemy_count(index);
    // Fast enters from wave 2, Tank from wave 4; the mix never crowds
    // out the baseline kind.
    let fast = if index >= 2 { (index / 2).min(total / 2) } else { 0 };
    let tank = if index >= 4 { (index / 4).min(total / 4) } else { 0 };
    let basic = total - fast - tank;

    let mut parts = Vec::new();
    if basic > 0 {
        parts.push((EnemyKind::Basic, basic));
    }
    if fast > 0 {
        parts.push((EnemyKind::Fast, fast));
    }
    if tank > 0 {
        parts.push((EnemyKind::Tank, tank));
    }
    parts
}

/// Advance the wave state machine by one tick.
///
/// Spawning -> Draining when the scheduler's composition is exhausted
/// ("wave spawning complete" is distinct from "wave complete");
/// Draining -> Cooldown when zero enemies remain alive;
/// Cooldown -> Spawning(next) after the inter-wave delay.
/// Game-over halts this entirely — the engine simply stops calling it.
pub fn run(
    wave: &mut WaveState,
    scheduler: &mut SpawnScheduler,
    live_enemies: u32,
    dt: f64,
    config: &WaveConfig,
    events: &mut Vec<SimEvent>,
) {
    match wave.phase {
        WavePhase::Spawning => {
            if scheduler.spawning_complete() {
                wave.phase = WavePhase::Draining;
            }
        }
        WavePhase::Draining => {
            if live_enemies == 0 {
                wave.phase = WavePhase::Cooldown;
                wave.cooldown_remaining = config.inter_wave_delay_secs;
                events.push(SimEvent::WaveCompleted { index: wave.index });
                log::info!("wave {} complete", wave.index);
            }
        }
        WavePhase::Cooldown => {
            wave.cooldown_remaining -= dt;
            if wave.cooldown_remaining <= 0.0 {
                wave.index += 1;
                wave.phase = WavePhase::Spawning;
                wave.cooldown_remaining = 0.0;
                scheduler.load_wave(&composition(wave.index, config));
                events.push(SimEvent::WaveStarted { index: wave.index });
                log::info!(
                    "wave {} starting: {} enemies, speed x{:.1}",
                    wave.index,
                    scheduler.remaining_to_spawn(),
                    speed_multiplier(wave.index)
                );
            }
        }
    }
}
