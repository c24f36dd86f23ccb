//! Snapshot builder — the only read path out of the simulation.
//!
//! Runs last in the tick, after removals are committed, so a snapshot
//! never shows a spent bullet or a dead enemy. Purely read-only over the
//! world.

use arcshot_core::components::{BulletState, EnemyState, PowerUpState, StableId};
use arcshot_core::enums::GamePhase;
use arcshot_core::events::SimEvent;
use arcshot_core::state::{
    ActiveEffectView, EntityDetail, EntityView, GameSnapshot, PlayerView, WaveView,
};
use arcshot_core::types::{Position, SimTime, Velocity};

use crate::player::PlayerState;
use crate::store::EntityStore;
use crate::systems::spawner::SpawnScheduler;
use crate::systems::waves::{self, WaveState};

/// Assemble the per-tick snapshot. `events` is drained into the snapshot.
pub fn build(
    store: &EntityStore,
    time: SimTime,
    phase: GamePhase,
    wave: &WaveState,
    scheduler: &SpawnScheduler,
    player: &PlayerState,
    events: &mut Vec<SimEvent>,
) -> GameSnapshot {
    let mut entities: Vec<EntityView> = Vec::with_capacity(store.len());

    for (_, (id, pos, vel, state)) in store
        .world()
        .query::<(&StableId, &Position, &Velocity, &EnemyState)>()
        .iter()
    {
        entities.push(EntityView {
            id: id.0,
            position: *pos,
            velocity: *vel,
            detail: EntityDetail::Enemy {
                kind: state.kind,
                health: state.health,
            },
        });
    }

    for (_, (id, pos, vel, state)) in store
        .world()
        .query::<(&StableId, &Position, &Velocity, &BulletState)>()
        .iter()
    {
        entities.push(EntityView {
            id: id.0,
            position: *pos,
            velocity: *vel,
            detail: EntityDetail::Bullet {
                lifetime_secs: state.lifetime_secs,
            },
        });
    }

    for (_, (id, pos, state)) in store
        .world()
        .query::<(&StableId, &Position, &PowerUpState)>()
        .iter()
    {
        entities.push(EntityView {
            id: id.0,
            position: *pos,
            velocity: Velocity::default(),
            detail: EntityDetail::PowerUp { kind: state.kind },
        });
    }

    // Stable iteration order for the renderer and for byte-exact
    // determinism comparisons.
    entities.sort_by_key(|view| view.id);

    GameSnapshot {
        time,
        phase,
        wave: WaveView {
            index: wave.index,
            phase: wave.phase,
            spawned: scheduler.spawned_count(),
            remaining_to_spawn: scheduler.remaining_to_spawn(),
            live_enemies: store.enemy_count(),
            cooldown_remaining_secs: wave.cooldown_remaining.max(0.0),
            speed_multiplier: waves::speed_multiplier(wave.index),
        },
        player: PlayerView {
            health: player.health,
            shield_points: player.shield_points,
            score: player.score,
            combo: player.combo,
            active_effects: player
                .effects
                .iter()
                .map(|e| ActiveEffectView {
                    kind: e.kind,
                    remaining_secs: e.remaining_secs,
                })
                .collect(),
            position: player.position,
        },
        entities,
        events: std::mem::take(events),
    }
}
