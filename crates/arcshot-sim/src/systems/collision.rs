//! Collision resolution: bullet-enemy hits, player breaches, and power-up
//! pickups.
//!
//! Broad-phase is a plain O(bullets x enemies) distance check — entity
//! counts are capped low by config, so no spatial partitioning. All
//! removals are deferred through the store's removal queue.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use arcshot_core::components::{BulletState, EnemyState, PowerUpState, StableId};
use arcshot_core::config::GameConfig;
use arcshot_core::enums::{EnemyKind, PowerUpKind};
use arcshot_core::events::SimEvent;
use arcshot_core::types::{EntityId, Position};

use arcshot_adapt::PlayerProfile;

use crate::player::PlayerState;
use crate::store::EntityStore;
use crate::systems::spawner::SpawnScheduler;

struct EnemyRecord {
    id: EntityId,
    position: Position,
    radius: f64,
    /// Local health mirror so later bullets this tick see earlier damage.
    health: i32,
    kind: EnemyKind,
    point_value: u32,
    spawned_at_secs: f64,
}

/// Resolve all collisions for this tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    store: &mut EntityStore,
    config: &GameConfig,
    player: &mut PlayerState,
    profile: &mut PlayerProfile,
    scheduler: &mut SpawnScheduler,
    rng: &mut ChaCha8Rng,
    aim_origin: Position,
    elapsed_secs: f64,
    events: &mut Vec<SimEvent>,
) {
    let mut enemies: Vec<EnemyRecord> = store
        .world()
        .query::<(&Position, &EnemyState, &StableId)>()
        .iter()
        .map(|(_, (pos, state, id))| EnemyRecord {
            id: id.0,
            position: *pos,
            radius: config.enemies.for_kind(state.kind).radius,
            health: state.health,
            kind: state.kind,
            point_value: state.point_value,
            spawned_at_secs: state.spawned_at_secs,
        })
        .collect();

    let bullets: Vec<(EntityId, Position, i32, bool)> = store
        .world()
        .query::<(&Position, &BulletState, &StableId)>()
        .iter()
        .map(|(_, (pos, state, id))| (id.0, *pos, state.damage, state.spent))
        .collect();

    resolve_hits(
        store, config, player, profile, scheduler, rng, elapsed_secs, events, &mut enemies,
        &bullets,
    );
    resolve_breaches(store, config, player, profile, events, &enemies);
    resolve_pickups(store, config, player, profile, aim_origin, events);
}

/// Bullet-enemy resolution. A bullet within collision radius of several
/// enemies hits the nearest only, then is removed — single-target
/// semantics, a bullet rather than a beam.
#[allow(clippy::too_many_arguments)]
fn resolve_hits(
    store: &mut EntityStore,
    config: &GameConfig,
    player: &mut PlayerState,
    profile: &mut PlayerProfile,
    scheduler: &mut SpawnScheduler,
    rng: &mut ChaCha8Rng,
    elapsed_secs: f64,
    events: &mut Vec<SimEvent>,
    enemies: &mut [EnemyRecord],
    bullets: &[(EntityId, Position, i32, bool)],
) {
    for &(bullet_id, bullet_pos, damage, spent) in bullets {
        if spent {
            // Already expired by timeout this tick; never also hit.
            continue;
        }

        let mut nearest: Option<(usize, f64)> = None;
        for (index, enemy) in enemies.iter().enumerate() {
            if enemy.health <= 0 {
                continue;
            }
            let distance = bullet_pos.range_to(&enemy.position);
            if distance <= config.bullet.radius + enemy.radius
                && nearest.map_or(true, |(_, best)| distance < best)
            {
                nearest = Some((index, distance));
            }
        }

        let Some((index, _)) = nearest else {
            continue;
        };
        let enemy = &mut enemies[index];

        // Consume the bullet exactly once.
        if let Some(handle) = store.handle(bullet_id) {
            if let Ok(mut state) = store.world().get::<&mut BulletState>(handle) {
                state.spent = true;
            }
        }
        store.mark_for_removal(bullet_id);

        enemy.health = (enemy.health - damage).max(0);
        let killed = enemy.health == 0;
        let mut first_hit = false;
        if let Some(handle) = store.handle(enemy.id) {
            if let Ok(mut state) = store.world().get::<&mut EnemyState>(handle) {
                state.health = enemy.health;
                debug_assert!(state.health >= 0, "enemy health went negative");
                if !state.first_hit_recorded {
                    state.first_hit_recorded = true;
                    first_hit = true;
                }
            }
        }

        profile.record_hit();
        if first_hit {
            profile.record_reaction(elapsed_secs - enemy.spawned_at_secs);
        }

        let points = if killed { enemy.point_value } else { 0 };
        events.push(SimEvent::Hit {
            bullet_id,
            enemy_id: enemy.id,
            killed,
            points,
        });

        if killed {
            player.register_kill(enemy.point_value, config);
            profile.record_kill_direction(player.position.bearing_to(&enemy.position));
            store.mark_for_removal(enemy.id);
            log::debug!("enemy {:?} ({:?}) killed", enemy.id, enemy.kind);

            if rng.gen_bool(config.powerups.drop_chance) {
                let kind = PowerUpKind::ALL[rng.gen_range(0..PowerUpKind::ALL.len())];
                scheduler.queue_powerup(kind, enemy.position);
            }
        }
    }
}

/// Breach and near-miss checks against the player position. A breaching
/// enemy damages the player by exactly one decrement and is removed in
/// the same tick — it does not linger.
fn resolve_breaches(
    store: &mut EntityStore,
    config: &GameConfig,
    player: &mut PlayerState,
    profile: &mut PlayerProfile,
    events: &mut Vec<SimEvent>,
    enemies: &[EnemyRecord],
) {
    for enemy in enemies {
        if enemy.health <= 0 {
            // Killed earlier this tick; a dead enemy cannot breach.
            continue;
        }
        let distance = player.position.range_to(&enemy.position);

        if distance <= config.near_miss_radius {
            if let Some(handle) = store.handle(enemy.id) {
                if let Ok(mut state) = store.world().get::<&mut EnemyState>(handle) {
                    if !state.near_miss_recorded {
                        state.near_miss_recorded = true;
                        profile.record_near_miss();
                    }
                }
            }
        }

        if distance <= config.breach_radius {
            events.push(SimEvent::Breach { enemy_id: enemy.id });
            store.mark_for_removal(enemy.id);
            player.absorb_breach();
            log::debug!(
                "enemy {:?} breached; health {} shield {}",
                enemy.id,
                player.health,
                player.shield_points
            );
        }
    }
}

/// Power-up collection: the player's aim origin is treated as a point,
/// not a ray, for pickup proximity.
fn resolve_pickups(
    store: &mut EntityStore,
    config: &GameConfig,
    player: &mut PlayerState,
    profile: &mut PlayerProfile,
    aim_origin: Position,
    events: &mut Vec<SimEvent>,
) {
    let collected: Vec<(EntityId, PowerUpKind)> = store
        .world()
        .query::<(&Position, &PowerUpState, &StableId)>()
        .iter()
        .filter(|(_, (pos, _, _))| aim_origin.range_to(pos) <= config.powerups.pickup_radius)
        .map(|(_, (_, state, id))| (id.0, state.kind))
        .collect();

    for (id, kind) in collected {
        events.push(SimEvent::PowerUpCollected { id, kind });
        store.mark_for_removal(id);
        player.apply_effect(kind, config);
        profile.record_powerup(kind);
    }
}
