//! Kinematic integration system.
//!
//! Explicit Euler: position += velocity * dt, with dt already clamped by
//! the engine. Enemies re-aim at the player every tick (they home and can
//! be juked); bullets fly straight and burn down their lifetime here.

use arcshot_core::components::{BulletState, EnemyState, StableId};
use arcshot_core::config::GameConfig;
use arcshot_core::types::{EntityId, Position, Velocity};

use crate::store::EntityStore;

/// Advance all entities by one tick.
pub fn run(
    store: &mut EntityStore,
    config: &GameConfig,
    player_position: Position,
    wave_speed_multiplier: f64,
    freeze_active: bool,
    dt: f64,
) {
    let freeze_factor = if freeze_active {
        config.powerups.freeze_speed_factor
    } else {
        1.0
    };

    // Enemies: recompute homing velocity, then integrate.
    for (_entity, (pos, vel, state)) in store
        .world_mut()
        .query_mut::<(&mut Position, &mut Velocity, &EnemyState)>()
    {
        let speed = state.base_speed * wave_speed_multiplier * freeze_factor;
        *vel = Velocity::along(pos.direction_to(&player_position), speed);
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
        pos.z += vel.z * dt;
    }

    // Bullets: straight flight, lifetime countdown. Expired bullets are
    // latched as spent so a same-tick collision cannot remove them twice.
    let mut expired: Vec<EntityId> = Vec::new();
    for (_entity, (pos, vel, state, id)) in store
        .world_mut()
        .query_mut::<(&mut Position, &Velocity, &mut BulletState, &StableId)>()
    {
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
        pos.z += vel.z * dt;

        state.lifetime_secs -= dt;
        if state.lifetime_secs <= 0.0 && !state.spent {
            state.spent = true;
            expired.push(id.0);
        }
    }
    for id in expired {
        store.mark_for_removal(id);
    }
}
