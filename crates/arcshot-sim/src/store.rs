//! Entity store — owns all live simulation entities.
//!
//! Wraps the hecs world behind stable, monotonic `EntityId`s so other
//! systems never hold raw ECS handles across a removal. Removal is
//! deferred: `mark_for_removal` queues, `commit_removals` flushes once
//! per tick after every system has read this tick's state.

use std::collections::HashMap;

use hecs::World;

use arcshot_core::components::*;
use arcshot_core::types::{EntityId, Position, Velocity};

#[derive(Default)]
pub struct EntityStore {
    world: World,
    handles: HashMap<EntityId, hecs::Entity>,
    next_id: u64,
    removal_queue: Vec<EntityId>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn create_enemy(
        &mut self,
        state: EnemyState,
        position: Position,
        velocity: Velocity,
    ) -> EntityId {
        let id = self.allocate_id();
        let handle = self
            .world
            .spawn((Enemy, StableId(id), state, position, velocity));
        self.handles.insert(id, handle);
        id
    }

    pub fn create_bullet(
        &mut self,
        state: BulletState,
        position: Position,
        velocity: Velocity,
    ) -> EntityId {
        let id = self.allocate_id();
        let handle = self
            .world
            .spawn((Bullet, StableId(id), state, position, velocity));
        self.handles.insert(id, handle);
        id
    }

    pub fn create_powerup(&mut self, state: PowerUpState, position: Position) -> EntityId {
        let id = self.allocate_id();
        let handle = self
            .world
            .spawn((PowerUp, StableId(id), state, position, Velocity::default()));
        self.handles.insert(id, handle);
        id
    }

    /// Resolve a stable id to its ECS handle, if still live.
    pub fn handle(&self, id: EntityId) -> Option<hecs::Entity> {
        self.handles.get(&id).copied()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.handles.contains_key(&id)
    }

    pub fn position_of(&self, id: EntityId) -> Option<Position> {
        let handle = self.handle(id)?;
        self.world.get::<&Position>(handle).ok().map(|p| *p)
    }

    /// Total live entities across all variants.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn enemy_count(&self) -> u32 {
        let mut q = self.world.query::<&Enemy>();
        q.iter().count() as u32
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Queue an entity for removal at the end of the tick. Queuing the
    /// same id twice is harmless; queuing an unknown id is a programming
    /// error.
    pub fn mark_for_removal(&mut self, id: EntityId) {
        debug_assert!(
            self.handles.contains_key(&id),
            "mark_for_removal on unknown entity {id:?}"
        );
        if !self.removal_queue.contains(&id) {
            self.removal_queue.push(id);
        }
    }

    /// Flush the removal queue. Called once per tick after all systems
    /// have run; calling again with an empty queue is a no-op.
    /// Ids are never reused afterwards.
    pub fn commit_removals(&mut self) -> usize {
        let mut removed = 0;
        for id in std::mem::take(&mut self.removal_queue) {
            if let Some(handle) = self.handles.remove(&id) {
                let _ = self.world.despawn(handle);
                removed += 1;
            }
        }
        removed
    }

    /// Drop every entity immediately (session reset). Pending removals
    /// are flushed as part of the wipe; the id counter keeps running so
    /// ids stay unique across resets too.
    pub fn clear(&mut self) {
        self.world.clear();
        self.handles.clear();
        self.removal_queue.clear();
    }
}
