//! Population registry — the authoritative set of currently-live targets.

use std::collections::HashMap;

use hecs::{Entity, World};

use gallery_core::types::Position;

/// Maps target identity to its backing ECS entity. Insertion order is
/// irrelevant; size never exceeds the configured capacity because the
/// spawner gates admission on `len()` before every spawn.
#[derive(Debug, Default)]
pub struct PopulationRegistry {
    entries: HashMap<u32, Entity>,
}

impl PopulationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, target_id: u32, entity: Entity) {
        self.entries.insert(target_id, entity);
    }

    /// Remove an entry. Idempotent: an absent id is a no-op, never an
    /// error — double-removal races between natural expiry and external
    /// removal are expected.
    pub fn remove(&mut self, target_id: u32) -> Option<Entity> {
        self.entries.remove(&target_id)
    }

    pub fn entity(&self, target_id: u32) -> Option<Entity> {
        self.entries.get(&target_id).copied()
    }

    pub fn contains(&self, target_id: u32) -> bool {
        self.entries.contains_key(&target_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop entries whose backing entity no longer exists in the world
    /// (destroyed independently by an external collaborator).
    pub fn compact(&mut self, world: &World) {
        self.entries.retain(|_, entity| world.contains(*entity));
    }

    /// Current positions of all live targets — the read-only view the
    /// placement sampler validates candidates against.
    pub fn live_positions(&self, world: &World) -> Vec<Position> {
        self.entries
            .values()
            .filter_map(|&entity| world.get::<&Position>(entity).ok().map(|pos| *pos))
            .collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
