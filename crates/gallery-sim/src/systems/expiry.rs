//! Lifetime expiry: retires targets whose countdown has elapsed.

use hecs::{Entity, World};

use gallery_core::components::{Lifetime, TargetProfile};
use gallery_core::enums::TargetKind;
use gallery_core::events::GalleryEvent;

use crate::registry::PopulationRegistry;

/// Despawn targets whose lifetime has elapsed and deregister them.
/// A target already removed by an external collaborator never reaches
/// the buffer — its entity is gone from the query — so the natural and
/// external removal paths each deregister exactly once.
pub fn run(
    world: &mut World,
    registry: &mut PopulationRegistry,
    current_tick: u64,
    events: &mut Vec<GalleryEvent>,
) {
    let mut expired: Vec<(Entity, u32, TargetKind)> = Vec::new();
    for (entity, (lifetime, profile)) in world.query_mut::<(&Lifetime, &TargetProfile)>() {
        if current_tick >= lifetime.expires_at_tick {
            expired.push((entity, profile.target_id, profile.kind));
        }
    }

    for (entity, target_id, kind) in expired {
        registry.remove(target_id);
        let _ = world.despawn(entity);
        events.push(GalleryEvent::TargetExpired { target_id, kind });
    }
}
