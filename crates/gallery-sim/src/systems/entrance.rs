//! Entrance animation: interpolates each entering target from below the
//! row anchor up to its placement, once per frame.

use hecs::{Entity, World};

use gallery_core::components::{EntranceAnimation, TargetProfile};
use gallery_core::constants::{DT, ENTRANCE_DURATION_SECS};
use gallery_core::enums::TargetPhase;
use gallery_core::events::GalleryEvent;
use gallery_core::types::Position;

/// Advance every in-flight entrance animation. Position is a function of
/// elapsed tick time since start, so a variable frame cadence would still
/// land on the exact target. Targets destroyed mid-animation simply drop
/// out of the query.
///
/// Uses a pre-allocated buffer for deferred component removal.
pub fn run(
    world: &mut World,
    current_tick: u64,
    events: &mut Vec<GalleryEvent>,
    finished: &mut Vec<Entity>,
) {
    finished.clear();

    for (entity, (pos, anim, profile)) in
        world.query_mut::<(&mut Position, &EntranceAnimation, &mut TargetProfile)>()
    {
        let elapsed_secs = current_tick.saturating_sub(anim.start_tick) as f64 * DT;
        let t = elapsed_secs / ENTRANCE_DURATION_SECS;
        if t >= 1.0 {
            *pos = anim.target;
            profile.phase = TargetPhase::Upright;
            events.push(GalleryEvent::TargetRaised {
                target_id: profile.target_id,
            });
            finished.push(entity);
        } else {
            *pos = Position::lerp(anim.start, anim.target, t);
        }
    }

    // Deferred removal — the query above borrows the world.
    for entity in finished.drain(..) {
        let _ = world.remove_one::<EntranceAnimation>(entity);
    }
}
