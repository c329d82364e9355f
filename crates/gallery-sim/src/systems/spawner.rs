//! Spawn tick: admission gate, weighted kind draw, placement, entity
//! creation and registration.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gallery_core::components::{EntranceAnimation, Lifetime, Target, TargetProfile};
use gallery_core::config::SpawnTuning;
use gallery_core::constants::{
    BASE_SORT_ORDER, ENTRANCE_DROP, MAX_PLACEMENT_ATTEMPTS, SORT_ORDER_ROW_STEP,
};
use gallery_core::enums::{TargetKind, TargetPhase};
use gallery_core::events::GalleryEvent;
use gallery_core::types::{ticks_from_secs, Position};

use crate::layout::RowLayout;
use crate::registry::PopulationRegistry;
use crate::scheduler::{SchedulerState, SpawnTimer};
use crate::systems::placement;

/// Run one spawn attempt if the timer is due. The timer is rescheduled
/// whether or not a target is produced; capacity and placement
/// exhaustion skip the cycle silently.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    registry: &mut PopulationRegistry,
    scheduler: &SchedulerState,
    timer: &mut SpawnTimer,
    layout: &RowLayout,
    tuning: &SpawnTuning,
    next_target_id: &mut u32,
    current_tick: u64,
    events: &mut Vec<GalleryEvent>,
) {
    if !timer.is_due(current_tick) {
        return;
    }
    timer.schedule_in(current_tick, ticks_from_secs(scheduler.spawn_interval_secs));

    // Soft admission gate: purge stale entries once, then skip if still
    // at capacity. Existing targets are never evicted.
    if registry.len() >= tuning.max_targets {
        registry.compact(world);
        if registry.len() >= tuning.max_targets {
            tracing::debug!(live = registry.len(), "population at capacity, skipping spawn");
            return;
        }
    }

    let kind = choose_kind(rng, tuning.common_chance);

    let live = registry.live_positions(world);
    let Some(candidate) = placement::try_sample(
        rng,
        &live,
        layout,
        tuning.min_distance,
        MAX_PLACEMENT_ATTEMPTS,
    ) else {
        tracing::debug!(
            attempts = MAX_PLACEMENT_ATTEMPTS,
            "placement exhausted, skipping spawn"
        );
        return;
    };

    let target_id = *next_target_id;
    *next_target_id += 1;

    let start = Position::new(candidate.position.x, candidate.position.y - ENTRANCE_DROP);
    let entity = world.spawn((
        Target,
        start,
        TargetProfile {
            target_id,
            kind,
            phase: TargetPhase::Entering,
            row: candidate.row,
            sort_order: BASE_SORT_ORDER - candidate.row as i32 * SORT_ORDER_ROW_STEP,
            spawned_tick: current_tick,
        },
        EntranceAnimation {
            start,
            target: candidate.position,
            start_tick: current_tick,
        },
        Lifetime {
            expires_at_tick: current_tick + ticks_from_secs(scheduler.target_lifetime_secs),
        },
    ));
    registry.add(target_id, entity);

    events.push(GalleryEvent::TargetSpawned {
        target_id,
        kind,
        row: candidate.row,
    });
}

/// Weighted kind draw: `common_chance` probability of the common kind.
fn choose_kind(rng: &mut ChaCha8Rng, common_chance: f64) -> TargetKind {
    if rng.gen_bool(common_chance.clamp(0.0, 1.0)) {
        TargetKind::Common
    } else {
        TargetKind::Rare
    }
}
