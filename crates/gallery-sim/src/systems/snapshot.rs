//! Snapshot system: queries the ECS world and builds a complete
//! GallerySnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use gallery_core::components::TargetProfile;
use gallery_core::config::SpawnTuning;
use gallery_core::enums::LevelPhase;
use gallery_core::events::GalleryEvent;
use gallery_core::state::{GallerySnapshot, SchedulerView, TargetView};
use gallery_core::types::{Position, SimTime};

use crate::scheduler::{SchedulerState, SpawnTimer};

/// Build a complete GallerySnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: LevelPhase,
    scheduler: &SchedulerState,
    timer: &SpawnTimer,
    tuning: &SpawnTuning,
    level_time_left_secs: f64,
    live_targets: usize,
    events: Vec<GalleryEvent>,
) -> GallerySnapshot {
    let mut targets: Vec<TargetView> = world
        .query::<(&Position, &TargetProfile)>()
        .iter()
        .map(|(_, (pos, profile))| TargetView {
            target_id: profile.target_id,
            kind: profile.kind,
            phase: profile.phase,
            position: *pos,
            row: profile.row,
            sort_order: profile.sort_order,
        })
        .collect();
    // Stable output regardless of archetype iteration order.
    targets.sort_by_key(|view| view.target_id);

    GallerySnapshot {
        time: *time,
        phase,
        targets,
        scheduler: SchedulerView {
            spawn_interval_secs: scheduler.spawn_interval_secs,
            target_lifetime_secs: scheduler.target_lifetime_secs,
            live_targets: live_targets as u32,
            max_targets: tuning.max_targets as u32,
            spawning_active: timer.is_active(),
            level_time_left_secs,
        },
        events,
    }
}
