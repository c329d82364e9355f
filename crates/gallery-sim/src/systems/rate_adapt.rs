//! Rate-adaptation tick: tightens the spawn cadence (and target
//! lifetime) toward the floor every fixed period.

use gallery_core::constants::{RATE_ADAPT_PERIOD_SECS, RATE_ADAPT_STEP_SECS};
use gallery_core::events::GalleryEvent;
use gallery_core::types::ticks_from_secs;

use crate::scheduler::{SchedulerState, SpawnTimer};

/// Fires every `RATE_ADAPT_PERIOD_SECS`, independent of the spawn tick's
/// own period.
pub fn run(
    scheduler: &mut SchedulerState,
    timer: &mut SpawnTimer,
    next_adapt_tick: &mut u64,
    current_tick: u64,
    events: &mut Vec<GalleryEvent>,
) {
    if current_tick < *next_adapt_tick {
        return;
    }
    *next_adapt_tick = current_tick + ticks_from_secs(RATE_ADAPT_PERIOD_SECS);

    if scheduler.tighten(RATE_ADAPT_STEP_SECS) {
        events.push(GalleryEvent::SpawnRateTightened {
            interval_secs: scheduler.spawn_interval_secs,
        });
        tracing::debug!(
            interval_secs = scheduler.spawn_interval_secs,
            "spawn interval and lifetime tightened"
        );
    } else {
        tracing::debug!(
            floor_secs = scheduler.floor_secs,
            "spawn interval already at floor"
        );
    }

    // Cancel-and-restart so the new period takes effect on the next
    // cycle. A stopped timer stays stopped.
    if timer.is_active() {
        timer.schedule_in(current_tick, ticks_from_secs(scheduler.spawn_interval_secs));
    }
}
