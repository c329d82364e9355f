//! Spawn cadence state and the restartable spawn timer.

use serde::{Deserialize, Serialize};

use gallery_core::constants::SPAWN_INTERVAL_FLOOR_SECS;

/// Shared cadence state, mutated only by the rate-adaptation tick and
/// read by the spawn tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerState {
    pub spawn_interval_secs: f64,
    /// Kept equal to the spawn interval once adaptation engages: faster
    /// spawning implies shorter-lived targets, bounding population growth.
    pub target_lifetime_secs: f64,
    /// Neither the interval nor lifetime shrinks below this.
    pub floor_secs: f64,
}

impl SchedulerState {
    pub fn new(spawn_interval_secs: f64, target_lifetime_secs: f64) -> Self {
        Self {
            spawn_interval_secs,
            target_lifetime_secs,
            floor_secs: SPAWN_INTERVAL_FLOOR_SECS,
        }
    }

    /// Tighten the interval by one step, clamped to the floor, and keep
    /// the lifetime in lockstep. Returns whether anything changed.
    pub fn tighten(&mut self, step_secs: f64) -> bool {
        if self.spawn_interval_secs <= self.floor_secs {
            return false;
        }
        self.spawn_interval_secs = (self.spawn_interval_secs - step_secs).max(self.floor_secs);
        self.target_lifetime_secs = self.spawn_interval_secs;
        true
    }

    pub fn at_floor(&self) -> bool {
        self.spawn_interval_secs <= self.floor_secs
    }
}

/// Restartable periodic timer handle for the spawn tick.
///
/// Changing the period is modeled as cancel-and-reschedule, so an updated
/// interval takes effect on the next cycle rather than being a mutable
/// period an already-scheduled fire ignores.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnTimer {
    next_fire_tick: Option<u64>,
}

impl SpawnTimer {
    /// Cancel any pending fire and schedule the next one `delay_ticks`
    /// from `now`.
    pub fn schedule_in(&mut self, now: u64, delay_ticks: u64) {
        self.next_fire_tick = Some(now + delay_ticks.max(1));
    }

    /// Halt future fires. In-flight target lifecycles are unaffected.
    pub fn cancel(&mut self) {
        self.next_fire_tick = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_fire_tick.is_some()
    }

    pub fn is_due(&self, now: u64) -> bool {
        self.next_fire_tick.is_some_and(|tick| now >= tick)
    }
}
