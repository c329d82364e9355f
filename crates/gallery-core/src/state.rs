//! Gallery state snapshot — the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{LevelPhase, TargetKind, TargetPhase};
use crate::events::GalleryEvent;
use crate::types::{Position, SimTime};

/// Complete simulation state broadcast to collaborators after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GallerySnapshot {
    pub time: SimTime,
    pub phase: LevelPhase,
    /// Live targets, sorted by id for stable output.
    pub targets: Vec<TargetView>,
    pub scheduler: SchedulerView,
    /// Events since the previous snapshot.
    pub events: Vec<GalleryEvent>,
}

/// One live target as seen by a renderer or hit-detection collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetView {
    pub target_id: u32,
    pub kind: TargetKind,
    pub phase: TargetPhase,
    /// Current position (mid-entrance this is below the placement).
    pub position: Position,
    pub row: usize,
    /// Draw order; nearer rows on top.
    pub sort_order: i32,
}

/// Scheduler status for display and diagnostics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchedulerView {
    pub spawn_interval_secs: f64,
    pub target_lifetime_secs: f64,
    pub live_targets: u32,
    pub max_targets: u32,
    /// False once spawning has been stopped or the level ended.
    pub spawning_active: bool,
    pub level_time_left_secs: f64,
}
