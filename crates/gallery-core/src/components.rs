//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{TargetKind, TargetPhase};
use crate::types::Position;

/// Marks an entity as a spawned pop-up target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target;

/// Identity and display bookkeeping for one spawned target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetProfile {
    /// Unique identity assigned at spawn.
    pub target_id: u32,
    pub kind: TargetKind,
    pub phase: TargetPhase,
    /// Row index, nearest row first.
    pub row: usize,
    /// Draw order derived from the row so nearer rows render on top.
    pub sort_order: i32,
    /// Tick at which the target was spawned.
    pub spawned_tick: u64,
}

/// Entrance animation state: linear rise from below the row anchor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EntranceAnimation {
    /// Start point, a fixed drop below the placement.
    pub start: Position,
    /// Final placement position.
    pub target: Position,
    /// Tick at which the animation began.
    pub start_tick: u64,
}

/// Delayed self-removal after the configured lifetime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lifetime {
    pub expires_at_tick: u64,
}
