//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Target kind, selected by a weighted draw at spawn time.
/// The factory turning a kind into a visual object is an external concern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    /// Frequent kind (70% by default).
    #[default]
    Common,
    /// Infrequent kind (30% by default).
    Rare,
}

/// Per-target lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetPhase {
    /// Rising from below the row toward its placement.
    #[default]
    Entering,
    /// Entrance animation complete, holding at the placement.
    Upright,
    /// Retired by lifetime expiry or external removal.
    Removed,
}

/// Level phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelPhase {
    #[default]
    Idle,
    Running,
    Paused,
    /// Level clock ran out; spawning has halted but in-flight
    /// target lifecycles still run to completion.
    Ended,
}
