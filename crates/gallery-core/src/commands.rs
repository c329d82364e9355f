//! Commands sent by external collaborators to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible external actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LevelCommand {
    /// Start (or restart) the level: resets the world and arms the
    /// spawn and adaptation timers.
    StartLevel,
    /// Halt future spawn ticks only. The adaptation tick and in-flight
    /// target lifecycles are unaffected.
    StopSpawning,
    /// Remove a specific live target (e.g. a hit-detection system scored
    /// a hit). Unknown ids are a silent no-op.
    RemoveTarget { target_id: u32 },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
