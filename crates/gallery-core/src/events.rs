//! Events emitted by the simulation for external collaborators
//! (scorekeeping, audio, UI).

use serde::{Deserialize, Serialize};

use crate::enums::TargetKind;

/// Notifications drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GalleryEvent {
    /// A new target was placed and began its entrance animation.
    TargetSpawned {
        target_id: u32,
        kind: TargetKind,
        row: usize,
    },
    /// Entrance animation finished; the target is upright.
    TargetRaised { target_id: u32 },
    /// Target retired by natural lifetime expiry.
    TargetExpired { target_id: u32, kind: TargetKind },
    /// Target removed by an external collaborator.
    TargetShot { target_id: u32, kind: TargetKind },
    /// Rate adaptation tightened the spawn interval (and lifetime).
    SpawnRateTightened { interval_secs: f64 },
    /// Spawning was halted by command.
    SpawningStopped,
    /// The level clock ran out.
    LevelEnded,
}
