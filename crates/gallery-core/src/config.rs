//! Externally supplied configuration, with defaults matching the
//! shipped tuning.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Row geometry supplied by an external configuration collaborator.
/// Absence at startup is a configuration error: all rows degrade to
/// zero width and no placement is possible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowGeometry {
    pub bushes_per_row: u32,
    pub bush_spacing: f64,
    /// Scale of the nearest row.
    pub base_scale: f64,
    /// Multiplicative narrowing per row of depth; < 1 gives perspective.
    pub depth_scale_factor: f64,
}

impl Default for RowGeometry {
    fn default() -> Self {
        Self {
            bushes_per_row: DEFAULT_BUSHES_PER_ROW,
            bush_spacing: DEFAULT_BUSH_SPACING,
            base_scale: DEFAULT_BASE_SCALE,
            depth_scale_factor: DEFAULT_DEPTH_SCALE_FACTOR,
        }
    }
}

/// Tunable scheduler parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnTuning {
    /// Legacy horizontal bound. Row-based placement is authoritative;
    /// this field is carried for configuration compatibility and never read.
    pub spawn_range_x: f64,
    /// Delay before the first spawn tick.
    pub start_delay_secs: f64,
    /// Initial spawn interval; tightened by rate adaptation.
    pub spawn_interval_secs: f64,
    /// Soft capacity: spawn ticks are skipped at or above this population.
    pub max_targets: usize,
    /// Minimum distance between a new placement and every live target.
    pub min_distance: f64,
    /// Initial target lifetime; kept equal to the spawn interval once
    /// adaptation engages.
    pub target_lifetime_secs: f64,
    /// Probability of the common kind in the weighted spawn draw.
    pub common_chance: f64,
    /// Level duration; at zero the level ends and spawning halts.
    pub level_duration_secs: f64,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            spawn_range_x: DEFAULT_SPAWN_RANGE_X,
            start_delay_secs: DEFAULT_START_DELAY_SECS,
            spawn_interval_secs: DEFAULT_SPAWN_INTERVAL_SECS,
            max_targets: DEFAULT_MAX_TARGETS,
            min_distance: DEFAULT_MIN_DISTANCE,
            target_lifetime_secs: DEFAULT_TARGET_LIFETIME_SECS,
            common_chance: DEFAULT_COMMON_CHANCE,
            level_duration_secs: DEFAULT_LEVEL_DURATION_SECS,
        }
    }
}
