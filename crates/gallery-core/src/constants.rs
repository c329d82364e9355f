//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). 60 keeps every scheduler duration
/// (0.05s adaptation step included) a whole number of ticks.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Rows ---

/// Number of depth rows in the arena.
pub const ROW_COUNT: usize = 3;

/// Fixed Y anchor for each row, nearest row first.
pub const ROW_YS: [f64; ROW_COUNT] = [-420.0, -190.0, 20.0];

// --- Draw order ---

/// Sort order of the nearest row; nearer rows draw on top.
pub const BASE_SORT_ORDER: i32 = 1000;

/// Sort-order decrement per row of depth.
pub const SORT_ORDER_ROW_STEP: i32 = 100;

// --- Entrance animation ---

/// Vertical offset below the row anchor where a target starts rising from.
pub const ENTRANCE_DROP: f64 = 30.0;

/// Duration of the entrance animation (seconds).
pub const ENTRANCE_DURATION_SECS: f64 = 0.5;

// --- Spawn scheduling ---

/// Placement attempts before a spawn tick gives up for the cycle.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 30;

/// Period of the rate-adaptation tick (seconds, fixed).
pub const RATE_ADAPT_PERIOD_SECS: f64 = 5.0;

/// Amount the spawn interval shrinks per adaptation tick (seconds).
pub const RATE_ADAPT_STEP_SECS: f64 = 0.05;

/// Floor below which neither the spawn interval nor lifetime shrinks.
pub const SPAWN_INTERVAL_FLOOR_SECS: f64 = 0.5;

// --- Tuning defaults ---

/// Legacy horizontal spawn bound; superseded by row-based placement.
pub const DEFAULT_SPAWN_RANGE_X: f64 = 850.0;

/// Delay before the first spawn tick (seconds).
pub const DEFAULT_START_DELAY_SECS: f64 = 2.0;

/// Initial spawn interval (seconds).
pub const DEFAULT_SPAWN_INTERVAL_SECS: f64 = 1.0;

/// Maximum live targets at any observation point.
pub const DEFAULT_MAX_TARGETS: usize = 15;

/// Minimum distance between a new placement and every live target.
pub const DEFAULT_MIN_DISTANCE: f64 = 300.0;

/// Initial target lifetime (seconds); overridden once adaptation engages.
pub const DEFAULT_TARGET_LIFETIME_SECS: f64 = 10.0;

/// Probability a spawn produces the common kind.
pub const DEFAULT_COMMON_CHANCE: f64 = 0.7;

/// Level duration before spawning halts and the level ends (seconds).
pub const DEFAULT_LEVEL_DURATION_SECS: f64 = 150.0;

// --- Row geometry defaults ---

/// Bushes per row at unit scale.
pub const DEFAULT_BUSHES_PER_ROW: u32 = 5;

/// Horizontal spacing between bushes (arena units).
pub const DEFAULT_BUSH_SPACING: f64 = 340.0;

/// Scale of the nearest row.
pub const DEFAULT_BASE_SCALE: f64 = 1.0;

/// Multiplicative scale applied per row going from nearest to farthest.
pub const DEFAULT_DEPTH_SCALE_FACTOR: f64 = 0.8;
