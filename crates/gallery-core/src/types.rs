//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in arena space (screen units, y increasing upward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation from `start` to `end`; `t` is clamped to [0, 1].
    pub fn lerp(start: Position, end: Position, t: f64) -> Position {
        let t = t.clamp(0.0, 1.0);
        Position {
            x: start.x + (end.x - start.x) * t,
            y: start.y + (end.y - start.y) * t,
        }
    }
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Convert a duration in seconds to whole ticks (at least one).
pub fn ticks_from_secs(secs: f64) -> u64 {
    ((secs * crate::constants::TICK_RATE as f64).round() as u64).max(1)
}
