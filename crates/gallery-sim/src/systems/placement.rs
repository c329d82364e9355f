//! Placement sampler — rejection sampling under the minimum-distance
//! constraint.
//!
//! Exact constrained placement (explicit free-space computation) is
//! unnecessary at this density and attempt budget.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gallery_core::constants::ROW_COUNT;
use gallery_core::types::Position;

use crate::layout::RowLayout;

/// A candidate accepted by the sampler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub position: Position,
    /// Row index, nearest row first.
    pub row: usize,
}

/// Draw up to `max_attempts` uniform candidates: a random row, X uniform
/// within that row's half-width, Y at the row anchor. A candidate is
/// accepted iff its distance to every live target is at least
/// `min_distance`. `None` means "skip this tick", not an error.
pub fn try_sample(
    rng: &mut ChaCha8Rng,
    live: &[Position],
    layout: &RowLayout,
    min_distance: f64,
    max_attempts: u32,
) -> Option<Candidate> {
    for _ in 0..max_attempts {
        let row = rng.gen_range(0..ROW_COUNT);
        let half_width = layout.half_width(row);
        // Zero-width rows (degraded configuration) admit no placement.
        if half_width <= 0.0 {
            continue;
        }

        let x = rng.gen_range(-half_width..=half_width);
        let candidate = Position::new(x, RowLayout::row_y(row));

        if live
            .iter()
            .all(|pos| pos.distance_to(&candidate) >= min_distance)
        {
            return Some(Candidate {
                position: candidate,
                row,
            });
        }
    }
    None
}
