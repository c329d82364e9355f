//! Systems that operate on the simulation each tick.
//!
//! Systems are functions over `&mut World` plus whatever scheduler state
//! they need. They do not own state.

pub mod entrance;
pub mod expiry;
pub mod placement;
pub mod rate_adapt;
pub mod snapshot;
pub mod spawner;
