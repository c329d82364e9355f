//! Simulation engine for the pop-up target gallery.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate, and
//! produces `GallerySnapshot`s. Completely headless — rendering, input,
//! and hit detection are external collaborators that talk to the engine
//! through commands and events.

pub mod engine;
pub mod layout;
pub mod registry;
pub mod scheduler;
pub mod systems;

pub use engine::GalleryEngine;
pub use gallery_core as core;
