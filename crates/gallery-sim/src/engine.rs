//! Gallery engine — the core of the simulation.
//!
//! `GalleryEngine` owns the hecs ECS world, processes level commands,
//! runs all systems on a single logical timeline, and produces
//! `GallerySnapshot`s. Completely headless, enabling deterministic
//! testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gallery_core::commands::LevelCommand;
use gallery_core::components::TargetProfile;
use gallery_core::config::{RowGeometry, SpawnTuning};
use gallery_core::constants::{DT, RATE_ADAPT_PERIOD_SECS};
use gallery_core::enums::LevelPhase;
use gallery_core::events::GalleryEvent;
use gallery_core::state::GallerySnapshot;
use gallery_core::types::{ticks_from_secs, SimTime};

use crate::layout::RowLayout;
use crate::registry::PopulationRegistry;
use crate::scheduler::{SchedulerState, SpawnTimer};
use crate::systems;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Row geometry from the external configuration collaborator.
    /// Absence is a configuration error: placement degrades to impossible.
    pub row_geometry: Option<RowGeometry>,
    pub tuning: SpawnTuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            row_geometry: Some(RowGeometry::default()),
            tuning: SpawnTuning::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all scheduler state.
pub struct GalleryEngine {
    world: World,
    time: SimTime,
    phase: LevelPhase,
    rng: ChaCha8Rng,
    layout: RowLayout,
    tuning: SpawnTuning,
    registry: PopulationRegistry,
    scheduler: SchedulerState,
    spawn_timer: SpawnTimer,
    next_adapt_tick: u64,
    level_ticks_left: u64,
    next_target_id: u32,
    command_queue: VecDeque<LevelCommand>,
    events: Vec<GalleryEvent>,
    entrance_buffer: Vec<hecs::Entity>,
}

impl GalleryEngine {
    /// Create a new engine with the given config. A missing or invalid
    /// row geometry is logged and degrades to a layout that admits no
    /// placements; the engine itself keeps running.
    pub fn new(config: SimConfig) -> Self {
        let layout = RowLayout::resolve(config.row_geometry.as_ref()).unwrap_or_else(|err| {
            tracing::error!(%err, "row geometry unavailable, placement disabled");
            RowLayout::disabled()
        });

        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: LevelPhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            layout,
            scheduler: SchedulerState::new(
                config.tuning.spawn_interval_secs,
                config.tuning.target_lifetime_secs,
            ),
            tuning: config.tuning,
            registry: PopulationRegistry::new(),
            spawn_timer: SpawnTimer::default(),
            next_adapt_tick: 0,
            level_ticks_left: 0,
            next_target_id: 0,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            entrance_buffer: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: LevelCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = LevelCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. After the level ends, in-flight target lifecycles keep
    /// running even though no new spawns occur.
    pub fn tick(&mut self) -> GallerySnapshot {
        self.process_commands();

        match self.phase {
            LevelPhase::Running => {
                self.run_systems();
                self.time.advance();
                self.advance_level_clock();
            }
            LevelPhase::Ended => {
                self.run_systems();
                self.time.advance();
            }
            LevelPhase::Idle | LevelPhase::Paused => {}
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.scheduler,
            &self.spawn_timer,
            &self.tuning,
            self.level_time_left_secs(),
            self.registry.len(),
            events,
        )
    }

    pub fn phase(&self) -> LevelPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn registry(&self) -> &PopulationRegistry {
        &self.registry
    }

    pub fn scheduler(&self) -> &SchedulerState {
        &self.scheduler
    }

    /// Whether future spawn ticks are scheduled.
    pub fn spawning_active(&self) -> bool {
        self.spawn_timer.is_active()
    }

    pub fn level_time_left_secs(&self) -> f64 {
        self.level_ticks_left as f64 * DT
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: LevelCommand) {
        match command {
            LevelCommand::StartLevel => {
                if matches!(self.phase, LevelPhase::Idle | LevelPhase::Ended) {
                    self.start_level();
                }
            }
            LevelCommand::StopSpawning => {
                // Halts the spawn tick only: rate adaptation and every
                // in-flight entrance animation and lifetime keep running.
                self.spawn_timer.cancel();
                self.events.push(GalleryEvent::SpawningStopped);
            }
            LevelCommand::RemoveTarget { target_id } => {
                self.remove_target(target_id);
            }
            LevelCommand::Pause => {
                if self.phase == LevelPhase::Running {
                    self.phase = LevelPhase::Paused;
                }
            }
            LevelCommand::Resume => {
                if self.phase == LevelPhase::Paused {
                    self.phase = LevelPhase::Running;
                }
            }
        }
    }

    /// Reset all level state and arm the timers.
    fn start_level(&mut self) {
        self.world.clear();
        self.registry.clear();
        self.events.clear();
        self.time = SimTime::default();
        self.next_target_id = 0;
        self.scheduler = SchedulerState::new(
            self.tuning.spawn_interval_secs,
            self.tuning.target_lifetime_secs,
        );
        self.spawn_timer
            .schedule_in(0, ticks_from_secs(self.tuning.start_delay_secs));
        self.next_adapt_tick = ticks_from_secs(RATE_ADAPT_PERIOD_SECS);
        self.level_ticks_left = ticks_from_secs(self.tuning.level_duration_secs);
        self.phase = LevelPhase::Running;
    }

    /// External removal request (e.g. hit detection). Treated identically
    /// to natural expiry for bookkeeping; an unknown or already-removed
    /// id is a silent no-op.
    fn remove_target(&mut self, target_id: u32) {
        let Some(entity) = self.registry.remove(target_id) else {
            return;
        };
        let Ok(kind) = self
            .world
            .get::<&TargetProfile>(entity)
            .map(|profile| profile.kind)
        else {
            return;
        };
        let _ = self.world.despawn(entity);
        self.events.push(GalleryEvent::TargetShot { target_id, kind });
    }

    /// Run all systems in order. Within a tick: adaptation first (a
    /// restart on a shared boundary defers the pending spawn), then the
    /// spawn attempt (compaction before placement, placement before
    /// registration), then animations, then expiry.
    fn run_systems(&mut self) {
        // 1. Rate adaptation (restarts the spawn timer on change)
        systems::rate_adapt::run(
            &mut self.scheduler,
            &mut self.spawn_timer,
            &mut self.next_adapt_tick,
            self.time.tick,
            &mut self.events,
        );
        // 2. Spawn attempt
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.registry,
            &self.scheduler,
            &mut self.spawn_timer,
            &self.layout,
            &self.tuning,
            &mut self.next_target_id,
            self.time.tick,
            &mut self.events,
        );
        // 3. Entrance animations
        systems::entrance::run(
            &mut self.world,
            self.time.tick,
            &mut self.events,
            &mut self.entrance_buffer,
        );
        // 4. Lifetime expiry
        systems::expiry::run(
            &mut self.world,
            &mut self.registry,
            self.time.tick,
            &mut self.events,
        );
    }

    /// Count down the level clock; at zero, spawning halts and the level
    /// ends while in-flight lifecycles continue.
    fn advance_level_clock(&mut self) {
        if self.level_ticks_left == 0 {
            return;
        }
        self.level_ticks_left -= 1;
        if self.level_ticks_left == 0 {
            self.spawn_timer.cancel();
            self.phase = LevelPhase::Ended;
            self.events.push(GalleryEvent::LevelEnded);
            tracing::info!("level clock expired, spawning halted");
        }
    }
}
