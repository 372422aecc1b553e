//! Simulation - the scene context
//!
//! Owns the physics world, the particle lifecycle, the cup, the drag
//! controller and the viewport. Hosts feed input through the event queue
//! and call `step()` once per frame.
//!
//! Tick order:
//! 1. drain queued input events
//! 2. before-update: drag controller may move the cup
//! 3. physics integration
//! 4. spawn (deterministic, then stochastic), then cull
//! 5. refresh the render extract

use crate::container::Cup;
use crate::core::utils::Rng;
use crate::domain::config::SceneConfig;
use crate::drag::DragController;
use crate::lifecycle::ParticleLifecycle;
use crate::physics_world::PhysicsWorld;
use crate::rigid_body::{BodyHandle, Vec2};
use crate::rigid_body_system::RigidBodySystem;
use crate::viewport::{FilterProfile, Viewport};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "events/events.rs"]
mod events;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use events::{EventQueue, InputEvent};
pub use facade::Scene;
pub use perf_stats::PerfStats;
pub use render_extract::{RENDER_STRIDE, SHAPE_CIRCLE, SHAPE_RECTANGLE};

use perf_timer::PerfTimer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationState {
    /// Built, no bodies yet
    Created,
    Running,
    /// Bodies kept, `step()` does nothing
    Stopped,
    /// Bodies removed; `start()` rebuilds the scene
    Disposed,
}

/// The scene context
pub struct Simulation<W: PhysicsWorld = RigidBodySystem> {
    config: SceneConfig,
    world: W,
    lifecycle: ParticleLifecycle,
    cup: Option<Cup>,
    ground: Option<BodyHandle>,
    drag: DragController,
    viewport: Viewport,
    filter_profile: usize,
    events: EventQueue,
    rng: Rng,

    // State
    state: SimulationState,
    frame: u64,
    render_buffer: Vec<f32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Simulation<RigidBodySystem> {
    /// Create a scene with the stock configuration
    pub fn create(width: f32, height: f32) -> Self {
        Self::create_with_config(width, height, SceneConfig::default())
    }

    pub fn create_with_config(width: f32, height: f32, config: SceneConfig) -> Self {
        let mut world = RigidBodySystem::new();
        world.set_gravity(config.gravity, config.gravity_scale);
        Self::with_world(world, width, height, config)
    }
}

impl<W: PhysicsWorld> Simulation<W> {
    /// Create a scene on top of any physics backend
    pub fn with_world(world: W, width: f32, height: f32, config: SceneConfig) -> Self {
        init::create_simulation(world, width, height, config)
    }

    // === LIFECYCLE ===

    /// Build the ground and cup (first call) or resume after `stop()`
    pub fn start(&mut self) {
        init::start(self)
    }

    pub fn stop(&mut self) {
        init::stop(self)
    }

    /// Remove every body and drop queued input
    pub fn dispose(&mut self) {
        init::dispose(self)
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SimulationState::Running
    }

    /// Advance one tick. Returns `false` when not running.
    pub fn step(&mut self) -> bool {
        step::step(self)
    }

    // === INPUT ===

    pub fn push_event(&mut self, event: InputEvent) {
        commands::push_event(self, event)
    }

    /// Apply queued events now instead of at the next tick
    pub fn flush_events(&mut self) {
        commands::flush_events(self)
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, button: i16) {
        self.push_event(InputEvent::PointerDown { x, y, button });
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, button: Option<i16>) {
        self.push_event(InputEvent::PointerMove { x, y, button });
    }

    pub fn end_drag(&mut self) {
        self.push_event(InputEvent::EndDrag);
    }

    /// Resize is applied immediately so the host surface and the overlay
    /// agree before the next frame.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.push_event(InputEvent::Resize { width, height });
        self.flush_events();
    }

    // === SETTINGS ===

    pub fn set_stochastic_enabled(&mut self, enabled: bool) {
        settings::set_stochastic_enabled(self, enabled);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === ACCESSORS ===

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    /// Direct world access for hosts that need to poke bodies
    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    pub fn lifecycle(&self) -> &ParticleLifecycle {
        &self.lifecycle
    }

    pub fn cup(&self) -> Option<&Cup> {
        self.cup.as_ref()
    }

    pub fn ground(&self) -> Option<BodyHandle> {
        self.ground
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn particle_count(&self) -> usize {
        self.lifecycle.len()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Index of the active gooey filter profile (0 narrow, 1 wide)
    pub fn filter_profile(&self) -> usize {
        self.filter_profile
    }

    pub fn filter(&self) -> &FilterProfile {
        self.config.filter.profile(self.filter_profile)
    }

    /// Where the cup goes on start and on resize
    pub fn cup_snap_point(&self) -> Vec2 {
        self.viewport.relative_point(self.config.cup.snap)
    }

    /// Flat body data for the renderer, `RENDER_STRIDE` floats per body
    pub fn render_buffer(&self) -> &[f32] {
        &self.render_buffer
    }

    /// Run the cull pass outside a tick (hosts that move particles directly)
    pub fn cull_offscreen(&mut self) -> usize {
        let height = self.viewport.height();
        self.lifecycle.cull_offscreen(&mut self.world, height)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
