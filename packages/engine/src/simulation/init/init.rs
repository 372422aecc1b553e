use crate::container::Cup;
use crate::core::utils::Rng;
use crate::domain::config::SceneConfig;
use crate::drag::DragController;
use crate::lifecycle::ParticleLifecycle;
use crate::physics_world::PhysicsWorld;
use crate::viewport::Viewport;

use super::perf_stats::PerfStats;
use super::{EventQueue, Simulation, SimulationState};

pub(super) fn create_simulation<W: PhysicsWorld>(
    world: W,
    width: f32,
    height: f32,
    config: SceneConfig,
) -> Simulation<W> {
    let viewport = Viewport::new(width, height);
    let mut lifecycle = ParticleLifecycle::new(
        config.boba.clone(),
        config.jelly.clone(),
        config.jelly_probability,
    );
    lifecycle.set_stochastic_enabled(config.jelly_enabled);

    Simulation {
        filter_profile: config.filter.select(viewport.width()),
        rng: Rng::new(config.seed),
        config,
        world,
        lifecycle,
        cup: None,
        ground: None,
        drag: DragController::new(),
        viewport,
        events: EventQueue::new(),
        state: SimulationState::Created,
        frame: 0,
        render_buffer: Vec::with_capacity(1024),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

pub(super) fn start<W: PhysicsWorld>(sim: &mut Simulation<W>) {
    match sim.state {
        SimulationState::Running => {}
        SimulationState::Stopped => sim.state = SimulationState::Running,
        SimulationState::Created | SimulationState::Disposed => {
            build_scene(sim);
            sim.state = SimulationState::Running;
            console_log!(
                "boba scene started at {}x{}",
                sim.viewport.width(),
                sim.viewport.height()
            );
        }
    }
}

pub(super) fn stop<W: PhysicsWorld>(sim: &mut Simulation<W>) {
    if sim.state == SimulationState::Running {
        sim.state = SimulationState::Stopped;
    }
}

pub(super) fn dispose<W: PhysicsWorld>(sim: &mut Simulation<W>) {
    sim.lifecycle.clear(&mut sim.world);
    if let Some(cup) = sim.cup.take() {
        cup.remove(&mut sim.world);
    }
    if let Some(ground) = sim.ground.take() {
        sim.world.remove(ground);
    }
    sim.events.clear();
    sim.drag = DragController::new();
    sim.render_buffer.clear();
    sim.frame = 0;
    sim.state = SimulationState::Disposed;
}

fn build_scene<W: PhysicsWorld>(sim: &mut Simulation<W>) {
    if let Some(ground) = &sim.config.ground {
        sim.ground = Some(sim.world.add(ground.body_desc()));
    }

    let center = sim.viewport.relative_point(sim.config.cup.snap);
    sim.cup = Some(Cup::create(&mut sim.world, center, &sim.viewport, &sim.config.cup));
}
