use crate::physics_world::PhysicsWorld;

use super::render_extract;
use super::{commands, PerfTimer, Simulation, SimulationState};

pub(super) fn step<W: PhysicsWorld>(sim: &mut Simulation<W>) -> bool {
    if sim.state != SimulationState::Running {
        return false;
    }

    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
    }
    let mut timer = perf_on.then(PerfTimer::start);

    // === INPUT ===
    commands::flush_events(sim);
    // Cup moves before integration so particles collide with its new pose
    sim.drag.before_update(sim.cup.as_mut(), &mut sim.world, &sim.viewport);
    if let Some(t) = timer.as_mut() {
        sim.perf_stats.events_ms = t.lap_ms();
    }

    // === PHYSICS ===
    sim.world.step(sim.config.tick_ms);
    if let Some(t) = timer.as_mut() {
        sim.perf_stats.physics_ms = t.lap_ms();
    }

    // === TICK: spawn, then cull ===
    let mut spawned = 1u32;
    sim.lifecycle.spawn_deterministic(&mut sim.world, &mut sim.rng);
    if sim.lifecycle.spawn_stochastic(&mut sim.world, &mut sim.rng).is_some() {
        spawned += 1;
    }
    if let Some(t) = timer.as_mut() {
        sim.perf_stats.spawn_ms = t.lap_ms();
    }

    let height = sim.viewport.height();
    let culled = sim.lifecycle.cull_offscreen(&mut sim.world, height);
    if let Some(t) = timer.as_mut() {
        sim.perf_stats.cull_ms = t.lap_ms();
    }

    // === RENDER EXTRACT ===
    render_extract::refresh(&sim.world, &mut sim.render_buffer);
    if let Some(t) = timer.as_mut() {
        sim.perf_stats.render_ms = t.lap_ms();
    }

    sim.frame += 1;

    if let Some(t) = timer {
        sim.perf_stats.step_ms = t.elapsed_ms();
        sim.perf_stats.spawned = spawned;
        sim.perf_stats.culled = culled as u32;
        sim.perf_stats.particle_count = sim.lifecycle.len() as u32;
        sim.perf_stats.body_count = sim.world.body_count() as u32;
    }
    true
}
