use crate::physics_world::PhysicsWorld;

use super::perf_stats::PerfStats;
use super::Simulation;

pub(super) fn set_stochastic_enabled<W: PhysicsWorld>(sim: &mut Simulation<W>, enabled: bool) {
    sim.lifecycle.set_stochastic_enabled(enabled);
}

pub(super) fn enable_perf_metrics<W: PhysicsWorld>(sim: &mut Simulation<W>, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats<W: PhysicsWorld>(sim: &Simulation<W>) -> PerfStats {
    sim.perf_stats.clone()
}
