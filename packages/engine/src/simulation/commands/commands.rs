use crate::physics_world::PhysicsWorld;
use crate::rigid_body::Vec2;

use super::{InputEvent, Simulation};

pub(super) fn push_event<W: PhysicsWorld>(sim: &mut Simulation<W>, event: InputEvent) {
    sim.events.push(event);
}

pub(super) fn flush_events<W: PhysicsWorld>(sim: &mut Simulation<W>) {
    while let Some(event) = sim.events.pop() {
        apply_event(sim, event);
    }
}

fn apply_event<W: PhysicsWorld>(sim: &mut Simulation<W>, event: InputEvent) {
    match event {
        InputEvent::PointerDown { x, y, button } => sim.drag.pointer_down(Vec2::new(x, y), button),
        InputEvent::PointerMove { x, y, button } => sim.drag.pointer_move(Vec2::new(x, y), button),
        InputEvent::EndDrag => sim.drag.end_drag(),
        InputEvent::Resize { width, height } => resize(sim, width, height),
    }
}

/// New viewport, re-pick the filter profile, snap the cup back to its
/// relative home. A cup that does not exist yet is placed by `start()`.
fn resize<W: PhysicsWorld>(sim: &mut Simulation<W>, width: f32, height: f32) {
    sim.viewport.resize(width, height);

    let profile = sim.config.filter.select(sim.viewport.width());
    if profile != sim.filter_profile {
        console_log!("filter profile {} -> {} at width {}", sim.filter_profile, profile, width);
        sim.filter_profile = profile;
    }

    let snap = sim.viewport.relative_point(sim.config.cup.snap);
    if let Some(cup) = sim.cup.as_mut() {
        cup.set_position(&mut sim.world, snap, &sim.viewport);
    }
}
