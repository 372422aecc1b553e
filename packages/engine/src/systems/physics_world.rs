//! PhysicsWorld - the seam between the scene logic and a rigid-body solver
//!
//! Scene code (lifecycle, cup, drag) only talks to this trait. The bundled
//! backend is `RigidBodySystem` over rapier2d. Bodies come back as
//! `BodyView` snapshots so no solver type leaks into the scene.

use crate::rigid_body::{BodyDesc, BodyHandle, BodyView, Vec2};

pub trait PhysicsWorld {
    /// Insert a body and return its handle.
    fn add(&mut self, desc: BodyDesc) -> BodyHandle;

    /// Insert several bodies at once, handles in input order.
    fn add_all(&mut self, descs: Vec<BodyDesc>) -> Vec<BodyHandle> {
        descs.into_iter().map(|desc| self.add(desc)).collect()
    }

    /// Remove a body. Returns `false` if the handle is unknown.
    fn remove(&mut self, handle: BodyHandle) -> bool;

    /// Place a body at an absolute position.
    fn set_position(&mut self, handle: BodyHandle, pos: Vec2) -> bool;

    /// Apply a force at a world-space point for the next step.
    fn apply_force(&mut self, handle: BodyHandle, point: Vec2, force: Vec2) -> bool;

    fn position(&self, handle: BodyHandle) -> Option<Vec2> {
        self.body(handle).map(|b| b.pos)
    }

    fn body(&self, handle: BodyHandle) -> Option<BodyView<'_>>;

    /// Live bodies; order is stable between mutations.
    fn bodies(&self) -> Box<dyn Iterator<Item = BodyView<'_>> + '_>;

    fn body_count(&self) -> usize;

    /// Advance the simulation by one tick of `delta_ms`.
    fn step(&mut self, delta_ms: f32);

    /// Remove every body.
    fn clear(&mut self);
}
