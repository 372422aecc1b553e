//! Systems: physics backend, particle lifecycle, cup, drag, viewport

pub mod physics_world;
pub mod rigid_body;
pub mod rigid_body_system;

pub mod container;
pub mod drag;
pub mod lifecycle;
pub mod viewport;
