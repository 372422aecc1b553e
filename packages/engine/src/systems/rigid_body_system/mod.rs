//! RigidBodySystem - `PhysicsWorld` over the rapier2d solver
//!
//! The scene is authored in canvas pixels and Matter-style units (gravity
//! and forces per ms², air friction per 60 Hz tick). This module converts
//! those into rapier's per-second world and keeps a handle table so scene
//! code never sees rapier types.

mod system;

pub use system::{RigidBodySystem, DEFAULT_GRAVITY_SCALE};
