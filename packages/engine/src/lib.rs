//! Boba Engine - falling boba pearls and a draggable cup, in WASM
//!
//! Architecture:
//! - core/       - logging macros, random source
//! - domain/     - scene config, body templates
//! - systems/    - physics seam + backend, lifecycle, cup, drag, viewport
//! - simulation/ - the scene context and its tick
//! - api/        - JS facade and the browser page driver

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

// Compatibility re-exports (short paths used across the crate)
pub use systems::container;
pub use systems::drag;
pub use systems::lifecycle;
pub use systems::physics_world;
pub use systems::rigid_body;
pub use systems::rigid_body_system;
pub use systems::viewport;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Boba engine initialized");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::{PerfStats, Scene};
pub use domain::{ConfigError, SceneConfig};
pub use simulation::{InputEvent, Simulation, SimulationState};
