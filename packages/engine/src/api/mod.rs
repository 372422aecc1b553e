//! Public API: the JS-facing scene handle and the browser page driver

pub mod wasm;

#[cfg(target_arch = "wasm32")]
pub mod browser;
