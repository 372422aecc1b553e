use wasm_bindgen::prelude::*;

use crate::domain::config::SceneConfig;
use crate::physics_world::PhysicsWorld;

use super::perf_stats::PerfStats;
use super::{Simulation, RENDER_STRIDE};

/// JS handle to a boba scene
#[wasm_bindgen]
pub struct Scene {
    core: Simulation,
}

impl Scene {
    pub fn core(&self) -> &Simulation {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut Simulation {
        &mut self.core
    }
}

#[wasm_bindgen]
impl Scene {
    /// Create a scene with the stock configuration
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            core: Simulation::create(width, height),
        }
    }

    /// Create a scene from a JSON config; missing fields keep defaults
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(width: f32, height: f32, json: String) -> Result<Scene, JsValue> {
        let config = SceneConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            core: Simulation::create_with_config(width, height, config),
        })
    }

    pub fn get_config_json(&self) -> String {
        self.core.config().to_json()
    }

    // === LIFECYCLE ===

    pub fn start(&mut self) {
        self.core.start();
    }

    pub fn stop(&mut self) {
        self.core.stop();
    }

    pub fn dispose(&mut self) {
        self.core.dispose();
    }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool {
        self.core.is_running()
    }

    /// Advance one tick
    pub fn step(&mut self) -> bool {
        self.core.step()
    }

    // === INPUT ===

    pub fn pointer_down(&mut self, x: f32, y: f32, button: i16) {
        self.core.pointer_down(x, y, button);
    }

    /// `button` < 0 means no button held
    pub fn pointer_move(&mut self, x: f32, y: f32, button: i16) {
        let button = (button >= 0).then_some(button);
        self.core.pointer_move(x, y, button);
    }

    pub fn end_drag(&mut self) {
        self.core.end_drag();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.core.resize(width, height);
    }

    // === STATE ===

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 {
        self.core.particle_count() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 {
        self.core.world().body_count() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool {
        self.core.drag().is_dragging()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 {
        self.core.viewport().width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 {
        self.core.viewport().height()
    }

    /// Cup center x (snap point before `start()`)
    #[wasm_bindgen(getter)]
    pub fn cup_x(&self) -> f32 {
        self.core.cup().map(|c| c.center().x).unwrap_or_else(|| self.core.cup_snap_point().x)
    }

    #[wasm_bindgen(getter)]
    pub fn cup_y(&self) -> f32 {
        self.core.cup().map(|c| c.center().y).unwrap_or_else(|| self.core.cup_snap_point().y)
    }

    #[wasm_bindgen(getter)]
    pub fn overlay_x(&self) -> f32 {
        self.core.cup().map(|c| c.overlay_transform().x).unwrap_or(0.0)
    }

    #[wasm_bindgen(getter)]
    pub fn overlay_y(&self) -> f32 {
        self.core.cup().map(|c| c.overlay_transform().y).unwrap_or(0.0)
    }

    /// CSS `transform` value for the overlay element
    pub fn overlay_transform_css(&self) -> String {
        self.core
            .cup()
            .map(|c| c.overlay_transform().css())
            .unwrap_or_default()
    }

    // === FILTER ===

    #[wasm_bindgen(getter)]
    pub fn filter_profile(&self) -> u32 {
        self.core.filter_profile() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn filter_blur(&self) -> f32 {
        self.core.filter().blur_std_dev
    }

    pub fn filter_color_matrix(&self) -> String {
        self.core.filter().color_matrix_values()
    }

    // === SETTINGS ===

    pub fn set_stochastic_enabled(&mut self, enabled: bool) {
        self.core.set_stochastic_enabled(enabled);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === RENDER BUFFER ===

    /// Pointer to the body buffer (for JS rendering)
    pub fn render_buffer_ptr(&self) -> *const f32 {
        self.core.render_buffer().as_ptr()
    }

    /// Length of the body buffer in floats
    pub fn render_buffer_len(&self) -> usize {
        self.core.render_buffer().len()
    }

    pub fn render_stride(&self) -> usize {
        RENDER_STRIDE
    }
}
