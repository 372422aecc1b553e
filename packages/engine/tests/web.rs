//! Browser-hosted checks of the JS surface. Run with `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use boba_engine::Scene;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn scene_steps_in_the_browser() {
    let mut scene = Scene::new(800.0, 600.0);
    scene.start();
    for _ in 0..10 {
        scene.step();
    }
    assert!(scene.particle_count() >= 10);
    assert!(scene.body_count() >= 14);
}

#[wasm_bindgen_test]
fn malformed_config_becomes_a_js_error() {
    let err = Scene::with_config(800.0, 600.0, "{".to_string()).err();
    let message = err.and_then(|e| e.as_string()).unwrap_or_default();
    assert!(message.contains("JSON"), "got {message:?}");
}
