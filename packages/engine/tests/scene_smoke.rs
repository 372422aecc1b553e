use boba_engine::Scene;

#[test]
fn scene_smoke_step() {
    let mut scene = Scene::new(800.0, 600.0);
    scene.set_stochastic_enabled(false);
    scene.start();
    assert!(scene.is_running());

    for _ in 0..10 {
        assert!(scene.step());
    }
    assert_eq!(scene.particle_count(), 10);
    assert_eq!(scene.frame(), 10);
    assert_eq!(scene.body_count(), 14);
    assert_eq!(scene.render_buffer_len(), 14 * scene.render_stride());
}

#[test]
fn scene_perf_smoke() {
    let mut scene = Scene::new(800.0, 600.0);
    scene.enable_perf_metrics(true);
    scene.start();
    scene.step();
    let stats = scene.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.spawned() >= 1);
}

#[test]
fn scene_drag_and_overlay() {
    let mut scene = Scene::new(800.0, 600.0);
    scene.start();
    assert_eq!((scene.cup_x(), scene.cup_y()), (400.0, 480.0));
    assert_eq!(scene.overlay_transform_css(), "translate(0px, 180px)");

    scene.pointer_down(100.0, 120.0, 0);
    scene.step();
    assert!(scene.is_dragging());
    assert_eq!((scene.cup_x(), scene.cup_y()), (100.0, 120.0));
    assert_eq!((scene.overlay_x(), scene.overlay_y()), (-300.0, -180.0));

    // Released mid-drag: no button held
    scene.pointer_move(200.0, 200.0, -1);
    scene.step();
    assert_eq!(scene.cup_x(), 100.0);

    scene.end_drag();
    scene.step();
    assert!(!scene.is_dragging());
}

#[test]
fn scene_resize_switches_filter() {
    let mut scene = Scene::new(1024.0, 768.0);
    scene.start();
    assert_eq!(scene.filter_profile(), 1);
    assert_eq!(scene.filter_blur(), 10.0);

    scene.resize(400.0, 700.0);
    assert_eq!(scene.filter_profile(), 0);
    assert_eq!(scene.filter_blur(), 6.0);
    assert_eq!(scene.filter_color_matrix(), "1 0 0 0 0  0 1 0 0 0  0 0 1 0 0  0 0 0 18 -7");
    assert_eq!((scene.width(), scene.height()), (400.0, 700.0));
    assert_eq!((scene.cup_x(), scene.cup_y()), (200.0, 560.0));
}

#[test]
fn scene_dispose_and_restart() {
    let mut scene = Scene::new(800.0, 600.0);
    scene.start();
    scene.step();
    scene.dispose();
    assert!(!scene.is_running());
    assert_eq!(scene.body_count(), 0);
    assert!(!scene.step());

    scene.start();
    assert!(scene.step());
    assert!(scene.particle_count() >= 1);
}
