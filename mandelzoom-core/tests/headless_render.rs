use mandelzoom_core::{
    Classification, Complex, CoordinateGrid, EscapeParams, SequenceConfig, SequenceSettings,
    Viewport,
};

/// Classify every point of a viewport into a flat row-major Vec.
fn render_grid(params: &EscapeParams, viewport: &Viewport) -> Vec<Classification> {
    CoordinateGrid::build(viewport)
        .points()
        .iter()
        .map(|&c| params.classify(c))
        .collect()
}

#[test]
fn headless_overview_render() {
    let params = EscapeParams::new(20, 100.0).unwrap();
    let viewport = Viewport::new(Complex::new(-0.75, 0.0), 1.0, 100, 67).unwrap();

    let results = render_grid(&params, &viewport);
    assert_eq!(results.len(), 100 * 67);

    let inside = results
        .iter()
        .filter(|&&r| r == Classification::InSet)
        .count();
    assert!(inside > 0, "should have some points in the set");
    assert!(inside < results.len(), "should have some diverged points");
}

#[test]
fn headless_render_is_deterministic() {
    let params = EscapeParams::new(20, 100.0).unwrap();
    let viewport = Viewport::new(Complex::new(-0.75, 0.0), 1.0, 100, 67).unwrap();

    let run1 = render_grid(&params, &viewport);
    let run2 = render_grid(&params, &viewport);
    assert_eq!(run1, run2, "identical inputs must classify identically");
}

#[test]
fn deeper_frames_stay_on_target() {
    let config = SequenceConfig::new(SequenceSettings {
        center_index: 0,
        frames: 30,
        width: 60,
        ..SequenceSettings::default()
    })
    .unwrap();

    let shallow = config.frame(0).unwrap().viewport;
    let deep = config.frame(29).unwrap().viewport;
    assert!(deep.step_re() < shallow.step_re());

    // The middle pixel samples the (conjugated) center at every depth.
    for vp in [shallow, deep] {
        let mid = vp.pixel_to_complex(vp.width / 2, vp.height / 2);
        assert!((mid.re - (-0.75)).abs() < 1e-12);
        assert!(mid.im.abs() < 1e-12);
    }
}
