use stock_dashboard_wasm::domain::chart::{RadarGeometry, AXES};

const EPSILON: f64 = 1e-9;

#[test]
fn valuation_vertex_sits_on_the_top_axis() {
    // Score 75 on axis 0 (−90°): straight up, 0.75 · R from center
    let geometry = RadarGeometry::default();
    let center = geometry.center();
    let vertex = geometry.vertex(0, 75.0);

    assert!((vertex.x - center.x).abs() < EPSILON);
    assert!((vertex.y - (center.y - 0.75 * geometry.radius)).abs() < EPSILON);
}

#[test]
fn axes_are_spaced_72_degrees_apart() {
    let geometry = RadarGeometry::default();
    let center = geometry.center();

    for axis in 0..AXES {
        let vertex = geometry.vertex(axis, 100.0);
        let angle = (vertex.y - center.y).atan2(vertex.x - center.x);
        let expected = axis as f64 * 72.0_f64.to_radians() - 90.0_f64.to_radians();
        // atan2 wraps to (−π, π]; compare on the unit circle
        assert!((angle.sin() - expected.sin()).abs() < EPSILON);
        assert!((angle.cos() - expected.cos()).abs() < EPSILON);
    }
}

#[test]
fn vertex_distance_scales_with_score() {
    let geometry = RadarGeometry::default();
    let center = geometry.center();

    for (score, fraction) in [(0.0, 0.0), (50.0, 0.5), (88.0, 0.88), (100.0, 1.0)] {
        let vertex = geometry.vertex(1, score);
        let distance = ((vertex.x - center.x).powi(2) + (vertex.y - center.y).powi(2)).sqrt();
        assert!((distance - fraction * geometry.radius).abs() < EPSILON);
    }
}

#[test]
fn out_of_range_scores_are_not_clamped() {
    let geometry = RadarGeometry::default();
    let center = geometry.center();

    let vertex = geometry.vertex(0, 150.0);
    let distance = (center.y - vertex.y).abs();
    assert!((distance - 1.5 * geometry.radius).abs() < EPSILON);
    // 1.5 · 140 = 210 puts the vertex above the drawing area
    assert!(vertex.y < 0.0);
}

#[test]
fn grid_rings_step_in_fifths() {
    let geometry = RadarGeometry::default();

    for (level, (radius, value)) in
        [(28.0, 20.0), (56.0, 40.0), (84.0, 60.0), (112.0, 80.0), (140.0, 100.0)]
            .into_iter()
            .enumerate()
    {
        assert!((geometry.ring_radius(level) - radius).abs() < EPSILON);
        assert!((geometry.ring_value(level) - value).abs() < EPSILON);
    }
}

#[test]
fn labels_anchor_away_from_their_side() {
    let geometry = RadarGeometry::default();
    let anchors: Vec<&str> = (0..AXES).map(|axis| geometry.label_anchor(axis)).collect();
    assert_eq!(anchors, vec!["start", "start", "start", "end", "end"]);
}

#[test]
fn polygon_closes_over_all_five_axes() {
    let geometry = RadarGeometry::default();
    let polygon = geometry.polygon_points(&[75.0, 88.0, 82.0, 79.0, 0.0]);

    let pairs: Vec<&str> = polygon.split(' ').collect();
    assert_eq!(pairs.len(), AXES);
    // The zero score collapses onto the center
    let center = geometry.center();
    assert_eq!(pairs[4], format!("{},{}", center.x, center.y));
}
