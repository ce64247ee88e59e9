#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// Layer records
// =============================================================

#[test]
fn layer_records_parse_four_columns() {
    let records = parse_layer_records("0 2 0 208.308\n1.819 2.1 0 250\n");
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0],
        DepthRecord { depth: 0.0, density: 2.0, ignore: 0.0, velocity: 208.308, description: String::new() }
    );
    assert_eq!(records[1].depth, 1.819);
    assert_eq!(records[1].density, 2.1);
    assert_eq!(records[1].velocity, 250.0);
}

#[test]
fn layer_records_accept_tabs_commas_and_extra_columns() {
    let records = parse_layer_records("1\t2\t3\t4\n5, 6, 7, 8, 9\n");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].velocity, 4.0);
    assert_eq!(records[1].velocity, 8.0);
}

#[test]
fn layer_records_keep_trailing_description() {
    let records = parse_layer_records("0 2 0 150 top soil\n5 2.1 1 300\tweathered,  shale\n10 2.3 0 600\n");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].description, "top soil");
    assert_eq!(records[1].ignore, 1.0);
    assert_eq!(records[1].description, "weathered shale");
    assert!(records[2].description.is_empty());
    // Descriptions never affect pairing.
    let layers = parse_layer_file("0 2 0 150 top soil\n5 2.1 1 300 base\n");
    assert_eq!(layers, vec![Layer::new(0.0, 5.0, 150.0)]);
}

#[test]
fn layer_records_drop_short_and_non_numeric_lines() {
    let text = "depth density ignore velocity\n0 2 0\n\n  \n1 2 x 4\n3 2 0 100\nNaN 1 1 1\n";
    let records = parse_layer_records(text);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].depth, 3.0);
}

// =============================================================
// Layer pairing
// =============================================================

#[test]
fn layer_file_pairs_consecutive_records() {
    let layers = parse_layer_file("0 2 0 208.308\n1.819 2 0 208.308\n");
    assert_eq!(layers, vec![Layer::new(0.0, 1.819, 208.308)]);
}

#[test]
fn layer_file_pairs_after_filtering() {
    let text = "# header\n0 2 0 150\ngarbage\n5 2 0 150\n5 2 0 300\n12 2 0 300\n";
    let layers = parse_layer_file(text);
    assert_eq!(layers, vec![Layer::new(0.0, 5.0, 150.0), Layer::new(5.0, 12.0, 300.0)]);
}

#[test]
fn layer_file_uses_top_record_velocity() {
    let layers = parse_layer_file("0 2 0 100\n4 2 0 999\n");
    assert_eq!(layers[0].velocity, 100.0);
}

#[test]
fn layer_file_drops_trailing_unpaired_record() {
    let layers = parse_layer_file("0 2 0 100\n4 2 0 100\n4 2 0 200\n");
    assert_eq!(layers.len(), 1);
}

#[test]
fn layer_file_drops_inverted_pairs() {
    let layers = parse_layer_file("5 2 0 100\n1 2 0 100\n1 2 0 200\n3 2 0 200\n");
    assert_eq!(layers, vec![Layer::new(1.0, 3.0, 200.0)]);
}

#[test]
fn layer_file_empty_text() {
    assert!(parse_layer_file("").is_empty());
}

// =============================================================
// Scatter
// =============================================================

#[test]
fn scatter_file_maps_velocity_to_y_and_period_to_x() {
    let points = parse_scatter_file("250.5, 0.8\n300,1.2\n");
    assert_eq!(points, vec![ScatterPoint::new(0.8, 250.5), ScatterPoint::new(1.2, 300.0)]);
}

#[test]
fn scatter_file_drops_nan_lines() {
    let points = parse_scatter_file("velocity,period\n100,abc\n,\n200\n150, 2.5\nNaN, 1\n");
    assert_eq!(points, vec![ScatterPoint::new(2.5, 150.0)]);
}

// =============================================================
// Limit suggestions
// =============================================================

#[test]
fn suggest_limits_pads_ten_percent() {
    let l = suggest_limits([100.0, 200.0], [0.0, 10.0], 0.1).unwrap();
    assert!(approx_eq(l.xmin, 90.0));
    assert!(approx_eq(l.xmax, 210.0));
    assert!(approx_eq(l.ymin, -1.0));
    assert!(approx_eq(l.ymax, 11.0));
}

#[test]
fn suggest_limits_empty_is_none() {
    assert!(suggest_limits(Vec::<f64>::new(), [1.0], 0.1).is_none());
    assert!(suggest_limits([1.0], Vec::<f64>::new(), 0.1).is_none());
}

#[test]
fn suggest_limits_single_value_stays_valid() {
    let l = suggest_limits([200.0], [0.0], 0.1).unwrap();
    assert!(approx_eq(l.xmin, 180.0));
    assert!(approx_eq(l.xmax, 220.0));
    assert!(approx_eq(l.ymin, -1.0));
    assert!(approx_eq(l.ymax, 1.0));
    assert!(l.validate().is_ok());
}

#[test]
fn suggest_limits_zero_padding_single_value_stays_valid() {
    let l = suggest_limits([5.0], [5.0], 0.0).unwrap();
    assert!(l.validate().is_ok());
}

#[test]
fn suggest_limits_skips_non_finite() {
    let l = suggest_limits([f64::NAN, 1.0, 3.0], [f64::INFINITY, 0.0, 1.0], 0.0).unwrap();
    assert_eq!(l.xmin, 1.0);
    assert_eq!(l.xmax, 3.0);
}

#[test]
fn layer_limits_cover_velocity_and_full_depth() {
    let layers = vec![Layer::new(0.0, 5.0, 150.0), Layer::new(5.0, 12.0, 300.0)];
    let l = layer_limits(&layers, 0.0).unwrap();
    assert_eq!((l.xmin, l.xmax), (150.0, 300.0));
    assert_eq!((l.ymin, l.ymax), (0.0, 12.0));
}

#[test]
fn scatter_limits_cover_period_and_velocity() {
    let points = vec![ScatterPoint::new(0.5, 100.0), ScatterPoint::new(2.0, 400.0)];
    let l = scatter_limits(&points, 0.0).unwrap();
    assert_eq!((l.xmin, l.xmax), (0.5, 2.0));
    assert_eq!((l.ymin, l.ymax), (100.0, 400.0));
}
