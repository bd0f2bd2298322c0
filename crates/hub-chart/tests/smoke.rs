// File: crates/hub-chart/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use hub_chart::{DataPoint, RenderOptions, SeasonChart, SurfaceSpec};

#[test]
fn render_smoke_png() {
    let chart = SeasonChart::new(vec![
        DataPoint::new("2021", 2650.0),
        DataPoint::new("2022", 2385.0),
        DataPoint::new("2023", 2732.0),
    ]);

    let spec = SurfaceSpec::default();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    chart.render_to_png(spec, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify the in-memory API and that the bytes decode as an image
    // of the expected device size.
    let bytes = chart.render_to_png_bytes(spec, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (900, 320));
}
