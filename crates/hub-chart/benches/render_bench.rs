// File: crates/hub-chart/benches/render_bench.rs
// Summary: Criterion benches for layout math and full PNG rendering.

use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hub_chart::{plot_points, DataPoint, Layout, RenderOptions, SeasonChart, SurfaceSpec};

fn build_data(n: usize) -> Vec<DataPoint> {
    (0..n)
        .map(|i| {
            let value = 2000.0 + (i as f64 * 0.35).sin() * 800.0 + i as f64;
            DataPoint::new(format!("s{i}"), value.max(0.0))
        })
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let data = build_data(64);
    c.bench_function("layout_compute_64", |b| {
        b.iter(|| {
            let layout = Layout::compute(900.0, 320.0, &data);
            black_box(plot_points(&data, &layout));
        });
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[6usize, 64usize] {
        group.bench_function(format!("seasons_{n}"), |b| {
            let chart = SeasonChart::new(build_data(n));
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            let spec = SurfaceSpec::new(900.0, 320.0, 2.0);
            b.iter(|| -> Result<()> {
                let bytes = chart.render_to_png_bytes(spec, &opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_render);
criterion_main!(benches);
