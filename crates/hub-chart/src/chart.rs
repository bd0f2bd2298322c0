// File: crates/hub-chart/src/chart.rs
// Summary: Season chart rendering pipeline: grid, axis, area fill, polyline, markers.

use anyhow::Result;
use skia_safe as skia;

use crate::layout::{plot_points, Layout, PlotPoint};
use crate::surface::ScaledSurface;
use crate::text::{group_thousands, LabelFont};
use crate::theme::Theme;
use crate::types::{DataPoint, SurfaceSpec, GRID_STEPS};

const LABEL_SIZE: f32 = 12.0;
const GRID_WIDTH: f32 = 1.0;
const AXIS_WIDTH: f32 = 1.5;
const LINE_WIDTH: f32 = 3.0;
const MARKER_RADIUS: f32 = 6.0;
const MARKER_OUTLINE_WIDTH: f32 = 2.0;
// Label offsets relative to the plot edges, in logical pixels.
const Y_LABEL_GAP: f32 = 10.0;
const Y_LABEL_DROP: f32 = 4.0;
const X_LABEL_DROP: f32 = 20.0;

pub struct RenderOptions {
    /// Number of horizontal grid intervals between the top row and the baseline.
    pub grid_steps: usize,
    /// Disable text layers; pixel tests use this to avoid font variance.
    pub draw_labels: bool,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            grid_steps: GRID_STEPS,
            draw_labels: true,
            theme: Theme::dark(),
        }
    }
}

/// Single-series area+line chart of per-category totals (one point per season).
pub struct SeasonChart {
    pub data: Vec<DataPoint>,
}

impl SeasonChart {
    pub fn new(data: Vec<DataPoint>) -> Self {
        Self { data }
    }

    /// Draw every layer onto a prepared surface, in logical coordinates.
    ///
    /// Layer order: clear, grid + Y labels, axis baseline, area fill,
    /// polyline, markers + category labels. An empty dataset still renders
    /// the grid and baseline; degenerate datasets never error.
    pub fn render(&self, surface: &mut ScaledSurface, opts: &RenderOptions) {
        let layout = Layout::compute(surface.logical_width(), surface.logical_height(), &self.data);
        let coords = plot_points(&self.data, &layout);
        let canvas = surface.canvas();

        canvas.clear(skia::Color::TRANSPARENT);
        draw_grid(canvas, &layout, opts);
        draw_baseline(canvas, &layout, &opts.theme);
        if !coords.is_empty() {
            draw_area(canvas, &layout, &coords, &opts.theme);
            draw_polyline(canvas, &coords, &opts.theme);
            draw_markers(canvas, &layout, &coords, opts);
        }
    }

    /// Render on a fresh surface for `spec` and return the raw RGBA buffer.
    pub fn render_to_rgba8(
        &self,
        spec: SurfaceSpec,
        opts: &RenderOptions,
    ) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = ScaledSurface::prepare(spec)?;
        self.render(&mut surface, opts);
        surface.to_rgba8()
    }

    /// Render on a fresh surface for `spec` and return PNG bytes.
    pub fn render_to_png_bytes(&self, spec: SurfaceSpec, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = ScaledSurface::prepare(spec)?;
        self.render(&mut surface, opts);
        surface.to_png_bytes()
    }

    /// Render and write a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        spec: SurfaceSpec,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(spec, opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

// ---- layers -----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn text_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(color);
    paint
}

/// Horizontal grid rows with right-aligned value labels, running from
/// `max_value` at the top row down to 0 at the baseline row.
fn draw_grid(canvas: &skia::Canvas, layout: &Layout, opts: &RenderOptions) {
    let steps = opts.grid_steps.max(1);
    let line = stroke_paint(opts.theme.grid, GRID_WIDTH);
    let text = text_paint(opts.theme.label);
    let font = LabelFont::new(LABEL_SIZE);

    let left = layout.padding as f32;
    let right = (layout.padding + layout.plot_width) as f32;
    for i in 0..=steps {
        let y = layout.grid_row_y(i, steps) as f32;
        canvas.draw_line((left, y), (right, y), &line);
        if opts.draw_labels {
            let label = group_thousands(layout.grid_row_value(i, steps));
            font.draw_right(canvas, &label, left - Y_LABEL_GAP, y + Y_LABEL_DROP, &text);
        }
    }
}

/// Zero-value reference line across the bottom of the plot area, heavier than
/// the grid rows.
fn draw_baseline(canvas: &skia::Canvas, layout: &Layout, theme: &Theme) {
    let paint = stroke_paint(theme.axis_line, AXIS_WIDTH);
    let y = layout.baseline_y() as f32;
    let left = layout.padding as f32;
    let right = (layout.padding + layout.plot_width) as f32;
    canvas.draw_line((left, y), (right, y), &paint);
}

/// Closed path from the baseline through every point and back, filled with a
/// top-to-bottom gradient from the translucent accent to near-transparent.
fn draw_area(canvas: &skia::Canvas, layout: &Layout, coords: &[PlotPoint], theme: &Theme) {
    let baseline = layout.baseline_y() as f32;
    let mut path = skia::Path::new();
    path.move_to((coords[0].x as f32, baseline));
    for pt in coords {
        path.line_to((pt.x as f32, pt.y as f32));
    }
    path.line_to((coords[coords.len() - 1].x as f32, baseline));
    path.close();

    let colors = [theme.area_top, theme.area_bottom];
    let shader = skia::gradient_shader::linear(
        (
            skia::Point::new(0.0, layout.padding as f32),
            skia::Point::new(0.0, baseline),
        ),
        skia::gradient_shader::GradientShaderColors::Colors(&colors),
        None,
        skia::TileMode::Clamp,
        None,
        None,
    );

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_shader(shader);
    canvas.draw_path(&path, &paint);
}

/// Open path connecting all points in order, stroked with the accent color.
fn draw_polyline(canvas: &skia::Canvas, coords: &[PlotPoint], theme: &Theme) {
    let mut path = skia::Path::new();
    path.move_to((coords[0].x as f32, coords[0].y as f32));
    for pt in &coords[1..] {
        path.line_to((pt.x as f32, pt.y as f32));
    }

    let mut stroke = stroke_paint(theme.accent, LINE_WIDTH);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_stroke_cap(skia::paint::Cap::Round);
    canvas.draw_path(&path, &stroke);
}

/// Filled-and-outlined circular markers with centered category labels below
/// the baseline.
fn draw_markers(canvas: &skia::Canvas, layout: &Layout, coords: &[PlotPoint], opts: &RenderOptions) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(opts.theme.accent);
    let outline = stroke_paint(opts.theme.marker_outline, MARKER_OUTLINE_WIDTH);

    let text = text_paint(opts.theme.label);
    let font = LabelFont::new(LABEL_SIZE);
    let label_y = layout.baseline_y() as f32 + X_LABEL_DROP;

    for pt in coords {
        let center = (pt.x as f32, pt.y as f32);
        canvas.draw_circle(center, MARKER_RADIUS, &fill);
        canvas.draw_circle(center, MARKER_RADIUS, &outline);
        if opts.draw_labels {
            font.draw_centered(canvas, pt.label, pt.x as f32, label_y, &text);
        }
    }
}
