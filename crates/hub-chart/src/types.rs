// File: crates/hub-chart/src/types.rs
// Summary: Shared chart types and constants (fallback sizes, layout paddings).

/// Fallback logical surface width when the host reports no layout size.
pub const FALLBACK_WIDTH: f64 = 900.0;
/// Fallback logical surface height when the host reports no layout size.
pub const FALLBACK_HEIGHT: f64 = 320.0;

/// Padding reserved on all four sides of the plot area for axis labels.
pub const PADDING: f64 = 50.0;
/// Number of horizontal grid intervals (the chart draws `GRID_STEPS + 1` rows).
pub const GRID_STEPS: usize = 5;

/// One category/value pair, e.g. a season and its run total.
/// Contract: `value >= 0`; dataset order is chronological and preserved
/// left-to-right when rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

/// Logical (CSS) size and pixel density of the target drawing surface.
/// Read-only input per render call; not owned by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSpec {
    pub logical_width: f64,
    pub logical_height: f64,
    pub pixel_ratio: f64,
}

impl SurfaceSpec {
    pub const fn new(logical_width: f64, logical_height: f64, pixel_ratio: f64) -> Self {
        Self { logical_width, logical_height, pixel_ratio }
    }

    /// Substitute documented fallbacks for unusable host-reported values:
    /// non-positive or non-finite sizes become 900x320, ratios below 1 become 1.
    pub fn sanitized(&self) -> Self {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        let w = if usable(self.logical_width) { self.logical_width } else { FALLBACK_WIDTH };
        let h = if usable(self.logical_height) { self.logical_height } else { FALLBACK_HEIGHT };
        let r = if self.pixel_ratio.is_finite() && self.pixel_ratio >= 1.0 { self.pixel_ratio } else { 1.0 };
        if (w, h, r) != (self.logical_width, self.logical_height, self.pixel_ratio) {
            tracing::debug!(
                logical_width = self.logical_width,
                logical_height = self.logical_height,
                pixel_ratio = self.pixel_ratio,
                "surface spec unusable, substituting fallbacks"
            );
        }
        Self::new(w, h, r)
    }

    /// Backing-buffer dimensions in device pixels: `round(logical * ratio)`.
    pub fn device_size(&self) -> (i32, i32) {
        let s = self.sanitized();
        (
            (s.logical_width * s.pixel_ratio).round() as i32,
            (s.logical_height * s.pixel_ratio).round() as i32,
        )
    }
}

impl Default for SurfaceSpec {
    fn default() -> Self {
        Self::new(FALLBACK_WIDTH, FALLBACK_HEIGHT, 1.0)
    }
}
