// File: crates/hub-chart/src/text.rs
// Summary: Label drawing helpers (alignment via measured width) and number grouping.

use skia_safe as skia;

/// Thin wrapper over a Skia font providing the three label alignments the
/// chart needs. Skia's `draw_str` is left-anchored; right/center alignment is
/// done by offsetting with the measured advance.
pub struct LabelFont {
    font: skia::Font,
}

impl LabelFont {
    pub fn new(size: f32) -> Self {
        let mut font = skia::Font::default();
        font.set_size(size.max(1.0));
        Self { font }
    }

    pub fn width(&self, text: &str) -> f32 {
        self.font.measure_str(text, None).0
    }

    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, paint: &skia::Paint) {
        canvas.draw_str(text, (x, y), &self.font, paint);
    }

    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, paint: &skia::Paint) {
        canvas.draw_str(text, (x - self.width(text), y), &self.font, paint);
    }

    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, paint: &skia::Paint) {
        canvas.draw_str(text, (x - self.width(text) * 0.5, y), &self.font, paint);
    }
}

/// Format an integer with comma digit grouping ("2735" -> "2,735").
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    let bytes = digits.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}
