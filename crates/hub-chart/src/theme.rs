// File: crates/hub-chart/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub label: skia::Color,
    pub accent: skia::Color,
    pub marker_outline: skia::Color,
    pub area_top: skia::Color,
    pub area_bottom: skia::Color,
}

impl Theme {
    /// Default palette for a dark page background: faint white grid/axis lines,
    /// a yellow accent, and a translucent area gradient fading downward.
    pub fn dark() -> Self {
        Self {
            name: "dark",
            grid: skia::Color::from_argb(10, 255, 255, 255),
            axis_line: skia::Color::from_argb(31, 255, 255, 255),
            label: skia::Color::from_argb(242, 230, 230, 230),
            accent: skia::Color::from_argb(255, 0xff, 0xd6, 0x00),
            marker_outline: skia::Color::from_argb(255, 0x0f, 0x0f, 0x0f),
            area_top: skia::Color::from_argb(41, 0xff, 0xd6, 0x00),
            area_bottom: skia::Color::from_argb(5, 0xff, 0xd6, 0x00),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            grid: skia::Color::from_argb(18, 0, 0, 0),
            axis_line: skia::Color::from_argb(46, 0, 0, 0),
            label: skia::Color::from_argb(230, 40, 40, 50),
            accent: skia::Color::from_argb(255, 0xc7, 0x95, 0x00),
            marker_outline: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            area_top: skia::Color::from_argb(48, 0xc7, 0x95, 0x00),
            area_bottom: skia::Color::from_argb(6, 0xc7, 0x95, 0x00),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
