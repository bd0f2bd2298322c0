// File: crates/hub-chart/src/lib.rs
// Summary: Core library entry point; exports surface scaling and chart rendering API.

pub mod chart;
pub mod layout;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{RenderOptions, SeasonChart};
pub use layout::{plot_points, Layout, PlotPoint};
pub use surface::ScaledSurface;
pub use text::group_thousands;
pub use theme::Theme;
pub use types::{DataPoint, SurfaceSpec};
