//! Radar ("spider") chart rendering.
//!
//! [`render::render_radar`] projects the scores of one category onto polar
//! coordinates and issues drawing commands against a [`RenderSurface`].
//! Surfaces decide what a command means: [`RecordingSurface`] keeps them
//! for inspection, [`SvgSurface`] writes markup, and the terminal UI
//! rasterizes them onto a braille canvas.

pub mod geometry;
pub mod palette;
pub mod raster;
pub mod recorder;
pub mod render;
pub mod surface;
pub mod svg;

pub use geometry::RadarGeometry;
pub use palette::RadarPalette;
pub use recorder::{DrawCommand, RecordingSurface};
pub use render::render_radar;
pub use surface::{Point, RenderSurface, Rgb, Rgba, Stroke, TextStyle};
pub use svg::SvgSurface;
