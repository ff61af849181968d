use super::geometry::RadarGeometry;
use super::palette::RadarPalette;
use super::surface::{RenderSurface, Stroke, TextStyle};
use crate::domain::SkillEntry;

const OUTLINE_ALPHA: f64 = 0.1;
const SPOKE_ALPHA: f64 = 0.2;
const GRID_ALPHA: f64 = 0.1;
const POLYGON_FILL_ALPHA: f64 = 0.1;
const POLYGON_STROKE_ALPHA: f64 = 0.6;
const POLYGON_STROKE_WIDTH: f64 = 2.0;
const MARKER_RADIUS: f64 = 4.0;
const LABEL_SIZE_PX: f64 = 12.0;

/// Redraws the radar chart for `entries` onto `surface`.
///
/// The surface is cleared first, so repeated calls never accumulate paint.
/// Nothing happens while the surface is detached or has a zero dimension.
/// With no entries only the outline and grid rings are drawn.
pub fn render_radar<S>(entries: &[SkillEntry], surface: &mut S, palette: &RadarPalette)
where
    S: RenderSurface + ?Sized,
{
    let Some((width, height)) = surface.size() else {
        tracing::trace!("radar surface not attached, skipping render");
        return;
    };

    let scores: Vec<u8> = entries.iter().map(SkillEntry::score).collect();
    let Some(geometry) = RadarGeometry::compute(&scores, width, height) else {
        tracing::trace!(width, height, "radar surface has no area, skipping render");
        return;
    };

    surface.clear();

    let primary = palette.primary;
    let thin = |alpha| Stroke {
        color: primary.with_alpha(alpha),
        width: 1.0,
    };

    surface.stroke_circle(geometry.center, geometry.radius, thin(OUTLINE_ALPHA));

    for axis in &geometry.axes {
        surface.stroke_line(geometry.center, axis.spoke_end, thin(SPOKE_ALPHA));
    }

    for ring_radius in geometry.grid_radii() {
        surface.stroke_circle(geometry.center, ring_radius, thin(GRID_ALPHA));
    }

    if geometry.axes.is_empty() {
        return;
    }

    let polygon = geometry.score_points();
    surface.fill_polygon(&polygon, primary.with_alpha(POLYGON_FILL_ALPHA));
    surface.stroke_polygon(
        &polygon,
        Stroke {
            color: primary.with_alpha(POLYGON_STROKE_ALPHA),
            width: POLYGON_STROKE_WIDTH,
        },
    );

    let label_style = TextStyle {
        color: palette.foreground.with_alpha(1.0),
        size_px: LABEL_SIZE_PX,
    };
    for (axis, entry) in geometry.axes.iter().zip(entries) {
        surface.fill_circle(axis.score_point, MARKER_RADIUS, primary.with_alpha(1.0));
        surface.fill_text(entry.label(), axis.label_anchor, label_style);
    }
}
