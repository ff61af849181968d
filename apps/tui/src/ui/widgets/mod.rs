pub mod cards;
pub mod popup;
pub mod radar;
pub mod tabs;

use ratatui::style::Color;
use skill_radar::radar::RadarPalette;

/// Foreground toned halfway into the background, for hints and borders.
pub fn muted(palette: &RadarPalette) -> Color {
    radar::to_color(palette.foreground.blend_over(palette.background, 0.5))
}
