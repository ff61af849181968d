use super::surface::Rgb;
use crate::domain::Theme;

/// Colors the radar is drawn with.
///
/// `primary` drives every chart stroke and fill at varying opacity,
/// `foreground` is used for labels, and `background` is what translucent
/// paint is composited over on surfaces without alpha support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadarPalette {
    pub primary: Rgb,
    pub foreground: Rgb,
    pub background: Rgb,
}

impl RadarPalette {
    pub const DARK: Self = Self {
        primary: Rgb::new(56, 189, 248),
        foreground: Rgb::new(241, 245, 249),
        background: Rgb::new(15, 23, 42),
    };

    pub const LIGHT: Self = Self {
        primary: Rgb::new(37, 99, 235),
        foreground: Rgb::new(15, 23, 42),
        background: Rgb::new(248, 250, 252),
    };

    pub fn for_theme(theme: Theme, primary_override: Option<Rgb>) -> Self {
        let base = match theme {
            Theme::Dark => Self::DARK,
            Theme::Light => Self::LIGHT,
        };
        Self {
            primary: primary_override.unwrap_or(base.primary),
            ..base
        }
    }
}

impl Default for RadarPalette {
    fn default() -> Self {
        Self::DARK
    }
}
