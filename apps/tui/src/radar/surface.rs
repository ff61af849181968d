use serde::Serialize;

/// Position in surface pixels. The origin is the top-left corner and `y`
/// grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `distance` from `self` along `angle` (radians, clockwise on
    /// screen because `y` points down).
    pub fn offset_polar(self, angle: f64, distance: f64) -> Self {
        Self {
            x: angle.cos().mul_add(distance, self.x),
            y: angle.sin().mul_add(distance, self.y),
        }
    }

    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `"r,g,b"` with each channel in 0..=255.
    pub fn parse(value: &str) -> Option<Self> {
        let mut channels = value.split(',').map(|part| part.trim().parse::<u8>());
        let r = channels.next()?.ok()?;
        let g = channels.next()?.ok()?;
        let b = channels.next()?.ok()?;
        if channels.next().is_some() {
            return None;
        }
        Some(Self { r, g, b })
    }

    pub const fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba { rgb: self, alpha }
    }

    /// Composites `self` at `alpha` over `background`.
    pub fn blend_over(self, background: Self, alpha: f64) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| {
            let value = f64::from(fg).mul_add(alpha, f64::from(bg) * (1.0 - alpha));
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let channel = value.round().clamp(0.0, 255.0) as u8;
            channel
        };
        Self {
            r: mix(self.r, background.r),
            g: mix(self.g, background.g),
            b: mix(self.b, background.b),
        }
    }
}

/// Color with opacity in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    pub color: Rgba,
    pub size_px: f64,
}

/// A 2D drawing target with a fixed pixel size.
///
/// Commands are stateless; nothing drawn is retained by the renderer, so a
/// new frame always starts with [`RenderSurface::clear`].
pub trait RenderSurface {
    /// Pixel size of the surface, or `None` while it is not attached.
    fn size(&self) -> Option<(u32, u32)>;

    /// Erases everything drawn so far.
    fn clear(&mut self);

    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: Stroke);

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke);

    /// Closed polygon outline; the last point connects back to the first.
    fn stroke_polygon(&mut self, points: &[Point], stroke: Stroke);

    fn fill_polygon(&mut self, points: &[Point], color: Rgba);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);

    /// Draws `text` centered horizontally and vertically on `anchor`.
    fn fill_text(&mut self, text: &str, anchor: Point, style: TextStyle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn offset_polar_moves_clockwise_on_screen() {
        let center = Point::new(100.0, 100.0);

        let east = center.offset_polar(0.0, 10.0);
        assert!((east.x - 110.0).abs() < 1e-9 && (east.y - 100.0).abs() < 1e-9);

        // Quarter turn lands below the center because y grows downwards.
        let south = center.offset_polar(FRAC_PI_2, 10.0);
        assert!((south.x - 100.0).abs() < 1e-9 && (south.y - 110.0).abs() < 1e-9);

        let west = center.offset_polar(PI, 10.0);
        assert!((west.x - 90.0).abs() < 1e-9);
    }

    #[test]
    fn rgb_parse_accepts_three_channels_only() {
        assert_eq!(Rgb::parse("56, 189,248"), Some(Rgb::new(56, 189, 248)));
        assert_eq!(Rgb::parse("1,2"), None);
        assert_eq!(Rgb::parse("1,2,3,4"), None);
        assert_eq!(Rgb::parse("256,0,0"), None);
        assert_eq!(Rgb::parse("red"), None);
    }

    #[test]
    fn blend_over_interpolates_channels() {
        let white = Rgb::new(255, 255, 255);
        let black = Rgb::new(0, 0, 0);

        assert_eq!(white.blend_over(black, 1.0), white);
        assert_eq!(white.blend_over(black, 0.0), black);
        assert_eq!(white.blend_over(black, 0.2), Rgb::new(51, 51, 51));
        assert_eq!(white.blend_over(black, 3.0), white);
    }
}
