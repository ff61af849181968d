use super::surface::{Point, RenderSurface, Rgb, Rgba, Stroke, TextStyle};
use std::fmt::Write as _;

/// Surface that builds a standalone SVG document.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    background: Rgb,
    body: String,
}

impl SvgSurface {
    pub const fn new(width: u32, height: u32, background: Rgb) -> Self {
        Self {
            width,
            height,
            background,
            body: String::new(),
        }
    }

    pub fn finish(self) -> String {
        let (width, height) = (self.width, self.height);
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">{}</svg>",
            self.body
        )
    }
}

fn rgb(color: Rgb) -> String {
    format!("rgb({},{},{})", color.r, color.g, color.b)
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|point| format!("{:.2},{:.2}", point.x, point.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

impl RenderSurface for SvgSurface {
    fn size(&self) -> Option<(u32, u32)> {
        Some((self.width, self.height))
    }

    fn clear(&mut self) {
        self.body.clear();
        let _ = write!(
            self.body,
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            rgb(self.background)
        );
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: Stroke) {
        let _ = write!(
            self.body,
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{radius:.2}\" fill=\"none\" stroke=\"{}\" stroke-opacity=\"{}\" stroke-width=\"{}\"/>",
            center.x,
            center.y,
            rgb(stroke.color.rgb),
            stroke.color.alpha,
            stroke.width
        );
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        let _ = write!(
            self.body,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-opacity=\"{}\" stroke-width=\"{}\"/>",
            from.x,
            from.y,
            to.x,
            to.y,
            rgb(stroke.color.rgb),
            stroke.color.alpha,
            stroke.width
        );
    }

    fn stroke_polygon(&mut self, points: &[Point], stroke: Stroke) {
        let _ = write!(
            self.body,
            "<polygon points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-opacity=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"round\"/>",
            points_attr(points),
            rgb(stroke.color.rgb),
            stroke.color.alpha,
            stroke.width
        );
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba) {
        let _ = write!(
            self.body,
            "<polygon points=\"{}\" fill=\"{}\" fill-opacity=\"{}\"/>",
            points_attr(points),
            rgb(color.rgb),
            color.alpha
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        let _ = write!(
            self.body,
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{radius:.2}\" fill=\"{}\" fill-opacity=\"{}\"/>",
            center.x,
            center.y,
            rgb(color.rgb),
            color.alpha
        );
    }

    fn fill_text(&mut self, text: &str, anchor: Point, style: TextStyle) {
        let _ = write!(
            self.body,
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"middle\" font-family=\"sans-serif\" font-size=\"{}\" fill=\"{}\" fill-opacity=\"{}\">{}</text>",
            anchor.x,
            anchor.y,
            style.size_px,
            rgb(style.color.rgb),
            style.color.alpha,
            escape_xml(text)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SkillEntry;
    use crate::radar::{render_radar, RadarPalette};

    #[test]
    fn renders_a_complete_document() {
        let entries: Vec<SkillEntry> = [("React.js", 90), ("Next.js", 85)]
            .iter()
            .filter_map(|(label, score)| SkillEntry::new(*label, *score, "*").ok())
            .collect();
        let mut surface = SvgSurface::new(800, 600, RadarPalette::DARK.background);
        render_radar(&entries, &mut surface, &RadarPalette::DARK);
        let svg = surface.finish();

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"800\""));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("<circle cx=\"400.00\" cy=\"300.00\" r=\"200.00\""));
        assert!(svg.contains("<polygon points=\"580.00,300.00 230.00,300.00\""));
        assert!(svg.contains(">React.js</text>"));
        assert_eq!(svg.matches("<line ").count(), 2);
        assert_eq!(svg.matches("<rect ").count(), 1);
    }

    #[test]
    fn clear_restarts_the_body() {
        let mut surface = SvgSurface::new(10, 10, Rgb::new(0, 0, 0));
        surface.fill_circle(Point::new(1.0, 1.0), 1.0, Rgb::new(9, 9, 9).with_alpha(1.0));
        surface.clear();

        let svg = surface.finish();
        assert!(!svg.contains("<circle"));
        assert!(svg.contains("fill=\"rgb(0,0,0)\""));
    }

    #[test]
    fn labels_are_escaped() {
        assert_eq!(escape_xml("R&D <ops>"), "R&amp;D &lt;ops&gt;");
        assert_eq!(escape_xml("\"it's\""), "&quot;it&apos;s&quot;");
    }
}
