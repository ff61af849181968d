use crate::app::App;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line as TextLine;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;
use skill_radar::radar::raster::{disk_pixels, polygon_pixels};
use skill_radar::radar::{
    render_radar, Point, RadarPalette, RenderSurface, Rgb, Rgba, Stroke, TextStyle,
};

/// Smallest virtual surface side, in pixels, so the fixed label offset
/// still leaves room for the labels on small terminals.
const MIN_VIRTUAL_SIDE: f64 = 360.0;

pub const fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Canvas shape queued until the layers are painted.
enum CanvasOp {
    Circle(Circle),
    Line(CanvasLine),
    Points(Vec<(f64, f64)>, Color),
}

/// [`RenderSurface`] over a braille canvas.
///
/// Every cell is 2×4 dots. The surface exposes `scale` virtual pixels per
/// dot, screen `y` is flipped into canvas `y`, and translucent paint is
/// composited over the palette background.
///
/// Translucent fills go to a block layer that only sets cell backgrounds.
/// Strokes and opaque marks go to a braille layer above it, so a tinted
/// area never hides the lines drawn across it.
pub struct CanvasSurface {
    width: f64,
    height: f64,
    scale: f64,
    background: Rgb,
    underlay: Vec<(Vec<(f64, f64)>, Color)>,
    overlay: Vec<CanvasOp>,
    labels: Vec<(f64, f64, TextLine<'static>)>,
}

impl CanvasSurface {
    pub fn new(dots: (u16, u16), background: Rgb) -> Self {
        let scale = virtual_scale(dots);
        Self {
            width: f64::from(dots.0) * scale,
            height: f64::from(dots.1) * scale,
            scale,
            background,
            underlay: Vec::new(),
            overlay: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Draws the queued fills, strokes and labels, bottom layer first.
    pub fn paint(self, ctx: &mut Context<'_>) {
        ctx.marker(Marker::Block);
        for (coords, color) in &self.underlay {
            ctx.draw(&Points {
                coords,
                color: *color,
            });
        }

        ctx.marker(Marker::Braille);
        for op in &self.overlay {
            match op {
                CanvasOp::Circle(circle) => ctx.draw(circle),
                CanvasOp::Line(line) => ctx.draw(line),
                CanvasOp::Points(coords, color) => ctx.draw(&Points {
                    coords,
                    color: *color,
                }),
            }
        }

        for (x, y, line) in self.labels {
            ctx.print(x, y, line);
        }
    }

    fn color(&self, paint: Rgba) -> Color {
        to_color(paint.rgb.blend_over(self.background, paint.alpha))
    }

    fn flip(&self, point: Point) -> (f64, f64) {
        (point.x, self.height - point.y)
    }

    fn coords(&self, pixels: &[Point]) -> Vec<(f64, f64)> {
        pixels
            .iter()
            .map(|dot| (dot.x * self.scale, self.height - dot.y * self.scale))
            .collect()
    }

    fn queue_fill(&mut self, pixels: &[Point], paint: Rgba) {
        let coords = self.coords(pixels);
        let color = self.color(paint);
        if paint.alpha < 1.0 {
            self.underlay.push((coords, color));
        } else {
            self.overlay.push(CanvasOp::Points(coords, color));
        }
    }

    fn to_dots(&self, point: Point) -> Point {
        Point::new(point.x / self.scale, point.y / self.scale)
    }
}

/// Virtual pixels per braille dot for a canvas of `dots`.
pub fn virtual_scale(dots: (u16, u16)) -> f64 {
    let side = f64::from(dots.0.min(dots.1));
    if side <= 0.0 {
        return 1.0;
    }
    (MIN_VIRTUAL_SIDE / side).ceil().max(1.0)
}

impl RenderSurface for CanvasSurface {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn size(&self) -> Option<(u32, u32)> {
        Some((self.width as u32, self.height as u32))
    }

    fn clear(&mut self) {
        self.underlay.clear();
        self.overlay.clear();
        self.labels.clear();
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: Stroke) {
        let (x, y) = self.flip(center);
        let color = self.color(stroke.color);
        self.overlay.push(CanvasOp::Circle(Circle {
            x,
            y,
            radius,
            color,
        }));
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        let (x1, y1) = self.flip(from);
        let (x2, y2) = self.flip(to);
        let color = self.color(stroke.color);
        self.overlay
            .push(CanvasOp::Line(CanvasLine::new(x1, y1, x2, y2, color)));
    }

    fn stroke_polygon(&mut self, points: &[Point], stroke: Stroke) {
        if let [only] = points {
            let coords = self.coords(&[self.to_dots(*only)]);
            let color = self.color(stroke.color);
            self.overlay.push(CanvasOp::Points(coords, color));
            return;
        }
        for (index, start) in points.iter().enumerate() {
            let end = points[(index + 1) % points.len()];
            self.stroke_line(*start, end, stroke);
        }
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba) {
        let dots: Vec<Point> = points.iter().map(|point| self.to_dots(*point)).collect();
        let pixels = polygon_pixels(&dots);
        self.queue_fill(&pixels, color);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        let pixels = disk_pixels(self.to_dots(center), radius / self.scale);
        self.queue_fill(&pixels, color);
    }

    fn fill_text(&mut self, text: &str, anchor: Point, style: TextStyle) {
        let line = TextLine::styled(text.to_string(), Style::default().fg(self.color(style.color)));
        // One cell is two dots wide; keep the whole label on the canvas.
        #[allow(clippy::cast_precision_loss)]
        let text_width = line.width() as f64 * 2.0 * self.scale;
        let max_x = (self.width - text_width).max(0.0);
        let x = (anchor.x - text_width / 2.0).clamp(0.0, max_x);
        let y = (self.height - anchor.y).clamp(0.0, self.height);
        self.labels.push((x, y, line));
    }
}

pub fn render_skill_radar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let palette = app.palette();
    let block = Block::default()
        .title(format!(" Skills Radar · {} ", app.category.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(to_color(palette.primary)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    render_radar_canvas(app.entries(), &palette, f, inner);
}

pub fn render_radar_canvas(
    entries: &[skill_radar::SkillEntry],
    palette: &RadarPalette,
    f: &mut Frame<'_>,
    area: Rect,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let dots = (area.width.saturating_mul(2), area.height.saturating_mul(4));
    let scale = virtual_scale(dots);
    let width = f64::from(dots.0) * scale;
    let height = f64::from(dots.1) * scale;

    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .background_color(to_color(palette.background))
            .paint(|ctx| {
                let mut surface = CanvasSurface::new(dots, palette.background);
                render_radar(entries, &mut surface, palette);
                surface.paint(ctx);
            })
            .x_bounds([0.0, width])
            .y_bounds([0.0, height]),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use skill_radar::{SkillCatalog, SkillCategory, SkillEntry};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn scale_grows_for_small_canvases() {
        assert!((virtual_scale((720, 720)) - 1.0).abs() < f64::EPSILON);
        assert!((virtual_scale((120, 80)) - 5.0).abs() < f64::EPSILON);
        assert!((virtual_scale((0, 40)) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn canvas_shows_labels_and_plot() -> Result<(), Box<dyn std::error::Error>> {
        let catalog = SkillCatalog::builtin();
        let entries = catalog.entries(SkillCategory::Development);
        let mut terminal = Terminal::new(TestBackend::new(80, 30))?;

        terminal.draw(|f| {
            let area = f.area();
            render_radar_canvas(entries, &RadarPalette::DARK, f, area);
        })?;

        let text = buffer_text(&terminal);
        assert!(text.contains("React.js"));
        assert!(text.contains("HTML/CSS"));
        assert!(text.chars().any(|c| ('\u{2801}'..='\u{28FF}').contains(&c)));
        Ok(())
    }

    #[test]
    fn fill_tints_under_spokes_instead_of_covering_them() -> Result<(), Box<dyn std::error::Error>> {
        let entries: Vec<SkillEntry> = (0..8)
            .map(|index| SkillEntry::new(format!("S{index}"), 100, ""))
            .collect::<Result<_, _>>()?;
        let palette = RadarPalette::DARK;
        let mut terminal = Terminal::new(TestBackend::new(80, 30))?;

        terminal.draw(|f| {
            let area = f.area();
            render_radar_canvas(&entries, &palette, f, area);
        })?;

        let spoke = to_color(palette.primary.blend_over(palette.background, 0.2));
        let tint = to_color(palette.primary.blend_over(palette.background, 0.1));
        let buffer = terminal.backend().buffer();
        let cells: Vec<_> = buffer.content().iter().collect();

        let spoke_cells = cells.iter().filter(|cell| cell.fg == spoke).count();
        assert!(spoke_cells > 0, "no spoke survived the fill");
        assert!(
            cells
                .iter()
                .any(|cell| cell.fg == spoke && cell.bg == tint && cell.symbol() != "⣿"),
            "no spoke drawn over the tinted area"
        );
        assert!(cells.iter().any(|cell| cell.bg == tint));
        Ok(())
    }

    #[test]
    fn empty_area_draws_nothing() -> Result<(), Box<dyn std::error::Error>> {
        let mut terminal = Terminal::new(TestBackend::new(10, 4))?;
        terminal.draw(|f| {
            render_radar_canvas(&[], &RadarPalette::DARK, f, Rect::new(0, 0, 0, 0));
        })?;

        let text = buffer_text(&terminal);
        assert!(text.chars().all(|c| c == ' ' || c == '\n'));
        Ok(())
    }
}
