use super::surface::{Point, RenderSurface, Rgba, Stroke, TextStyle};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear,
    Circle {
        center: Point,
        radius: f64,
        stroke: Stroke,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    StrokePolygon {
        points: Vec<Point>,
        stroke: Stroke,
    },
    FillPolygon {
        points: Vec<Point>,
        color: Rgba,
    },
    Disk {
        center: Point,
        radius: f64,
        color: Rgba,
    },
    Text {
        text: String,
        anchor: Point,
        style: TextStyle,
    },
}

/// Surface that keeps the commands of the current frame.
///
/// `clear` throws away everything recorded before it, so after a render the
/// list holds exactly what is visible.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: Option<(u32, u32)>,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            size: Some((width, height)),
            commands: Vec::new(),
        }
    }

    pub const fn detached() -> Self {
        Self {
            size: None,
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl RenderSurface for RecordingSurface {
    fn size(&self) -> Option<(u32, u32)> {
        self.size
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: Stroke) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            stroke,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn stroke_polygon(&mut self, points: &[Point], stroke: Stroke) {
        self.commands.push(DrawCommand::StrokePolygon {
            points: points.to_vec(),
            stroke,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::Disk {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, anchor: Point, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            anchor,
            style,
        });
    }
}
