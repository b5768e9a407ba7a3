use serde::{Deserialize, Serialize};

use geom::{Bounds, Circle, Line, Pt2D};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// One primitive, in the layout's coordinate space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Circle(Circle),
    Line { line: Line, style: LineStyle },
}

impl DrawCommand {
    /// Every point that has to be visible for this primitive to be fully drawn.
    pub fn extent(&self) -> Bounds {
        match self {
            DrawCommand::Circle(circle) => circle.get_bounds(),
            DrawCommand::Line { line, .. } => Bounds::from(&line.points()),
        }
    }
}

/// Somewhere the layout can draw to.
pub trait Canvas {
    fn draw_circle(&mut self, circle: Circle);
    fn draw_line(&mut self, line: Line, style: LineStyle);
}

/// Records draw commands in the order they're issued.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub commands: Vec<DrawCommand>,
}

impl Drawing {
    pub fn new() -> Drawing {
        Drawing {
            commands: Vec::new(),
        }
    }

    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Circle(circle) => Some(circle),
            DrawCommand::Line { .. } => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (&Line, LineStyle)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Line { line, style } => Some((line, *style)),
            DrawCommand::Circle(_) => None,
        })
    }

    pub fn num_dashed_lines(&self) -> usize {
        self.lines()
            .filter(|(_, style)| *style == LineStyle::Dashed)
            .count()
    }

    /// The endpoint of every line.
    pub fn line_endpoints(&self) -> Vec<Pt2D> {
        self.lines().flat_map(|(line, _)| line.points()).collect()
    }

    /// Recalculates the extent of everything drawn by scanning all commands.
    pub fn get_bounds(&self) -> Bounds {
        let mut bounds = Bounds::new();
        for cmd in &self.commands {
            bounds.union(cmd.extent());
        }
        bounds
    }
}

impl Canvas for Drawing {
    fn draw_circle(&mut self, circle: Circle) {
        self.commands.push(DrawCommand::Circle(circle));
    }

    fn draw_line(&mut self, line: Line, style: LineStyle) {
        self.commands.push(DrawCommand::Line { line, style });
    }
}
