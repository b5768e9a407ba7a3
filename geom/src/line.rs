use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Angle, Distance, Pt2D};

/// A line segment between two points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line(Pt2D, Pt2D);

impl Line {
    pub fn new(pt1: Pt2D, pt2: Pt2D) -> Line {
        Line(pt1, pt2)
    }

    /// Starts at `start` and runs `length` in the direction of `angle`.
    pub fn from_angle(start: Pt2D, angle: Angle, length: Distance) -> Line {
        Line(start, start.project_away(length, angle))
    }

    pub fn pt1(&self) -> Pt2D {
        self.0
    }

    pub fn pt2(&self) -> Pt2D {
        self.1
    }

    pub fn points(&self) -> Vec<Pt2D> {
        vec![self.0, self.1]
    }

    pub fn length(&self) -> Distance {
        self.pt1().dist_to(self.pt2())
    }

    pub fn angle(&self) -> Angle {
        self.pt1().angle_to(self.pt2())
    }

    /// Shifts the whole line perpendicular to `direction`. Positive widths go to the right of
    /// the direction (clockwise 90 degrees in screen space), negative to the left. The line's own
    /// angle isn't used, so zero-length lines can still be shifted.
    pub fn shift_perpendicular(&self, direction: Angle, width: Distance) -> Line {
        let perp = direction.rotate_degs(90.0);
        Line(
            self.pt1().project_away(width, perp),
            self.pt2().project_away(width, perp),
        )
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Line::new(")?;
        writeln!(f, "  Pt2D::new({}, {}),", self.0.x(), self.0.y())?;
        writeln!(f, "  Pt2D::new({}, {}),", self.1.x(), self.1.y())?;
        write!(f, ")")
    }
}
