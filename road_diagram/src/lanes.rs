//! How each kind of segment is drawn: a fixed set of lines parallel to the segment's centerline.

use geom::{Angle, Distance, Line, Pt2D};

use crate::{LineStyle, SegmentKind};

impl SegmentKind {
    /// Every line drawn for this kind of segment, as (perpendicular offset from the centerline in
    /// multiples of the lane width, style). Centerlines are dashed, and so are the lines between an
    /// avenue's inner lanes. The outermost edges are always solid.
    pub fn lane_pattern(self) -> &'static [(f64, LineStyle)] {
        match self {
            SegmentKind::Street => &[(-0.8, LineStyle::Solid), (0.8, LineStyle::Solid)],
            SegmentKind::Road => &[
                (-1.0, LineStyle::Solid),
                (0.0, LineStyle::Dashed),
                (1.0, LineStyle::Solid),
            ],
            SegmentKind::Avenue => &[
                (-2.0, LineStyle::Solid),
                (-1.0, LineStyle::Dashed),
                (0.0, LineStyle::Dashed),
                (1.0, LineStyle::Dashed),
                (2.0, LineStyle::Solid),
            ],
        }
    }
}

/// The lines of a segment starting at `start` and running `length` towards `direction`. Each line
/// is the centerline shifted perpendicular to `direction`.
pub fn lanes(
    kind: SegmentKind,
    start: Pt2D,
    direction: Angle,
    length: Distance,
    lane_width: Distance,
) -> Vec<(Line, LineStyle)> {
    let center = Line::from_angle(start, direction, length);
    kind.lane_pattern()
        .iter()
        .map(|(factor, style)| {
            (
                center.shift_perpendicular(direction, lane_width * *factor),
                *style,
            )
        })
        .collect()
}
