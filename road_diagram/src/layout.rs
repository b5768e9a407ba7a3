//! Radial layout. Each intersection spreads its segments evenly around itself, the segments are
//! drawn outwards from the rim of its circle, and every segment with a far end recurses into that
//! intersection. Each call returns the bounds of everything it drew, so the canvas can be sized
//! without scanning the drawing afterwards.

use anyhow::{Context, Result};

use abstutil::prettyprint_usize;
use geom::{Angle, Bounds, Circle, Pt2D};

use crate::config::check_magnitude;
use crate::lanes::lanes;
use crate::{Canvas, Drawing, Intersection, LayoutConfig, Network, Violation};

/// Lays out a whole network with the root intersection centered on the origin.
pub fn draw_network(network: &Network, cfg: &LayoutConfig) -> Result<(Drawing, Bounds)> {
    let mut drawing = Drawing::new();
    let bounds = layout(&network.root, Pt2D::zero(), cfg, &mut drawing)?;
    info!(
        "Laid out {} intersections and {} segments as {} lines. The canvas is {} x {}",
        prettyprint_usize(network.num_intersections()),
        prettyprint_usize(network.num_segments()),
        prettyprint_usize(drawing.lines().count()),
        bounds.width(),
        bounds.height()
    );
    Ok((drawing, bounds))
}

/// Draws `intersection` centered at `origin`, then everything reachable from it, and returns the
/// bounds of everything drawn. On error the canvas may hold a partial drawing; throw it away.
pub fn layout(
    intersection: &Intersection,
    origin: Pt2D,
    cfg: &LayoutConfig,
    canvas: &mut impl Canvas,
) -> Result<Bounds> {
    cfg.validate()?;
    layout_intersection(intersection, origin, cfg, canvas, 0)
}

/// The direction of the segment at `idx` out of `num_segments`. Without any offsets, segments
/// evenly split the full circle, starting due east.
pub fn child_angle(
    idx: usize,
    num_segments: usize,
    angle_offset: Angle,
    intersection_offset: Angle,
) -> Angle {
    (Angle::full_circle_div(num_segments) + angle_offset) * (idx as f64) + intersection_offset
}

fn layout_intersection(
    intersection: &Intersection,
    origin: Pt2D,
    cfg: &LayoutConfig,
    canvas: &mut impl Canvas,
    depth: usize,
) -> Result<Bounds> {
    if depth >= cfg.max_depth {
        return Err(Violation::TooDeep {
            max_depth: cfg.max_depth,
        }
        .into());
    }

    let num_segments = intersection.segments.len();
    if num_segments == 0 && !(cfg.allow_dead_ends && depth > 0) {
        return Err(Violation::EmptyIntersection.into());
    }

    let radius = intersection
        .radius
        .unwrap_or(cfg.default_intersection_radius);
    check_magnitude("intersection_radius", radius.inner_meters())?;
    check_magnitude("angle_offset", intersection.angle_offset.to_degrees())?;
    check_magnitude(
        "intersection_offset",
        intersection.intersection_offset.to_degrees(),
    )?;
    let circle = Circle::new(origin, radius);
    canvas.draw_circle(circle);
    let mut bounds = circle.get_bounds();
    debug!(
        "Intersection at {} (depth {}) has {} segments",
        origin, depth, num_segments
    );

    for (idx, segment) in intersection.segments.iter().enumerate() {
        let direction = child_angle(
            idx,
            num_segments,
            intersection.angle_offset,
            intersection.intersection_offset,
        );
        let length = segment.length.unwrap_or(cfg.default_segment_length);
        check_magnitude("length", length.inner_meters())
            .with_context(|| format!("{} #{}", segment.kind, idx))?;
        // Segments begin on the rim of the circle
        let start = origin.project_away(radius, direction);

        for (line, style) in lanes(segment.kind, start, direction, length, cfg.lane_width) {
            bounds.update(line.pt1());
            bounds.update(line.pt2());
            canvas.draw_line(line, style);
        }

        if let Some(ref far_end) = segment.far_end {
            let end = start.project_away(length, direction);
            let subtree = layout_intersection(far_end, end, cfg, canvas, depth + 1)
                .with_context(|| {
                    format!(
                        "{} #{} leaving the intersection at {}",
                        segment.kind, idx, origin
                    )
                })?;
            bounds.union(subtree);
        }
    }

    Ok(bounds)
}
