//! Plain 2D geometry for laying out diagrams. Everything here is in an arbitrary Cartesian space
//! where x grows to the right and y grows downwards, matching SVG. Nothing in this crate knows
//! about roads.

mod angle;
mod bounds;
mod circle;
mod distance;
mod line;
mod pt;

pub use crate::angle::Angle;
pub use crate::bounds::Bounds;
pub use crate::circle::Circle;
pub use crate::distance::Distance;
pub use crate::line::Line;
pub use crate::pt::Pt2D;

/// Reduce the precision of an f64. Layout math produces values like 6.1e-17 where 0 was meant;
/// trimming keeps output stable and comparisons sane. Values too big to scale are already far
/// coarser than the precision being trimmed, so they're returned as-is.
pub fn trim_f64(x: f64) -> f64 {
    let scaled = x * 10_000.0;
    if !scaled.is_finite() {
        return x;
    }
    scaled.round() / 10_000.0
}
