//! Draws a road network as a diagram. The network is a tree: intersections own an ordered list of
//! segments (streets, roads, and avenues), and each segment may lead to another intersection.
//! Segments radiate evenly from each intersection, each kind of segment is drawn as a fixed set of
//! parallel lane lines, and the bounds of the whole drawing are accumulated along the way so the
//! result can be rendered onto a canvas of exactly the right size.

#[macro_use]
extern crate log;

mod config;
mod drawing;
mod error;
pub mod lanes;
mod layout;
mod network;
pub mod render;

pub use crate::config::{
    LayoutConfig, DEFAULT_INTERSECTION_RADIUS, DEFAULT_MAX_DEPTH, DEFAULT_SEGMENT_LENGTH,
    LANE_WIDTH, MAX_MAGNITUDE,
};
pub use crate::drawing::{Canvas, DrawCommand, Drawing, LineStyle};
pub use crate::error::{find_violation, Violation};
pub use crate::layout::{child_angle, draw_network, layout};
pub use crate::network::{Intersection, Network, Segment, SegmentKind};
