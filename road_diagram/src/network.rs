//! The road network as described by the input: a tree of intersections, each with an ordered list
//! of segments, each optionally leading to another intersection at its far end.

use std::fmt;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use geom::{Angle, Distance};

use crate::config::check_magnitude;
use crate::Violation;

const INTERSECTION_TAG: &str = "intersection";
/// The XML reader recurses once per intersection. Anything deeper than this is almost certainly
/// not a real road network, and would risk overflowing the stack.
const MAX_NESTING: usize = 4096;

/// The three kinds of segment, from narrowest to widest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SegmentKind {
    Street,
    Road,
    Avenue,
}

impl SegmentKind {
    pub const ALL: [SegmentKind; 3] = [SegmentKind::Street, SegmentKind::Road, SegmentKind::Avenue];

    pub fn from_tag(tag: &str) -> Option<SegmentKind> {
        match tag {
            "street" => Some(SegmentKind::Street),
            "road" => Some(SegmentKind::Road),
            "avenue" => Some(SegmentKind::Avenue),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            SegmentKind::Street => "street",
            SegmentKind::Road => "road",
            SegmentKind::Avenue => "avenue",
        }
    }

    pub(crate) fn describe_all() -> String {
        abstutil::plain_list_names(SegmentKind::ALL.iter().map(|k| k.tag().to_string()))
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A place where segments meet. Angles are stored in radians; the input uses degrees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    /// Order matters: the index of a segment decides which direction it points.
    pub segments: Vec<Segment>,
    /// Added to the even spacing between segments, scaled by each segment's index.
    pub angle_offset: Angle,
    /// Rotates every segment of this intersection.
    pub intersection_offset: Angle,
    /// If None, the layout's default radius is used.
    pub radius: Option<Distance>,
}

/// A straight connection leaving an intersection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    /// If None, the layout's default length is used.
    pub length: Option<Distance>,
    /// The intersection this segment leads to, or None for a dead end.
    pub far_end: Option<Intersection>,
}

impl Intersection {
    pub fn new() -> Intersection {
        Intersection {
            segments: Vec::new(),
            angle_offset: Angle::ZERO,
            intersection_offset: Angle::ZERO,
            radius: None,
        }
    }

    pub fn with_segment(mut self, segment: Segment) -> Intersection {
        self.segments.push(segment);
        self
    }

    pub fn with_radius(mut self, radius: Distance) -> Intersection {
        self.radius = Some(radius);
        self
    }

    pub fn with_angle_offset(mut self, angle_offset: Angle) -> Intersection {
        self.angle_offset = angle_offset;
        self
    }

    pub fn with_intersection_offset(mut self, intersection_offset: Angle) -> Intersection {
        self.intersection_offset = intersection_offset;
        self
    }

    /// Counts this intersection and everything reachable from it.
    pub fn num_intersections(&self) -> usize {
        1 + self
            .segments
            .iter()
            .filter_map(|s| s.far_end.as_ref())
            .map(|i| i.num_intersections())
            .sum::<usize>()
    }

    pub fn num_segments(&self) -> usize {
        self.segments.len()
            + self
                .segments
                .iter()
                .filter_map(|s| s.far_end.as_ref())
                .map(|i| i.num_segments())
                .sum::<usize>()
    }

    /// The number of intersections on the longest path starting here, including this one.
    pub fn depth(&self) -> usize {
        1 + self
            .segments
            .iter()
            .filter_map(|s| s.far_end.as_ref())
            .map(|i| i.depth())
            .max()
            .unwrap_or(0)
    }

    fn from_xml(node: roxmltree::Node, nesting: usize) -> Result<Intersection> {
        if nesting > MAX_NESTING {
            bail!(Violation::TooDeep {
                max_depth: MAX_NESTING
            });
        }

        let mut intersection = Intersection::new();
        if let Some(degrees) = parse_attribute(node, "angle_offset")? {
            intersection.angle_offset = Angle::new_degs(degrees);
        }
        if let Some(degrees) = parse_attribute(node, "intersection_offset")? {
            intersection.intersection_offset = Angle::new_degs(degrees);
        }
        if let Some(radius) = parse_attribute(node, "intersection_radius")? {
            if radius < 0.0 {
                bail!("intersection_radius can't be negative: {}", radius);
            }
            intersection.radius = Some(Distance::meters(radius));
        }

        for (idx, child) in node.children().filter(|n| n.is_element()).enumerate() {
            let tag = child.tag_name().name();
            if tag == INTERSECTION_TAG {
                return Err(Violation::NestedIntersection)
                    .with_context(|| format!("child #{} of an intersection", idx));
            }
            let kind = match SegmentKind::from_tag(tag) {
                Some(kind) => kind,
                None => {
                    return Err(Violation::UnknownSegmentKind {
                        tag: tag.to_string(),
                    })
                    .with_context(|| format!("child #{} of an intersection", idx));
                }
            };
            let segment = Segment::from_xml(child, kind, nesting)
                .with_context(|| format!("{} #{}", kind, idx))?;
            intersection.segments.push(segment);
        }
        Ok(intersection)
    }
}

impl Default for Intersection {
    fn default() -> Intersection {
        Intersection::new()
    }
}

impl Segment {
    pub fn new(kind: SegmentKind) -> Segment {
        Segment {
            kind,
            length: None,
            far_end: None,
        }
    }

    pub fn street() -> Segment {
        Segment::new(SegmentKind::Street)
    }

    pub fn road() -> Segment {
        Segment::new(SegmentKind::Road)
    }

    pub fn avenue() -> Segment {
        Segment::new(SegmentKind::Avenue)
    }

    pub fn with_length(mut self, length: Distance) -> Segment {
        self.length = Some(length);
        self
    }

    pub fn with_far_end(mut self, far_end: Intersection) -> Segment {
        self.far_end = Some(far_end);
        self
    }

    fn from_xml(node: roxmltree::Node, kind: SegmentKind, nesting: usize) -> Result<Segment> {
        let mut segment = Segment::new(kind);
        if let Some(length) = parse_attribute(node, "length")? {
            if length < 0.0 {
                bail!("length can't be negative: {}", length);
            }
            segment.length = Some(Distance::meters(length));
        }

        for child in node.children().filter(|n| n.is_element()) {
            let tag = child.tag_name().name();
            if tag != INTERSECTION_TAG {
                bail!(Violation::UnexpectedElement {
                    segment: kind,
                    tag: tag.to_string(),
                });
            }
            if segment.far_end.is_some() {
                bail!(Violation::MultipleFarEnds { segment: kind });
            }
            segment.far_end = Some(Intersection::from_xml(child, nesting + 1)?);
        }
        Ok(segment)
    }
}

/// A whole road network. The root is always an intersection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub root: Intersection,
}

impl Network {
    pub fn new(root: Intersection) -> Network {
        Network { root }
    }

    /// Reads a network from an XML file.
    pub fn load(path: &str) -> Result<Network> {
        let raw = fs_err::read_to_string(path)?;
        Network::load_from_str(&raw).with_context(|| format!("reading {}", path))
    }

    /// Parses a network from XML text. The top-level element must be an intersection.
    pub fn load_from_str(raw: &str) -> Result<Network> {
        let doc = roxmltree::Document::parse(raw).context("input isn't well-formed XML")?;
        let root = doc.root_element();
        let tag = root.tag_name().name();
        if tag != INTERSECTION_TAG {
            bail!(Violation::RootNotIntersection {
                tag: tag.to_string()
            });
        }
        let root = Intersection::from_xml(root, 0).context("root intersection")?;
        Ok(Network { root })
    }

    pub fn num_intersections(&self) -> usize {
        self.root.num_intersections()
    }

    pub fn num_segments(&self) -> usize {
        self.root.num_segments()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}

fn parse_attribute(node: roxmltree::Node, key: &str) -> Result<Option<f64>> {
    let raw = match node.attribute(key) {
        Some(raw) => raw,
        None => {
            return Ok(None);
        }
    };
    let value = raw
        .trim()
        .parse::<f64>()
        .with_context(|| format!("{}=\"{}\" isn't a number", key, raw))?;
    if !value.is_finite() {
        bail!("{}=\"{}\" isn't a finite number", key, raw);
    }
    check_magnitude(key, value)?;
    Ok(Some(value))
}
