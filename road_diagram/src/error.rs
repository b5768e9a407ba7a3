use std::{error, fmt};

use crate::SegmentKind;

/// A road network whose structure can't be drawn. These are always fatal; they're wrapped in
/// `anyhow::Error` with context describing where in the tree the problem is, and callers can
/// `downcast_ref::<Violation>()` to find out which rule was broken.
#[derive(Clone, Debug, PartialEq)]
pub enum Violation {
    /// The document's top-level element isn't an intersection.
    RootNotIntersection { tag: String },
    /// An intersection appears directly inside another, without a segment between them.
    NestedIntersection,
    /// An intersection has no segments, so the angle between them is undefined.
    EmptyIntersection,
    /// An intersection contains something that isn't a known kind of segment.
    UnknownSegmentKind { tag: String },
    /// A segment contains something other than the intersection at its far end.
    UnexpectedElement { segment: SegmentKind, tag: String },
    /// A segment has more than one intersection at its far end.
    MultipleFarEnds { segment: SegmentKind },
    /// The network nests deeper than the configured limit.
    TooDeep { max_depth: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Violation::RootNotIntersection { tag } => write!(
                f,
                "the top-level element must be an intersection, not <{}>",
                tag
            ),
            Violation::NestedIntersection => write!(
                f,
                "an intersection can't be nested directly inside another intersection; connect \
                 them with a {}",
                SegmentKind::describe_all()
            ),
            Violation::EmptyIntersection => {
                write!(f, "an intersection must have at least one segment")
            }
            Violation::UnknownSegmentKind { tag } => write!(
                f,
                "<{}> isn't a kind of segment; expected {}",
                tag,
                SegmentKind::describe_all()
            ),
            Violation::UnexpectedElement { segment, tag } => write!(
                f,
                "a {} can only contain the intersection at its far end, not <{}>",
                segment, tag
            ),
            Violation::MultipleFarEnds { segment } => write!(
                f,
                "a {} can only lead to one intersection",
                segment
            ),
            Violation::TooDeep { max_depth } => write!(
                f,
                "the network nests more than {} intersections deep",
                max_depth
            ),
        }
    }
}

impl error::Error for Violation {}

/// If this error was caused by a structural violation anywhere in its chain, return it.
pub fn find_violation(err: &anyhow::Error) -> Option<&Violation> {
    err.downcast_ref::<Violation>()
}
