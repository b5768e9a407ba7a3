use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use geom::Distance;

/// The width of one lane. Every kind of segment is drawn in multiples of this.
pub const LANE_WIDTH: Distance = Distance::const_meters(20.0);
/// How long a segment is when the input doesn't say.
pub const DEFAULT_SEGMENT_LENGTH: Distance = Distance::const_meters(200.0);
/// The radius of an intersection's circle when the input doesn't say. Segments start on this
/// circle, not at the intersection's center.
pub const DEFAULT_INTERSECTION_RADIUS: Distance = Distance::const_meters(50.0);
/// Real road networks are nowhere near this deep.
pub const DEFAULT_MAX_DEPTH: usize = 256;
/// No length, radius, or angle in degrees may be bigger than this, in either direction. With it,
/// every coordinate the layout computes stays finite, however deep the network goes.
pub const MAX_MAGNITUDE: f64 = 1e9;

/// Constants used while laying out a network. Passed explicitly into the layout, so tests can use
/// whatever values they like. Every field can be omitted from a JSON config file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub lane_width: Distance,
    pub default_segment_length: Distance,
    pub default_intersection_radius: Distance,
    /// Layout fails if any path from the root passes through more intersections than this.
    pub max_depth: usize,
    /// Normally an intersection without segments is an error. If this is true, an intersection at
    /// the far end of a segment may be empty; it's drawn as a dead end. The root always needs at
    /// least one segment.
    pub allow_dead_ends: bool,
}

impl Default for LayoutConfig {
    fn default() -> LayoutConfig {
        LayoutConfig {
            lane_width: LANE_WIDTH,
            default_segment_length: DEFAULT_SEGMENT_LENGTH,
            default_intersection_radius: DEFAULT_INTERSECTION_RADIUS,
            max_depth: DEFAULT_MAX_DEPTH,
            allow_dead_ends: false,
        }
    }
}

impl LayoutConfig {
    /// Reads settings from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &str) -> Result<LayoutConfig> {
        let raw = fs_err::read_to_string(path)?;
        let cfg: LayoutConfig =
            serde_json::from_str(&raw).with_context(|| format!("{} isn't a valid config", path))?;
        cfg.validate()
            .with_context(|| format!("{} isn't a valid config", path))?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("lane_width", self.lane_width),
            ("default_segment_length", self.default_segment_length),
            ("default_intersection_radius", self.default_intersection_radius),
        ] {
            if !value.inner_meters().is_finite() {
                bail!("{} must be a finite number, not {}", name, value);
            }
            check_magnitude(name, value.inner_meters())?;
        }
        if self.lane_width <= Distance::ZERO {
            bail!("lane_width must be positive, not {}", self.lane_width);
        }
        if self.default_segment_length < Distance::ZERO {
            bail!(
                "default_segment_length can't be negative: {}",
                self.default_segment_length
            );
        }
        if self.default_intersection_radius < Distance::ZERO {
            bail!(
                "default_intersection_radius can't be negative: {}",
                self.default_intersection_radius
            );
        }
        if self.max_depth == 0 {
            bail!("max_depth must be at least 1");
        }
        Ok(())
    }
}

pub(crate) fn check_magnitude(name: &str, value: f64) -> Result<()> {
    if value.abs() > MAX_MAGNITUDE {
        bail!("{} is {}, but can't be bigger than {}", name, value, MAX_MAGNITUDE);
    }
    Ok(())
}
