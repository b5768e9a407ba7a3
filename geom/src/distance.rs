use std::{fmt, ops};

use serde::{Deserialize, Serialize};

use crate::trim_f64;

/// A distance in the diagram's units. Can be negative, which is how perpendicular offsets to the
/// "other" side of a line are expressed.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance::const_meters(0.0);

    /// Creates a distance. The unit is nominally meters; for diagrams it's one SVG user unit.
    pub fn meters(value: f64) -> Distance {
        if !value.is_finite() {
            panic!("Bad Distance {}", value);
        }

        Distance(trim_f64(value))
    }

    // TODO Can't panic inside a const fn, seemingly. Don't pass in anything bad!
    pub const fn const_meters(value: f64) -> Distance {
        Distance(value)
    }

    pub fn abs(self) -> Distance {
        if self.0 > 0.0 {
            self
        } else {
            Distance(-self.0)
        }
    }

    pub fn inner_meters(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}

impl ops::Sub for Distance {
    type Output = Distance;

    fn sub(self, other: Distance) -> Distance {
        Distance::meters(self.0 - other.0)
    }
}

impl ops::Neg for Distance {
    type Output = Distance;

    fn neg(self) -> Distance {
        Distance::meters(-self.0)
    }
}

impl ops::Mul<f64> for Distance {
    type Output = Distance;

    fn mul(self, scalar: f64) -> Distance {
        Distance::meters(self.0 * scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let lane = Distance::meters(20.0);
        assert_eq!(lane * 0.8, Distance::meters(16.0));
        assert_eq!(lane * -2.0, Distance::meters(-40.0));
        assert_eq!((-lane).abs(), lane);
        assert!(Distance::meters(-1.0) < Distance::ZERO);
    }

    #[test]
    fn trims_precision() {
        assert_eq!(Distance::meters(1e-17), Distance::ZERO);
        assert_eq!(Distance::meters(0.123456789).inner_meters(), 0.1235);
    }
}
