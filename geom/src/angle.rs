use std::{f64, fmt, ops};

use serde::{Deserialize, Serialize};

/// An angle, stored in radians. Not normalized; use `normalized_radians` when a value in [0, 2pi)
/// matters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    /// Create an angle in radians.
    pub fn new_rads(rads: f64) -> Angle {
        if !rads.is_finite() {
            panic!("Bad Angle {}", rads);
        }
        Angle(rads)
    }

    /// Create an angle in degrees.
    pub fn new_degs(degs: f64) -> Angle {
        Angle::new_rads(degs.to_radians())
    }

    /// A full circle split evenly into `n` parts.
    pub fn full_circle_div(n: usize) -> Angle {
        if n == 0 {
            panic!("Can't split a circle into 0 parts");
        }
        Angle(2.0 * f64::consts::PI / (n as f64))
    }

    pub fn rotate_degs(self, degrees: f64) -> Angle {
        Angle(self.0 + degrees.to_radians())
    }

    /// The raw value in degrees, not normalized.
    pub fn to_degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// The value in [0, 2pi).
    pub fn normalized_radians(self) -> f64 {
        self.0.rem_euclid(2.0 * f64::consts::PI)
    }

    /// The value in [0, 360).
    pub fn normalized_degrees(self) -> f64 {
        self.normalized_radians().to_degrees()
    }

    /// True if both angles point the same way, within some degrees.
    pub fn approx_eq(self, other: Angle, within_degrees: f64) -> bool {
        let delta = (self.normalized_degrees() - other.normalized_degrees()).abs();
        delta <= within_degrees || (360.0 - delta) <= within_degrees
    }

    /// Components of the unit vector pointing this way, as (cos, sin).
    pub fn unit_vector(self) -> (f64, f64) {
        let (sin, cos) = self.0.sin_cos();
        (cos, sin)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Angle({} degrees)", self.normalized_degrees())
    }
}

impl ops::Add for Angle {
    type Output = Angle;

    fn add(self, other: Angle) -> Angle {
        Angle(self.0 + other.0)
    }
}

impl ops::Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, scalar: f64) -> Angle {
        Angle::new_rads(self.0 * scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization() {
        assert!((Angle::new_degs(-90.0).normalized_degrees() - 270.0).abs() < 1e-9);
        assert!((Angle::new_degs(450.0).normalized_degrees() - 90.0).abs() < 1e-9);
        assert!(Angle::new_degs(359.99).approx_eq(Angle::new_degs(0.0), 0.1));
        assert!(!Angle::new_degs(10.0).approx_eq(Angle::new_degs(0.0), 5.0));
        assert!((Angle::new_degs(-450.0).to_degrees() + 450.0).abs() < 1e-9);
    }

    #[test]
    fn full_circle_div() {
        assert!(Angle::full_circle_div(4).approx_eq(Angle::new_degs(90.0), 1e-9));
        assert!(Angle::full_circle_div(1).approx_eq(Angle::ZERO, 1e-9));
    }
}
