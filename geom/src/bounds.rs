use serde::{Deserialize, Serialize};

use crate::Pt2D;

/// An axis-aligned bounding box. Merging two boxes is just min/max per side, so the order boxes
/// get merged in never matters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// A boundary including nothing. Updating it with any point makes it cover exactly that point.
    pub fn new() -> Bounds {
        Bounds {
            min_x: f64::MAX,
            min_y: f64::MAX,
            max_x: f64::MIN,
            max_y: f64::MIN,
        }
    }

    pub fn from(pts: &[Pt2D]) -> Bounds {
        let mut b = Bounds::new();
        for pt in pts {
            b.update(*pt);
        }
        b
    }

    pub fn update(&mut self, pt: Pt2D) {
        self.min_x = self.min_x.min(pt.x());
        self.max_x = self.max_x.max(pt.x());
        self.min_y = self.min_y.min(pt.y());
        self.max_y = self.max_y.max(pt.y());
    }

    pub fn union(&mut self, other: Bounds) {
        self.min_x = self.min_x.min(other.min_x);
        self.max_x = self.max_x.max(other.max_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_y = self.max_y.max(other.max_y);
    }

    /// True if nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    pub fn contains(&self, pt: Pt2D) -> bool {
        pt.x() >= self.min_x && pt.x() <= self.max_x && pt.y() >= self.min_y && pt.y() <= self.max_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// The (dx, dy) that moves the top-left corner of this box to the origin. Applying it to
    /// anything inside the box yields non-negative coordinates.
    pub fn translation_to_origin(&self) -> (f64, f64) {
        (-self.min_x, -self.min_y)
    }
}

impl Default for Bounds {
    fn default() -> Bounds {
        Bounds::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    use super::*;

    fn random_bounds(rng: &mut XorShiftRng) -> Bounds {
        let pts: Vec<Pt2D> = (0..rng.gen_range(1..5))
            .map(|_| Pt2D::new(rng.gen_range(-500.0..500.0), rng.gen_range(-500.0..500.0)))
            .collect();
        Bounds::from(&pts)
    }

    #[test]
    fn union_ignores_order() {
        let mut rng = XorShiftRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut siblings: Vec<Bounds> = (0..6).map(|_| random_bounds(&mut rng)).collect();

            let mut expected = Bounds::new();
            for b in &siblings {
                expected.union(*b);
            }

            for _ in 0..5 {
                siblings.shuffle(&mut rng);
                let mut actual = Bounds::new();
                for b in &siblings {
                    actual.union(*b);
                }
                assert_eq!(expected, actual);
            }

            // Grouping doesn't matter either
            let mut left = Bounds::new();
            for b in &siblings[..3] {
                left.union(*b);
            }
            let mut right = Bounds::new();
            for b in &siblings[3..] {
                right.union(*b);
            }
            left.union(right);
            assert_eq!(expected, left);
        }
    }

    #[test]
    fn translation_makes_everything_non_negative() {
        let pts = vec![
            Pt2D::new(-50.0, -16.0),
            Pt2D::new(250.0, 16.0),
            Pt2D::new(3.0, -40.0),
        ];
        let b = Bounds::from(&pts);
        assert_eq!(b.width(), 300.0);
        assert_eq!(b.height(), 56.0);
        let (dx, dy) = b.translation_to_origin();
        for pt in pts {
            let moved = pt.offset(dx, dy);
            assert!(moved.x() >= 0.0 && moved.y() >= 0.0);
            assert!(moved.x() <= b.width() && moved.y() <= b.height());
        }
    }

    #[test]
    fn empty() {
        let mut b = Bounds::new();
        assert!(b.is_empty());
        b.update(Pt2D::new(1.0, 2.0));
        assert!(!b.is_empty());
        assert_eq!(b.width(), 0.0);
        assert!(b.contains(Pt2D::new(1.0, 2.0)));
    }
}
