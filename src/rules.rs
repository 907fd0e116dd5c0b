//! Rules of the game.

use crate::math::{norm1, norminf, Vector2d};
use cgmath::prelude::*;
use itertools::iproduct;

/// One of the three vector norms a rule can measure an acceleration by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Norm {
    /// One or taxicab norm.
    Taxicab,
    /// Two or Euclidean norm.
    Euclidean,
    /// Infinity or maximum norm.
    Maximum,
}

impl Norm {
    /// Evaluates the norm of a vector.
    pub fn apply(self, vec: Vector2d) -> f64 {
        match self {
            Norm::Taxicab => norm1(vec),
            Norm::Euclidean => vec.magnitude(),
            Norm::Maximum => norminf(vec),
        }
    }
}

/// Classifies a proposed velocity change as permitted or not.
///
/// A rule is a norm selector and a threshold fixed at construction.
/// It is stateless and safe to share between cars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccelerationRule {
    norm: Norm,
    max: f64,
}

impl AccelerationRule {
    /// Creates a rule permitting accelerations with `norm(a) <= max`.
    pub const fn new(norm: Norm, max: f64) -> Self {
        Self { norm, max }
    }

    /// Eight neighbours rule: the acceleration is constrained to the
    /// eight neighbours of zero.
    pub const fn eight_neighbours() -> Self {
        Self::new(Norm::Maximum, 1.0)
    }

    /// Four neighbours rule: the acceleration is constrained to the
    /// four direct neighbours of zero.
    pub const fn four_neighbours() -> Self {
        Self::new(Norm::Taxicab, 1.0)
    }

    /// Euclidean 10 rule: the Euclidean norm of the acceleration is
    /// bound to at most ten.
    pub const fn euclidean_ten() -> Self {
        Self::new(Norm::Euclidean, 10.0)
    }

    /// Whether the rule permits the given acceleration.
    pub fn allows(&self, accel: Vector2d) -> bool {
        self.norm.apply(accel) <= self.max
    }

    /// Every acceleration with integer components the rule permits.
    ///
    /// Candidates are enumerated over the square grid that circumscribes
    /// the rule's threshold, in row-major order.
    pub fn allowed_accelerations(&self) -> Vec<Vector2d> {
        let bound = self.max.ceil() as i64;
        iproduct!(-bound..=bound, -bound..=bound)
            .map(|(x, y)| Vector2d::new(x as f64, y as f64))
            .filter(|accel| self.allows(*accel))
            .collect()
    }
}

impl Default for AccelerationRule {
    /// The classic game is played with the eight neighbours rule.
    fn default() -> Self {
        Self::eight_neighbours()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn eight_neighbours() {
        let rule = AccelerationRule::eight_neighbours();
        assert!(rule.allows(Vector2d::new(0.0, 0.0)));
        assert!(rule.allows(Vector2d::new(1.0, 1.0)));
        assert!(rule.allows(Vector2d::new(-1.0, 1.0)));
        assert!(!rule.allows(Vector2d::new(2.0, 0.0)));
        assert!(!rule.allows(Vector2d::new(1.0, -2.0)));
    }

    #[test]
    fn four_neighbours() {
        let rule = AccelerationRule::four_neighbours();
        assert!(rule.allows(Vector2d::new(0.0, 0.0)));
        assert!(rule.allows(Vector2d::new(0.0, -1.0)));
        assert!(!rule.allows(Vector2d::new(1.0, 1.0)));
    }

    #[test]
    fn euclidean_ten() {
        let rule = AccelerationRule::euclidean_ten();
        assert!(rule.allows(Vector2d::new(6.0, 8.0)));
        assert!(rule.allows(Vector2d::new(10.0, 0.0)));
        assert!(!rule.allows(Vector2d::new(8.0, 7.0)));
    }

    #[test]
    fn eight_neighbours_grid() {
        let accels = AccelerationRule::eight_neighbours().allowed_accelerations();
        assert_eq!(accels.len(), 9);
        assert!(accels.contains(&Vector2d::new(0.0, 0.0)));
        assert!(accels.contains(&Vector2d::new(-1.0, 1.0)));
    }

    #[test]
    fn four_neighbours_grid() {
        let accels = AccelerationRule::four_neighbours().allowed_accelerations();
        // Zero, plus the four direct neighbours.
        assert_eq!(accels.len(), 5);
        assert!(!accels.contains(&Vector2d::new(1.0, 1.0)));
    }
}
