use super::{norm1, Point2d, Vector2d};

/// A line segment between a start and an end point.
///
/// Equality is directed: two segments are equal only if they have the
/// same endpoints in the same order. A degenerate segment whose
/// endpoints coincide is valid and behaves as a single point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment2d {
    p0: Point2d,
    p1: Point2d,
}

impl LineSegment2d {
    /// Creates a line segment from its two end points.
    pub const fn from_ends(p0: Point2d, p1: Point2d) -> Self {
        Self { p0, p1 }
    }

    /// Creates a line segment from a start point and a displacement.
    pub fn from_vector(p0: Point2d, vec: Vector2d) -> Self {
        Self { p0, p1: p0 + vec }
    }

    /// The start point of the segment.
    pub fn start(&self) -> Point2d {
        self.p0
    }

    /// The end point of the segment.
    pub fn end(&self) -> Point2d {
        self.p1
    }

    /// The displacement from the start to the end point.
    pub fn vector(&self) -> Vector2d {
        self.p1 - self.p0
    }

    /// The intersection point of two line segments, if any.
    ///
    /// For collinear overlapping segments the reported point is the
    /// endpoint of the overlap closest to the start of `self`, which is
    /// the behavior the collision check depends on.
    pub fn intersection(&self, other: &LineSegment2d) -> Option<Point2d> {
        let u = self.p1 - self.p0;
        let v = other.p1 - other.p0;
        let w = other.p1 - self.p0;
        let d = u.x * v.y - v.x * u.y;
        let r = w.x * v.y - v.x * w.y;
        let q = u.x * w.y - w.x * u.y;
        if d != 0.0 {
            // General case, the two lines intersect in one point. It is
            // an intersection of the segments only if both parameters
            // fall inside [0, 1].
            let t = r / d;
            let s = q / d;
            if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&s) {
                Some(self.p0 + t * u)
            } else {
                None
            }
        } else if r != 0.0 || q != 0.0 {
            // Parallel lines.
            None
        } else if norm1(u) != 0.0 {
            // Collinear, and self is not degenerated to a single point.
            // Parametrize other's endpoints along self.
            let w0 = other.p0 - self.p0;
            let w1 = other.p1 - self.p0;
            let t = if u.x != 0.0 { w0.x / u.x } else { w0.y / u.y };
            let s = if u.x != 0.0 { w1.x / u.x } else { w1.y / u.y };
            if (t < 0.0 && s < 0.0) || (t > 1.0 && s > 1.0) {
                // Disjunct segments.
                None
            } else if (t < 0.0 && s >= 0.0) || (s < 0.0 && t >= 0.0) {
                // self.p0 lies on other.
                Some(self.p0)
            } else if t <= s {
                // other.p0 lies on self.
                Some(other.p0)
            } else {
                // other.p1 lies on self.
                Some(other.p1)
            }
        } else if norm1(v) != 0.0 {
            // self is degenerated to a single point, but other is not.
            let w0 = self.p0 - other.p0;
            let t = if v.x != 0.0 { w0.x / v.x } else { w0.y / v.y };
            if (0.0..=1.0).contains(&t) {
                Some(self.p0)
            } else {
                None
            }
        } else if norm1(w) != 0.0 {
            // Two separated single points.
            None
        } else {
            // All four points coincide.
            Some(self.p0)
        }
    }
}
