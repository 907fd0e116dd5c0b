use super::{Point2d, Vector2d};

/// One or taxicab norm: the sum of the absolute components.
pub fn norm1(vec: Vector2d) -> f64 {
    vec.x.abs() + vec.y.abs()
}

/// Infinity or maximum norm: the largest absolute component.
pub fn norminf(vec: Vector2d) -> f64 {
    f64::max(vec.x.abs(), vec.y.abs())
}

/// Whether both coordinates of a point are whole numbers.
///
/// Car positions are constrained to integer coordinates; barrier
/// endpoints are not.
pub fn is_integral(point: Point2d) -> bool {
    point.x.fract() == 0.0 && point.y.fract() == 0.0
}
