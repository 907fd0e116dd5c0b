//! Mathematical structs and functions.
//!
//! The game is played on an affine two dimensional space: points,
//! vectors as differences of points, and line segments defined by a
//! start and an end point.

use cgmath::{Point2, Vector2};
pub use segment::LineSegment2d;
pub use util::*;

mod segment;
mod util;

/// A 2D point
pub type Point2d = Point2<f64>;

/// A 2D vector
pub type Vector2d = Vector2<f64>;
