//! Error types of the game.

use crate::math::{LineSegment2d, Point2d, Vector2d};
use thiserror::Error;

/// A move that violates the rules of the game.
///
/// Both variants are expected signals during a backtracking search:
/// the strategies recover from them by trying the next candidate move.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum RuleViolation {
    /// The motion crossed a barrier.
    #[error("collision of move {motion:?} with barrier {barrier:?} at point {point:?}")]
    Collision {
        /// The attempted motion.
        motion: LineSegment2d,
        /// The barrier in the way.
        barrier: LineSegment2d,
        /// Where the motion meets the barrier.
        point: Point2d,
    },
    /// The velocity change exceeds what the acceleration rule permits.
    #[error("acceleration {0:?} is beyond permissible bounds")]
    AccelerationNotAllowed(Vector2d),
}

/// A reset to a step outside the car's recorded path.
///
/// A search driver only ever resets to steps it has seen the car record,
/// so hitting this error indicates a bug in the driver rather than a
/// condition to recover from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("cannot reset to step {step}, the path has {len} entries")]
pub struct ResetOutOfRange {
    /// The requested step index.
    pub step: usize,
    /// The length of the path at the time of the request.
    pub len: usize,
}

/// The search space was exhausted without reaching the finish.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("no solution found")]
pub struct NoSolution;

/// An invalid track construction.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum TrackError {
    /// Width or height is zero.
    #[error("track bounds must be larger than zero")]
    ZeroBounds,
    /// Start or finish has a fractional coordinate.
    #[error("start and finish must have integral coordinates, got {0:?}")]
    NonIntegralEndpoint(Point2d),
    /// Start or finish lies outside the playable area.
    #[error("point {0:?} is outside the track bounds")]
    OutOfBounds(Point2d),
}
