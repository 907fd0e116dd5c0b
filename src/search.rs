//! Backtracking search strategies.
//!
//! Both strategies drive a [Car](crate::Car) towards the finish with a
//! depth-first search over a stack of untried `(step, vector)` branches,
//! resetting the car whenever a branch at an earlier step is resumed.

pub use constraint::ConstraintBacktrack;
pub use slow_motion::SlowMotionBacktrack;

mod constraint;
mod slow_motion;
