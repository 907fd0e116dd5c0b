pub use car::Car;
pub use cgmath;
pub use error::{NoSolution, ResetOutOfRange, RuleViolation, TrackError};
pub use rules::{AccelerationRule, Norm};
pub use search::{ConstraintBacktrack, SlowMotionBacktrack};
pub use track::Track;

mod car;
mod error;
pub mod math;
mod rules;
mod search;
mod track;
