//! The car in the race.

use crate::error::{ResetOutOfRange, RuleViolation};
use crate::math::{LineSegment2d, Point2d, Vector2d};
use crate::rules::AccelerationRule;
use crate::track::Track;
use cgmath::prelude::*;

/// A car moving on the integer grid of a [Track].
///
/// The car records every position it has visited. [move_to](Car::move_to)
/// and [move_by](Car::move_by) are the only way the path grows,
/// [reset](Car::reset) the only way it shrinks; a failed move leaves the
/// car untouched.
#[derive(Clone, Debug)]
pub struct Car<'t> {
    /// The track the car is racing on.
    track: &'t Track,
    /// The rule bounding each velocity change.
    rule: AccelerationRule,
    /// Every position visited so far; never empty, starts at the track's start.
    path: Vec<Point2d>,
    /// The current position, always the last path entry.
    pos: Point2d,
    /// The displacement of the most recent move.
    velocity: Vector2d,
}

impl<'t> Car<'t> {
    /// Places a new car on the start of the track.
    pub fn new(track: &'t Track, rule: AccelerationRule) -> Self {
        Car {
            track,
            rule,
            path: vec![track.start()],
            pos: track.start(),
            velocity: Vector2d::zero(),
        }
    }

    /// True if the car stands still on the finish.
    pub fn finished(&self) -> bool {
        self.pos == self.track.finish() && self.velocity == Vector2d::zero()
    }

    /// Moves the car to an absolute position.
    ///
    /// The straight line from the current position to `target` must not
    /// cross a barrier, and the implied velocity change must be
    /// permitted by the car's acceleration rule.
    pub fn move_to(&mut self, target: Point2d) -> Result<(), RuleViolation> {
        let motion = LineSegment2d::from_ends(self.pos, target);
        self.track.check_collision(&motion)?;
        let velocity = motion.vector();
        let accel = velocity - self.velocity;
        if !self.rule.allows(accel) {
            return Err(RuleViolation::AccelerationNotAllowed(accel));
        }
        self.path.push(target);
        self.pos = target;
        self.velocity = velocity;
        Ok(())
    }

    /// Moves the car by a displacement relative to its position.
    pub fn move_by(&mut self, delta: Vector2d) -> Result<(), RuleViolation> {
        self.move_to(self.pos + delta)
    }

    /// Resets the car to an earlier step of its path.
    ///
    /// `step` indexes the path; the entries behind it are discarded and
    /// position and velocity are recomputed from the remaining tail.
    pub fn reset(&mut self, step: usize) -> Result<(), ResetOutOfRange> {
        if step >= self.path.len() {
            return Err(ResetOutOfRange {
                step,
                len: self.path.len(),
            });
        }
        self.path.truncate(step + 1);
        self.pos = self.path[step];
        self.velocity = if step > 0 {
            self.path[step] - self.path[step - 1]
        } else {
            Vector2d::zero()
        };
        Ok(())
    }

    /// The positions visited so far, oldest first.
    pub fn path(&self) -> &[Point2d] {
        &self.path
    }

    /// The current position.
    pub fn pos(&self) -> Point2d {
        self.pos
    }

    /// The current velocity, the displacement of the most recent move.
    pub fn velocity(&self) -> Vector2d {
        self.velocity
    }

    /// The track the car is racing on.
    pub fn track(&self) -> &'t Track {
        self.track
    }

    /// The acceleration rule in force.
    pub fn rule(&self) -> AccelerationRule {
        self.rule
    }

    /// Replaces the whole path with a previously recorded legal one.
    pub(crate) fn set_path(&mut self, path: Vec<Point2d>) {
        self.pos = *path.last().expect("a recorded path is never empty");
        self.velocity = if path.len() > 1 {
            path[path.len() - 1] - path[path.len() - 2]
        } else {
            Vector2d::zero()
        };
        self.path = path;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::TrackError;

    fn track() -> Track {
        Track::new(10, 10, Point2d::new(2.0, 2.0), Point2d::new(8.0, 2.0), []).unwrap()
    }

    fn walled_track() -> Track {
        let mut track = track();
        track.add_barriers([LineSegment2d::from_ends(
            Point2d::new(4.0, 1.0),
            Point2d::new(4.0, 4.0),
        )]);
        track
    }

    #[test]
    fn fresh_car() {
        let track = track();
        let car = Car::new(&track, AccelerationRule::eight_neighbours());
        assert_eq!(car.path(), &[track.start()]);
        assert_eq!(car.pos(), track.start());
        assert_eq!(car.velocity(), Vector2d::new(0.0, 0.0));
        assert!(!car.finished());
    }

    #[test]
    fn fresh_car_on_a_trivial_track_is_finished() {
        let track =
            Track::new(10, 10, Point2d::new(2.0, 2.0), Point2d::new(2.0, 2.0), []).unwrap();
        let car = Car::new(&track, AccelerationRule::eight_neighbours());
        assert!(car.finished());
    }

    #[test]
    fn moves_accumulate_velocity() {
        let track = track();
        let mut car = Car::new(&track, AccelerationRule::eight_neighbours());
        car.move_by(Vector2d::new(1.0, 0.0)).unwrap();
        car.move_by(Vector2d::new(2.0, 1.0)).unwrap();
        assert_eq!(car.pos(), Point2d::new(5.0, 3.0));
        assert_eq!(car.velocity(), Vector2d::new(2.0, 1.0));
        assert_eq!(car.path().len(), 3);
    }

    #[test]
    fn move_to_and_move_by_agree() {
        let track = track();
        let mut by = Car::new(&track, AccelerationRule::eight_neighbours());
        let mut to = Car::new(&track, AccelerationRule::eight_neighbours());
        by.move_by(Vector2d::new(1.0, 1.0)).unwrap();
        to.move_to(Point2d::new(3.0, 3.0)).unwrap();
        assert_eq!(by.path(), to.path());
        assert_eq!(by.velocity(), to.velocity());
    }

    #[test]
    fn disallowed_acceleration_leaves_the_car_untouched() {
        let track = track();
        let mut car = Car::new(&track, AccelerationRule::eight_neighbours());
        let err = car.move_by(Vector2d::new(2.0, 0.0)).unwrap_err();
        assert_eq!(
            err,
            RuleViolation::AccelerationNotAllowed(Vector2d::new(2.0, 0.0))
        );
        assert_eq!(car.path(), &[track.start()]);
        assert_eq!(car.velocity(), Vector2d::new(0.0, 0.0));
    }

    #[test]
    fn collision_leaves_the_car_untouched() {
        let track = walled_track();
        let mut car = Car::new(&track, AccelerationRule::eight_neighbours());
        car.move_by(Vector2d::new(1.0, 0.0)).unwrap();
        // Next unit move east would cross the wall at x = 4.
        let before = car.path().to_vec();
        let err = car.move_by(Vector2d::new(1.0, 0.0)).unwrap_err();
        assert!(matches!(err, RuleViolation::Collision { .. }));
        assert_eq!(car.path(), before);
        assert_eq!(car.velocity(), Vector2d::new(1.0, 0.0));
    }

    #[test]
    fn landing_exactly_on_a_barrier_collides() {
        let track = walled_track();
        let mut car = Car::new(&track, AccelerationRule::eight_neighbours());
        car.move_by(Vector2d::new(1.0, 0.0)).unwrap();
        let err = car.move_to(Point2d::new(4.0, 2.0)).unwrap_err();
        assert!(matches!(err, RuleViolation::Collision { .. }));
    }

    #[test]
    fn reset_truncates_and_recomputes() {
        let track = track();
        let mut car = Car::new(&track, AccelerationRule::eight_neighbours());
        car.move_by(Vector2d::new(1.0, 0.0)).unwrap();
        car.move_by(Vector2d::new(2.0, 0.0)).unwrap();
        car.move_by(Vector2d::new(2.0, 1.0)).unwrap();

        car.reset(2).unwrap();
        assert_eq!(car.pos(), Point2d::new(5.0, 2.0));
        assert_eq!(car.velocity(), Vector2d::new(2.0, 0.0));
        assert_eq!(car.path().len(), 3);

        car.reset(0).unwrap();
        assert_eq!(car.pos(), track.start());
        assert_eq!(car.velocity(), Vector2d::new(0.0, 0.0));
        assert_eq!(car.path(), &[track.start()]);
    }

    #[test]
    fn reset_out_of_range() {
        let track = track();
        let mut car = Car::new(&track, AccelerationRule::eight_neighbours());
        assert_eq!(car.reset(1), Err(ResetOutOfRange { step: 1, len: 1 }));
    }

    #[test]
    fn track_errors_are_reported_by_construction() {
        // Sanity check that a bad track never reaches a car.
        let err = Track::new(10, 10, Point2d::new(0.5, 1.0), Point2d::new(2.0, 2.0), []);
        assert!(matches!(err, Err(TrackError::NonIntegralEndpoint(_))));
    }
}
