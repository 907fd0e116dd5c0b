//! The track, that is the playground for the game.

use crate::error::{RuleViolation, TrackError};
use crate::math::{is_integral, LineSegment2d, Point2d};

/// A bounded grid with a start, a finish and a set of barriers.
///
/// The rectangular boundary from `(0, 0)` to `(width + 1, height + 1)`
/// is seeded as the first four barriers and is never removed; barriers
/// added later keep their insertion order behind it.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    width: u32,
    height: u32,
    start: Point2d,
    finish: Point2d,
    barriers: Vec<LineSegment2d>,
}

impl Track {
    /// Creates a track.
    ///
    /// `start` and `finish` must have integral coordinates and lie
    /// within `[1, width] x [1, height]`. The given barriers are
    /// appended behind the boundary.
    pub fn new(
        width: u32,
        height: u32,
        start: Point2d,
        finish: Point2d,
        barriers: impl IntoIterator<Item = LineSegment2d>,
    ) -> Result<Self, TrackError> {
        if width == 0 || height == 0 {
            return Err(TrackError::ZeroBounds);
        }
        for point in [start, finish] {
            if !is_integral(point) {
                return Err(TrackError::NonIntegralEndpoint(point));
            }
            let in_x = point.x >= 1.0 && point.x <= width as f64;
            let in_y = point.y >= 1.0 && point.y <= height as f64;
            if !(in_x && in_y) {
                return Err(TrackError::OutOfBounds(point));
            }
        }

        let p0 = Point2d::new(0.0, 0.0);
        let p1 = Point2d::new(width as f64 + 1.0, 0.0);
        let p2 = Point2d::new(width as f64 + 1.0, height as f64 + 1.0);
        let p3 = Point2d::new(0.0, height as f64 + 1.0);
        let mut track = Track {
            width,
            height,
            start,
            finish,
            barriers: vec![
                LineSegment2d::from_ends(p0, p1),
                LineSegment2d::from_ends(p1, p2),
                LineSegment2d::from_ends(p2, p3),
                LineSegment2d::from_ends(p3, p0),
            ],
        };
        track.add_barriers(barriers);
        Ok(track)
    }

    /// Appends barriers to the track.
    ///
    /// Must only be called during setup; the barrier list must not
    /// change while a search session is driving a car on the track.
    pub fn add_barriers(&mut self, barriers: impl IntoIterator<Item = LineSegment2d>) {
        self.barriers.extend(barriers);
    }

    /// Checks a motion against every barrier and reports the first
    /// collision found.
    ///
    /// Barriers are tested in insertion order, the boundary first.
    pub fn check_collision(&self, motion: &LineSegment2d) -> Result<(), RuleViolation> {
        for barrier in &self.barriers {
            if let Some(point) = motion.intersection(barrier) {
                return Err(RuleViolation::Collision {
                    motion: *motion,
                    barrier: *barrier,
                    point,
                });
            }
        }
        Ok(())
    }

    /// The width of the playable area.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The height of the playable area.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The start point.
    pub fn start(&self) -> Point2d {
        self.start
    }

    /// The finish point.
    pub fn finish(&self) -> Point2d {
        self.finish
    }

    /// The barriers in insertion order, boundary segments first.
    pub fn barriers(&self) -> &[LineSegment2d] {
        &self.barriers
    }

    /// The drawable extent `(xmin, ymin, xmax, ymax)` of the track,
    /// including the boundary.
    pub fn bbox(&self) -> (u32, u32, u32, u32) {
        (0, 0, self.width + 1, self.height + 1)
    }
}
