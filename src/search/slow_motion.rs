use crate::car::Car;
use crate::error::NoSolution;
use crate::math::{Point2d, Vector2d};
use cgmath::prelude::*;
use log::{debug, trace};

/// A backtrack strategy that restricts itself to very slow motions.
///
/// Each move displaces the car by at most one unit, so this will
/// certainly not find an optimal solution most of the times. But it
/// finds one without too much erratic wandering about: once a sweep
/// direction is accepted the search sticks to it instead of re-aiming
/// at the finish on every step.
pub struct SlowMotionBacktrack<'c, 't> {
    car: &'c mut Car<'t>,
    finish: Point2d,
    /// Untried `(step, direction)` branches, least promising pushed first.
    stack: Vec<(usize, Vector2d)>,
    /// The direction the sweep is currently committed to.
    search_dir: Vector2d,
    /// Whether to keep sweeping in `search_dir` instead of re-aiming at
    /// the finish.
    stick: bool,
}

impl<'c, 't> SlowMotionBacktrack<'c, 't> {
    /// Creates a search session that exclusively drives `car`.
    pub fn new(car: &'c mut Car<'t>) -> Self {
        let finish = car.track().finish();
        SlowMotionBacktrack {
            car,
            finish,
            stack: Vec::new(),
            search_dir: Vector2d::zero(),
            stick: false,
        }
    }

    /// Drives the car until it stands still on the finish.
    pub fn search(&mut self) -> Result<(), NoSolution> {
        self.search_dir = Vector2d::zero();
        self.stick = false;
        while !self.car.finished() {
            self.search_step()?;
        }
        debug!("found a path with {} steps", self.car.path().len());
        Ok(())
    }

    /// Expands the current position and advances the car by one
    /// accepted move, backtracking as far as necessary.
    fn search_step(&mut self) -> Result<(), NoSolution> {
        // From the current position, push all candidate moves. The
        // orderings place the direction nearest the aim last, so the
        // stack pops it first.
        let step = self.car.path().len() - 1;
        let direct = self.finish - self.car.pos();
        let aim = if direct == Vector2d::zero() || !self.stick {
            direct
        } else {
            self.search_dir
        };
        let dirs = Self::sweep_order(aim);
        self.search_dir = *dirs.last().expect("sweep orders are never empty");
        for dir in &dirs {
            self.stack.push((step, *dir));
        }

        // Pop candidates until one succeeds.
        loop {
            let (step, dir) = self.stack.pop().ok_or(NoSolution)?;
            if step != self.car.path().len() - 1 {
                trace!("backtracking to step {}", step);
                self.car
                    .reset(step)
                    .expect("the stack only holds steps the car has recorded");
                self.search_dir = dir;
            }
            if dir != Vector2d::zero() && self.car.path().contains(&(self.car.pos() + dir)) {
                // Unit moves never profit from revisiting a position.
                continue;
            }
            match self.car.move_by(dir) {
                Ok(()) => {
                    self.stick = dir != self.search_dir;
                    return Ok(());
                }
                Err(_) => continue,
            }
        }
    }

    /// The four unit directions in the priority ordering keyed by the
    /// open quadrant `aim` points into, lowest priority first.
    fn sweep_order(aim: Vector2d) -> Vec<Vector2d> {
        let north = Vector2d::new(0.0, 1.0);
        let east = Vector2d::new(1.0, 0.0);
        let south = Vector2d::new(0.0, -1.0);
        let west = Vector2d::new(-1.0, 0.0);
        if aim.x > 0.0 && aim.y >= 0.0 {
            vec![south, west, north, east]
        } else if aim.x <= 0.0 && aim.y > 0.0 {
            vec![east, south, west, north]
        } else if aim.x < 0.0 && aim.y <= 0.0 {
            vec![north, east, south, west]
        } else if aim.x >= 0.0 && aim.y < 0.0 {
            vec![west, north, east, south]
        } else {
            // Standing on the aim; the only sensible move is to stay.
            vec![Vector2d::zero()]
        }
    }
}
