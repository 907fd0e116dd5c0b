use crate::car::Car;
use crate::error::NoSolution;
use crate::math::{Point2d, Vector2d};
use cgmath::prelude::*;
use itertools::Itertools;
use log::debug;

/// An exhaustive depth-first search over all legal moves.
///
/// Unlike [SlowMotionBacktrack](crate::SlowMotionBacktrack) this
/// strategy fans out over every acceleration the car's rule permits,
/// can bound the number of moves, and can resume after a solution to
/// enumerate further, strictly shorter ones.
pub struct ConstraintBacktrack<'c, 't> {
    car: &'c mut Car<'t>,
    finish: Point2d,
    /// Untried `(step, velocity)` branches, least promising pushed first.
    stack: Vec<(usize, Vector2d)>,
    /// Every acceleration the car's rule permits, precomputed.
    accelerations: Vec<Vector2d>,
    /// No branches are opened at or beyond this step index.
    max_steps: Option<usize>,
    /// The path of the best solution found so far.
    best: Option<Vec<Point2d>>,
}

impl<'c, 't> ConstraintBacktrack<'c, 't> {
    /// Creates a search session that exclusively drives `car`.
    ///
    /// The car may already have moved along a fixed prefix; the search
    /// only ever resets down to the step it finds the car at. With
    /// `max_steps` set, no solution will make more than that many moves
    /// in total (the prefix included).
    pub fn new(car: &'c mut Car<'t>, max_steps: Option<usize>) -> Self {
        let finish = car.track().finish();
        let accelerations = car.rule().allowed_accelerations();
        ConstraintBacktrack {
            car,
            finish,
            stack: Vec::new(),
            accelerations,
            max_steps,
            best: None,
        }
    }

    /// Borrows the car this session drives, for read-only inspection
    /// between search steps.
    pub fn car(&self) -> &Car<'t> {
        self.car
    }

    /// Searches until the car stands still on the finish, then tightens
    /// the step bound so the next call can only find a strictly shorter
    /// solution.
    pub fn search_next_solution(&mut self) -> Result<(), NoSolution> {
        // A repeated call resumes with the car still standing on the
        // previous solution's finish, so always take at least one step
        // to backtrack into the remaining branches.
        loop {
            self.search_step()?;
            if self.car.finished() {
                break;
            }
        }
        let path = self.car.path().to_vec();
        debug!("found a solution with {} steps", path.len());
        self.max_steps = Some(path.len().saturating_sub(2));
        self.best = Some(path);
        Ok(())
    }

    /// Enumerates solutions until no strictly shorter one exists, then
    /// leaves the car on the best path found.
    ///
    /// Fails only if no solution was ever found.
    pub fn search(&mut self) -> Result<(), NoSolution> {
        while self.search_next_solution().is_ok() {}
        let best = self.best.clone().ok_or(NoSolution)?;
        debug!("search exhausted, keeping the {} step solution", best.len());
        self.car.set_path(best);
        Ok(())
    }

    /// Opens the branches of the current position, if still below the
    /// step bound, and advances the car by one accepted move,
    /// backtracking as far as necessary.
    fn search_step(&mut self) -> Result<(), NoSolution> {
        let step = self.car.path().len() - 1;
        if self.max_steps.map_or(true, |max| step < max) {
            let pos = self.car.pos();
            let velocity = self.car.velocity();
            let finish = self.finish;
            // Push the candidates farthest from the finish first, so the
            // closest one is popped and tried first.
            let candidates = self
                .accelerations
                .iter()
                .map(|accel| velocity + *accel)
                .sorted_by(|a, b| {
                    let da = (finish - (pos + *a)).magnitude2();
                    let db = (finish - (pos + *b)).magnitude2();
                    db.partial_cmp(&da).expect("distances are never NaN")
                });
            for velocity in candidates {
                self.stack.push((step, velocity));
            }
        }

        // Pop candidates until one succeeds. Unlike the slow motion
        // strategy, revisiting a position is fine: arriving with a
        // different velocity opens different continuations.
        loop {
            let (step, velocity) = self.stack.pop().ok_or(NoSolution)?;
            if step != self.car.path().len() - 1 {
                self.car
                    .reset(step)
                    .expect("the stack only holds steps the car has recorded");
            }
            if self.car.move_by(velocity).is_ok() {
                return Ok(());
            }
        }
    }
}
