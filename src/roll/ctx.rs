use super::{error::RollError, roller::Roller, RResult, RollResult, Rollable};
use crate::expr::Expression;

pub type DefaultRoller = rand::rngs::ThreadRng;

pub const DEFAULT_MAX_ROLLS: usize = 1000;

/// Rolls expressions with a fixed roller, optionally refusing to draw more
/// than `max_rolls` dice in total until [RollContext::reset] is called.
pub struct RollContext<R = DefaultRoller> {
    roller: R,
    budget: Option<usize>,
    drawn: usize,
}

impl<R: Roller> RollContext<R> {
    pub fn new(max_rolls: Option<usize>, roller: R) -> Self {
        Self {
            roller,
            budget: max_rolls,
            drawn: 0,
        }
    }

    pub fn new_bounded(max_rolls: usize, roller: R) -> Self {
        Self::new(Some(max_rolls), roller)
    }

    pub fn new_unbounded(roller: R) -> Self {
        Self::new(None, roller)
    }

    pub fn max_rolls(&self) -> Option<usize> {
        self.budget
    }

    pub fn rolls(&self) -> usize {
        self.drawn
    }

    pub fn reset(&mut self) {
        self.drawn = 0;
    }

    fn reserve(&mut self, draws: usize) -> RResult<()> {
        let requested = self.drawn.saturating_add(draws);
        if let Some(max) = self.budget.filter(|&max| requested > max) {
            tracing::debug!(requested, max, "roll budget exceeded");
            return Err(RollError::TooManyRolls { requested, max });
        }
        self.drawn = requested;
        Ok(())
    }

    /// # Errors
    ///
    /// Fails with [RollError::TooManyRolls], without drawing any dice, if
    /// rolling `expr` would go over the budget.
    pub fn eval(&mut self, expr: &Expression) -> RResult<RollResult> {
        self.reserve(expr.draws())?;
        Ok(expr.roll_with(&mut self.roller))
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new_bounded(DEFAULT_MAX_ROLLS, rand::thread_rng())
    }
}
