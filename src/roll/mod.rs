mod ctx;
mod error;
mod result;
mod roller;

type RResult<T> = Result<T, RollError>;

pub use ctx::{DefaultRoller, RollContext, DEFAULT_MAX_ROLLS};
pub use error::RollError;
pub use result::RollResult;
pub use roller::Roller;

#[cfg(test)]
pub(crate) use roller::CountingRoller;

/// Anything that can be rolled into a [RollResult].
pub trait Rollable {
    fn roll_with<R: Roller>(&self, roller: &mut R) -> RollResult;

    /// Rolls with the thread-local generator. Every call draws fresh dice.
    fn roll(&self) -> RollResult {
        self.roll_with(&mut rand::thread_rng())
    }
}
