use crate::common::{NonZeroUInt, UInt};
use crate::roll::Roller;
use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum TableError {
    #[error("total weight of the table does not fit in {} bits", UInt::BITS)]
    WeightOverflow,
}

/// Choices with relative weights, from which one is picked at random.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RandomTable<C> {
    table: Vec<(UInt, C)>,
    total_weight: UInt,
}

impl<C> RandomTable<C> {
    /// # Errors
    ///
    /// Fails if the weights add up to more than [UInt::MAX].
    pub fn new(choices: impl IntoIterator<Item = (UInt, C)>) -> Result<Self, TableError> {
        let table: Vec<_> = choices.into_iter().collect();
        let total_weight = table
            .iter()
            .try_fold(0, |acc: UInt, (weight, _)| acc.checked_add(*weight))
            .ok_or(TableError::WeightOverflow)?;
        Ok(Self {
            table,
            total_weight,
        })
    }

    pub fn table(&self) -> &[(UInt, C)] {
        &self.table
    }

    pub fn total_weight(&self) -> UInt {
        self.total_weight
    }

    /// Picks a choice with the thread-local generator.
    pub fn select(&self) -> Option<&C> {
        self.select_with(&mut rand::thread_rng())
    }

    /// Picks a choice, or `None` if the table is empty or all weights are zero.
    pub fn select_with<R: Roller>(&self, roller: &mut R) -> Option<&C> {
        let total = NonZeroUInt::new(self.total_weight)?;
        let roll = roller.roll(total);
        let mut weight_so_far: UInt = 0;
        self.table
            .iter()
            .find(|(weight, _)| {
                weight_so_far += weight;
                weight_so_far >= roll
            })
            .map(|(_, choice)| choice)
    }
}
