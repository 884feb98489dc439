use crate::common::{Int, NonZeroUInt, UInt};
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

/// A source of uniform die results in `1..=sides`.
pub trait Roller {
    fn roll(&mut self, sides: NonZeroUInt) -> UInt;

    /// Sum of `num` independent rolls.
    fn roll_sum(&mut self, num: UInt, sides: NonZeroUInt) -> Int {
        (0..num).map(|_| Int::from(self.roll(sides))).sum()
    }
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }

    fn roll_sum(&mut self, num: UInt, sides: NonZeroUInt) -> Int {
        Uniform::new_inclusive(1, sides.get())
            .sample_iter(self)
            .take(num as usize)
            .map(Int::from)
            .sum()
    }
}

#[cfg(test)]
pub(crate) use counting::CountingRoller;
