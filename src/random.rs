use crate::common::Int;
use rand::{seq::SliceRandom, Rng};

/// A uniform integer between `a` and `b` inclusive, in whichever order they are given.
pub fn random_integer<R: Rng + ?Sized>(rng: &mut R, a: Int, b: Int) -> Int {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    rng.gen_range(low..=high)
}

/// Random picks out of a slice.
pub trait RandomPick {
    type Item;

    /// One element, or `None` if empty.
    fn random_choice<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Self::Item>;

    /// Up to `amount` elements from distinct positions.
    fn random_elements<R: Rng + ?Sized>(&self, amount: usize, rng: &mut R) -> Vec<&Self::Item>;

    /// `amount` elements picked independently, so repeats are possible.
    fn random_sequence<R: Rng + ?Sized>(&self, amount: usize, rng: &mut R) -> Vec<&Self::Item>;
}

impl<T> RandomPick for [T] {
    type Item = T;

    fn random_choice<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        self.choose(rng)
    }

    fn random_elements<R: Rng + ?Sized>(&self, amount: usize, rng: &mut R) -> Vec<&T> {
        self.choose_multiple(rng, amount).collect()
    }

    fn random_sequence<R: Rng + ?Sized>(&self, amount: usize, rng: &mut R) -> Vec<&T> {
        if self.is_empty() {
            return Vec::new();
        }
        (0..amount).filter_map(|_| self.choose(rng)).collect()
    }
}
