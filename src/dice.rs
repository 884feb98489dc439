use crate::{
    expr::Expression,
    parse::ast::{Dice, Resolve},
    roll::{RollResult, Rollable, Roller},
};

/// A coin.
pub const D2: Dice = Dice::single(2);
/// A tetrahedron.
pub const D4: Dice = Dice::single(4);
/// A cube.
pub const D6: Dice = Dice::single(6);
/// An octahedron.
pub const D8: Dice = Dice::single(8);
/// A decahedron.
pub const D10: Dice = Dice::single(10);
/// A dodecahedron.
pub const D12: Dice = Dice::single(12);
/// An icosahedron.
pub const D20: Dice = Dice::single(20);
/// The percentile die.
pub const D100: Dice = Dice::single(100);

impl Dice {
    pub fn expression(&self) -> Expression {
        Expression::from(*self)
    }

    /// The same die rolled `repetitions` times.
    pub const fn times(self, repetitions: crate::common::UInt) -> Self {
        Self::new(repetitions, self.faces)
    }
}

impl Rollable for Dice {
    fn roll_with<R: Roller>(&self, roller: &mut R) -> RollResult {
        RollResult::new(self.resolve(roller), self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPETITIONS: usize = 100;

    #[test]
    fn test_zero_faces_rolls_zero() {
        for _ in 0..REPETITIONS {
            assert_eq!(Dice::single(0).roll().result, 0);
        }
    }

    #[test]
    fn test_one_face_rolls_one() {
        let die = Dice::single(1);
        let total: i64 = (0..REPETITIONS).map(|_| die.roll().result).sum();
        assert_eq!(total, 100);
        assert_eq!(Dice::new(100, 1).roll().result, 100);
    }

    #[test]
    fn test_multiple_dice() {
        let roll = Dice::new(10, 3).roll().result;
        assert!((10..=30).contains(&roll));
    }

    #[test]
    fn test_standard_dice_in_range() {
        for die in [D2, D4, D6, D8, D10, D12, D20, D100] {
            let max = i64::from(die.faces);
            for _ in 0..REPETITIONS {
                assert!((1..=max).contains(&die.roll().result));
            }
        }
    }

    #[test]
    fn test_description() {
        assert_eq!(D2.to_string(), "1d2");
        assert_eq!(D4.to_string(), "1d4");
        assert_eq!(D6.to_string(), "1d6");
        assert_eq!(D8.to_string(), "1d8");
        assert_eq!(D10.to_string(), "1d10");
        assert_eq!(D12.to_string(), "1d12");
        assert_eq!(D20.to_string(), "1d20");
        assert_eq!(D100.to_string(), "1d100");
        assert_eq!(Dice::new(3, 6).to_string(), "3d6");
        assert_eq!(D6.times(3), Dice::new(3, 6));
    }

    #[test]
    fn test_roll_log_matches_expression() {
        let roll = D20.roll();
        assert_eq!(roll.log, "1d20");
        assert_eq!(D20.expression().roll().log, roll.log);
    }
}
