use crate::common::*;
use crate::roll::Roller;
use std::fmt;
use std::str::FromStr;

/// Evaluation of a single term against a [Roller].
#[enum_dispatch::enum_dispatch]
pub trait Resolve {
    fn resolve<R: Roller>(&self, roller: &mut R) -> Int;

    /// Number of dice drawn by one call to [Resolve::resolve].
    fn draws(&self) -> usize {
        0
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[enum_dispatch::enum_dispatch(Resolve)]
pub enum Term {
    Constant(Constant),
    Dice(Dice),
}

impl Term {
    pub const fn constant(value: Int) -> Self {
        Self::Constant(Constant(value))
    }

    pub const fn dice(repetitions: UInt, faces: UInt) -> Self {
        Self::Dice(Dice::new(repetitions, faces))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(x) => fmt::Display::fmt(x, f),
            Self::Dice(x) => fmt::Display::fmt(x, f),
        }
    }
}

impl FromStr for Term {
    type Err = ParseDiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(value) = s.parse::<Int>() {
            return Ok(Self::constant(value));
        }
        s.parse::<Dice>().map(Self::Dice)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Constant(pub Int);

impl Resolve for Constant {
    fn resolve<R: Roller>(&self, _roller: &mut R) -> Int {
        self.0
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// `repetitions` dice with `faces` faces each, summed together.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dice {
    pub repetitions: UInt,
    pub faces: UInt,
}

impl Dice {
    pub const fn new(repetitions: UInt, faces: UInt) -> Self {
        Self { repetitions, faces }
    }

    pub const fn single(faces: UInt) -> Self {
        Self::new(1, faces)
    }
}

impl Resolve for Dice {
    fn resolve<R: Roller>(&self, roller: &mut R) -> Int {
        // A zero-sided die never contributes
        match NonZeroUInt::new(self.faces) {
            Some(faces) => roller.roll_sum(self.repetitions, faces),
            None => 0,
        }
    }

    fn draws(&self) -> usize {
        if self.faces == 0 {
            0
        } else {
            self.repetitions as usize
        }
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.repetitions, self.faces)
    }
}

impl FromStr for Dice {
    type Err = ParseDiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (repetitions, faces) = s.split_once('d').ok_or(ParseDiceError::NoDelimiter)?;
        let repetitions = repetitions
            .parse()
            .map_err(ParseDiceError::InvalidRepetitions)?;
        let faces = faces.parse().map_err(ParseDiceError::InvalidFaces)?;
        Ok(Self::new(repetitions, faces))
    }
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseDiceError {
    #[error("cannot parse string as dice without 'd' delimiter")]
    NoDelimiter,
    #[error("invalid number of dice: {0}")]
    InvalidRepetitions(std::num::ParseIntError),
    #[error("invalid number of faces: {0}")]
    InvalidFaces(std::num::ParseIntError),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SignedTerm {
    pub sign: Sign,
    pub term: Term,
}

impl SignedTerm {
    pub const fn new(sign: Sign, term: Term) -> Self {
        Self { sign, term }
    }

    pub const fn plus(term: Term) -> Self {
        Self::new(Sign::Plus, term)
    }

    pub const fn minus(term: Term) -> Self {
        Self::new(Sign::Minus, term)
    }

    pub const fn inverted(self) -> Self {
        Self::new(self.sign.invert(), self.term)
    }
}

impl Resolve for SignedTerm {
    fn resolve<R: Roller>(&self, roller: &mut R) -> Int {
        self.sign.apply(self.term.resolve(roller))
    }

    fn draws(&self) -> usize {
        self.term.draws()
    }
}

impl fmt::Display for SignedTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign, self.term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::CountingRoller;

    #[test]
    fn test_term_from_str() {
        assert_eq!("5".parse::<Term>().unwrap(), Term::constant(5));
        assert_eq!("-5".parse::<Term>().unwrap(), Term::constant(-5));
        assert_eq!("3d6".parse::<Term>().unwrap(), Term::dice(3, 6));
        assert_eq!("0d0".parse::<Term>().unwrap(), Term::dice(0, 0));
        assert_eq!("x".parse::<Term>(), Err(ParseDiceError::NoDelimiter));
    }

    #[test]
    fn test_dice_from_str() {
        assert_eq!("1d20".parse::<Dice>().unwrap(), Dice::new(1, 20));
        assert_eq!("14d4".parse::<Dice>().unwrap(), Dice::new(14, 4));
        assert_eq!("1".parse::<Dice>(), Err(ParseDiceError::NoDelimiter));
        assert_eq!(
            "d20".parse::<Dice>(),
            Err(ParseDiceError::InvalidRepetitions("".parse::<UInt>().unwrap_err()))
        );
        assert_eq!(
            "2d".parse::<Dice>(),
            Err(ParseDiceError::InvalidFaces("".parse::<UInt>().unwrap_err()))
        );
        assert_eq!(
            "hd2".parse::<Dice>(),
            Err(ParseDiceError::InvalidRepetitions("h".parse::<UInt>().unwrap_err()))
        );
        assert!("1d2d3".parse::<Dice>().is_err());
        assert!("3h5".parse::<Dice>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Term::dice(3, 6).to_string(), "3d6");
        assert_eq!(Term::constant(-4).to_string(), "-4");
        assert_eq!(SignedTerm::minus(Term::dice(1, 4)).to_string(), "-1d4");
        assert_eq!(SignedTerm::plus(Term::constant(-4)).to_string(), "+-4");
    }

    #[test]
    fn test_resolve() {
        let mut roller = CountingRoller::starting_at(1);
        assert_eq!(Term::constant(7).resolve(&mut roller), 7);
        assert_eq!(Term::dice(3, 6).resolve(&mut roller), 1 + 2 + 3);
        assert_eq!(SignedTerm::minus(Term::dice(2, 6)).resolve(&mut roller), -(4 + 5));
    }

    #[test]
    fn test_resolve_degenerate_dice() {
        let mut roller = CountingRoller::starting_at(3);
        assert_eq!(Term::dice(100, 0).resolve(&mut roller), 0);
        assert_eq!(Term::dice(0, 6).resolve(&mut roller), 0);
        assert_eq!(Term::dice(100, 0).draws(), 0);
        assert_eq!(Term::dice(100, 6).draws(), 100);
        assert_eq!(Term::constant(100).draws(), 0);
    }
}
