use crate::common::{Int, Sign};
use crate::parse::{
    self,
    ast::{Dice, Resolve, SignedTerm, Term},
    ParseError,
};
use crate::roll::{RollResult, Rollable, Roller};
use std::fmt::{self, Write};
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

/// A sum of signed constants and dice rolls, such as `1d20+4` or `-100+2d6+1d6`.
///
/// Expressions are plain values: composing two of them with `+` or `-` builds a
/// new expression holding copies of both term lists, and every roll draws fresh
/// dice for every term.
///
/// ```
/// # use dice_expression::{Expression, Rollable};
/// let attack: Expression = "1d20+5".parse().unwrap();
/// let penalty: Expression = "1d4".parse().unwrap();
/// let total = &attack - &penalty;
/// assert_eq!(total.to_string(), "1d20+5-1d4");
///
/// let roll = total.roll();
/// assert!((2..=24).contains(&roll.result));
/// assert_eq!(roll.log, "1d20+5-1d4");
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Expression {
    terms: Vec<SignedTerm>,
}

impl Expression {
    /// Builds an expression from already validated terms.
    pub fn new(terms: Vec<SignedTerm>) -> Self {
        Self { terms }
    }

    /// # Errors
    ///
    /// Returns a [ParseError] naming the offending token(s) if `s` is not valid
    /// dice notation.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        parse::parse(s).map(Self::new).map_err(|err| {
            tracing::debug!(input = s, error = %err, "failed to parse dice expression");
            err
        })
    }

    pub fn terms(&self) -> &[SignedTerm] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether every roll of this expression gives the same result.
    pub fn is_constant(&self) -> bool {
        self.draws() == 0
    }

    /// The canonical text form of this expression.
    pub fn description(&self) -> String {
        self.to_string()
    }

    /// Number of dice drawn by one roll.
    pub fn draws(&self) -> usize {
        self.terms.iter().map(Resolve::draws).sum()
    }

    pub fn inverted(&self) -> Self {
        self.terms.iter().map(|t| t.inverted()).collect()
    }

    fn concat(&self, other: impl Iterator<Item = SignedTerm>) -> Self {
        self.terms.iter().copied().chain(other).collect()
    }
}

impl Rollable for Expression {
    fn roll_with<R: Roller>(&self, roller: &mut R) -> RollResult {
        let total: Int = self.terms.iter().map(|t| t.resolve(roller)).sum();
        let log = self.description();
        tracing::debug!(expression = %log, total, "rolled");
        RollResult::new(total, log)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut full = String::new();
        for term in &self.terms {
            write!(full, "{}", term)?;
        }
        let plus = Sign::Plus.as_char();
        f.write_str(full.strip_prefix(plus).unwrap_or(&full))
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromIterator<SignedTerm> for Expression {
    fn from_iter<I: IntoIterator<Item = SignedTerm>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<SignedTerm> for Expression {
    fn from(term: SignedTerm) -> Self {
        Self::new(vec![term])
    }
}

impl From<Term> for Expression {
    fn from(term: Term) -> Self {
        SignedTerm::plus(term).into()
    }
}

impl From<Dice> for Expression {
    fn from(dice: Dice) -> Self {
        Term::Dice(dice).into()
    }
}

impl Add for &Expression {
    type Output = Expression;

    fn add(self, rhs: Self) -> Self::Output {
        self.concat(rhs.terms.iter().copied())
    }
}

impl Sub for &Expression {
    type Output = Expression;

    fn sub(self, rhs: Self) -> Self::Output {
        self.concat(rhs.terms.iter().map(|t| t.inverted()))
    }
}

impl Neg for &Expression {
    type Output = Expression;

    fn neg(self) -> Self::Output {
        self.inverted()
    }
}

macro_rules! forward_owned_bin_op {
    ($Name:ident, $fn_name:ident) => {
        impl $Name for Expression {
            type Output = Expression;

            fn $fn_name(self, rhs: Self) -> Self::Output {
                (&self).$fn_name(&rhs)
            }
        }
    };
}

forward_owned_bin_op!(Add, add);
forward_owned_bin_op!(Sub, sub);

impl Neg for Expression {
    type Output = Expression;

    fn neg(self) -> Self::Output {
        -&self
    }
}

/// Parses `text` as dice notation.
///
/// # Errors
///
/// See [Expression::parse].
pub fn parse(text: &str) -> Result<Expression, ParseError> {
    Expression::parse(text)
}

/// Rolls `expr` once with the thread-local generator.
pub fn roll(expr: &Expression) -> RollResult {
    expr.roll()
}

/// `a` followed by `b`.
pub fn add(a: &Expression, b: &Expression) -> Expression {
    a + b
}

/// `a` followed by `b` with every sign of `b` inverted.
pub fn subtract(a: &Expression, b: &Expression) -> Expression {
    a - b
}

pub fn describe(expr: &Expression) -> String {
    expr.description()
}
