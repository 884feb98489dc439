//! Parsing and rolling of tabletop dice notation such as `3d6+2-1d4`, plus
//! weighted random tables.
//!
//! ```
//! use dice_expression::{Expression, Rollable};
//!
//! let expr: Expression = "2d6 + 3".parse().unwrap();
//! let roll = expr.roll();
//! assert!((5..=15).contains(&roll.result));
//! assert_eq!(roll.log, "2d6+3");
//! ```

mod common;
mod dice;
mod error;
mod expr;
mod parse;
mod random;
mod roll;
mod table;

pub use common::{group_exact, GroupError, Int, NonZeroUInt, ParseSignError, Sign, UInt};
pub use dice::{D10, D100, D12, D2, D20, D4, D6, D8};
pub use error::{Error, Result};
pub use expr::{add, describe, parse, roll, subtract, Expression};
pub use parse::ast::{Constant, Dice, ParseDiceError, Resolve, SignedTerm, Term};
pub use parse::ParseError;
pub use random::{random_integer, RandomPick};
pub use roll::{
    DefaultRoller, RollContext, RollError, RollResult, Rollable, Roller, DEFAULT_MAX_ROLLS,
};
pub use table::{RandomTable, TableError};

/// Parses `text` and rolls it once.
///
/// # Errors
///
/// Fails with [Error::ParseError] if `text` is not valid dice notation.
pub fn roll_str(text: &str) -> Result<RollResult> {
    Ok(Expression::parse(text)?.roll())
}
