use std::fmt::{self, Write};
use std::num::NonZeroU32;
use std::str::FromStr;

pub type Int = i64;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

/// The algebraic sign in front of every term of an expression.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub const fn apply(self, value: Int) -> Int {
        match self {
            Self::Plus => value,
            Self::Minus => -value,
        }
    }

    pub const fn invert(self) -> Self {
        match self {
            Self::Plus => Self::Minus,
            Self::Minus => Self::Plus,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.as_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[error("{0:?} is not a sign")]
pub struct ParseSignError(pub String);

impl FromStr for Sign {
    type Err = ParseSignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Plus),
            "-" => Ok(Self::Minus),
            _ => Err(ParseSignError(s.to_owned())),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum GroupError {
    #[error("cannot group {len} items into groups of {size}")]
    SizeNotMultiple { len: usize, size: usize },
}

/// Splits `items` into consecutive groups of exactly `size` elements, in order.
///
/// ```
/// # use dice_expression::group_exact;
/// let groups = group_exact(&[1, 2, 3, 4, 5, 6], 3).unwrap();
/// assert_eq!(groups, vec![&[1, 2, 3][..], &[4, 5, 6][..]]);
/// ```
///
/// # Errors
///
/// Fails when `size` is zero or the length of `items` is not a multiple of it.
pub fn group_exact<T>(items: &[T], size: usize) -> Result<Vec<&[T]>, GroupError> {
    if size == 0 || items.len() % size != 0 {
        return Err(GroupError::SizeNotMultiple {
            len: items.len(),
            size,
        });
    }
    Ok(items.chunks_exact(size).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_apply() {
        assert_eq!(Sign::Plus.apply(4), 4);
        assert_eq!(Sign::Minus.apply(4), -4);
        assert_eq!(Sign::Minus.apply(-4), 4);
    }

    #[test]
    fn test_sign_invert() {
        assert_eq!(Sign::Plus.invert(), Sign::Minus);
        assert_eq!(Sign::Minus.invert(), Sign::Plus);
    }

    #[test]
    fn test_sign_from_str() {
        assert_eq!("+".parse::<Sign>(), Ok(Sign::Plus));
        assert_eq!("-".parse::<Sign>(), Ok(Sign::Minus));
        assert_eq!("+-".parse::<Sign>(), Err(ParseSignError("+-".into())));
        assert!("".parse::<Sign>().is_err());
        assert_eq!(Sign::Minus.to_string(), "-");
    }

    #[test]
    fn test_group_exact() {
        let groups = group_exact(&["a"; 6], 2).unwrap();
        assert_eq!(groups, vec![&["a", "a"][..]; 3]);
    }

    #[test]
    fn test_group_exact_not_multiple() {
        assert_eq!(
            group_exact(&[1, 2, 3], 2),
            Err(GroupError::SizeNotMultiple { len: 3, size: 2 })
        );
        assert!(group_exact(&[1, 2], 0).is_err());
    }

    #[test]
    fn test_group_exact_empty() {
        let empty: [i32; 0] = [];
        assert!(group_exact(&empty, 3).unwrap().is_empty());
    }
}
