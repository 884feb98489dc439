use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    #[error("{token:?} is not a valid token")]
    NotAValidToken { token: String },
    #[error("{token2:?} cannot follow {token1:?}")]
    TokenCanNotFollowToken { token1: String, token2: String },
    #[error("an expression cannot end with {token:?}")]
    CanNotEndWithToken { token: String },
}

impl ParseError {
    pub(crate) fn not_a_valid_token(token: impl ToString) -> Self {
        Self::NotAValidToken {
            token: token.to_string(),
        }
    }

    pub(crate) fn token_can_not_follow_token(token1: impl ToString, token2: impl ToString) -> Self {
        Self::TokenCanNotFollowToken {
            token1: token1.to_string(),
            token2: token2.to_string(),
        }
    }

    pub(crate) fn can_not_end_with_token(token: impl ToString) -> Self {
        Self::CanNotEndWithToken {
            token: token.to_string(),
        }
    }

    /// The offending tokens, in the order they appeared.
    pub fn tokens(&self) -> Vec<&str> {
        match self {
            Self::NotAValidToken { token } | Self::CanNotEndWithToken { token } => vec![token.as_str()],
            Self::TokenCanNotFollowToken { token1, token2 } => vec![token1.as_str(), token2.as_str()],
        }
    }
}
