use super::{ast::*, error::ParseError, lexer::tokenize};
use crate::common::{group_exact, Sign};

type PResult<T> = Result<T, ParseError>;

pub struct Parser {
    tokens: Vec<String>,
}

impl Parser {
    pub fn new(s: &str) -> Self {
        Self::from_tokens(tokenize(s))
    }

    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn parse(mut self) -> PResult<Vec<SignedTerm>> {
        let Some(first) = self.tokens.first() else {
            return Ok(Vec::new());
        };

        // An expression implicitly starts positive
        if first.parse::<Sign>().is_err() {
            self.tokens.insert(0, Sign::Plus.to_string());
        }

        let pairs = group_exact(&self.tokens, 2).map_err(|_| {
            let last = self.tokens.last().map_or("", String::as_str);
            ParseError::can_not_end_with_token(last)
        })?;

        pairs
            .into_iter()
            .map(|pair| Self::parse_pair(&pair[0], &pair[1]))
            .collect()
    }

    fn parse_pair(sign: &str, term: &str) -> PResult<SignedTerm> {
        let sign: Sign = sign
            .parse()
            .map_err(|_| ParseError::not_a_valid_token(sign))?;
        if term.parse::<Sign>().is_ok() {
            return Err(ParseError::token_can_not_follow_token(sign, term));
        }
        let term: Term = term
            .parse()
            .map_err(|_| ParseError::not_a_valid_token(term))?;
        Ok(SignedTerm::new(sign, term))
    }
}
