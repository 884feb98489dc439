use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

pub fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    // Blanks never end a term, so "3 d6" lexes as two fragments of one term
    #[regex(r"[^+\- \t]+")]
    Fragment,

    #[regex(r"[ \t]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    fn is_term_part(self) -> bool {
        matches!(self, Self::Fragment | Self::Error)
    }
}

/// Splits `s` into sign tokens (`"+"`, `"-"`) and term tokens, after lower-casing it.
pub fn tokenize(s: &str) -> Vec<String> {
    let lowered = s.to_lowercase();
    let mut lexer = lexer(&lowered);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        let mut token = lexer.slice().to_owned();
        if kind.is_term_part() {
            while lexer.peek().map_or(false, |peeked| peeked.is_term_part()) {
                lexer.next();
                token.push_str(lexer.slice());
            }
        }
        tokens.push(token);
    }

    tracing::trace!(input = s, ?tokens, "tokenized");
    tokens
}
