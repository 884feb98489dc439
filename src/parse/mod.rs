pub mod ast;
mod error;
mod lexer;
mod parser;

pub use error::ParseError;

pub(crate) fn parse(s: &str) -> Result<Vec<ast::SignedTerm>, ParseError> {
    parser::Parser::new(s).parse()
}
