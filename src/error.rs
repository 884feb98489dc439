#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    #[error("{0}")]
    ParseError(#[from] crate::parse::ParseError),
    #[error("{0}")]
    RollError(#[from] crate::roll::RollError),
    #[error("{0}")]
    TableError(#[from] crate::table::TableError),
    #[error("{0}")]
    GroupError(#[from] crate::common::GroupError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
