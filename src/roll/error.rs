use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum RollError {
    #[error("too many dice rolled: {requested} requested, at most {max} allowed")]
    TooManyRolls { requested: usize, max: usize },
}
