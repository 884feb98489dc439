use crate::common::Int;
use std::fmt;

/// The outcome of a roll together with a log of what was rolled.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct RollResult<T = Int> {
    pub result: T,
    pub log: String,
}

impl<T> RollResult<T> {
    pub fn new(result: T, log: impl Into<String>) -> Self {
        Self {
            result,
            log: log.into(),
        }
    }

    /// Creates a result whose log is every entry of `logs`, each terminated by a newline.
    pub fn with_logs<I>(result: T, logs: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let log = logs.into_iter().fold(String::new(), |mut acc, line| {
            acc.push_str(line.as_ref());
            acc.push('\n');
            acc
        });
        Self { result, log }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RollResult<U> {
        RollResult {
            result: f(self.result),
            log: self.log,
        }
    }
}

impl<T: fmt::Display> fmt::Display for RollResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.log, self.result)
    }
}
