use alloc::string::String;

use thiserror::Error;

/// Errors surfaced by pattern-application operations.
///
/// A pattern that simply does not match is not an error: those operations
/// return `Ok(None)` and reset the match state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The pattern source was rejected by the matching engine.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

#[cfg(feature = "regex")]
impl From<regex::Error> for ScanError {
    fn from(err: regex::Error) -> Self {
        use alloc::string::ToString;

        ScanError::InvalidPattern(err.to_string())
    }
}

#[cfg(feature = "regex")]
impl From<regex_automata::meta::BuildError> for ScanError {
    fn from(err: regex_automata::meta::BuildError) -> Self {
        use alloc::string::ToString;

        ScanError::InvalidPattern(err.to_string())
    }
}
