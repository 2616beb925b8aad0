use thiserror::Error;

/// Failure of one scan.
///
/// Raised when, after all separator and comment skipping, no declared
/// kind's pattern matches at the current position. The scan aborts
/// immediately; there is no recovery or partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// `context` holds at most the first 20 characters of the
    /// unconsumed input; `line` is 0-based.
    #[error("no token matched {context:?}, line {line}")]
    NoTokenMatched { context: String, line: usize },
}
