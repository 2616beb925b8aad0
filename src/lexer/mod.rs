//! Lexical analysis engine.
//!
//! This module contains the scanning engine and its data model:
//!
//! - Tokenization driven by caller-declared regex patterns
//! - Longest-match selection with declaration-order tie-breaking
//! - Separator and line-comment skipping
//! - Line/column position tracking for error reporting

pub mod lexer;
pub mod tokens;
