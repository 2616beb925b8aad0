//! Error types for scanning.
//!
//! This module defines the error type returned by the lexer. It
//! includes:
//!
//! - The error raised when no pattern matches the unconsumed input
//! - A bounded snippet of that input and the line it starts on
//! - Display formatting via thiserror

pub mod errors;
