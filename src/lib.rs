//! Pattern-driven tokenizer engine.
//!
//! Callers describe a finite set of token kinds (each kind carries a
//! regex pattern, plus a separator set and a line-comment marker shared
//! by the whole set) by implementing [`Lexable`], usually through the
//! [`token_kinds!`] macro. A [`Lexer`] built over that set scans an
//! input string left to right, skipping separators and comments and
//! picking the longest match at every position, and returns the full
//! token sequence terminated by an EOF token, or a [`LexError`]
//! pointing at the first position where nothing matched.
//!
//! Tokens borrow their text from the scanned input, so the input must
//! outlive the returned sequence:
//!
//! ```
//! use relex::{token_kinds, Lexer};
//!
//! token_kinds! {
//!     pub enum Kind {
//!         separators: [' '],
//!         comment: "//",
//!         Number => "[0-9]+",
//!         Word => "[A-Za-z]+",
//!     }
//! }
//!
//! let mut lexer = Lexer::<Kind>::new();
//! let tokens = lexer.scan("12 ab // rest of line\n3").unwrap();
//! assert_eq!(tokens[0].value, "12");
//! assert_eq!(tokens[1].value, "ab");
//! assert_eq!(tokens[2].value, "3");
//! assert_eq!(tokens[3].kind, Kind::Eof);
//! ```

#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use errors::errors::LexError;
pub use lexer::lexer::Lexer;
pub use lexer::tokens::{Lexable, Token};
