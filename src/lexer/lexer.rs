use regex::Regex;

use super::tokens::{Lexable, Token};
use crate::errors::errors::LexError;

/// Characters of unconsumed input carried in a `NoTokenMatched` error.
const ERROR_CONTEXT_CHARS: usize = 20;

/// The scanning engine for one [`Lexable`] kind set.
///
/// Compiles every declared pattern once at construction and may be
/// reused across any number of independent scans; each call to
/// [`scan`](Lexer::scan) starts from a fresh position. An instance is
/// not safe for interleaved scans: concurrent use needs one instance
/// per scan.
pub struct Lexer<T: Lexable> {
    patterns: Vec<(T, Regex)>,
    pos: usize,
    line: usize,
    column: usize,
}

impl<T: Lexable> Lexer<T> {
    /// Builds an engine for `T`, compiling one anchored regex per
    /// declared kind.
    ///
    /// # Panics
    ///
    /// Panics if any kind's pattern is not a valid regex.
    pub fn new() -> Lexer<T> {
        let patterns = T::kinds()
            .iter()
            .map(|&kind| {
                // Anchor at the start so find() is a prefix match.
                let anchored = format!("^(?:{})", kind.pattern());
                let regex = Regex::new(&anchored)
                    .unwrap_or_else(|err| panic!("invalid pattern for {:?}: {}", kind, err));
                (kind, regex)
            })
            .collect();

        Lexer {
            patterns,
            pos: 0,
            line: 0,
            column: 0,
        }
    }

    /// Scans `input` into a token sequence terminated by `(EOF, "")`.
    ///
    /// Tokens borrow their text from `input`, so `input` must outlive
    /// the returned sequence. On failure the whole scan is discarded
    /// and the error describes the first position where no pattern
    /// matched; there is no partial output.
    pub fn scan<'src>(&mut self, input: &'src str) -> Result<Vec<Token<'src, T>>, LexError> {
        self.pos = 0;
        self.line = 0;
        self.column = 0;

        let mut stream = Vec::new();

        self.skip_separators(input);

        while self.pos < input.len() {
            self.skip_comment(input);
            self.skip_separators(input);

            // A trailing comment or trailing separators exhaust the
            // input without an error.
            if self.pos == input.len() {
                break;
            }

            let remainder = &input[self.pos..];
            let mut longest_match = None;
            let mut longest_end = self.pos;

            for (kind, regex) in &self.patterns {
                if let Some(found) = regex.find(remainder) {
                    let end = self.pos + found.end();
                    // Strictly longer only: equal lengths keep the
                    // earlier declared kind, and zero-length matches
                    // never get past the starting position.
                    if end > longest_end {
                        longest_match = Some(*kind);
                        longest_end = end;
                    }
                }
            }

            let kind = match longest_match {
                Some(kind) => kind,
                None => {
                    return Err(LexError::NoTokenMatched {
                        context: remainder.chars().take(ERROR_CONTEXT_CHARS).collect(),
                        line: self.line,
                    })
                }
            };

            let value = &input[self.pos..longest_end];
            stream.push(Token { kind, value });
            self.advance_to(input, longest_end);
            self.skip_separators(input);
        }

        stream.push(Token {
            kind: T::EOF,
            value: "",
        });
        Ok(stream)
    }

    /// 0-based line reached by the last scan (newlines consumed so far).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Characters consumed since the last newline.
    pub fn column(&self) -> usize {
        self.column
    }

    fn skip_separators(&mut self, input: &str) {
        while let Some(c) = input[self.pos..].chars().next() {
            if !T::separators().contains(&c) {
                break;
            }
            self.advance_to(input, self.pos + c.len_utf8());
        }
    }

    /// Skips one comment: from the lead-in through the next newline,
    /// or to the end of input when no newline follows.
    fn skip_comment(&mut self, input: &str) {
        let lead_in = T::comment();
        if lead_in.is_empty() {
            return;
        }

        let remainder = &input[self.pos..];
        if !remainder.starts_with(lead_in) {
            return;
        }

        let end = match remainder.find('\n') {
            Some(offset) => self.pos + offset + 1,
            None => input.len(),
        };
        self.advance_to(input, end);
    }

    fn advance_to(&mut self, input: &str, end: usize) {
        for c in input[self.pos..end].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
        self.pos = end;
    }
}

impl<T: Lexable> Default for Lexer<T> {
    fn default() -> Lexer<T> {
        Lexer::new()
    }
}
