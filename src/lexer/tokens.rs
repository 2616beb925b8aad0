use std::{fmt::Debug, fmt::Display, hash::Hash};

/// A finite, ordered set of token kinds the [`Lexer`](super::lexer::Lexer)
/// can match.
///
/// Implementors are enum-like: a closed set of copyable values with two
/// distinguished sentinels. `EOF` is appended exactly once as the final
/// token of every successful scan; `NONE` is the "no kind" zero value and
/// is never matched against input. Neither may appear in [`kinds`].
///
/// [`kinds`] returns the real kinds in declaration order; that order is
/// the tie-break precedence when two patterns match the same length of
/// input. [`pattern`] is only ever queried for members of [`kinds`].
///
/// Most callers should declare their set with
/// [`token_kinds!`](crate::token_kinds) instead of implementing this by
/// hand.
///
/// [`kinds`]: Lexable::kinds
/// [`pattern`]: Lexable::pattern
pub trait Lexable: Copy + Eq + Hash + Debug + 'static {
    /// Kind of the synthetic final token.
    const EOF: Self;
    /// Sentinel "no kind" value; never emitted, never matched.
    const NONE: Self;

    /// All matchable kinds, in declaration order. Must not contain
    /// `EOF` or `NONE`.
    fn kinds() -> &'static [Self];

    /// Regex source for one kind, matched against the unconsumed input.
    fn pattern(&self) -> &'static str;

    /// Characters skipped silently wherever they occur outside a match.
    fn separators() -> &'static [char];

    /// Line-comment lead-in. When the unconsumed input starts with this
    /// string, the rest of the line is discarded. An empty string
    /// disables comment skipping.
    fn comment() -> &'static str;
}

/// One matched token: a kind paired with the slice of input it matched.
///
/// `value` borrows from the scanned input, so a token sequence must not
/// outlive the input string it was produced from. The final token of a
/// successful scan is always `(EOF, "")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src, T: Lexable> {
    pub kind: T,
    pub value: &'src str,
}

impl<T: Lexable> Display for Token<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}[{}]", self.kind, self.value)
    }
}
