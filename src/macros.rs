//! Utility macros for declaring token kind sets.
//!
//! This module defines the `token_kinds!` macro, which expands a kind
//! declaration list into an enum plus its [`Lexable`](crate::Lexable)
//! implementation. It removes the boilerplate of writing the trait
//! impl by hand while keeping the declaration order visible in one
//! place, since that order is also the tie-break precedence.

/// Declares a token kind enum and implements `Lexable` for it.
///
/// The body lists the shared `separators` and `comment` members first,
/// then each kind as `Name => "pattern"`. Two extra variants, `Eof` and
/// `None`, are appended to the enum automatically; they are never
/// matched against input.
///
/// # Example
///
/// ```
/// use relex::{token_kinds, Lexer};
///
/// token_kinds! {
///     pub enum Kind {
///         separators: [' ', '\t', '\n'],
///         comment: "//",
///         Number => "[0-9]+",
///         Word => "[A-Za-z]+",
///     }
/// }
///
/// let tokens = Lexer::<Kind>::new().scan("ab 12").unwrap();
/// assert_eq!(tokens[0].kind, Kind::Word);
/// assert_eq!(tokens[1].kind, Kind::Number);
/// assert_eq!(tokens[2].kind, Kind::Eof);
/// ```
#[macro_export]
macro_rules! token_kinds {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            separators: [$($sep:literal),* $(,)?],
            comment: $comment:literal,
            $($kind:ident => $pattern:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($kind,)+
            Eof,
            None,
        }

        impl $crate::lexer::tokens::Lexable for $name {
            const EOF: Self = Self::Eof;
            const NONE: Self = Self::None;

            fn kinds() -> &'static [Self] {
                &[$(Self::$kind),+]
            }

            fn pattern(&self) -> &'static str {
                match self {
                    $(Self::$kind => $pattern,)+
                    Self::Eof | Self::None => "",
                }
            }

            fn separators() -> &'static [char] {
                &[$($sep),*]
            }

            fn comment() -> &'static str {
                $comment
            }
        }
    };
}
