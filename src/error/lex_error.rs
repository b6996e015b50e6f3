use thiserror::Error;

/// Represents all errors that can occur while turning source text into
/// tokens.
///
/// Positions are 0-based character indices into the source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that is neither whitespace, a digit, a parenthesis nor an
    /// operator.
    #[error("Unknown character '{character}' found at position {position} in the expression.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where the character was found.
        position:  usize,
    },
    /// A number span containing a second decimal point, as in `1.2.3`.
    #[error("A number cannot have two decimal points, found at position {position} in the expression.")]
    MultipleDecimalPoints {
        /// Position of the second decimal point.
        position: usize,
    },
}
