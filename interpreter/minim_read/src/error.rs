//! Reader errors.

use thiserror::Error;

/// Failure while turning source text into a value tree. Offsets are byte
/// positions into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReadError {
    /// A `)` with no matching `(`.
    #[error("unexpected `)` at byte {offset}")]
    UnexpectedClose { offset: usize },

    /// Input ended inside a list.
    #[error("unterminated list starting at byte {offset}")]
    UnterminatedList { offset: usize },

    /// A `'` with no form after it.
    #[error("quote at byte {offset} is missing a form")]
    DanglingQuote { offset: usize },

    /// An integer literal outside the i64 range.
    #[error("integer literal out of range at byte {offset}")]
    IntOutOfRange { offset: usize },

    /// [`read`](crate::read) found no form at all.
    #[error("no expression found")]
    Empty,

    /// [`read`](crate::read) found more than one form.
    #[error("unexpected trailing input at byte {offset}")]
    TrailingInput { offset: usize },
}
