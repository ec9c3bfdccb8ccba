//! Errors reported by fallible sequence operations.

/// A specialized result type for sequence operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when editing or inspecting a [`LinkedSequence`].
///
/// Fallible operations validate their arguments before touching any links,
/// so a call that returns an error leaves the sequence exactly as it was.
///
/// [`LinkedSequence`]: crate::LinkedSequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The supplied index is outside the operation's valid range.
    ///
    /// Lookups and removals accept indices below the current length;
    /// insertion additionally accepts the length itself (append).
    #[error("index {index} out of range for sequence of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Removal from either end was attempted on an empty sequence.
    #[error("cannot remove from an empty sequence")]
    Empty,
}
