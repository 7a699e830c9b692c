//! Error taxonomy shared by every `GraphNote` backend.
//!
//! The in-memory backend only fails on contract violations (refs that do not
//! belong to its arena). The `Backend` variant exists for implementations
//! that sit on I/O and may fail for reasons of their own.

use crate::model::plain::PlainRef;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type NoteResult<T> = Result<T, NoteError>;

/// Errors surfaced through the graph note read contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteError {
    /// A plain note ref does not resolve inside the arena it was used with.
    DanglingRef(PlainRef),
    /// A non in-memory backend failed to produce a note.
    Backend(String),
    /// Decoded data cannot be converted to a valid model.
    InvalidData(String),
    /// A traversal would descend more hops than the walk helpers support.
    DepthLimitExceeded(usize),
}

impl Display for NoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DanglingRef(note_ref) => write!(f, "plain note ref is dangling: {note_ref}"),
            Self::Backend(message) => write!(f, "graph note backend failed: {message}"),
            Self::InvalidData(message) => write!(f, "invalid note data: {message}"),
            Self::DepthLimitExceeded(limit) => {
                write!(f, "note graph is deeper than the supported {limit} hops")
            }
        }
    }
}

impl Error for NoteError {}

#[cfg(test)]
mod tests {
    use super::NoteError;
    use crate::model::plain::PlainRef;

    #[test]
    fn display_names_the_failing_ref() {
        let err = NoteError::DanglingRef(PlainRef::from_index(7));
        assert_eq!(err.to_string(), "plain note ref is dangling: #7");
    }

    #[test]
    fn display_names_the_depth_limit() {
        let err = NoteError::DepthLimitExceeded(256);
        assert!(err.to_string().contains("256 hops"));
    }
}
