//! Uniform read contract over note backends.
//!
//! # Responsibility
//! - Define `GraphNote`, the four-operation read contract that lets the same
//!   caller code walk in-memory, decoded or remote notes.
//! - Provide the in-memory plain adapter, the empty placeholder note and
//!   backend-agnostic traversal helpers.
//!
//! # Invariants
//! - Every operation is a stateless read; repeated calls without mutation of
//!   the backing data return equivalent results.
//! - A value type is always a note. Backends return the empty note instead of
//!   an absent value type.
//! - Child collections are returned one level at a time, in backend order.

pub mod empty;
pub mod plain;
pub mod walk;

use crate::error::NoteResult;
use crate::model::id::NoteId;

/// Read contract implemented by every note backend.
///
/// Callers must check every `NoteResult`: the in-memory backend only fails on
/// contract violations, but I/O-backed implementations may fail at any call.
pub trait GraphNote {
    /// Identifier of this note.
    fn id(&self) -> NoteId;

    /// Scalar value and the note describing its type.
    fn value(&self) -> NoteResult<(String, Box<dyn GraphNote + '_>)>;

    /// Structural children, in order.
    fn contents(&self) -> NoteResult<Vec<Box<dyn GraphNote + '_>>>;

    /// Type annotations of the note itself, in order.
    fn types(&self) -> NoteResult<Vec<Box<dyn GraphNote + '_>>>;
}

impl<T: GraphNote + ?Sized> GraphNote for &T {
    fn id(&self) -> NoteId {
        (**self).id()
    }

    fn value(&self) -> NoteResult<(String, Box<dyn GraphNote + '_>)> {
        (**self).value()
    }

    fn contents(&self) -> NoteResult<Vec<Box<dyn GraphNote + '_>>> {
        (**self).contents()
    }

    fn types(&self) -> NoteResult<Vec<Box<dyn GraphNote + '_>>> {
        (**self).types()
    }
}

impl<T: GraphNote + ?Sized> GraphNote for Box<T> {
    fn id(&self) -> NoteId {
        (**self).id()
    }

    fn value(&self) -> NoteResult<(String, Box<dyn GraphNote + '_>)> {
        (**self).value()
    }

    fn contents(&self) -> NoteResult<Vec<Box<dyn GraphNote + '_>>> {
        (**self).contents()
    }

    fn types(&self) -> NoteResult<Vec<Box<dyn GraphNote + '_>>> {
        (**self).types()
    }
}
