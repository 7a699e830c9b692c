//! Note identifier model.
//!
//! # Responsibility
//! - Define the opaque identifier that names a note within a larger map.
//! - Provide the distinguished empty identifier that denotes "no note".
//!
//! # Invariants
//! - `EMPTY_ID` is the empty string and is never issued by `NoteId::generate()`.
//! - Identifiers are compared by value only; this crate attaches no meaning
//!   to their text.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque identifier naming a note within whatever map it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

/// Distinguished identifier denoting the absence of a note.
pub const EMPTY_ID: NoteId = NoteId(String::new());

impl NoteId {
    /// Wraps caller-provided identifier text.
    ///
    /// Used by decode paths where identity already exists externally.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Issues a fresh random identifier for notes that have no external identity.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns whether this is the empty identifier.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
