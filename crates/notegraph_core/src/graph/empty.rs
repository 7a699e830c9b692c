//! Placeholder note for absent references.

use crate::error::NoteResult;
use crate::graph::GraphNote;
use crate::model::id::{NoteId, EMPTY_ID};

/// Note with an identifier and nothing else: empty value, no children.
///
/// Its value type is the canonical empty note, so accessors can be chained
/// on it indefinitely without hitting an absent reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyNote {
    id: NoteId,
}

static CANONICAL_EMPTY_NOTE: EmptyNote = EmptyNote { id: EMPTY_ID };

impl EmptyNote {
    pub fn new(id: NoteId) -> Self {
        Self { id }
    }

    /// Process-wide immutable empty note carrying `EMPTY_ID`.
    pub fn canonical() -> &'static EmptyNote {
        &CANONICAL_EMPTY_NOTE
    }
}

/// Returns the empty note for `id`.
///
/// `EMPTY_ID` maps to the canonical shared instance; any other identifier
/// gets a fresh placeholder.
pub fn empty_note(id: &NoteId) -> Box<dyn GraphNote + 'static> {
    if id.is_empty() {
        Box::new(EmptyNote::canonical())
    } else {
        Box::new(EmptyNote::new(id.clone()))
    }
}

impl GraphNote for EmptyNote {
    fn id(&self) -> NoteId {
        self.id.clone()
    }

    fn value(&self) -> NoteResult<(String, Box<dyn GraphNote + '_>)> {
        let value_type: Box<dyn GraphNote + '_> = Box::new(EmptyNote::canonical());
        Ok((String::new(), value_type))
    }

    fn contents(&self) -> NoteResult<Vec<Box<dyn GraphNote + '_>>> {
        Ok(Vec::new())
    }

    fn types(&self) -> NoteResult<Vec<Box<dyn GraphNote + '_>>> {
        Ok(Vec::new())
    }
}
