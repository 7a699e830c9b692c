//! `GraphNote` view over a `PlainMap`.
//!
//! # Responsibility
//! - Translate arena-index navigation into `GraphNote` accessor calls.
//! - Wrap children lazily: only the level a caller asks for is resolved.
//!
//! # Invariants
//! - Child order is preserved index-for-index; nothing is filtered or deduped.
//! - An absent value type is reported as the canonical empty note.
//! - The only failure is a ref that does not resolve in the wrapped map.

use crate::error::{NoteError, NoteResult};
use crate::graph::empty::empty_note;
use crate::graph::GraphNote;
use crate::model::id::{NoteId, EMPTY_ID};
use crate::model::plain::{PlainMap, PlainNote, PlainRef};
use log::trace;

/// Borrowed adapter exposing one plain note through `GraphNote`.
#[derive(Debug, Clone, Copy)]
pub struct PlainGraphNote<'a> {
    map: &'a PlainMap,
    note: &'a PlainNote,
}

impl PlainMap {
    /// Returns the `GraphNote` view of the note at `note_ref`.
    ///
    /// # Errors
    /// - `NoteError::DanglingRef` when `note_ref` has no record in this map.
    pub fn graph_note(&self, note_ref: PlainRef) -> NoteResult<PlainGraphNote<'_>> {
        self.get(note_ref)
            .map(|note| PlainGraphNote { map: self, note })
            .ok_or(NoteError::DanglingRef(note_ref))
    }
}

impl<'a> PlainGraphNote<'a> {
    fn wrap_refs(
        &self,
        kind: &str,
        refs: &[PlainRef],
    ) -> NoteResult<Vec<Box<dyn GraphNote + 'a>>> {
        let wrapped = refs
            .iter()
            .map(|note_ref| {
                self.map
                    .graph_note(*note_ref)
                    .map(|child| Box::new(child) as Box<dyn GraphNote + 'a>)
            })
            .collect::<NoteResult<Vec<_>>>()?;
        trace!(
            "event=plain_children module=graph kind={kind} id={} count={}",
            self.note.id,
            wrapped.len()
        );
        Ok(wrapped)
    }
}

impl GraphNote for PlainGraphNote<'_> {
    fn id(&self) -> NoteId {
        self.note.id.clone()
    }

    fn value(&self) -> NoteResult<(String, Box<dyn GraphNote + '_>)> {
        let value_type: Box<dyn GraphNote + '_> = match self.note.value_type {
            Some(note_ref) => Box::new(self.map.graph_note(note_ref)?),
            None => empty_note(&EMPTY_ID),
        };
        Ok((self.note.value_string.clone(), value_type))
    }

    fn contents(&self) -> NoteResult<Vec<Box<dyn GraphNote + '_>>> {
        self.wrap_refs("contents", &self.note.contents)
    }

    fn types(&self) -> NoteResult<Vec<Box<dyn GraphNote + '_>>> {
        self.wrap_refs("types", &self.note.types)
    }
}
