//! Plain note model.
//!
//! # Responsibility
//! - Hold small, fully in-memory note subgraphs, e.g. while decoding data
//!   that will later be merged into a larger note map.
//! - Represent note-to-note references as arena indices so that sharing,
//!   self references and cycles need no shared ownership.
//!
//! # Invariants
//! - A `PlainRef` issued by `PlainMap::insert`/`reserve` stays valid for the
//!   lifetime of that map; records are never removed or reordered.
//! - `value_type == None` means "untyped value", never an error.
//! - Construction performs no validation; decoding only rejects refs that
//!   point outside the decoded arena.

use crate::error::NoteError;
use crate::model::id::NoteId;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable index of one note record inside a `PlainMap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlainRef(usize);

impl PlainRef {
    /// Builds a ref from a raw arena index.
    ///
    /// The index is not checked here; resolving it against a map that has no
    /// such record yields `NoteError::DanglingRef`.
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for PlainRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One note record: identifier, scalar value, optional type reference and
/// two ordered child lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainNote {
    pub id: NoteId,
    #[serde(default)]
    pub value_string: String,
    /// Note describing the semantic type of `value_string`.
    #[serde(default)]
    pub value_type: Option<PlainRef>,
    /// Structural children, order-significant.
    #[serde(default)]
    pub contents: Vec<PlainRef>,
    /// Type annotations of the note itself (not of its value), order-significant.
    #[serde(default)]
    pub types: Vec<PlainRef>,
}

impl PlainNote {
    /// Creates an untyped note with an empty value and no children.
    pub fn new(id: impl Into<NoteId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value_string = value.into();
        self
    }

    pub fn with_value_type(mut self, value_type: PlainRef) -> Self {
        self.value_type = Some(value_type);
        self
    }

    pub fn with_contents(mut self, contents: impl IntoIterator<Item = PlainRef>) -> Self {
        self.contents = contents.into_iter().collect();
        self
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = PlainRef>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    fn refs(&self) -> impl Iterator<Item = PlainRef> + '_ {
        self.value_type
            .iter()
            .copied()
            .chain(self.contents.iter().copied())
            .chain(self.types.iter().copied())
    }
}

/// Flat arena owning every `PlainNote` of one subgraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlainMapRecord")]
pub struct PlainMap {
    notes: Vec<PlainNote>,
}

/// Wire shape of `PlainMap` before ref range checks.
#[derive(Deserialize)]
struct PlainMapRecord {
    #[serde(default)]
    notes: Vec<PlainNote>,
}

impl TryFrom<PlainMapRecord> for PlainMap {
    type Error = NoteError;

    fn try_from(value: PlainMapRecord) -> Result<Self, Self::Error> {
        let len = value.notes.len();
        for (index, note) in value.notes.iter().enumerate() {
            if let Some(bad) = note.refs().find(|note_ref| note_ref.index() >= len) {
                return Err(NoteError::InvalidData(format!(
                    "note #{index} (`{}`) references {bad}, but the map holds {len} notes",
                    note.id
                )));
            }
        }
        debug!("event=plain_map_decode module=plain status=ok notes={len}");
        Ok(Self { notes: value.notes })
    }
}

impl PlainMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one note record and returns its stable ref.
    pub fn insert(&mut self, note: PlainNote) -> PlainRef {
        let note_ref = PlainRef(self.notes.len());
        self.notes.push(note);
        note_ref
    }

    /// Appends an id-only record to be filled later through `get_mut`.
    ///
    /// Lets callers wire self references and cycles before the referenced
    /// note's own fields are known.
    pub fn reserve(&mut self, id: impl Into<NoteId>) -> PlainRef {
        self.insert(PlainNote::new(id))
    }

    pub fn get(&self, note_ref: PlainRef) -> Option<&PlainNote> {
        self.notes.get(note_ref.0)
    }

    pub fn get_mut(&mut self, note_ref: PlainRef) -> Option<&mut PlainNote> {
        self.notes.get_mut(note_ref.0)
    }

    /// Drops every record at or after `len`; refs into that range dangle.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.notes.truncate(len);
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PlainRef, &PlainNote)> + '_ {
        self.notes
            .iter()
            .enumerate()
            .map(|(index, note)| (PlainRef(index), note))
    }
}
