//! Note data model.
//!
//! # Responsibility
//! - Define the identifier type consumed by every note backend.
//! - Define the plain, fully in-memory note representation.
//!
//! # Invariants
//! - Every note is named by a `NoteId`; `EMPTY_ID` names no note.
//! - Plain notes reference each other by arena index, never by ownership.

pub mod id;
pub mod plain;
