//! Core note model for NoteGraph.
//! Bridges directly-referenced in-memory note subgraphs and the uniform
//! `GraphNote` read contract used to walk any note backend.

pub mod error;
pub mod graph;
pub mod logging;
pub mod model;

pub use error::{NoteError, NoteResult};
pub use graph::empty::{empty_note, EmptyNote};
pub use graph::plain::PlainGraphNote;
pub use graph::walk::{import_graph_note, outline, OutlineEntry, MAX_WALK_DEPTH};
pub use graph::GraphNote;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::id::{NoteId, EMPTY_ID};
pub use model::plain::{PlainMap, PlainNote, PlainRef};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
