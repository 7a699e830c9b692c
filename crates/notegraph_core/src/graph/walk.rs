//! Backend-agnostic traversal helpers built only on the `GraphNote` contract.
//!
//! # Invariants
//! - Traversal depth is bounded by the caller; cycles are not detected, the
//!   bound is what keeps cyclic graphs finite.
//! - No walk descends more than `MAX_WALK_DEPTH` hops, whatever bound the
//!   caller passes; deeper graphs fail with `NoteError::DepthLimitExceeded`.
//! - The first backend error aborts the traversal and is returned unchanged.
//! - A failed import leaves the target map as it was before the call.

use crate::error::{NoteError, NoteResult};
use crate::graph::GraphNote;
use crate::model::id::NoteId;
use crate::model::plain::{PlainMap, PlainNote, PlainRef};
use log::{debug, warn};

/// Hard cap on hops followed by `outline` and `import_graph_note`.
///
/// Returned children borrow their parent note, so walks recurse; the cap
/// keeps that recursion well inside a default thread stack.
pub const MAX_WALK_DEPTH: usize = 256;

/// One note visited by `outline`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    /// Number of `contents` hops from the outline root.
    pub depth: usize,
    pub id: NoteId,
    pub value: String,
    /// Identifier of the value type note; `EMPTY_ID` for untyped values.
    pub value_type: NoteId,
    pub types: Vec<NoteId>,
}

/// Lists the notes reachable through `contents` in depth-first pre-order.
///
/// Notes deeper than `max_depth` hops are not visited.
///
/// # Errors
/// - Any backend error, unchanged.
/// - `NoteError::DepthLimitExceeded` when a note more than `MAX_WALK_DEPTH`
///   hops away would be visited.
pub fn outline(note: &dyn GraphNote, max_depth: usize) -> NoteResult<Vec<OutlineEntry>> {
    let mut entries = Vec::new();
    outline_at(note, 0, max_depth, &mut entries)?;
    debug!(
        "event=outline module=walk status=ok root={} entries={} max_depth={max_depth}",
        note.id(),
        entries.len()
    );
    Ok(entries)
}

fn outline_at(
    note: &dyn GraphNote,
    depth: usize,
    max_depth: usize,
    entries: &mut Vec<OutlineEntry>,
) -> NoteResult<()> {
    check_depth(depth)?;
    let (value, value_type) = note.value()?;
    let types = note
        .types()?
        .iter()
        .map(|type_note| type_note.id())
        .collect();
    entries.push(OutlineEntry {
        depth,
        id: note.id(),
        value,
        value_type: value_type.id(),
        types,
    });

    if depth >= max_depth {
        return Ok(());
    }
    for child in note.contents()? {
        outline_at(child.as_ref(), depth + 1, max_depth, entries)?;
    }
    Ok(())
}

/// Copies the subgraph reachable from `note` into `map` and returns the ref
/// of the copied root.
///
/// A note reached after `max_depth` hops keeps its identifier and value but
/// none of its references. Notes reached along several paths are copied once
/// per path.
///
/// A value type carrying `EMPTY_ID` is stored as absent. Whatever value,
/// contents or types a backend attaches to such a note are discarded.
///
/// # Errors
/// - Same as `outline`. On error every record appended by this call is
///   removed again, so `map` is left unchanged.
pub fn import_graph_note(
    map: &mut PlainMap,
    note: &dyn GraphNote,
    max_depth: usize,
) -> NoteResult<PlainRef> {
    let before = map.len();
    match import_at(map, note, 0, max_depth) {
        Ok(root) => {
            debug!(
                "event=import module=walk status=ok root={} imported={} max_depth={max_depth}",
                note.id(),
                map.len() - before
            );
            Ok(root)
        }
        Err(err) => {
            warn!(
                "event=import module=walk status=error root={} discarded={}",
                note.id(),
                map.len() - before
            );
            map.truncate(before);
            Err(err)
        }
    }
}

fn import_at(
    map: &mut PlainMap,
    note: &dyn GraphNote,
    depth: usize,
    max_depth: usize,
) -> NoteResult<PlainRef> {
    check_depth(depth)?;
    let (value, value_type) = note.value()?;
    let mut record = PlainNote::new(note.id()).with_value(value);
    if depth >= max_depth {
        return Ok(map.insert(record));
    }

    let note_ref = map.reserve(record.id.clone());
    if !value_type.id().is_empty() {
        record.value_type = Some(import_at(map, value_type.as_ref(), depth + 1, max_depth)?);
    }
    record.contents = import_all(map, note.contents()?, depth + 1, max_depth)?;
    record.types = import_all(map, note.types()?, depth + 1, max_depth)?;

    if let Some(slot) = map.get_mut(note_ref) {
        *slot = record;
    }
    Ok(note_ref)
}

fn import_all(
    map: &mut PlainMap,
    notes: Vec<Box<dyn GraphNote + '_>>,
    depth: usize,
    max_depth: usize,
) -> NoteResult<Vec<PlainRef>> {
    notes
        .iter()
        .map(|child| import_at(map, child.as_ref(), depth, max_depth))
        .collect()
}

fn check_depth(depth: usize) -> NoteResult<()> {
    if depth > MAX_WALK_DEPTH {
        return Err(NoteError::DepthLimitExceeded(MAX_WALK_DEPTH));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{import_graph_note, outline, MAX_WALK_DEPTH};
    use crate::error::NoteError;
    use crate::graph::GraphNote;
    use crate::model::id::{NoteId, EMPTY_ID};
    use crate::model::plain::{PlainMap, PlainNote, PlainRef};

    fn cyclic_pair() -> (PlainMap, PlainRef) {
        let mut map = PlainMap::new();
        let a = map.reserve("a");
        let b = map.insert(PlainNote::new("b").with_contents([a]));
        if let Some(note) = map.get_mut(a) {
            note.contents.push(b);
        }
        (map, a)
    }

    fn chain(len: usize) -> (PlainMap, PlainRef) {
        let mut map = PlainMap::new();
        let mut head = map.insert(PlainNote::new(format!("n{}", len - 1)));
        for index in (0..len - 1).rev() {
            head = map.insert(PlainNote::new(format!("n{index}")).with_contents([head]));
        }
        (map, head)
    }

    #[test]
    fn outline_reaches_the_depth_cap() {
        let (map, head) = chain(MAX_WALK_DEPTH + 1);
        let view = map.graph_note(head).expect("head should resolve");

        let entries = outline(&view, usize::MAX).expect("outline should succeed");
        assert_eq!(entries.len(), MAX_WALK_DEPTH + 1);
        assert_eq!(entries.last().map(|entry| entry.depth), Some(MAX_WALK_DEPTH));
    }

    #[test]
    fn deep_chain_fails_instead_of_overflowing() {
        let (map, head) = chain(200_001);
        let view = map.graph_note(head).expect("head should resolve");

        let err = outline(&view, 200_001).expect_err("chain is deeper than the cap");
        assert_eq!(err, NoteError::DepthLimitExceeded(MAX_WALK_DEPTH));

        let mut target = PlainMap::new();
        let err = import_graph_note(&mut target, &view, 200_001)
            .expect_err("chain is deeper than the cap");
        assert_eq!(err, NoteError::DepthLimitExceeded(MAX_WALK_DEPTH));
        assert!(target.is_empty());
    }

    #[test]
    fn caller_bound_below_cap_keeps_deep_chain_walkable() {
        let (map, head) = chain(200_001);
        let view = map.graph_note(head).expect("head should resolve");
        let entries = outline(&view, 10).expect("bounded outline should succeed");
        assert_eq!(entries.len(), 11);
    }

    #[test]
    fn outline_is_bounded_on_cycles() {
        let (map, a) = cyclic_pair();
        let view = map.graph_note(a).expect("a should resolve");

        let entries = outline(&view, 3).expect("outline should succeed");
        let ids: Vec<_> = entries
            .iter()
            .map(|entry| (entry.depth, entry.id.to_string()))
            .collect();
        assert_eq!(
            ids,
            vec![
                (0, "a".to_string()),
                (1, "b".to_string()),
                (2, "a".to_string()),
                (3, "b".to_string()),
            ]
        );
    }

    #[test]
    fn outline_depth_zero_visits_root_only() {
        let (map, a) = cyclic_pair();
        let view = map.graph_note(a).expect("a should resolve");
        let entries = outline(&view, 0).expect("outline should succeed");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value_type, EMPTY_ID);
    }

    #[test]
    fn import_cuts_references_at_depth_bound() {
        let (source, a) = cyclic_pair();
        let view = source.graph_note(a).expect("a should resolve");

        let mut target = PlainMap::new();
        let root = import_graph_note(&mut target, &view, 1).expect("import should succeed");

        let copied = target.get(root).expect("root should be copied");
        assert_eq!(copied.id, NoteId::from("a"));
        assert_eq!(copied.contents.len(), 1);
        let child = target.get(copied.contents[0]).expect("child should be copied");
        assert_eq!(child.id, NoteId::from("b"));
        assert!(child.contents.is_empty());
        assert_eq!(target.len(), 2);
    }

    #[test]
    fn import_keeps_value_type_and_types() {
        let mut source = PlainMap::new();
        let string_type = source.insert(PlainNote::new("type:string"));
        let tag = source.insert(PlainNote::new("tag"));
        let root = source.insert(
            PlainNote::new("root")
                .with_value("hello")
                .with_value_type(string_type)
                .with_types([tag]),
        );
        let view = source.graph_note(root).expect("root should resolve");

        let mut target = PlainMap::new();
        let copied_ref = import_graph_note(&mut target, &view, 4).expect("import should succeed");
        let copied_view = target.graph_note(copied_ref).expect("copy should resolve");

        let (value, value_type) = copied_view.value().expect("value should resolve");
        assert_eq!(value, "hello");
        assert_eq!(value_type.id(), NoteId::from("type:string"));
        let types = copied_view.types().expect("types should resolve");
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].id(), NoteId::from("tag"));
        assert!(target
            .get(copied_ref)
            .and_then(|note| note.value_type)
            .is_some());
    }

    #[test]
    fn import_stores_empty_value_type_as_absent() {
        let mut source = PlainMap::new();
        let root = source.insert(PlainNote::new("root").with_value("v"));
        let view = source.graph_note(root).expect("root should resolve");

        let mut target = PlainMap::new();
        let copied = import_graph_note(&mut target, &view, 2).expect("import should succeed");
        assert_eq!(target.get(copied).and_then(|note| note.value_type), None);
        assert_eq!(target.len(), 1);
    }
}
