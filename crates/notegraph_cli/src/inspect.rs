//! Decode and render plain note maps.
//!
//! # Invariants
//! - Rendering goes through `GraphNote` only; the decoded map is never
//!   walked directly.

use notegraph_core::{outline, GraphNote, NoteError, NoteId, OutlineEntry, PlainMap, PlainRef};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum CliError {
    Io { path: PathBuf, source: std::io::Error },
    Decode(serde_json::Error),
    Note(NoteError),
    Logging(String),
    EmptyMap,
    RootNotFound(NoteId),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Decode(err) => write!(f, "failed to decode note map: {err}"),
            Self::Note(err) => write!(f, "{err}"),
            Self::Logging(message) => write!(f, "failed to initialize logging: {message}"),
            Self::EmptyMap => write!(f, "note map holds no notes"),
            Self::RootNotFound(id) => write!(f, "no note with id `{id}` in map"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode(err) => Some(err),
            Self::Note(err) => Some(err),
            Self::Logging(_) | Self::EmptyMap | Self::RootNotFound(_) => None,
        }
    }
}

impl From<NoteError> for CliError {
    fn from(value: NoteError) -> Self {
        Self::Note(value)
    }
}

/// Reads and decodes one plain note map from a JSON file.
pub fn load_map(path: &Path) -> Result<PlainMap, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(CliError::Decode)
}

/// Picks the first note carrying `root`, or the first note when unset.
pub fn find_root(map: &PlainMap, root: Option<&NoteId>) -> Result<PlainRef, CliError> {
    match root {
        Some(id) => map
            .iter()
            .find(|(_, note)| &note.id == id)
            .map(|(note_ref, _)| note_ref)
            .ok_or_else(|| CliError::RootNotFound(id.clone())),
        None => map
            .iter()
            .next()
            .map(|(note_ref, _)| note_ref)
            .ok_or(CliError::EmptyMap),
    }
}

/// Renders the outline below `note` as indented text lines.
pub fn render(note: &dyn GraphNote, max_depth: usize) -> Result<Vec<String>, CliError> {
    Ok(outline(note, max_depth)?.iter().map(render_entry).collect())
}

fn render_entry(entry: &OutlineEntry) -> String {
    let mut line = format!("{}{} = {:?}", "  ".repeat(entry.depth), entry.id, entry.value);
    if !entry.value_type.is_empty() {
        line.push_str(&format!(" : {}", entry.value_type));
    }
    if !entry.types.is_empty() {
        let types: Vec<&str> = entry.types.iter().map(NoteId::as_str).collect();
        line.push_str(&format!(" [{}]", types.join(", ")));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::{find_root, load_map, render, CliError};
    use notegraph_core::NoteId;
    use std::io::Write;

    fn write_map(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
        file.write_all(json.as_bytes())
            .expect("temp file should be writable");
        file
    }

    #[test]
    fn renders_outline_from_file() {
        let file = write_map(
            r#"{"notes": [
                {"id": "root", "value_string": "hello", "value_type": 2, "contents": [1], "types": [2]},
                {"id": "c1", "value_string": "child"},
                {"id": "type:string"}
            ]}"#,
        );
        let map = load_map(file.path()).expect("map should load");
        let root = find_root(&map, None).expect("root should exist");
        let view = map.graph_note(root).expect("root should resolve");

        let lines = render(&view, 4).expect("render should succeed");
        assert_eq!(
            lines,
            vec![
                "root = \"hello\" : type:string [type:string]".to_string(),
                "  c1 = \"child\"".to_string(),
            ]
        );
    }

    #[test]
    fn find_root_by_id() {
        let file = write_map(r#"{"notes": [{"id": "a"}, {"id": "b"}]}"#);
        let map = load_map(file.path()).expect("map should load");
        let root = find_root(&map, Some(&NoteId::from("b"))).expect("b should exist");
        assert_eq!(root.index(), 1);

        let err = find_root(&map, Some(&NoteId::from("zz"))).expect_err("zz is missing");
        assert!(matches!(err, CliError::RootNotFound(_)));
    }

    #[test]
    fn empty_map_has_no_root() {
        let file = write_map(r#"{"notes": []}"#);
        let map = load_map(file.path()).expect("map should load");
        assert!(matches!(find_root(&map, None), Err(CliError::EmptyMap)));
    }

    #[test]
    fn load_reports_decode_errors() {
        let file = write_map(r#"{"notes": [{"id": "a", "contents": [5]}]}"#);
        let err = load_map(file.path()).expect_err("dangling ref must be rejected");
        assert!(matches!(err, CliError::Decode(_)));
    }
}
