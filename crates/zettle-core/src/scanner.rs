use crate::error::{Result, ZettleError};
use crate::vfs::FileSystem;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Canonical note filename: 14-digit chronological ID, any text, `.md`.
pub const NOTE_FILENAME_PATTERN: &str = r"^[0-9]{14}[^/]*\.md$";

fn note_filename_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NOTE_FILENAME_PATTERN).expect("valid note filename pattern"))
}

pub fn is_note_filename(name: &str) -> bool {
    note_filename_regex().is_match(name)
}

/// List note filenames directly inside `dir`.
///
/// Sorted lexicographically, which is chronological order for note names.
pub fn list_notes(fs: &dyn FileSystem, dir: &Path) -> Result<Vec<String>> {
    let names = fs
        .list_file_names(dir)
        .map_err(|e| ZettleError::Directory {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut notes: Vec<String> = names.into_iter().filter(|n| is_note_filename(n)).collect();
    notes.sort();

    log::debug!("Found {} notes in {:?}", notes.len(), dir);
    Ok(notes)
}
