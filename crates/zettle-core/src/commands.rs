//! Note creation flows.
//!
//! Each flow returns the path of the note it created, or `None` when the
//! user dismissed one of the prompts.

use crate::config::ZettleConfig;
use crate::error::{Result, ZettleError};
use crate::host::Window;
use crate::registry::DirectoryRegistry;
use crate::utils::id::generate_chronological_id;
use crate::vfs::FileSystem;
use std::path::{Path, PathBuf};

pub const NAME_PROMPT: &str = "Zettle Name:";

/// Default filename offered for a new note.
pub fn default_note_name(id: &str) -> String {
    format!("{}.md", id)
}

/// "New Zettle" is offered only when exactly one directory is selected.
pub fn is_new_zettel_visible(dirs: &[PathBuf]) -> bool {
    dirs.len() == 1
}

/// Create a note in an explicitly chosen directory.
pub async fn new_zettel_in_directory(
    window: &dyn Window,
    fs: &dyn FileSystem,
    dir: &Path,
) -> Result<Option<PathBuf>> {
    if !fs.is_dir(dir) {
        return Err(ZettleError::Directory {
            path: dir.to_path_buf(),
            message: "not a directory".to_string(),
        });
    }

    let initial = default_note_name(&generate_chronological_id());
    let Some(name) = window.show_input_panel(NAME_PROMPT, &initial).await else {
        return Ok(None);
    };

    create_and_open(window, fs, dir, &name).await.map(Some)
}

/// Create a note in one of the registered stores, asking which one when
/// there is more than one.
pub async fn new_zettel_in_zettelkasten(
    window: &dyn Window,
    fs: &dyn FileSystem,
    config: &ZettleConfig,
) -> Result<Option<PathBuf>> {
    let initial = default_note_name(&generate_chronological_id());

    let stores = DirectoryRegistry::new(config, fs).resolve()?;
    let mut stores: Vec<(String, PathBuf)> = stores.into_iter().collect();

    let dir = if stores.len() == 1 {
        stores.remove(0).1
    } else {
        let names: Vec<String> = stores.iter().map(|(name, _)| name.clone()).collect();
        let Some(index) = window.show_quick_pick(&names).await else {
            return Ok(None);
        };
        if index >= stores.len() {
            return Ok(None);
        }
        stores.swap_remove(index).1
    };

    let Some(name) = window.show_input_panel(NAME_PROMPT, &initial).await else {
        return Ok(None);
    };

    // The store may have vanished while the prompts were open.
    if !fs.is_dir(&dir) {
        return Err(ZettleError::Directory {
            path: dir,
            message: "not a directory".to_string(),
        });
    }

    create_and_open(window, fs, &dir, &name).await.map(Some)
}

async fn create_and_open(
    window: &dyn Window,
    fs: &dyn FileSystem,
    dir: &Path,
    name: &str,
) -> Result<PathBuf> {
    if name.trim().is_empty() || name.contains(['/', '\\']) {
        return Err(ZettleError::Config(format!(
            "\"{}\" is not a valid note name.",
            name
        )));
    }

    let path = dir.join(name);
    fs.touch(&path)?;
    log::info!("Created note {:?}", path);

    window.open_file(&path).await;
    Ok(path)
}
