use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const NEW_ZETTLE_COMMAND: &str = "zettle.newZettle";
pub const NEW_ZETTLE_IN_ZETTELKASTEN_COMMAND: &str = "zettle.newZettleInZettelkasten";

/// Arguments of both note creation commands
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewZettleParams {
    /// Directories selected in the client's file explorer
    #[serde(default)]
    pub dirs: Vec<PathBuf>,

    /// Filename to use instead of prompting; defaults to `<id>.md`
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewZettleResult {
    /// Path of the created note, `None` when cancelled
    pub path: Option<String>,
}
