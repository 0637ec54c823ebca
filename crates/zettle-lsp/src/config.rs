use std::path::Path;
use zettle_core::vfs::FileSystem;
use zettle_core::ZettleConfig;

/// Workspace-level settings file, read once on initialize
pub const CONFIG_FILE_NAME: &str = ".zettle.yml";

/// Section of the client settings holding our configuration
pub const SETTINGS_SECTION: &str = "zettle";

/// Read `.zettle.yml` at the workspace root.
///
/// A missing file yields `Ok(None)`; a malformed one is an error for the
/// caller to report.
pub fn load_workspace_config(
    fs: &dyn FileSystem,
    root: &Path,
) -> Result<Option<ZettleConfig>, String> {
    let path = root.join(CONFIG_FILE_NAME);
    let Ok(content) = fs.read_to_string(&path) else {
        return Ok(None);
    };
    ZettleConfig::from_yaml(&content)
        .map(Some)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

/// Extract our section from a client settings payload.
///
/// Accepts both `{ "zettle": { .. } }` and the bare section.
pub fn settings_from_value(value: &serde_json::Value) -> Option<Result<ZettleConfig, String>> {
    let section = match value.get(SETTINGS_SECTION) {
        Some(section) => section,
        None if value.is_object() => value,
        None => return None,
    };
    Some(ZettleConfig::from_json(section.clone()).map_err(|e| e.to_string()))
}

/// Our section of a `workspace/didChangeConfiguration` payload.
///
/// Unlike `settings_from_value`, a payload without a `zettle` key is not
/// ours and yields `None`.
pub fn settings_section(value: &serde_json::Value) -> Option<Result<ZettleConfig, String>> {
    let section = value.get(SETTINGS_SECTION)?;
    Some(ZettleConfig::from_json(section.clone()).map_err(|e| e.to_string()))
}
