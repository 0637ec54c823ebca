use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Store name used for the legacy single-directory setting.
pub const DEFAULT_STORE_NAME: &str = "default";

/// Settings read by the core.
///
/// Nothing here is validated on load; `DirectoryRegistry` checks the
/// directories every time they are used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZettleConfig {
    /// Note stores by user-chosen name
    #[serde(default, alias = "zettle_named_directory_paths")]
    pub zettle_named_directory_paths: BTreeMap<String, PathBuf>,

    /// CSL-JSON bibliography used for `[@` completion
    #[serde(default, alias = "zettle_references_file_path")]
    pub zettle_references_file_path: Option<PathBuf>,

    /// Legacy single note store, used only when no named store is set
    #[serde(default, alias = "zettle_directory_path")]
    pub zettle_directory_path: Option<PathBuf>,
}

impl ZettleConfig {
    /// Load config from YAML content
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Load config from a JSON value (LSP settings payload)
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Named stores, falling back to the legacy setting.
    pub fn named_directories(&self) -> BTreeMap<String, PathBuf> {
        if !self.zettle_named_directory_paths.is_empty() {
            return self.zettle_named_directory_paths.clone();
        }
        let mut dirs = BTreeMap::new();
        if let Some(path) = &self.zettle_directory_path {
            if !path.as_os_str().is_empty() {
                dirs.insert(DEFAULT_STORE_NAME.to_string(), path.clone());
            }
        }
        dirs
    }

    /// Overlay the fields set in `other` onto this config.
    pub fn merge(&mut self, other: ZettleConfig) {
        if !other.zettle_named_directory_paths.is_empty() {
            self.zettle_named_directory_paths = other.zettle_named_directory_paths;
        }
        if other.zettle_references_file_path.is_some() {
            self.zettle_references_file_path = other.zettle_references_file_path;
        }
        if other.zettle_directory_path.is_some() {
            self.zettle_directory_path = other.zettle_directory_path;
        }
    }
}
