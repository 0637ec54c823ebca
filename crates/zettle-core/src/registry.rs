use crate::config::ZettleConfig;
use crate::error::{Result, ZettleError};
use crate::utils::normalize_path;
use crate::vfs::FileSystem;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Named note stores, validated against the filesystem on every call.
///
/// Nothing is cached: directories created or removed between two requests
/// are picked up by the next one.
pub struct DirectoryRegistry<'a> {
    config: &'a ZettleConfig,
    fs: &'a dyn FileSystem,
}

impl<'a> DirectoryRegistry<'a> {
    pub fn new(config: &'a ZettleConfig, fs: &'a dyn FileSystem) -> Self {
        Self { config, fs }
    }

    /// Return every registered store, failing if the setting is empty or a
    /// path is not a directory.
    pub fn resolve(&self) -> Result<BTreeMap<String, PathBuf>> {
        let dirs = self.config.named_directories();
        if dirs.is_empty() {
            return Err(ZettleError::missing_setting("zettleNamedDirectoryPaths"));
        }

        for (name, path) in &dirs {
            if !self.fs.is_dir(path) {
                return Err(ZettleError::Config(format!(
                    "Setting \"zettleNamedDirectoryPaths\": {} ({}) is not a valid directory.",
                    name,
                    path.display()
                )));
            }
        }

        Ok(dirs)
    }

    /// Name of the store whose directory is exactly the parent of `file`.
    ///
    /// Files in subdirectories of a store do not belong to it.
    pub fn contains_path(&self, file: &Path) -> Result<Option<String>> {
        let Some(parent) = file.parent() else {
            return Ok(None);
        };
        let parent = normalize_path(parent);

        let found = self
            .resolve()?
            .into_iter()
            .find(|(_, dir)| normalize_path(dir) == parent)
            .map(|(name, _)| name);

        Ok(found)
    }

    /// Directory registered under `name`.
    pub fn directory(&self, name: &str) -> Result<Option<PathBuf>> {
        Ok(self.resolve()?.remove(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::PhysicalFileSystem;
    use std::fs;
    use tempfile::TempDir;

    fn config_with(dirs: &[(&str, PathBuf)]) -> ZettleConfig {
        ZettleConfig {
            zettle_named_directory_paths: dirs
                .iter()
                .map(|(name, path)| (name.to_string(), path.clone()))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_valid_registry() {
        let temp = TempDir::new().unwrap();
        let work = temp.path().join("work");
        let home = temp.path().join("home");
        fs::create_dir(&work).unwrap();
        fs::create_dir(&home).unwrap();

        let config = config_with(&[("work", work.clone()), ("home", home.clone())]);
        let registry = DirectoryRegistry::new(&config, &PhysicalFileSystem);
        let resolved = registry.resolve().unwrap();

        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved.get("work"), Some(&work));
        assert_eq!(resolved.get("home"), Some(&home));
    }

    #[test]
    fn test_resolve_rejects_missing_directory() {
        let temp = TempDir::new().unwrap();
        let work = temp.path().join("work");
        fs::create_dir(&work).unwrap();

        let config = config_with(&[("work", work), ("gone", temp.path().join("gone"))]);
        let registry = DirectoryRegistry::new(&config, &PhysicalFileSystem);

        assert!(matches!(registry.resolve(), Err(ZettleError::Config(_))));
    }

    #[test]
    fn test_resolve_rejects_file_path() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.md");
        fs::write(&file, "").unwrap();

        let config = config_with(&[("file", file)]);
        let registry = DirectoryRegistry::new(&config, &PhysicalFileSystem);
        assert!(matches!(registry.resolve(), Err(ZettleError::Config(_))));
    }

    #[test]
    fn test_resolve_empty_setting() {
        let config = ZettleConfig::default();
        let registry = DirectoryRegistry::new(&config, &PhysicalFileSystem);
        assert!(matches!(registry.resolve(), Err(ZettleError::Config(_))));
    }

    #[test]
    fn test_resolve_revalidates_each_call() {
        let temp = TempDir::new().unwrap();
        let work = temp.path().join("work");
        fs::create_dir(&work).unwrap();

        let config = config_with(&[("work", work.clone())]);
        let registry = DirectoryRegistry::new(&config, &PhysicalFileSystem);
        assert!(registry.resolve().is_ok());

        fs::remove_dir(&work).unwrap();
        assert!(registry.resolve().is_err());
    }

    #[test]
    fn test_contains_path() {
        let temp = TempDir::new().unwrap();
        let work = temp.path().join("work");
        fs::create_dir_all(work.join("nested")).unwrap();

        let config = config_with(&[("work", work.clone())]);
        let registry = DirectoryRegistry::new(&config, &PhysicalFileSystem);

        assert_eq!(
            registry.contains_path(&work.join("20240101000000.md")).unwrap(),
            Some("work".to_string())
        );
        assert_eq!(
            registry
                .contains_path(&work.join(".").join("20240101000000.md"))
                .unwrap(),
            Some("work".to_string())
        );
        assert_eq!(
            registry
                .contains_path(&work.join("nested").join("20240101000000.md"))
                .unwrap(),
            None
        );
        assert_eq!(
            registry.contains_path(&temp.path().join("x.md")).unwrap(),
            None
        );
    }

    #[test]
    fn test_contains_path_trailing_separator_in_setting() {
        let temp = TempDir::new().unwrap();
        let work = temp.path().join("work");
        fs::create_dir(&work).unwrap();

        let with_slash = PathBuf::from(format!("{}/", work.display()));
        let config = config_with(&[("work", with_slash)]);
        let registry = DirectoryRegistry::new(&config, &PhysicalFileSystem);

        assert_eq!(
            registry.contains_path(&work.join("a.md")).unwrap(),
            Some("work".to_string())
        );
    }
}
