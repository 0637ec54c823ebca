pub mod id;

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path.
///
/// - Drops `.` components
/// - Folds `..` into the preceding component
/// - Ignores trailing separators
///
/// Symlinks are not resolved and the filesystem is not touched.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use zettle_core::normalize_path;
///
/// assert_eq!(normalize_path(Path::new("/notes/./a/../b/")), PathBuf::from("/notes/b"));
/// assert_eq!(normalize_path(Path::new("/notes")), PathBuf::from("/notes"));
/// ```
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(Path::new("/a/b/")), PathBuf::from("/a/b"));
        assert_eq!(normalize_path(Path::new("/a/./b")), PathBuf::from("/a/b"));
        assert_eq!(normalize_path(Path::new("/a/c/../b")), PathBuf::from("/a/b"));
        assert_eq!(normalize_path(Path::new("../x")), PathBuf::from("../x"));
        assert_eq!(
            normalize_path(Path::new("/a/b")),
            normalize_path(Path::new("/a//b/."))
        );
    }
}
