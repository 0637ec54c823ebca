use std::fs::OpenOptions;
use std::path::Path;
use walkdir::WalkDir;

/// Abstract interface for file system operations.
pub trait FileSystem: Send + Sync {
    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// List the names of regular files directly inside `dir`.
    /// This must NOT recurse.
    fn list_file_names(&self, dir: &Path) -> std::io::Result<Vec<String>>;

    /// Create `path` if missing, leaving existing content untouched.
    fn touch(&self, path: &Path) -> std::io::Result<()>;
}

/// Standard implementation of FileSystem using std::fs and walkdir.
pub struct PhysicalFileSystem;

impl FileSystem for PhysicalFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_file_names(&self, dir: &Path) -> std::io::Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                // Only the directory itself failing is fatal
                Err(e) if e.depth() == 0 => {
                    return Err(e
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("directory walk failed")));
                }
                Err(e) => {
                    log::debug!("Skipping unreadable entry in {:?}: {}", dir, e);
                    continue;
                }
            };

            if entry.file_type().is_file() {
                match entry.file_name().to_str() {
                    Some(name) => names.push(name.to_string()),
                    None => log::debug!("Skipping non UTF-8 file name {:?}", entry.path()),
                }
            }
        }

        Ok(names)
    }

    fn touch(&self, path: &Path) -> std::io::Result<()> {
        OpenOptions::new().create(true).append(true).open(path)?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::FileSystem;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::RwLock;

    /// In-memory filesystem that counts reads.
    #[derive(Default)]
    pub(crate) struct CountingFileSystem {
        pub files: RwLock<HashMap<PathBuf, String>>,
        pub dirs: RwLock<HashMap<PathBuf, Vec<String>>>,
        pub reads: AtomicUsize,
        pub listings: AtomicUsize,
    }

    impl CountingFileSystem {
        pub fn with_file(path: &str, content: &str) -> Self {
            let fs = Self::default();
            fs.put(path, content);
            fs
        }

        pub fn put(&self, path: &str, content: &str) {
            self.files
                .write()
                .unwrap()
                .insert(PathBuf::from(path), content.to_string());
        }

        pub fn put_dir(&self, path: &str, names: &[&str]) {
            self.dirs.write().unwrap().insert(
                PathBuf::from(path),
                names.iter().map(|n| n.to_string()).collect(),
            );
        }
    }

    impl FileSystem for CountingFileSystem {
        fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.files
                .read()
                .unwrap()
                .get(path)
                .cloned()
                .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound))
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.dirs.read().unwrap().contains_key(path)
        }

        fn list_file_names(&self, dir: &Path) -> std::io::Result<Vec<String>> {
            self.listings.fetch_add(1, Ordering::SeqCst);
            self.dirs
                .read()
                .unwrap()
                .get(dir)
                .cloned()
                .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound))
        }

        fn touch(&self, path: &Path) -> std::io::Result<()> {
            let mut files = self.files.write().unwrap();
            files.entry(path.to_path_buf()).or_default();
            if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
                if let Some(names) = self.dirs.write().unwrap().get_mut(parent) {
                    let name = name.to_string_lossy().to_string();
                    if !names.contains(&name) {
                        names.push(name);
                    }
                }
            }
            Ok(())
        }
    }
}
