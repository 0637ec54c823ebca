use crate::error::{Result, ZettleError};
use crate::model::CompletionCandidate;
use crate::vfs::FileSystem;
use serde::Deserialize;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// One CSL-JSON bibliography entry. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct BibliographyEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub author: Option<Vec<Author>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub family: Option<String>,
}

impl BibliographyEntry {
    pub fn first_author_family(&self) -> Option<&str> {
        self.author.as_ref()?.first()?.family.as_deref()
    }

    /// `"Family, Title"` when the first author has a family name, else the title.
    pub fn to_candidate(&self) -> CompletionCandidate {
        let label = match self.first_author_family() {
            Some(family) => format!("{}, {}", family, self.title),
            None => self.title.clone(),
        };
        CompletionCandidate::new(label, self.id.clone())
    }
}

pub fn parse_bibliography(path: &Path, content: &str) -> Result<Vec<CompletionCandidate>> {
    let entries: Vec<BibliographyEntry> =
        serde_json::from_str(content).map_err(|e| ZettleError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(entries.iter().map(BibliographyEntry::to_candidate).collect())
}

/// Citation candidates, read from disk on first use and then memoized.
///
/// The lock is held across the load so overlapping requests never read the
/// file twice.
#[derive(Default)]
pub struct CitationIndex {
    cache: Mutex<Option<Arc<Vec<CompletionCandidate>>>>,
}

impl CitationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(
        &self,
        path: Option<&Path>,
        fs: &dyn FileSystem,
    ) -> Result<Arc<Vec<CompletionCandidate>>> {
        let mut cache = self
            .cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(references) = &*cache {
            return Ok(references.clone());
        }

        let path = path
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| ZettleError::missing_setting("zettleReferencesFilePath"))?;

        let content = fs.read_to_string(path).map_err(|e| ZettleError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let references = Arc::new(parse_bibliography(path, &content)?);

        log::info!(
            "Loaded {} bibliography entries from {:?}",
            references.len(),
            path
        );
        *cache = Some(references.clone());
        Ok(references)
    }

    pub fn is_loaded(&self) -> bool {
        self.cache
            .lock()
            .map(|cache| cache.is_some())
            .unwrap_or(false)
    }

    /// Drop the memoized entries; the next `load` reads the file again.
    pub fn invalidate(&self) {
        let mut cache = self
            .cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *cache = None;
    }
}
