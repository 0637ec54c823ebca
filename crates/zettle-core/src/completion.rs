use crate::citation::CitationIndex;
use crate::config::ZettleConfig;
use crate::error::Result;
use crate::host::{BufferView, MARKDOWN_SELECTOR};
use crate::model::{CompletionCandidate, Trigger};
use crate::registry::DirectoryRegistry;
use crate::scanner::list_notes;
use crate::vfs::FileSystem;
use std::sync::Arc;

/// The trigger formed by the two characters before `prefix`.
pub fn trigger_at(view: &dyn BufferView, point: usize, prefix: &str) -> Option<Trigger> {
    let before_prefix = point.checked_sub(prefix.len())?;
    let start = before_prefix.checked_sub(2)?;
    Trigger::from_context(&view.substr(start, before_prefix))
}

/// Decides what to complete from the two characters before the typed
/// prefix, and builds the candidate list.
///
/// Stateless per request apart from the memoized citation index.
pub struct CompletionEngine {
    fs: Arc<dyn FileSystem>,
    citations: CitationIndex,
}

impl CompletionEngine {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            fs,
            citations: CitationIndex::new(),
        }
    }

    pub fn citations(&self) -> &CitationIndex {
        &self.citations
    }

    /// Completions for the cursor at `point`, after `prefix` has been typed.
    ///
    /// `Ok(None)` means there is nothing to complete here. Errors are setup
    /// problems the user has to fix.
    pub fn complete(
        &self,
        config: &ZettleConfig,
        view: &dyn BufferView,
        point: usize,
        prefix: &str,
    ) -> Result<Option<Vec<CompletionCandidate>>> {
        if view.score_selector(point, MARKDOWN_SELECTOR) == 0 {
            return Ok(None);
        }

        let Some(trigger) = trigger_at(view, point, prefix) else {
            return Ok(None);
        };

        if trigger == Trigger::Citation {
            let references = self
                .citations
                .load(config.zettle_references_file_path.as_deref(), &*self.fs)?;
            return Ok(Some(references.as_ref().clone()));
        }

        self.complete_note_link(config, view, trigger)
    }

    fn complete_note_link(
        &self,
        config: &ZettleConfig,
        view: &dyn BufferView,
        trigger: Trigger,
    ) -> Result<Option<Vec<CompletionCandidate>>> {
        let Some(file) = view.file_name() else {
            return Ok(None);
        };

        let registry = DirectoryRegistry::new(config, &*self.fs);
        let Some(store) = registry.contains_path(&file)? else {
            log::debug!("{:?} is not in a registered note store", file);
            return Ok(None);
        };
        let Some(dir) = file.parent() else {
            return Ok(None);
        };

        let candidates = list_notes(&*self.fs, dir)?
            .iter()
            .filter_map(|name| trigger.note_candidate(name))
            .collect::<Vec<_>>();

        log::debug!(
            "Offering {} {:?} completions from store '{}'",
            candidates.len(),
            trigger,
            store
        );
        Ok(Some(candidates))
    }
}
