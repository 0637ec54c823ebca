//! Boundary between the core and the editor hosting it.
//!
//! The completion engine only needs to look at a buffer; the creation
//! commands need interactive UI. Both are traits so tests can fake them.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Scope selector for markdown prose.
pub const MARKDOWN_SELECTOR: &str = "text.html.markdown";

/// Read-only view of the buffer being edited. Points are byte offsets.
pub trait BufferView {
    /// Path of the file backing the buffer, `None` for unsaved buffers.
    fn file_name(&self) -> Option<PathBuf>;

    /// Non-zero when the text at `point` matches `selector`.
    fn score_selector(&self, point: usize, selector: &str) -> u32;

    /// Text between `start` and `end`; empty when the range is invalid.
    fn substr(&self, start: usize, end: usize) -> String;
}

/// Interactive window primitives. Every prompt can be dismissed, which is
/// reported as `None`.
#[async_trait]
pub trait Window: Send + Sync {
    /// Ask the user to pick one of `items`; returns the chosen index.
    async fn show_quick_pick(&self, items: &[String]) -> Option<usize>;

    /// Ask for a line of text, pre-filled with `initial`.
    async fn show_input_panel(&self, caption: &str, initial: &str) -> Option<String>;

    async fn open_file(&self, path: &Path);

    async fn show_error(&self, message: &str);
}
