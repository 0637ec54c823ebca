use std::path::PathBuf;
use zettle_core::host::BufferView;
use zettle_core::syntax::MarkdownScopes;

/// An open document as seen by the completion engine.
pub struct DocumentView<'a> {
    text: &'a str,
    path: Option<PathBuf>,
    scopes: MarkdownScopes,
}

impl<'a> DocumentView<'a> {
    pub fn new(text: &'a str, path: Option<PathBuf>) -> Self {
        Self {
            text,
            path,
            scopes: MarkdownScopes::new(text),
        }
    }
}

impl BufferView for DocumentView<'_> {
    fn file_name(&self) -> Option<PathBuf> {
        self.path.clone()
    }

    fn score_selector(&self, point: usize, selector: &str) -> u32 {
        self.scopes.score_selector(point, selector)
    }

    fn substr(&self, start: usize, end: usize) -> String {
        self.text.get(start..end).unwrap_or_default().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zettle_core::host::MARKDOWN_SELECTOR;

    #[test]
    fn test_substr_respects_char_boundaries() {
        let view = DocumentView::new("é[[", None);
        assert_eq!(view.substr(2, 4), "[[");
        assert_eq!(view.substr(1, 3), "");
        assert_eq!(view.substr(3, 10), "");
    }

    #[test]
    fn test_scope_uses_markdown_structure() {
        let text = "`[[` and [[";
        let view = DocumentView::new(text, None);
        assert_eq!(view.score_selector(3, MARKDOWN_SELECTOR), 0);
        assert_eq!(view.score_selector(text.len(), MARKDOWN_SELECTOR), 1);
    }
}
