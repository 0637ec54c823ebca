use serde::{Deserialize, Serialize};

/// Core internal coordinate system (0-based)
/// Does not directly use LSP Position to avoid coupling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub line: u32,
    pub col: u32,
}

/// A completion offered to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionCandidate {
    /// Text shown in the completion list (and fuzzy-matched by the host)
    pub label: String,
    /// Text inserted on accept
    pub insert_text: String,
}

impl CompletionCandidate {
    pub fn new(label: impl Into<String>, insert_text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            insert_text: insert_text.into(),
        }
    }
}

/// What the two characters before the typed prefix ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    WikiLink,   // [[target]]
    InlineLink, // [label](target)
    Citation,   // [@key]
}

impl Trigger {
    pub fn from_context(context: &str) -> Option<Self> {
        match context {
            "[[" => Some(Trigger::WikiLink),
            "](" => Some(Trigger::InlineLink),
            "[@" => Some(Trigger::Citation),
            _ => None,
        }
    }

    pub fn is_note_link(self) -> bool {
        matches!(self, Trigger::WikiLink | Trigger::InlineLink)
    }

    /// Format a note filename for this link style.
    ///
    /// Wiki links drop the `.md` extension; inline links keep it and escape
    /// spaces as `%20`. Citations have no filename form.
    pub fn note_candidate(self, filename: &str) -> Option<CompletionCandidate> {
        let insert_text = match self {
            Trigger::WikiLink => filename.strip_suffix(".md").unwrap_or(filename).to_string(),
            Trigger::InlineLink => filename.replace(' ', "%20"),
            Trigger::Citation => return None,
        };
        Some(CompletionCandidate::new(filename, insert_text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_from_context() {
        assert_eq!(Trigger::from_context("[["), Some(Trigger::WikiLink));
        assert_eq!(Trigger::from_context("]("), Some(Trigger::InlineLink));
        assert_eq!(Trigger::from_context("[@"), Some(Trigger::Citation));
        assert_eq!(Trigger::from_context("xx"), None);
        assert_eq!(Trigger::from_context("["), None);
        assert_eq!(Trigger::from_context(""), None);
    }

    #[test]
    fn test_wiki_link_strips_extension() {
        let candidate = Trigger::WikiLink.note_candidate("20240101000000.md").unwrap();
        assert_eq!(candidate.label, "20240101000000.md");
        assert_eq!(candidate.insert_text, "20240101000000");
    }

    #[test]
    fn test_inline_link_escapes_spaces() {
        let candidate = Trigger::InlineLink
            .note_candidate("20240101000000 draft.md")
            .unwrap();
        assert_eq!(candidate.label, "20240101000000 draft.md");
        assert_eq!(candidate.insert_text, "20240101000000%20draft.md");

        let many = Trigger::InlineLink
            .note_candidate("20240101000000 a  b.md")
            .unwrap();
        assert_eq!(many.insert_text, "20240101000000%20a%20%20b.md");
    }

    #[test]
    fn test_citation_has_no_note_form() {
        assert!(Trigger::Citation.note_candidate("20240101000000.md").is_none());
    }
}
