//! Conversion utilities between Core types and LSP types

use tower_lsp::lsp_types::{CompletionItem, CompletionItemKind, Position};
use zettle_core::line_map::LineMap;
use zettle_core::model::Point;
use zettle_core::{CompletionCandidate, Trigger};

/// Convert an LSP Position to a byte offset into `text`
pub fn lsp_position_to_offset(text: &str, position: Position) -> Option<usize> {
    let point = Point {
        line: position.line,
        col: position.character,
    };
    LineMap::new(text).point_to_offset(text, point)
}

/// The word being typed just before `offset`.
pub fn word_prefix(text: &str, offset: usize) -> &str {
    let before = &text[..offset];
    let start = before
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphanumeric() || *c == '_' || *c == '-')
        .last()
        .map(|(i, _)| i)
        .unwrap_or(offset);
    &before[start..]
}

/// Convert a Core completion to an LSP CompletionItem
pub fn candidate_to_completion_item(
    candidate: CompletionCandidate,
    trigger: Option<Trigger>,
) -> CompletionItem {
    let kind = match trigger {
        Some(Trigger::Citation) => CompletionItemKind::REFERENCE,
        _ => CompletionItemKind::FILE,
    };
    CompletionItem {
        filter_text: Some(candidate.label.clone()),
        label: candidate.label,
        kind: Some(kind),
        insert_text: Some(candidate.insert_text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_prefix() {
        assert_eq!(word_prefix("See [[2024", 10), "2024");
        assert_eq!(word_prefix("See [[", 6), "");
        assert_eq!(word_prefix("[@doe-smith_2", 13), "doe-smith_2");
        assert_eq!(word_prefix("[@é", 4), "é");
    }

    #[test]
    fn test_position_to_offset() {
        let text = "# Title\n[[20";
        let offset = lsp_position_to_offset(text, Position::new(1, 4)).unwrap();
        assert_eq!(offset, text.len());
        assert!(lsp_position_to_offset(text, Position::new(3, 0)).is_none());
    }

    #[test]
    fn test_candidate_kinds() {
        let item = candidate_to_completion_item(
            CompletionCandidate::new("Doe, T1", "a1"),
            Some(Trigger::Citation),
        );
        assert_eq!(item.kind, Some(CompletionItemKind::REFERENCE));
        assert_eq!(item.insert_text.as_deref(), Some("a1"));
        assert_eq!(item.filter_text.as_deref(), Some("Doe, T1"));

        let item = candidate_to_completion_item(
            CompletionCandidate::new("20240101000000.md", "20240101000000"),
            Some(Trigger::WikiLink),
        );
        assert_eq!(item.kind, Some(CompletionItemKind::FILE));
    }
}
