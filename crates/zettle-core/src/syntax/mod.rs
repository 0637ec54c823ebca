use crate::host::MARKDOWN_SELECTOR;
use pulldown_cmark::{Event, Options, Parser, Tag};
use std::ops::Range;

/// Byte ranges of a markdown document that are not prose.
///
/// Code spans, code blocks, raw HTML and YAML front matter are excluded from
/// the `text.html.markdown` scope, so link completion stays quiet there.
pub struct MarkdownScopes {
    excluded: Vec<Range<usize>>,
    /// Code blocks that run to the end of the document (unclosed fences).
    open_ended: Vec<Range<usize>>,
    len: usize,
}

impl MarkdownScopes {
    pub fn new(text: &str) -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);

        let mut excluded = Vec::new();
        let mut open_ended = Vec::new();

        for (event, range) in Parser::new_ext(text, options).into_offset_iter() {
            match event {
                Event::Start(Tag::CodeBlock(_)) => {
                    if range.end == text.len() {
                        open_ended.push(range.clone());
                    }
                    excluded.push(range);
                }
                Event::Start(Tag::HtmlBlock) | Event::Start(Tag::MetadataBlock(_)) => {
                    excluded.push(range);
                }
                Event::Code(_) | Event::InlineHtml(_) => excluded.push(range),
                _ => {}
            }
        }

        Self {
            excluded,
            open_ended,
            len: text.len(),
        }
    }

    pub fn is_prose(&self, offset: usize) -> bool {
        if self.excluded.iter().any(|r| r.contains(&offset)) {
            return false;
        }
        !(offset == self.len && self.open_ended.iter().any(|r| r.start < offset))
    }

    pub fn score_selector(&self, offset: usize, selector: &str) -> u32 {
        if selector == MARKDOWN_SELECTOR && self.is_prose(offset) {
            1
        } else {
            0
        }
    }
}
