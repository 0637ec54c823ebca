use crate::model::Point;

/// Line start offsets, for converting LSP positions into byte offsets.
pub struct LineMap {
    line_starts: Vec<usize>,
}

impl LineMap {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, c) in text.char_indices() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Byte offset of a (UTF-16 column) point, `None` past the end of its line.
    pub fn point_to_offset(&self, text: &str, point: Point) -> Option<usize> {
        let line_start = *self.line_starts.get(point.line as usize)?;
        let mut current_col = 0u32;

        for (i, c) in text[line_start..].char_indices() {
            if current_col == point.col {
                return Some(line_start + i);
            }
            if c == '\n' {
                return None;
            }
            current_col += c.len_utf16() as u32;
        }

        if current_col == point.col {
            return Some(text.len());
        }

        None
    }
}
