// Chunk: docs/chunks/text_model_contract - TextModel trait and batched edits

//! The contract the cursor engine reads and mutates a buffer through.
//!
//! Only `line_count`, `line_content`, `value_in_range`, `version_id` and
//! `apply_edits` are required. Everything else is derived from those, and
//! implementations may override the defaults with faster versions.

use unicode_segmentation::UnicodeSegmentation;

use crate::edit::{EditError, EditOperation};
use crate::types::{Position, Range};

/// The result of applying a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedEdits {
    /// Version id after the batch.
    pub version_id: u64,
    /// A batch, in post-edit coordinates, that restores the previous content.
    pub inverse: Vec<EditOperation>,
}

/// The span of a word on a single line, as columns `[start_column, end_column)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordRange {
    pub start_column: usize,
    pub end_column: usize,
}

/// Read and write access to line-based text.
pub trait TextModel {
    /// Number of lines. Always at least 1.
    fn line_count(&self) -> usize;

    /// Content of the 1-based `line`, without its line break.
    ///
    /// Returns an empty string for a line out of range.
    fn line_content(&self, line: usize) -> String;

    /// Text covered by `range` (clamped), with `\n` between lines.
    fn value_in_range(&self, range: Range) -> String;

    /// Monotonic id, bumped by every batch that changes content.
    fn version_id(&self) -> u64;

    /// Applies a batch as if all operations happened simultaneously.
    ///
    /// Ranges are clamped first; overlapping operations reject the whole
    /// batch before anything is touched.
    fn apply_edits(&mut self, ops: &[EditOperation]) -> Result<AppliedEdits, EditError>;

    /// One past the last column of `line`.
    fn line_max_column(&self, line: usize) -> usize {
        self.line_content(line).chars().count() + 1
    }

    /// Column of the first char that is not a space or tab, or 0 for a
    /// blank line.
    fn line_first_non_whitespace_column(&self, line: usize) -> usize {
        self.line_content(line)
            .chars()
            .position(|ch| ch != ' ' && ch != '\t')
            .map_or(0, |idx| idx + 1)
    }

    /// Column just after the last char that is not a space or tab, or 0 for
    /// a blank line.
    fn line_last_non_whitespace_column(&self, line: usize) -> usize {
        let chars: Vec<char> = self.line_content(line).chars().collect();
        chars
            .iter()
            .rposition(|ch| *ch != ' ' && *ch != '\t')
            .map_or(0, |idx| idx + 2)
    }

    /// Clamps `pos` into the buffer.
    fn validate_position(&self, pos: Position) -> Position {
        let line = pos.line.clamp(1, self.line_count());
        let column = pos.column.clamp(1, self.line_max_column(line));
        Position::new(line, column)
    }

    /// Clamps both ends of `range` into the buffer.
    fn validate_range(&self, range: Range) -> Range {
        Range::new(
            self.validate_position(range.start),
            self.validate_position(range.end),
        )
    }

    /// The range covering the entire buffer.
    fn full_range(&self) -> Range {
        let last = self.line_count();
        Range::from_coords(1, 1, last, self.line_max_column(last))
    }

    /// The word containing or touching `pos`, if any.
    ///
    /// Word boundaries follow Unicode word segmentation; a position between
    /// two words belongs to the word on its left.
    fn word_at_position(&self, pos: Position) -> Option<WordRange> {
        let pos = self.validate_position(pos);
        let content = self.line_content(pos.line);
        let mut column = 1;
        for segment in content.split_word_bounds() {
            let len = segment.chars().count();
            let (start, end) = (column, column + len);
            column = end;

            let is_word = segment.chars().any(|ch| ch.is_alphanumeric() || ch == '_');
            if !is_word {
                continue;
            }
            if start <= pos.column && pos.column <= end {
                return Some(WordRange {
                    start_column: start,
                    end_column: end,
                });
            }
        }
        None
    }
}
