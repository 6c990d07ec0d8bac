// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing
// Chunk: docs/chunks/text_model_contract - TextModel trait and batched edits

//! TextBuffer is the concrete [`TextModel`] used by the editor.
//!
//! It combines a gap buffer (for character storage) with a line index (for
//! line access) and a version id. All mutation goes through
//! [`TextModel::apply_edits`]; the buffer holds no cursor state, that belongs
//! to the cursor controller.

use crate::edit::{self, EditError, EditOperation};
use crate::gap_buffer::GapBuffer;
use crate::line_index::LineIndex;
use crate::model::{AppliedEdits, TextModel};
use crate::types::{Position, Range};

/// A versioned text buffer.
#[derive(Debug)]
pub struct TextBuffer {
    buffer: GapBuffer,
    line_index: LineIndex,
    version_id: u64,
    /// Mutation counter for sampling debug assertions (debug builds only).
    #[cfg(debug_assertions)]
    debug_mutation_count: u64,
}

/// A clamped operation resolved to char offsets.
struct OffsetEdit {
    start: usize,
    end: usize,
    text: String,
    /// Start offset in the post-edit buffer.
    new_start: usize,
}

impl TextBuffer {
    /// Creates a new empty text buffer.
    pub fn new() -> Self {
        Self::from_str("")
    }

    /// Creates a text buffer initialized with the given content.
    ///
    /// Note: We don't implement `FromStr` because it requires returning `Result`,
    /// but parsing a string into a TextBuffer cannot fail.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        let content = edit::normalize_line_breaks(content.to_string());
        let buffer = GapBuffer::from_str(&content);
        let mut line_index = LineIndex::new();
        line_index.rebuild(content.chars());

        Self {
            buffer,
            line_index,
            version_id: 1,
            #[cfg(debug_assertions)]
            debug_mutation_count: 0,
        }
    }

    /// Creates a buffer from individual lines joined with `\n`.
    pub fn from_lines(lines: &[&str]) -> Self {
        Self::from_str(&lines.join("\n"))
    }

    // ==================== Accessors ====================

    /// Returns the total character count in the buffer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the entire buffer content as a String.
    pub fn content(&self) -> String {
        self.buffer.to_string()
    }

    /// Returns the length of the 1-based `line` (excluding newline).
    pub fn line_len(&self, line: usize) -> usize {
        line.checked_sub(1)
            .and_then(|idx| self.line_index.line_len(idx, self.buffer.len()))
            .unwrap_or(0)
    }

    /// Converts a position (clamped) to a char offset.
    pub fn offset_at(&self, pos: Position) -> usize {
        let pos = self.validate_position(pos);
        let line_start = self.line_index.line_start(pos.line - 1).unwrap_or(0);
        line_start + pos.column - 1
    }

    /// Converts a char offset (clamped) to a position.
    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.buffer.len());
        let line = self.line_index.line_at_offset(offset);
        let line_start = self.line_index.line_start(line).unwrap_or(0);
        Position::new(line + 1, offset - line_start + 1)
    }

    // ==================== Validation ====================

    /// Debug assertion: verifies that the incremental line_index matches
    /// a fresh rebuild from the buffer content.
    ///
    /// Uses a mutation counter so the O(n) rebuild doesn't tank perf
    /// in tight loops, checking every 64th batch.
    #[cfg(debug_assertions)]
    fn assert_line_index_consistent(&mut self) {
        self.debug_mutation_count += 1;
        if self.debug_mutation_count % 64 != 0 {
            return;
        }
        let mut expected = LineIndex::new();
        expected.rebuild(self.buffer.chars());
        assert_eq!(
            self.line_index.line_starts(),
            expected.line_starts(),
            "line_index drift detected after {} batches (buffer len {})",
            self.debug_mutation_count,
            self.buffer.len(),
        );
    }

    #[cfg(not(debug_assertions))]
    fn assert_line_index_consistent(&mut self) {}

    // ==================== Mutations ====================

    fn resolve_offsets(&self, sorted: Vec<EditOperation>) -> Vec<OffsetEdit> {
        let mut delta: isize = 0;
        sorted
            .into_iter()
            .map(|op| {
                let start = self.offset_at(op.range.start);
                let end = self.offset_at(op.range.end);
                let new_start = (start as isize + delta) as usize;
                delta += op.text.chars().count() as isize - (end - start) as isize;
                OffsetEdit {
                    start,
                    end,
                    text: op.text,
                    new_start,
                }
            })
            .collect()
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextModel for TextBuffer {
    fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    fn line_content(&self, line: usize) -> String {
        let Some(idx) = line.checked_sub(1) else {
            return String::new();
        };
        let total_len = self.buffer.len();
        match (
            self.line_index.line_start(idx),
            self.line_index.line_end(idx, total_len),
        ) {
            (Some(start), Some(end)) => self.buffer.slice(start, end),
            _ => String::new(),
        }
    }

    fn line_max_column(&self, line: usize) -> usize {
        self.line_len(line) + 1
    }

    fn value_in_range(&self, range: Range) -> String {
        let range = self.validate_range(range);
        self.buffer
            .slice(self.offset_at(range.start), self.offset_at(range.end))
    }

    fn version_id(&self) -> u64 {
        self.version_id
    }

    fn apply_edits(&mut self, ops: &[EditOperation]) -> Result<AppliedEdits, EditError> {
        let clamped: Vec<EditOperation> = ops
            .iter()
            .map(|op| EditOperation::replace(self.validate_range(op.range), op.text.clone()))
            .filter(|op| !op.is_noop())
            .collect();

        let sorted = edit::sort_and_validate(&clamped).map_err(|err| {
            tracing::warn!(%err, "rejecting edit batch");
            err
        })?;

        let edits = self.resolve_offsets(sorted);

        // Back-to-front so earlier offsets stay valid.
        let mut removed: Vec<String> = vec![String::new(); edits.len()];
        for (idx, edit) in edits.iter().enumerate().rev() {
            let text = self.buffer.replace(edit.start, edit.end, &edit.text);
            let removed_newlines = text.matches('\n').count();
            self.line_index
                .replace(edit.start, edit.end - edit.start, removed_newlines, &edit.text);
            removed[idx] = text;
        }

        let inverse: Vec<EditOperation> = edits
            .iter()
            .zip(removed)
            .map(|(edit, old_text)| {
                let inserted = edit.text.chars().count();
                let range = Range::new(
                    self.position_at(edit.new_start),
                    self.position_at(edit.new_start + inserted),
                );
                EditOperation {
                    range,
                    text: old_text,
                }
            })
            .collect();

        if !edits.is_empty() {
            self.version_id += 1;
            self.assert_line_index_consistent();
        }

        tracing::trace!(
            operations = edits.len(),
            version_id = self.version_id,
            "applied edit batch"
        );

        Ok(AppliedEdits {
            version_id: self.version_id,
            inverse,
        })
    }
}
