// Chunk: docs/chunks/text_model_contract - TextModel trait and batched edits

//! Edit operations and batch validation.
//!
//! A batch is a set of replacements expressed in the coordinates of the
//! buffer *before* any of them is applied. Operations within a batch must not
//! overlap; touching edges are fine, and several pure inserts may share a
//! point (they apply in submission order).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Position, Range};

/// A single replacement: `text` replaces the content of `range`.
///
/// An empty `text` deletes; an empty `range` inserts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOperation {
    pub range: Range,
    pub text: String,
}

impl EditOperation {
    pub fn replace(range: Range, text: impl Into<String>) -> Self {
        Self {
            range,
            text: normalize_line_breaks(text.into()),
        }
    }

    pub fn insert(pos: Position, text: impl Into<String>) -> Self {
        Self::replace(Range::empty_at(pos), text)
    }

    pub fn delete(range: Range) -> Self {
        Self {
            range,
            text: String::new(),
        }
    }

    /// Returns true if this operation would not change anything.
    pub fn is_noop(&self) -> bool {
        self.range.is_empty() && self.text.is_empty()
    }
}

/// Errors raised when a batch violates the edit invariants.
///
/// These indicate a bug in whatever produced the batch, not bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("edit operations overlap: {first} and {second}")]
    OverlappingOperations { first: Range, second: Range },
}

/// Sorts a batch by range (stable, so equal inserts keep their order) and
/// rejects it if any two operations overlap.
pub fn sort_and_validate(ops: &[EditOperation]) -> Result<Vec<EditOperation>, EditError> {
    let sorted: Vec<EditOperation> = batch_order(ops).into_iter().map(|idx| ops[idx].clone()).collect();

    for pair in sorted.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if a.range.end > b.range.start {
            return Err(EditError::OverlappingOperations {
                first: a.range,
                second: b.range,
            });
        }
    }

    Ok(sorted)
}

/// Indices of `ops` in the order [`sort_and_validate`] puts them.
pub fn batch_order(ops: &[EditOperation]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..ops.len()).collect();
    order.sort_by(|&a, &b| {
        let (a, b) = (&ops[a].range, &ops[b].range);
        a.start.cmp(&b.start).then_with(|| a.end.cmp(&b.end))
    });
    order
}

/// Converts `\r\n` and lone `\r` to `\n`.
pub fn normalize_line_breaks(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Returns the position reached by typing `text` starting at `start`.
pub fn end_position_after(start: Position, text: &str) -> Position {
    match text.rfind('\n') {
        None => Position::new(start.line, start.column + text.chars().count()),
        Some(idx) => {
            let newlines = text.matches('\n').count();
            let tail = text[idx + 1..].chars().count();
            Position::new(start.line + newlines, tail + 1)
        }
    }
}
