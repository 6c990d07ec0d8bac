// Chunk: docs/chunks/text_selection_model - Selection anchor and range API
// Chunk: docs/chunks/cursor_engine - Per-cursor state

//! Directional selections and per-cursor state.

use lite_edit_buffer::{Position, Range, TextModel};
use serde::{Deserialize, Serialize};

/// Which end of a selection is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDirection {
    /// The active end is at or after the anchor.
    LeftToRight,
    /// The active end is before the anchor.
    RightToLeft,
}

/// A range plus the end the user is moving.
///
/// When `anchor == active` there is no selection, only a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// The fixed end (`selectionStart`).
    pub anchor: Position,
    /// The live end (`position`).
    pub active: Position,
}

impl Selection {
    pub const fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// A caret with no selection.
    pub const fn caret(pos: Position) -> Self {
        Self::new(pos, pos)
    }

    /// A selection covering `range` in the given direction.
    pub fn from_range(range: Range, direction: SelectionDirection) -> Self {
        match direction {
            SelectionDirection::LeftToRight => Self::new(range.start, range.end),
            SelectionDirection::RightToLeft => Self::new(range.end, range.start),
        }
    }

    /// The selected range, ordered.
    pub fn range(&self) -> Range {
        Range::new(self.anchor, self.active)
    }

    pub fn start(&self) -> Position {
        self.anchor.min(self.active)
    }

    pub fn end(&self) -> Position {
        self.anchor.max(self.active)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    pub fn direction(&self) -> SelectionDirection {
        if self.active < self.anchor {
            SelectionDirection::RightToLeft
        } else {
            SelectionDirection::LeftToRight
        }
    }

    /// Keeps the anchor and moves the active end.
    pub fn extend_to(&self, pos: Position) -> Self {
        Self::new(self.anchor, pos)
    }

    /// Clamps both ends into `model`.
    pub fn validate(&self, model: &dyn TextModel) -> Self {
        Self::new(
            model.validate_position(self.anchor),
            model.validate_position(self.active),
        )
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::caret(Position::default())
    }
}

/// One cursor: its selection plus transient movement state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorState {
    pub selection: Selection,
    /// Visual column (1-based) kept across a run of vertical moves.
    ///
    /// Reset by every non-vertical command.
    pub sticky_visual_column: Option<usize>,
}

impl CursorState {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            sticky_visual_column: None,
        }
    }

    pub fn caret(pos: Position) -> Self {
        Self::new(Selection::caret(pos))
    }

    /// The active end of the selection.
    pub fn position(&self) -> Position {
        self.selection.active
    }

    /// Clamps the selection into `model`, keeping the sticky column.
    pub fn validate(&self, model: &dyn TextModel) -> Self {
        Self {
            selection: self.selection.validate(model),
            sticky_visual_column: self.sticky_visual_column,
        }
    }
}

impl From<Selection> for CursorState {
    fn from(selection: Selection) -> Self {
        Self::new(selection)
    }
}
