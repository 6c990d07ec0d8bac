// Chunk: docs/chunks/edit_commands - Two-phase editing commands
//!
//! Editing commands as data.
//!
//! Each [`EditCommand`] follows the two-phase protocol. Phase one,
//! [`EditCommand::get_edit_operations`], inspects the buffer and records edits
//! plus tracked selections for one cursor, returning a [`CursorPlan`]. After
//! the controller applies the batch, phase two, [`compute_cursor_state`],
//! resolves the plan against the post-edit buffer.
//!
//! Commands hold no state between invocations.

mod clipboard;
mod comment;
mod delete;
mod line_insert;
mod shift;
mod type_text;

use lite_edit_buffer::{Position, Range, TextModel};

use crate::context::EditContext;
use crate::edit_batch::{EditOperationsBuilder, TrackedSelections, TrackingBias, TrackingId};
use crate::selection::{CursorState, Selection, SelectionDirection};

pub(crate) use clipboard::cut_range;

/// An editing command applied to every cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Types text, replacing the selection. A lone `"\n"` auto-indents.
    Type { text: String },
    /// Inserts text verbatim (paste), replacing the selection.
    InsertText { text: String },
    Tab,
    Indent,
    Outdent,
    DeleteLeft,
    DeleteRight,
    DeleteWordLeft,
    DeleteWordRight,
    LineInsertBefore,
    LineInsertAfter,
    ToggleLineComment,
    ToggleBlockComment,
    Cut,
}

/// Where a cursor goes once its command's edits are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPlan {
    /// The tracked selection, resolved through the batch.
    Tracked(TrackingId),
    /// A caret relative to the resolved active end of a tracked selection.
    CaretFrom {
        id: TrackingId,
        lines_down: usize,
        column: CaretColumn,
    },
}

/// Column part of [`CursorPlan::CaretFrom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretColumn {
    /// An absolute column on the target line.
    At(usize),
    /// The resolved column plus an offset.
    Advance(usize),
}

impl EditCommand {
    /// Phase one: records this command's edits for `cursor`.
    pub fn get_edit_operations(
        &self,
        ctx: &EditContext<'_>,
        cursor: &CursorState,
        builder: &mut EditOperationsBuilder,
    ) -> CursorPlan {
        match self {
            EditCommand::Type { text } => type_text::type_text(ctx, cursor, text, builder),
            EditCommand::InsertText { text } => type_text::insert_text(cursor, text, builder),
            EditCommand::Tab => shift::tab(ctx, cursor, builder),
            EditCommand::Indent => shift::shift_lines(ctx, cursor, shift::Shift::Indent, builder),
            EditCommand::Outdent => shift::shift_lines(ctx, cursor, shift::Shift::Outdent, builder),
            EditCommand::DeleteLeft => delete::delete_left(ctx, cursor, builder),
            EditCommand::DeleteRight => delete::delete_right(ctx, cursor, builder),
            EditCommand::DeleteWordLeft => delete::delete_word_left(ctx, cursor, builder),
            EditCommand::DeleteWordRight => delete::delete_word_right(ctx, cursor, builder),
            EditCommand::LineInsertBefore => line_insert::line_insert_before(ctx, cursor, builder),
            EditCommand::LineInsertAfter => line_insert::line_insert_after(ctx, cursor, builder),
            EditCommand::ToggleLineComment => comment::toggle_line_comment(ctx, cursor, builder),
            EditCommand::ToggleBlockComment => comment::toggle_block_comment(ctx, cursor, builder),
            EditCommand::Cut => clipboard::cut(ctx, cursor, builder),
        }
    }
}

/// Phase two: resolves `plan` against the post-edit `model`.
pub fn compute_cursor_state(plan: CursorPlan, model: &dyn TextModel, tracked: &TrackedSelections) -> CursorState {
    match plan {
        CursorPlan::Tracked(id) => CursorState::new(tracked.get(id).validate(model)),
        CursorPlan::CaretFrom {
            id,
            lines_down,
            column,
        } => {
            let base = tracked.get(id).active;
            let column = match column {
                CaretColumn::At(column) => column,
                CaretColumn::Advance(offset) => base.column + offset,
            };
            CursorState::caret(model.validate_position(Position::new(base.line + lines_down, column)))
        }
    }
}

/// Tracks a selection for commands that edit whole lines.
///
/// Ends of a non-empty selection sitting at column 1 stay put when text is
/// inserted there, so line-wise selections keep covering whole lines.
pub(crate) fn track_line_edges(builder: &mut EditOperationsBuilder, selection: Selection) -> TrackingId {
    let bias = |pos: Position| {
        if !selection.is_empty() && pos.column == 1 {
            TrackingBias::StickyLeft
        } else {
            TrackingBias::Forward
        }
    };
    builder.track_selection_with_bias(selection, bias(selection.anchor), bias(selection.active))
}

/// Tracks a selection whose start follows text inserted at it while its end
/// stays before text inserted there.
pub(crate) fn track_inner(builder: &mut EditOperationsBuilder, selection: Selection) -> TrackingId {
    let (anchor_bias, active_bias) = match selection.direction() {
        SelectionDirection::LeftToRight => (TrackingBias::Forward, TrackingBias::StickyLeft),
        SelectionDirection::RightToLeft => (TrackingBias::StickyLeft, TrackingBias::Forward),
    };
    builder.track_selection_with_bias(selection, anchor_bias, active_bias)
}

/// The lines a selection touches. A multi-line selection ending at column 1
/// does not touch its last line.
pub(crate) fn touched_lines(range: Range) -> (usize, usize) {
    let mut end_line = range.end.line;
    if !range.is_empty() && range.end.column == 1 && end_line > range.start.line {
        end_line -= 1;
    }
    (range.start.line, end_line)
}
