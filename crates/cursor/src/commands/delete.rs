// Chunk: docs/chunks/delete_commands - Character and word deletion

//! Character and word deletion.
//!
//! A non-empty selection is always deleted as a whole; otherwise the span
//! between the caret and the next stop in the given direction is.

use lite_edit_buffer::{Position, Range};

use crate::commands::CursorPlan;
use crate::context::EditContext;
use crate::edit_batch::EditOperationsBuilder;
use crate::selection::CursorState;
use crate::word::{next_word_stop, prev_word_stop};

fn delete_towards(
    ctx: &EditContext<'_>,
    cursor: &CursorState,
    builder: &mut EditOperationsBuilder,
    stop: impl FnOnce(Position) -> Position,
) -> CursorPlan {
    let selection = cursor.selection.validate(ctx.model);
    let range = if selection.is_empty() {
        Range::new(selection.active, stop(selection.active))
    } else {
        selection.range()
    };

    if !range.is_empty() {
        builder.add_edit_operation(range, "");
    }
    CursorPlan::Tracked(builder.track_selection(selection))
}

pub(crate) fn delete_left(ctx: &EditContext<'_>, cursor: &CursorState, builder: &mut EditOperationsBuilder) -> CursorPlan {
    let model = ctx.model;
    delete_towards(ctx, cursor, builder, |pos| {
        if pos.column > 1 {
            Position::new(pos.line, pos.column - 1)
        } else if pos.line > 1 {
            Position::new(pos.line - 1, model.line_max_column(pos.line - 1))
        } else {
            pos
        }
    })
}

pub(crate) fn delete_right(ctx: &EditContext<'_>, cursor: &CursorState, builder: &mut EditOperationsBuilder) -> CursorPlan {
    let model = ctx.model;
    delete_towards(ctx, cursor, builder, |pos| {
        if pos.column < model.line_max_column(pos.line) {
            Position::new(pos.line, pos.column + 1)
        } else if pos.line < model.line_count() {
            Position::new(pos.line + 1, 1)
        } else {
            pos
        }
    })
}

pub(crate) fn delete_word_left(
    ctx: &EditContext<'_>,
    cursor: &CursorState,
    builder: &mut EditOperationsBuilder,
) -> CursorPlan {
    delete_towards(ctx, cursor, builder, |pos| prev_word_stop(ctx.model, pos, ctx.config))
}

pub(crate) fn delete_word_right(
    ctx: &EditContext<'_>,
    cursor: &CursorState,
    builder: &mut EditOperationsBuilder,
) -> CursorPlan {
    delete_towards(ctx, cursor, builder, |pos| next_word_stop(ctx.model, pos, ctx.config))
}
