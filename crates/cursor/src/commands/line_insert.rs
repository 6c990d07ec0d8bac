// Chunk: docs/chunks/edit_commands - Two-phase editing commands

//! Inserting an empty line above or below the caret's line.

use lite_edit_buffer::{Position, Range};

use crate::commands::{CaretColumn, CursorPlan};
use crate::context::EditContext;
use crate::edit_batch::{EditOperationsBuilder, TrackingBias};
use crate::selection::{CursorState, Selection};

fn insert_break_at(pos: Position, lines_down: usize, builder: &mut EditOperationsBuilder) -> CursorPlan {
    builder.add_edit_operation(Range::empty_at(pos), "\n");
    let id = builder.track_selection_with_bias(
        Selection::caret(pos),
        TrackingBias::StickyLeft,
        TrackingBias::StickyLeft,
    );
    CursorPlan::CaretFrom {
        id,
        lines_down,
        column: CaretColumn::At(1),
    }
}

pub(crate) fn line_insert_before(
    ctx: &EditContext<'_>,
    cursor: &CursorState,
    builder: &mut EditOperationsBuilder,
) -> CursorPlan {
    let line = ctx.model.validate_position(cursor.selection.active).line;
    insert_break_at(Position::new(line, 1), 0, builder)
}

pub(crate) fn line_insert_after(
    ctx: &EditContext<'_>,
    cursor: &CursorState,
    builder: &mut EditOperationsBuilder,
) -> CursorPlan {
    let line = ctx.model.validate_position(cursor.selection.active).line;
    insert_break_at(Position::new(line, ctx.model.line_max_column(line)), 1, builder)
}
