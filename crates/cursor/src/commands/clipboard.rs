// Chunk: docs/chunks/clipboard_operations - Cut with whole-line fallback

//! Cut.

use lite_edit_buffer::{Position, Range};

use crate::commands::CursorPlan;
use crate::context::EditContext;
use crate::edit_batch::EditOperationsBuilder;
use crate::selection::CursorState;

/// The range `Cut` removes for `cursor` and the text it puts on the clipboard.
///
/// An empty selection cuts its whole line, break included, when
/// `empty_selection_clipboard` is on.
pub(crate) fn cut_range(ctx: &EditContext<'_>, cursor: &CursorState) -> Option<(Range, String)> {
    let model = ctx.model;
    let selection = cursor.selection.validate(model);

    if !selection.is_empty() {
        let range = selection.range();
        return Some((range, model.value_in_range(range)));
    }
    if !ctx.config.empty_selection_clipboard {
        return None;
    }

    let line = selection.active.line;
    let last = model.line_count();
    let range = if line < last {
        Range::from_coords(line, 1, line + 1, 1)
    } else if line > 1 {
        Range::new(
            Position::new(line - 1, model.line_max_column(line - 1)),
            Position::new(line, model.line_max_column(line)),
        )
    } else {
        Range::from_coords(line, 1, line, model.line_max_column(line))
    };
    Some((range, format!("{}\n", model.line_content(line))))
}

pub(crate) fn cut(ctx: &EditContext<'_>, cursor: &CursorState, builder: &mut EditOperationsBuilder) -> CursorPlan {
    if let Some((range, _)) = cut_range(ctx, cursor) {
        builder.add_edit_operation(range, "");
    }
    CursorPlan::Tracked(builder.track_selection(cursor.selection))
}
