// Chunk: docs/chunks/indent_outdent - Tab, Indent and Outdent

//! Tab, Indent and Outdent.
//!
//! Shifting rewrites each touched line's leading whitespace to the next or
//! previous tab stop, normalised to tabs or spaces per `insert_spaces`.

use lite_edit_buffer::{Position, Range};

use crate::columns::{indentation_width, next_indent_tab_stop, prev_indent_tab_stop, visible_column_from_column};
use crate::commands::type_text::insert_text;
use crate::commands::{touched_lines, track_line_edges, CursorPlan};
use crate::context::EditContext;
use crate::edit_batch::EditOperationsBuilder;
use crate::selection::CursorState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shift {
    Indent,
    Outdent,
}

/// A caret or a partial single-line selection jumps to the next tab stop;
/// anything covering whole lines is indented.
pub(crate) fn tab(ctx: &EditContext<'_>, cursor: &CursorState, builder: &mut EditOperationsBuilder) -> CursorPlan {
    let range = cursor.selection.range();
    let whole_line = range.start.column == 1 && range.end.column == ctx.model.line_max_column(range.end.line);

    if range.is_empty() || (range.is_single_line() && !whole_line) {
        let text = next_indent_text(ctx, range.start);
        return insert_text(cursor, &text, builder);
    }
    shift_lines(ctx, cursor, Shift::Indent, builder)
}

/// Text that advances `pos` to the next tab stop.
fn next_indent_text(ctx: &EditContext<'_>, pos: Position) -> String {
    if !ctx.config.insert_spaces {
        return "\t".to_string();
    }
    let tab_size = ctx.tab_size();
    let line = ctx.model.line_content(pos.line);
    let visible = visible_column_from_column(&line, pos.column, tab_size) - 1;
    " ".repeat(tab_size - visible % tab_size)
}

pub(crate) fn shift_lines(
    ctx: &EditContext<'_>,
    cursor: &CursorState,
    shift: Shift,
    builder: &mut EditOperationsBuilder,
) -> CursorPlan {
    let model = ctx.model;
    let tab_size = ctx.tab_size();
    let range = cursor.selection.range();
    let (first_line, last_line) = touched_lines(range);

    for line in first_line..=last_line {
        let content = model.line_content(line);
        let len = content.chars().count();
        let first_non_ws = model.line_first_non_whitespace_column(line);
        // A blank line is all indentation
        let indent_end = if first_non_ws == 0 { len + 1 } else { first_non_ws };

        if shift == Shift::Indent && !range.is_empty() && len == 0 {
            continue;
        }
        if shift == Shift::Outdent && indent_end == 1 {
            continue;
        }

        let old: String = content.chars().take(indent_end - 1).collect();
        let width = indentation_width(&old, tab_size);
        let desired = match shift {
            Shift::Indent => next_indent_tab_stop(width, tab_size),
            Shift::Outdent => prev_indent_tab_stop(width, tab_size),
        };
        let new = ctx.config.indentation_for_width(desired);
        if new == old {
            continue;
        }
        builder.add_edit_operation(Range::from_coords(line, 1, line, indent_end), new);
    }

    CursorPlan::Tracked(track_line_edges(builder, cursor.selection))
}
