// Chunk: docs/chunks/edit_commands - Two-phase editing commands
// Chunk: docs/chunks/auto_indent_enter - Indentation of lines created by Enter

//! Typing text, with auto-indentation for a lone line break.

use crate::columns::{indentation_width, next_indent_tab_stop, prev_indent_tab_stop};
use crate::commands::{CaretColumn, CursorPlan};
use crate::context::EditContext;
use crate::edit_batch::{EditOperationsBuilder, TrackingBias};
use crate::language::EnterAction;
use crate::selection::{CursorState, Selection};

pub(crate) fn type_text(
    ctx: &EditContext<'_>,
    cursor: &CursorState,
    text: &str,
    builder: &mut EditOperationsBuilder,
) -> CursorPlan {
    if text == "\n" && ctx.config.auto_indent {
        return type_newline(ctx, cursor, builder);
    }
    insert_text(cursor, text, builder)
}

/// Replaces the selection with `text`; the caret ends after it.
pub(crate) fn insert_text(cursor: &CursorState, text: &str, builder: &mut EditOperationsBuilder) -> CursorPlan {
    builder.add_edit_operation(cursor.selection.range(), text);
    CursorPlan::Tracked(builder.track_selection(cursor.selection))
}

fn type_newline(ctx: &EditContext<'_>, cursor: &CursorState, builder: &mut EditOperationsBuilder) -> CursorPlan {
    let model = ctx.model;
    let range = cursor.selection.range();
    let tab_size = ctx.tab_size();

    // Indentation of the current line, up to the caret
    let indent: String = model
        .line_content(range.start.line)
        .chars()
        .take(range.start.column - 1)
        .take_while(|ch| *ch == ' ' || *ch == '\t')
        .collect();
    let width = indentation_width(&indent, tab_size);

    let action = ctx
        .language
        .indenter
        .as_ref()
        .map_or(EnterAction::None, |indenter| indenter.on_enter(model, range));

    let text = match action {
        EnterAction::None => format!("\n{indent}"),
        EnterAction::Indent => {
            let deeper = ctx.config.indentation_for_width(next_indent_tab_stop(width, tab_size));
            format!("\n{deeper}")
        }
        EnterAction::Outdent => {
            let shallower = ctx.config.indentation_for_width(prev_indent_tab_stop(width, tab_size));
            format!("\n{shallower}")
        }
        EnterAction::IndentOutdent => {
            let inner = ctx.config.indentation_for_width(next_indent_tab_stop(width, tab_size));
            builder.add_edit_operation(range, format!("\n{inner}\n{indent}"));
            let id = builder.track_selection_with_bias(
                Selection::caret(range.start),
                TrackingBias::StickyLeft,
                TrackingBias::StickyLeft,
            );
            return CursorPlan::CaretFrom {
                id,
                lines_down: 1,
                column: CaretColumn::At(inner.chars().count() + 1),
            };
        }
    };

    insert_text(cursor, &text, builder)
}
