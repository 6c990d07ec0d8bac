// Chunk: docs/chunks/toggle_comment - Line and block comment toggling

//! Line and block comment toggling.
//!
//! Line comments are inserted at the smallest visual indentation among the
//! non-blank touched lines, so mixed tab and space indentation still lines up.
//! Without a line comment marker the touched range is block-commented.

use lite_edit_buffer::{Position, Range};

use crate::columns::{column_from_visible_column, indentation_width};
use crate::commands::{touched_lines, track_inner, track_line_edges, CaretColumn, CursorPlan};
use crate::context::EditContext;
use crate::edit_batch::{EditOperationsBuilder, TrackingBias};
use crate::selection::{CursorState, Selection};

pub(crate) fn toggle_line_comment(
    ctx: &EditContext<'_>,
    cursor: &CursorState,
    builder: &mut EditOperationsBuilder,
) -> CursorPlan {
    let rules = ctx.language.comments.as_ref();
    let marker = rules
        .and_then(|rules| rules.line_comment.as_deref())
        .filter(|marker| !marker.is_empty());

    let Some(marker) = marker else {
        return match rules.and_then(|rules| rules.block_comment.as_ref()) {
            Some((open, close)) => {
                let range = block_range_for_lines(ctx, cursor);
                toggle_block(ctx, cursor, range, open, close, builder)
            }
            None => CursorPlan::Tracked(builder.track_selection(cursor.selection)),
        };
    };

    let model = ctx.model;
    let tab_size = ctx.tab_size();
    let (first_line, last_line) = touched_lines(cursor.selection.validate(model).range());

    // (line, content, first non-whitespace column) of every non-blank line
    let lines: Vec<(usize, String, usize)> = (first_line..=last_line)
        .filter_map(|line| {
            let first = model.line_first_non_whitespace_column(line);
            (first != 0).then(|| (line, model.line_content(line), first))
        })
        .collect();

    if lines.is_empty() {
        return CursorPlan::Tracked(builder.track_selection(cursor.selection));
    }

    let marker_len = marker.chars().count();
    let all_commented = lines.iter().all(|(_, content, first)| {
        let rest: String = content.chars().skip(first - 1).collect();
        rest.starts_with(marker)
    });

    if all_commented {
        for (line, content, first) in &lines {
            let followed_by_space = content.chars().nth(first - 1 + marker_len) == Some(' ');
            let len = marker_len + usize::from(followed_by_space);
            builder.add_edit_operation(Range::from_coords(*line, *first, *line, first + len), "");
        }
    } else {
        let min_width = lines
            .iter()
            .map(|(_, content, _)| indentation_width(content, tab_size))
            .min()
            .unwrap_or(0);
        let text = format!("{marker} ");
        for (line, content, _) in &lines {
            let column = column_from_visible_column(content, min_width + 1, tab_size);
            builder.add_edit_operation(Range::empty_at(Position::new(*line, column)), text.as_str());
        }
    }

    CursorPlan::Tracked(track_line_edges(builder, cursor.selection))
}

pub(crate) fn toggle_block_comment(
    ctx: &EditContext<'_>,
    cursor: &CursorState,
    builder: &mut EditOperationsBuilder,
) -> CursorPlan {
    let block = ctx
        .language
        .comments
        .as_ref()
        .and_then(|rules| rules.block_comment.as_ref());
    match block {
        Some((open, close)) => {
            let range = cursor.selection.validate(ctx.model).range();
            toggle_block(ctx, cursor, range, open, close, builder)
        }
        None => CursorPlan::Tracked(builder.track_selection(cursor.selection)),
    }
}

/// The selection, or the non-blank content of the caret's line.
fn block_range_for_lines(ctx: &EditContext<'_>, cursor: &CursorState) -> Range {
    let model = ctx.model;
    let selection = cursor.selection.validate(model);
    if !selection.is_empty() {
        return selection.range();
    }
    let line = selection.active.line;
    let first = model.line_first_non_whitespace_column(line);
    if first == 0 {
        return selection.range();
    }
    let last = model.line_last_non_whitespace_column(line);
    Range::from_coords(line, first, line, last)
}

fn toggle_block(
    ctx: &EditContext<'_>,
    cursor: &CursorState,
    range: Range,
    open: &str,
    close: &str,
    builder: &mut EditOperationsBuilder,
) -> CursorPlan {
    let model = ctx.model;
    let open_len = open.chars().count();
    let close_len = close.chars().count();

    // Markers inside the range
    let text = model.value_in_range(range);
    let text_len = text.chars().count();
    if text_len >= open_len + close_len && text.starts_with(open) && text.ends_with(close) {
        let chars: Vec<char> = text.chars().collect();
        let mut head = open_len;
        if chars.get(head) == Some(&' ') && head + 1 + close_len <= text_len {
            head += 1;
        }
        let mut tail = close_len;
        if text_len >= head + tail + 1 && chars[text_len - tail - 1] == ' ' {
            tail += 1;
        }
        builder.add_edit_operation(
            Range::new(range.start, Position::new(range.start.line, range.start.column + head)),
            "",
        );
        builder.add_edit_operation(
            Range::new(Position::new(range.end.line, range.end.column - tail), range.end),
            "",
        );
        return CursorPlan::Tracked(builder.track_selection(cursor.selection));
    }

    // Markers around the range
    let prefix: String = model
        .line_content(range.start.line)
        .chars()
        .take(range.start.column - 1)
        .collect();
    let suffix: String = model
        .line_content(range.end.line)
        .chars()
        .skip(range.end.column - 1)
        .collect();
    let head = if prefix.ends_with(&format!("{open} ")) {
        Some(open_len + 1)
    } else if prefix.ends_with(open) {
        Some(open_len)
    } else {
        None
    };
    let tail = if suffix.starts_with(&format!(" {close}")) {
        Some(close_len + 1)
    } else if suffix.starts_with(close) {
        Some(close_len)
    } else {
        None
    };
    if let (Some(head), Some(tail)) = (head, tail) {
        builder.add_edit_operation(
            Range::new(Position::new(range.start.line, range.start.column - head), range.start),
            "",
        );
        builder.add_edit_operation(
            Range::new(range.end, Position::new(range.end.line, range.end.column + tail)),
            "",
        );
        return CursorPlan::Tracked(builder.track_selection(cursor.selection));
    }

    // Wrap
    builder.add_edit_operation(Range::empty_at(range.start), format!("{open} "));
    builder.add_edit_operation(Range::empty_at(range.end), format!(" {close}"));

    if range.is_empty() {
        let id = builder.track_selection_with_bias(
            Selection::caret(range.start),
            TrackingBias::StickyLeft,
            TrackingBias::StickyLeft,
        );
        return CursorPlan::CaretFrom {
            id,
            lines_down: 0,
            column: CaretColumn::Advance(open_len + 1),
        };
    }
    if cursor.selection.is_empty() {
        return CursorPlan::Tracked(builder.track_selection(cursor.selection));
    }
    CursorPlan::Tracked(track_inner(builder, cursor.selection))
}
