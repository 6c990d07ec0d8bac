// Chunk: docs/chunks/cursor_movement - Character, word, line, page and document movement
// Chunk: docs/chunks/line_nav_keybindings - Home/End toggles

//! The movement engine.
//!
//! Pure functions from the current cursor state plus an intent to a new
//! cursor state. They only read the model. `select = true` keeps the anchor
//! and relocates the active end; `select = false` collapses to a caret.

use lite_edit_buffer::{Position, TextModel};

use crate::columns::{column_from_visible_column, visible_column_from_column};
use crate::context::EditContext;
use crate::selection::{CursorState, Selection};
use crate::word::{next_word_stop, prev_word_stop};

/// A movement intent for one cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Left,
    Right,
    /// Up by a number of lines (1 for arrow keys, a page for PageUp).
    Up(usize),
    Down(usize),
    WordLeft,
    WordRight,
    Home,
    End,
    Top,
    Bottom,
    To(Position),
}

impl Movement {
    fn is_vertical(&self) -> bool {
        matches!(self, Movement::Up(_) | Movement::Down(_))
    }
}

/// Places the active end at `pos`, extending or collapsing.
fn place(cursor: &CursorState, pos: Position, select: bool) -> Selection {
    if select {
        cursor.selection.extend_to(pos)
    } else {
        Selection::caret(pos)
    }
}

/// Applies `movement` to one cursor.
pub fn move_cursor(ctx: &EditContext<'_>, cursor: &CursorState, movement: Movement, select: bool) -> CursorState {
    let model = ctx.model;
    let cursor = cursor.validate(model);
    let selection = cursor.selection;
    let active = selection.active;

    if movement.is_vertical() {
        return move_vertically(ctx, &cursor, movement, select);
    }

    let selection = match movement {
        // Plain Left/Right collapse a selection to its near edge
        Movement::Left if !select && !selection.is_empty() => Selection::caret(selection.start()),
        Movement::Right if !select && !selection.is_empty() => Selection::caret(selection.end()),
        Movement::Left => place(&cursor, left_of(model, active), select),
        Movement::Right => place(&cursor, right_of(model, active), select),
        Movement::WordLeft => place(&cursor, prev_word_stop(model, active, ctx.config), select),
        Movement::WordRight => place(&cursor, next_word_stop(model, active, ctx.config), select),
        Movement::Home => place(&cursor, home_of(model, active), select),
        Movement::End => place(&cursor, end_of(model, active), select),
        Movement::Top => place(&cursor, Position::new(1, 1), select),
        Movement::Bottom => {
            let last = model.line_count();
            place(&cursor, Position::new(last, model.line_max_column(last)), select)
        }
        Movement::To(pos) => place(&cursor, model.validate_position(pos), select),
        Movement::Up(_) | Movement::Down(_) => selection,
    };

    CursorState::new(selection)
}

fn left_of(model: &dyn TextModel, pos: Position) -> Position {
    if pos.column > 1 {
        Position::new(pos.line, pos.column - 1)
    } else if pos.line > 1 {
        let line = pos.line - 1;
        Position::new(line, model.line_max_column(line))
    } else {
        pos
    }
}

fn right_of(model: &dyn TextModel, pos: Position) -> Position {
    if pos.column < model.line_max_column(pos.line) {
        Position::new(pos.line, pos.column + 1)
    } else if pos.line < model.line_count() {
        Position::new(pos.line + 1, 1)
    } else {
        pos
    }
}

/// First non-whitespace column, or column 1 when already there.
fn home_of(model: &dyn TextModel, pos: Position) -> Position {
    let first = model.line_first_non_whitespace_column(pos.line);
    let column = if first == 0 || pos.column == first { 1 } else { first };
    Position::new(pos.line, column)
}

/// Column after the last non-whitespace char, or the true line end when
/// already there.
fn end_of(model: &dyn TextModel, pos: Position) -> Position {
    let max = model.line_max_column(pos.line);
    let last = model.line_last_non_whitespace_column(pos.line);
    let column = if last == 0 || pos.column == last { max } else { last };
    Position::new(pos.line, column)
}

fn move_vertically(ctx: &EditContext<'_>, cursor: &CursorState, movement: Movement, select: bool) -> CursorState {
    let model = ctx.model;
    let tab_size = ctx.tab_size();
    let active = cursor.selection.active;

    let desired = cursor.sticky_visual_column.unwrap_or_else(|| {
        visible_column_from_column(&model.line_content(active.line), active.column, tab_size)
    });

    // The target line is clamped into the buffer; the column is always
    // mapped back from the desired visual column.
    let last = model.line_count();
    let line = match movement {
        Movement::Up(count) => active.line.saturating_sub(count.max(1)).max(1),
        Movement::Down(count) => (active.line + count.max(1)).min(last),
        _ => active.line,
    };
    let column = column_from_visible_column(&model.line_content(line), desired, tab_size);
    let target = Position::new(line, column);

    CursorState {
        selection: place(cursor, target, select),
        sticky_visual_column: Some(desired),
    }
}

/// Selects the whole buffer.
pub fn select_all(model: &dyn TextModel) -> CursorState {
    let range = model.full_range();
    CursorState::new(Selection::new(range.start, range.end))
}

/// Widens the selection to whole lines, one more line per call.
///
/// The anchor goes to the start of the selection's first line and the active
/// end to the start of the line after the selection's last line, or to the
/// end of the buffer on the last line.
pub fn expand_line_selection(model: &dyn TextModel, cursor: &CursorState) -> CursorState {
    let selection = cursor.selection.validate(model);
    let start_line = selection.start().line;
    let end_line = selection.end().line;
    let last = model.line_count();

    let end = if end_line >= last {
        Position::new(last, model.line_max_column(last))
    } else {
        Position::new(end_line + 1, 1)
    };

    CursorState::new(Selection::new(Position::new(start_line, 1), end))
}

/// Jumps between a bracket next to the caret and its counterpart.
///
/// Without a bracket matcher, or without a bracket next to the caret, the
/// cursor is returned unchanged.
pub fn jump_to_bracket(ctx: &EditContext<'_>, cursor: &CursorState) -> CursorState {
    let Some(matcher) = ctx.language.brackets.as_ref() else {
        return *cursor;
    };
    let pos = ctx.model.validate_position(cursor.selection.active);
    let Some(found) = matcher.match_bracket(ctx.model, pos) else {
        return *cursor;
    };

    // The matcher reports the bracket after the caret ahead of the one
    // before it, so "(|)" jumps to the opening bracket.
    CursorState::caret(found.counterpart.start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::language::LanguageServices;
    use lite_edit_buffer::TextBuffer;

    fn run(buf: &TextBuffer, cursor: CursorState, movement: Movement, select: bool) -> CursorState {
        let config = EditorConfig::default();
        let language = LanguageServices::plain_text();
        let ctx = EditContext::new(buf, &config, &language);
        move_cursor(&ctx, &cursor, movement, select)
    }

    fn at(line: usize, column: usize) -> CursorState {
        CursorState::caret(Position::new(line, column))
    }

    #[test]
    fn test_left_right_wrap_lines() {
        let buf = TextBuffer::from_str("ab\ncd");
        assert_eq!(run(&buf, at(2, 1), Movement::Left, false).position(), Position::new(1, 3));
        assert_eq!(run(&buf, at(1, 3), Movement::Right, false).position(), Position::new(2, 1));
        assert_eq!(run(&buf, at(1, 1), Movement::Left, false).position(), Position::new(1, 1));
        assert_eq!(run(&buf, at(2, 3), Movement::Right, false).position(), Position::new(2, 3));
    }

    #[test]
    fn test_plain_left_right_collapse_to_near_edge() {
        let buf = TextBuffer::from_str("hello world");
        let selected = CursorState::new(Selection::new(Position::new(1, 1), Position::new(1, 5)));
        assert_eq!(run(&buf, selected, Movement::Left, false).selection, Selection::caret(Position::new(1, 1)));
        assert_eq!(run(&buf, selected, Movement::Right, false).selection, Selection::caret(Position::new(1, 5)));

        // Backward selection collapses the same way
        let backward = CursorState::new(Selection::new(Position::new(1, 5), Position::new(1, 1)));
        assert_eq!(run(&buf, backward, Movement::Right, false).position(), Position::new(1, 5));
    }

    #[test]
    fn test_select_extends_from_active_end() {
        let buf = TextBuffer::from_str("hello");
        let selected = CursorState::new(Selection::new(Position::new(1, 2), Position::new(1, 4)));
        let moved = run(&buf, selected, Movement::Right, true);
        assert_eq!(moved.selection, Selection::new(Position::new(1, 2), Position::new(1, 5)));
    }

    #[test]
    fn test_home_toggles() {
        let buf = TextBuffer::from_str("    indented");
        let first = run(&buf, at(1, 8), Movement::Home, false);
        assert_eq!(first.position(), Position::new(1, 5));
        let second = run(&buf, first, Movement::Home, false);
        assert_eq!(second.position(), Position::new(1, 1));
        let third = run(&buf, second, Movement::Home, false);
        assert_eq!(third.position(), Position::new(1, 5));
    }

    #[test]
    fn test_end_toggles() {
        let buf = TextBuffer::from_str("code   ");
        let first = run(&buf, at(1, 1), Movement::End, false);
        assert_eq!(first.position(), Position::new(1, 5));
        let second = run(&buf, first, Movement::End, false);
        assert_eq!(second.position(), Position::new(1, 8));
        let third = run(&buf, second, Movement::End, false);
        assert_eq!(third.position(), Position::new(1, 5));
    }

    #[test]
    fn test_home_end_on_blank_line() {
        let buf = TextBuffer::from_str("   ");
        assert_eq!(run(&buf, at(1, 2), Movement::Home, false).position(), Position::new(1, 1));
        assert_eq!(run(&buf, at(1, 2), Movement::End, false).position(), Position::new(1, 4));
    }

    #[test]
    fn test_vertical_stickiness_through_short_line() {
        let buf = TextBuffer::from_lines(&["long line here", "ab", "another long line"]);
        let down = run(&buf, at(1, 8), Movement::Down(1), false);
        assert_eq!(down.position(), Position::new(2, 3));
        let down = run(&buf, down, Movement::Down(1), false);
        assert_eq!(down.position(), Position::new(3, 8));
    }

    #[test]
    fn test_vertical_past_edges_keeps_visual_column() {
        let buf = TextBuffer::from_lines(&["abc", "defg"]);
        assert_eq!(run(&buf, at(1, 3), Movement::Up(1), false).position(), Position::new(1, 3));
        assert_eq!(run(&buf, at(2, 2), Movement::Down(1), false).position(), Position::new(2, 2));
        assert_eq!(run(&buf, at(1, 2), Movement::Down(10), false).position(), Position::new(2, 2));
        assert_eq!(run(&buf, at(2, 5), Movement::Up(10), false).position(), Position::new(1, 4));
    }

    #[test]
    fn test_non_vertical_move_resets_sticky_column() {
        let buf = TextBuffer::from_lines(&["abcdef", "ab"]);
        let down = run(&buf, at(1, 6), Movement::Down(1), false);
        assert_eq!(down.sticky_visual_column, Some(6));
        let left = run(&buf, down, Movement::Left, false);
        assert_eq!(left.sticky_visual_column, None);
    }

    #[test]
    fn test_top_bottom() {
        let buf = TextBuffer::from_lines(&["abc", "de"]);
        assert_eq!(run(&buf, at(2, 2), Movement::Top, false).position(), Position::new(1, 1));
        let bottom = run(&buf, at(1, 2), Movement::Bottom, true);
        assert_eq!(bottom.selection, Selection::new(Position::new(1, 2), Position::new(2, 3)));
    }

    #[test]
    fn test_move_to_clamps() {
        let buf = TextBuffer::from_lines(&["abc", "de"]);
        let moved = run(&buf, at(1, 1), Movement::To(Position::new(9, 9)), false);
        assert_eq!(moved.position(), Position::new(2, 3));
    }

    #[test]
    fn test_expand_line_selection() {
        let buf = TextBuffer::from_lines(&["one", "two", "three"]);
        let first = expand_line_selection(&buf, &at(1, 2));
        assert_eq!(first.selection, Selection::new(Position::new(1, 1), Position::new(2, 1)));
        let second = expand_line_selection(&buf, &first);
        assert_eq!(second.selection, Selection::new(Position::new(1, 1), Position::new(3, 1)));
        let third = expand_line_selection(&buf, &second);
        assert_eq!(third.selection, Selection::new(Position::new(1, 1), Position::new(3, 6)));
        let fourth = expand_line_selection(&buf, &third);
        assert_eq!(fourth, third);
    }

    #[test]
    fn test_select_all() {
        let buf = TextBuffer::from_lines(&["one", "two"]);
        let all = select_all(&buf);
        assert_eq!(all.selection, Selection::new(Position::new(1, 1), Position::new(2, 4)));
    }

    #[test]
    fn test_jump_to_bracket_and_back() {
        let buf = TextBuffer::from_str("call(a, (b))");
        let config = EditorConfig::default();
        let language = LanguageServices::c_like();
        let ctx = EditContext::new(&buf, &config, &language);

        let there = jump_to_bracket(&ctx, &at(1, 5));
        assert_eq!(there.position(), Position::new(1, 12));
        let back = jump_to_bracket(&ctx, &there);
        assert_eq!(back.position(), Position::new(1, 5));
    }

    #[test]
    fn test_jump_to_bracket_inside_empty_pair() {
        let buf = TextBuffer::from_str("f()");
        let config = EditorConfig::default();
        let language = LanguageServices::c_like();
        let ctx = EditContext::new(&buf, &config, &language);

        let open = jump_to_bracket(&ctx, &at(1, 3));
        assert_eq!(open.position(), Position::new(1, 2));
        let close = jump_to_bracket(&ctx, &open);
        assert_eq!(close.position(), Position::new(1, 3));
    }

    #[test]
    fn test_jump_to_bracket_without_context_is_noop() {
        let buf = TextBuffer::from_str("call(a)");
        let config = EditorConfig::default();
        let plain = LanguageServices::plain_text();
        let ctx = EditContext::new(&buf, &config, &plain);
        assert_eq!(jump_to_bracket(&ctx, &at(1, 5)), at(1, 5));

        let language = LanguageServices::c_like();
        let ctx = EditContext::new(&buf, &config, &language);
        assert_eq!(jump_to_bracket(&ctx, &at(1, 2)), at(1, 2));
    }
}
