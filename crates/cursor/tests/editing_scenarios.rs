// Chunk: docs/chunks/edit_commands - Two-phase editing commands
// Chunk: docs/chunks/cursor_movement - Character, word, line, page and document movement

//! End-to-end editing scenarios driven through the controller.

use lite_edit_buffer::{Position, TextBuffer, TextModel};
use lite_edit_cursor::{
    CommentRules, CursorController, EditorConfig, ExecuteOutcome, Handler, LanguageServices, Selection,
};

struct Editor {
    buffer: TextBuffer,
    controller: CursorController,
    config: EditorConfig,
    language: LanguageServices,
}

impl Editor {
    fn new(lines: &[&str]) -> Self {
        Self {
            buffer: TextBuffer::from_lines(lines),
            controller: CursorController::new(),
            config: EditorConfig::default(),
            language: LanguageServices::plain_text(),
        }
    }

    fn run(&mut self, handler: Handler) -> ExecuteOutcome {
        self.controller
            .execute(&mut self.buffer, &self.config, &self.language, handler)
            .unwrap()
    }

    fn caret_at(&mut self, line: usize, column: usize) {
        self.run(Handler::MoveTo {
            position: Position::new(line, column),
        });
    }

    fn select(&mut self, selections: Vec<Selection>) {
        self.run(Handler::SetSelections { selections });
    }

    fn lines(&self) -> Vec<String> {
        (1..=self.buffer.line_count())
            .map(|line| self.buffer.line_content(line))
            .collect()
    }

    fn caret(&self) -> Position {
        self.controller.primary().position()
    }

    fn carets(&self) -> Vec<Position> {
        self.controller.cursors().iter().map(|c| c.position()).collect()
    }
}

fn sel(anchor: (usize, usize), active: (usize, usize)) -> Selection {
    Selection::new(Position::new(anchor.0, anchor.1), Position::new(active.0, active.1))
}

fn caret(line: usize, column: usize) -> Selection {
    Selection::caret(Position::new(line, column))
}

// ==================== Movement ====================

#[test]
fn test_plain_movement_collapses_selection() {
    let mut ed = Editor::new(&["hello world"]);
    ed.select(vec![sel((1, 1), (1, 5))]);
    ed.run(Handler::CursorLeft);
    assert_eq!(ed.controller.selections(), vec![caret(1, 1)]);

    ed.select(vec![sel((1, 1), (1, 5))]);
    ed.run(Handler::CursorRight);
    assert_eq!(ed.controller.selections(), vec![caret(1, 5)]);
}

#[test]
fn test_vertical_movement_keeps_visual_column() {
    let mut ed = Editor::new(&["    \tMy First Line\t ", "\tMy Second Line", "    Third Line", "", "1"]);
    ed.config.tab_size = 4;
    ed.caret_at(1, 5);

    let mut visited = Vec::new();
    for _ in 0..4 {
        ed.run(Handler::CursorDown);
        visited.push(ed.caret());
    }
    assert_eq!(
        visited,
        vec![
            Position::new(2, 2),
            Position::new(3, 5),
            Position::new(4, 1),
            Position::new(5, 2),
        ]
    );

    ed.run(Handler::CursorUp);
    ed.run(Handler::CursorUp);
    assert_eq!(ed.caret(), Position::new(3, 5));
}

#[test]
fn test_vertical_movement_past_edges_stays_on_column() {
    let mut ed = Editor::new(&["abc", "defgh"]);
    ed.caret_at(1, 3);
    ed.run(Handler::CursorUp);
    assert_eq!(ed.caret(), Position::new(1, 3));

    ed.caret_at(2, 2);
    ed.run(Handler::CursorDown);
    assert_eq!(ed.caret(), Position::new(2, 2));
}

#[test]
fn test_page_moves_clamp_line_and_keep_visual_column() {
    let lines: Vec<String> = (1..=10).map(|n| format!("line number {n:02}")).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let mut ed = Editor::new(&refs);

    ed.caret_at(3, 5);
    ed.run(Handler::CursorPageUp { page_size: 5 });
    assert_eq!(ed.caret(), Position::new(1, 5));

    ed.caret_at(8, 5);
    ed.run(Handler::CursorPageDown { page_size: 5 });
    assert_eq!(ed.caret(), Position::new(10, 5));

    ed.caret_at(2, 7);
    ed.run(Handler::CursorPageUpSelect { page_size: 5 });
    assert_eq!(ed.controller.selections(), vec![sel((2, 7), (1, 7))]);
}

#[test]
fn test_page_down_with_payload_size() {
    let lines: Vec<String> = (1..=20).map(|n| format!("line {n}")).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let mut ed = Editor::new(&refs);
    ed.caret_at(1, 3);
    ed.run(Handler::CursorPageDown { page_size: 5 });
    assert_eq!(ed.caret(), Position::new(6, 3));
    ed.run(Handler::CursorPageUpSelect { page_size: 5 });
    assert_eq!(ed.controller.selections(), vec![sel((6, 3), (1, 3))]);
}

#[test]
fn test_word_movement_with_selection() {
    let mut ed = Editor::new(&["foo bar.baz"]);
    ed.run(Handler::CursorWordRightSelect);
    ed.run(Handler::CursorWordRightSelect);
    assert_eq!(ed.controller.selections(), vec![sel((1, 1), (1, 8))]);
    ed.run(Handler::CursorWordLeft);
    assert_eq!(ed.caret(), Position::new(1, 5));
}

#[test]
fn test_home_toggles_between_indent_and_line_start() {
    let mut ed = Editor::new(&["    indented"]);
    ed.caret_at(1, 9);
    ed.run(Handler::CursorHome);
    assert_eq!(ed.caret(), Position::new(1, 5));
    ed.run(Handler::CursorHome);
    assert_eq!(ed.caret(), Position::new(1, 1));
    ed.run(Handler::CursorEnd);
    assert_eq!(ed.caret(), Position::new(1, 13));
}

#[test]
fn test_select_all_and_expand_line() {
    let mut ed = Editor::new(&["one", "two", "three"]);
    ed.run(Handler::SelectAll);
    assert_eq!(ed.controller.selections(), vec![sel((1, 1), (3, 6))]);

    ed.caret_at(1, 2);
    ed.run(Handler::ExpandLineSelection);
    assert_eq!(ed.controller.selections(), vec![sel((1, 1), (2, 1))]);
    ed.run(Handler::ExpandLineSelection);
    assert_eq!(ed.controller.selections(), vec![sel((1, 1), (3, 1))]);
}

#[test]
fn test_jump_to_bracket_needs_a_matcher() {
    let mut ed = Editor::new(&["f(a, b)"]);
    ed.caret_at(1, 2);
    ed.run(Handler::JumpToBracket);
    assert_eq!(ed.caret(), Position::new(1, 2));

    ed.language = LanguageServices::c_like();
    ed.run(Handler::JumpToBracket);
    assert_eq!(ed.caret(), Position::new(1, 7));
}

// ==================== Typing and deletion ====================

#[test]
fn test_type_replaces_selection() {
    let mut ed = Editor::new(&["hello world"]);
    ed.select(vec![sel((1, 7), (1, 12))]);
    ed.run(Handler::Type {
        text: "there".into(),
    });
    assert_eq!(ed.lines(), vec!["hello there"]);
    assert_eq!(ed.controller.selections(), vec![caret(1, 12)]);
}

#[test]
fn test_enter_copies_indentation() {
    let mut ed = Editor::new(&["    let x = 1;"]);
    ed.caret_at(1, 15);
    ed.run(Handler::Type { text: "\n".into() });
    assert_eq!(ed.lines(), vec!["    let x = 1;", "    "]);
    assert_eq!(ed.caret(), Position::new(2, 5));
}

#[test]
fn test_enter_between_brackets_splits_pair() {
    let mut ed = Editor::new(&["fn main() {}"]);
    ed.language = LanguageServices::c_like();
    ed.caret_at(1, 12);
    ed.run(Handler::Type { text: "\n".into() });
    assert_eq!(ed.lines(), vec!["fn main() {", "    ", "}"]);
    assert_eq!(ed.caret(), Position::new(2, 5));
}

#[test]
fn test_enter_without_auto_indent_is_plain() {
    let mut ed = Editor::new(&["    x"]);
    ed.config.auto_indent = false;
    ed.caret_at(1, 6);
    ed.run(Handler::Type { text: "\n".into() });
    assert_eq!(ed.lines(), vec!["    x", ""]);
    assert_eq!(ed.caret(), Position::new(2, 1));
}

#[test]
fn test_delete_left_joins_lines() {
    let mut ed = Editor::new(&["abc", "def"]);
    ed.caret_at(2, 1);
    ed.run(Handler::DeleteLeft);
    assert_eq!(ed.lines(), vec!["abcdef"]);
    assert_eq!(ed.caret(), Position::new(1, 4));
}

#[test]
fn test_delete_at_document_edges_is_noop() {
    let mut ed = Editor::new(&["abc"]);
    let outcome = ed.run(Handler::DeleteLeft);
    assert!(!outcome.edited);
    ed.run(Handler::CursorEnd);
    let outcome = ed.run(Handler::DeleteRight);
    assert!(!outcome.edited);
    assert!(!ed.controller.history().can_undo());
}

#[test]
fn test_delete_word_left_and_right() {
    let mut ed = Editor::new(&["foo bar baz"]);
    ed.run(Handler::CursorEnd);
    ed.run(Handler::DeleteWordLeft);
    assert_eq!(ed.lines(), vec!["foo bar "]);

    ed.caret_at(1, 1);
    ed.run(Handler::DeleteWordRight);
    assert_eq!(ed.lines(), vec![" bar "]);
    assert_eq!(ed.caret(), Position::new(1, 1));
}

// ==================== Indentation ====================

#[test]
fn test_indent_with_tabs_moves_caret() {
    let mut ed = Editor::new(&["function baz() {"]);
    ed.config.insert_spaces = false;
    ed.config.tab_size = 4;
    ed.caret_at(1, 2);
    ed.run(Handler::Indent);
    assert_eq!(ed.lines(), vec!["\tfunction baz() {"]);
    assert_eq!(ed.caret(), Position::new(1, 3));
}

#[test]
fn test_tab_at_caret_pads_to_tab_stop() {
    let mut ed = Editor::new(&["ab"]);
    ed.caret_at(1, 2);
    ed.run(Handler::Tab);
    assert_eq!(ed.lines(), vec!["a   b"]);
    assert_eq!(ed.caret(), Position::new(1, 5));
}

#[test]
fn test_tab_over_lines_indents_them() {
    let mut ed = Editor::new(&["one", "", "two"]);
    ed.select(vec![sel((1, 1), (3, 4))]);
    ed.run(Handler::Tab);
    assert_eq!(ed.lines(), vec!["    one", "", "    two"]);
    assert_eq!(ed.controller.selections(), vec![sel((1, 1), (3, 8))]);
}

#[test]
fn test_outdent_normalises_mixed_indentation() {
    let mut ed = Editor::new(&["  \tx", "y"]);
    ed.config.tab_size = 4;
    ed.select(vec![sel((1, 1), (2, 2))]);
    ed.run(Handler::Outdent);
    assert_eq!(ed.lines(), vec!["x", "y"]);
}

#[test]
fn test_outdent_partial_indent_goes_to_previous_stop() {
    let mut ed = Editor::new(&["      six"]);
    ed.caret_at(1, 8);
    ed.run(Handler::Outdent);
    assert_eq!(ed.lines(), vec!["    six"]);
    assert_eq!(ed.caret(), Position::new(1, 6));
}

// ==================== Line insertion ====================

#[test]
fn test_line_insert_before() {
    let mut ed = Editor::new(&["First line", "Second line", "Third line"]);
    ed.caret_at(2, 3);
    ed.run(Handler::LineInsertBefore);
    assert_eq!(ed.lines(), vec!["First line", "", "Second line", "Third line"]);
    assert_eq!(ed.caret(), Position::new(2, 1));
}

#[test]
fn test_line_insert_after() {
    let mut ed = Editor::new(&["First line", "Second line", "Third line"]);
    ed.caret_at(2, 3);
    ed.run(Handler::LineInsertAfter);
    assert_eq!(ed.lines(), vec!["First line", "Second line", "", "Third line"]);
    assert_eq!(ed.caret(), Position::new(3, 1));
}

#[test]
fn test_line_insert_after_gives_each_cursor_a_line() {
    let mut ed = Editor::new(&["abcd", "next"]);
    ed.select(vec![caret(1, 1), caret(1, 3)]);
    ed.run(Handler::LineInsertAfter);
    assert_eq!(ed.lines(), vec!["abcd", "", "", "next"]);
    assert_eq!(ed.carets(), vec![Position::new(2, 1), Position::new(3, 1)]);
}

#[test]
fn test_line_insert_before_gives_each_cursor_a_line() {
    let mut ed = Editor::new(&["abcd", "next"]);
    ed.select(vec![caret(1, 1), caret(1, 3)]);
    ed.run(Handler::LineInsertBefore);
    assert_eq!(ed.lines(), vec!["", "", "abcd", "next"]);
    assert_eq!(ed.carets(), vec![Position::new(1, 1), Position::new(2, 1)]);
}

// ==================== Comments ====================

fn line_comments() -> LanguageServices {
    LanguageServices::plain_text().with_comments(CommentRules {
        line_comment: Some("//".to_string()),
        block_comment: None,
    })
}

#[test]
fn test_line_comment_aligns_to_minimal_indent() {
    let original = ["\t\t\t   XX", "    \t\t\t\tYY", "        ZZ", "\t\tTT"];
    let mut ed = Editor::new(&original);
    ed.config.tab_size = 4;
    ed.language = line_comments();
    ed.run(Handler::SelectAll);
    ed.run(Handler::ToggleLineComment);

    assert_eq!(
        ed.lines(),
        vec!["\t\t// \t   XX", "    \t// \t\t\tYY", "        // ZZ", "\t\t// TT"]
    );
    let offsets: Vec<usize> = ed.lines().iter().map(|line| line.find("//").unwrap()).collect();
    assert_eq!(offsets, vec![2, 5, 8, 2]);

    ed.run(Handler::ToggleLineComment);
    assert_eq!(ed.lines(), original);
}

#[test]
fn test_line_comment_skips_blank_lines() {
    let mut ed = Editor::new(&["a", "", "b"]);
    ed.language = line_comments();
    ed.run(Handler::SelectAll);
    ed.run(Handler::ToggleLineComment);
    assert_eq!(ed.lines(), vec!["// a", "", "// b"]);
}

#[test]
fn test_line_comment_falls_back_to_block() {
    let mut ed = Editor::new(&["  foo"]);
    ed.language = LanguageServices::plain_text().with_comments(CommentRules {
        line_comment: None,
        block_comment: Some(("/*".to_string(), "*/".to_string())),
    });
    ed.caret_at(1, 3);
    ed.run(Handler::ToggleLineComment);
    assert_eq!(ed.lines(), vec!["  /* foo */"]);
}

#[test]
fn test_comment_without_rules_is_noop() {
    let mut ed = Editor::new(&["foo"]);
    let outcome = ed.run(Handler::ToggleLineComment);
    assert!(!outcome.edited);
    assert_eq!(ed.lines(), vec!["foo"]);
}

#[test]
fn test_block_comment_round_trip() {
    let mut ed = Editor::new(&["let x = y;"]);
    ed.language = LanguageServices::c_like();
    ed.select(vec![sel((1, 9), (1, 10))]);
    ed.run(Handler::ToggleBlockComment);
    assert_eq!(ed.lines(), vec!["let x = /* y */;"]);
    assert_eq!(ed.controller.selections(), vec![sel((1, 12), (1, 13))]);

    ed.run(Handler::ToggleBlockComment);
    assert_eq!(ed.lines(), vec!["let x = y;"]);
    assert_eq!(ed.controller.selections(), vec![sel((1, 9), (1, 10))]);
}

#[test]
fn test_block_comment_on_caret_places_caret_inside() {
    let mut ed = Editor::new(&["ab"]);
    ed.language = LanguageServices::c_like();
    ed.caret_at(1, 2);
    ed.run(Handler::ToggleBlockComment);
    assert_eq!(ed.lines(), vec!["a/*  */b"]);
    assert_eq!(ed.caret(), Position::new(1, 5));
}

// ==================== Clipboard ====================

#[test]
fn test_cut_selection() {
    let mut ed = Editor::new(&["hello world"]);
    ed.select(vec![sel((1, 1), (1, 7))]);
    let outcome = ed.run(Handler::Cut);
    assert_eq!(outcome.cut_text.as_deref(), Some("hello "));
    assert_eq!(ed.lines(), vec!["world"]);
    assert_eq!(ed.caret(), Position::new(1, 1));
}

#[test]
fn test_cut_empty_selection_takes_line() {
    let mut ed = Editor::new(&["one", "two", "three"]);
    ed.caret_at(2, 2);
    let outcome = ed.run(Handler::Cut);
    assert_eq!(outcome.cut_text.as_deref(), Some("two\n"));
    assert_eq!(ed.lines(), vec!["one", "three"]);
}

#[test]
fn test_cut_empty_selection_disabled() {
    let mut ed = Editor::new(&["one"]);
    ed.config.empty_selection_clipboard = false;
    let outcome = ed.run(Handler::Cut);
    assert_eq!(outcome.cut_text, None);
    assert!(!outcome.edited);
}

#[test]
fn test_paste_normalises_line_breaks() {
    let mut ed = Editor::new(&["ab"]);
    ed.caret_at(1, 2);
    ed.run(Handler::Paste {
        text: "x\r\ny".into(),
    });
    assert_eq!(ed.lines(), vec!["ax", "yb"]);
    assert_eq!(ed.caret(), Position::new(2, 2));
}

// ==================== Multiple cursors ====================

#[test]
fn test_add_cursor_below_and_type() {
    let mut ed = Editor::new(&["abc", "abc", "abc"]);
    ed.run(Handler::AddCursorBelow);
    ed.run(Handler::AddCursorBelow);
    assert_eq!(
        ed.carets(),
        vec![Position::new(1, 1), Position::new(2, 1), Position::new(3, 1)]
    );

    ed.run(Handler::Type { text: "x".into() });
    assert_eq!(ed.lines(), vec!["xabc", "xabc", "xabc"]);
    assert_eq!(
        ed.carets(),
        vec![Position::new(1, 2), Position::new(2, 2), Position::new(3, 2)]
    );
}

#[test]
fn test_add_cursor_above_at_top_adds_nothing() {
    let mut ed = Editor::new(&["abc", "abc"]);
    ed.run(Handler::AddCursorAbove);
    assert_eq!(ed.controller.cursors().len(), 1);
}

#[test]
fn test_cursors_on_one_line_edit_simultaneously() {
    let mut ed = Editor::new(&["a b c"]);
    ed.select(vec![caret(1, 2), caret(1, 4), caret(1, 6)]);
    ed.run(Handler::Type { text: "!".into() });
    assert_eq!(ed.lines(), vec!["a! b! c!"]);
    assert_eq!(
        ed.carets(),
        vec![Position::new(1, 3), Position::new(1, 6), Position::new(1, 9)]
    );
}

#[test]
fn test_typing_over_touching_selections_keeps_both_carets() {
    let mut ed = Editor::new(&["abcd"]);
    ed.select(vec![sel((1, 1), (1, 3)), sel((1, 3), (1, 5))]);
    ed.run(Handler::Type { text: "x".into() });
    assert_eq!(ed.lines(), vec!["xx"]);
    assert_eq!(ed.controller.selections(), vec![caret(1, 2), caret(1, 3)]);

    // Backward selections resolve the same way
    let mut ed = Editor::new(&["abcd"]);
    ed.select(vec![sel((1, 3), (1, 1)), sel((1, 5), (1, 3))]);
    ed.run(Handler::Type { text: "yz".into() });
    assert_eq!(ed.lines(), vec!["yzyz"]);
    assert_eq!(ed.controller.selections(), vec![caret(1, 3), caret(1, 5)]);
}

#[test]
fn test_typing_over_touching_occurrences() {
    let mut ed = Editor::new(&["aaaa"]);
    ed.select(vec![sel((1, 1), (1, 3))]);
    ed.run(Handler::SelectAllOccurrences);
    assert_eq!(ed.controller.cursors().len(), 2);

    ed.run(Handler::Type { text: "b".into() });
    assert_eq!(ed.lines(), vec!["bb"]);
    assert_eq!(ed.carets(), vec![Position::new(1, 2), Position::new(1, 3)]);
}

#[test]
fn test_backspace_merges_cursors_that_meet() {
    let mut ed = Editor::new(&["abcd"]);
    ed.select(vec![caret(1, 2), caret(1, 3)]);
    ed.run(Handler::DeleteLeft);
    assert_eq!(ed.lines(), vec!["cd"]);
    assert_eq!(ed.controller.selections(), vec![caret(1, 1)]);
}

#[test]
fn test_conflicting_cursor_is_dropped_from_batch() {
    let mut ed = Editor::new(&["one", "two"]);
    ed.select(vec![caret(1, 2), caret(1, 3)]);
    let outcome = ed.run(Handler::Cut);
    assert_eq!(outcome.cut_text.as_deref(), Some("one\n"));
    assert_eq!(ed.lines(), vec!["two"]);
    assert_eq!(ed.controller.selections(), vec![caret(1, 1)]);
}

#[test]
fn test_paste_distributes_lines_over_cursors() {
    let mut ed = Editor::new(&["a", "b", "c"]);
    ed.select(vec![caret(1, 2), caret(2, 2), caret(3, 2)]);
    ed.run(Handler::Paste {
        text: "1\n2\n3\n".into(),
    });
    assert_eq!(ed.lines(), vec!["a1", "b2", "c3"]);

    ed.run(Handler::Paste { text: "x\ny".into() });
    assert_eq!(ed.lines(), vec!["a1x", "y", "b2x", "y", "c3x", "y"]);
}

#[test]
fn test_paste_distribution_follows_document_order() {
    let mut ed = Editor::new(&["a", "b"]);
    // Primary on the second line
    ed.select(vec![caret(2, 2), caret(1, 2)]);
    ed.run(Handler::Paste { text: "1\n2".into() });
    assert_eq!(ed.lines(), vec!["a1", "b2"]);
}

#[test]
fn test_select_all_occurrences_of_word_at_caret() {
    let mut ed = Editor::new(&["foo bar foo", "foo"]);
    ed.caret_at(1, 2);
    ed.run(Handler::SelectAllOccurrences);
    assert_eq!(
        ed.controller.selections(),
        vec![sel((1, 1), (1, 4)), sel((1, 9), (1, 12)), sel((2, 1), (2, 4))]
    );

    ed.run(Handler::Type { text: "x".into() });
    assert_eq!(ed.lines(), vec!["x bar x", "x"]);

    ed.run(Handler::RemoveSecondaryCursors);
    assert_eq!(ed.controller.selections(), vec![caret(1, 2)]);
}

#[test]
fn test_move_to_collapses_to_single_cursor() {
    let mut ed = Editor::new(&["abc", "def"]);
    ed.select(vec![caret(1, 1), caret(2, 1)]);
    ed.run(Handler::MoveToSelect {
        position: Position::new(1, 3),
    });
    assert_eq!(ed.controller.selections(), vec![sel((1, 1), (1, 3))]);
}

#[test]
fn test_set_selections_clamps_and_ignores_empty_list() {
    let mut ed = Editor::new(&["abc"]);
    ed.select(vec![sel((1, 2), (9, 9))]);
    assert_eq!(ed.controller.selections(), vec![sel((1, 2), (1, 4))]);

    ed.select(Vec::new());
    assert_eq!(ed.controller.selections(), vec![sel((1, 2), (1, 4))]);
}

// ==================== Undo / Redo ====================

#[test]
fn test_undo_redo_restore_content_and_cursors() {
    let mut ed = Editor::new(&["abc", "abc"]);
    ed.select(vec![caret(1, 1), caret(2, 1)]);
    let before = ed.controller.selections();
    ed.run(Handler::Type { text: "xy".into() });
    let after = ed.controller.selections();
    assert_eq!(ed.lines(), vec!["xyabc", "xyabc"]);

    assert!(ed.run(Handler::Undo).edited);
    assert_eq!(ed.lines(), vec!["abc", "abc"]);
    assert_eq!(ed.controller.selections(), before);

    assert!(ed.run(Handler::Redo).edited);
    assert_eq!(ed.lines(), vec!["xyabc", "xyabc"]);
    assert_eq!(ed.controller.selections(), after);
}

#[test]
fn test_new_edit_clears_redo() {
    let mut ed = Editor::new(&["a"]);
    ed.run(Handler::CursorEnd);
    ed.run(Handler::Type { text: "b".into() });
    ed.run(Handler::Undo);
    assert!(ed.controller.history().can_redo());
    ed.run(Handler::Type { text: "c".into() });
    assert!(!ed.controller.history().can_redo());
    assert!(!ed.run(Handler::Redo).edited);
    assert_eq!(ed.lines(), vec!["ac"]);
}

#[test]
fn test_undo_with_empty_history() {
    let mut ed = Editor::new(&["a"]);
    let outcome = ed.run(Handler::Undo);
    assert!(!outcome.edited);
    assert_eq!(ed.lines(), vec!["a"]);
}

#[test]
fn test_undo_chain_back_to_original() {
    let mut ed = Editor::new(&[""]);
    for ch in ["h", "e", "l", "l", "o"] {
        ed.run(Handler::Type { text: ch.into() });
    }
    ed.run(Handler::DeleteLeft);
    assert_eq!(ed.lines(), vec!["hell"]);
    while ed.controller.history().can_undo() {
        ed.run(Handler::Undo);
    }
    assert_eq!(ed.lines(), vec![""]);
    assert_eq!(ed.caret(), Position::new(1, 1));
}
