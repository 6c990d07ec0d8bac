// Chunk: docs/chunks/word_boundary_primitives - Char classes and word stops

//! Word classification and word stops.
//!
//! A word stop is where word movement and word deletion land. Moving right
//! skips whitespace, then the run of one class, so the stops are word ends;
//! moving left mirrors this and stops at word starts. Line boundaries are
//! stops of their own.

use lite_edit_buffer::{Position, TextModel};

use crate::config::EditorConfig;

/// Classification of a character for word movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Whitespace,
    Word,
    Separator,
}

/// Classifies `ch`, treating `extra_word_chars` as word characters.
pub fn classify(ch: char, extra_word_chars: &str) -> CharClass {
    if ch == ' ' || ch == '\t' {
        CharClass::Whitespace
    } else if ch.is_alphanumeric() || ch == '_' || extra_word_chars.contains(ch) {
        CharClass::Word
    } else {
        CharClass::Separator
    }
}

/// The stop reached by one word-right step from `pos`.
pub fn next_word_stop(model: &dyn TextModel, pos: Position, config: &EditorConfig) -> Position {
    let pos = model.validate_position(pos);
    let chars: Vec<char> = model.line_content(pos.line).chars().collect();
    let len = chars.len();

    if pos.column > len {
        if pos.line < model.line_count() {
            return Position::new(pos.line + 1, 1);
        }
        return pos;
    }

    let extra = config.word_characters.as_str();
    let mut idx = pos.column - 1;
    while idx < len && classify(chars[idx], extra) == CharClass::Whitespace {
        idx += 1;
    }
    if idx < len {
        let class = classify(chars[idx], extra);
        while idx < len && classify(chars[idx], extra) == class {
            idx += 1;
        }
    }
    Position::new(pos.line, idx + 1)
}

/// The stop reached by one word-left step from `pos`.
pub fn prev_word_stop(model: &dyn TextModel, pos: Position, config: &EditorConfig) -> Position {
    let pos = model.validate_position(pos);

    if pos.column == 1 {
        if pos.line > 1 {
            let line = pos.line - 1;
            return Position::new(line, model.line_max_column(line));
        }
        return pos;
    }

    let chars: Vec<char> = model.line_content(pos.line).chars().collect();
    let extra = config.word_characters.as_str();
    let mut idx = pos.column - 1;
    while idx > 0 && classify(chars[idx - 1], extra) == CharClass::Whitespace {
        idx -= 1;
    }
    if idx > 0 {
        let class = classify(chars[idx - 1], extra);
        while idx > 0 && classify(chars[idx - 1], extra) == class {
            idx -= 1;
        }
    }
    Position::new(pos.line, idx + 1)
}
