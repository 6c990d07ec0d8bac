// Chunk: docs/chunks/language_capabilities - Optional comment, bracket and indent hooks

//! Language-supplied capabilities.
//!
//! Every capability is optional. A command that needs one it cannot find falls
//! back or does nothing; it never fails.

use lite_edit_buffer::{Position, Range, TextModel};

/// Comment markers of a language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentRules {
    /// Line comment marker, e.g. `//`.
    pub line_comment: Option<String>,
    /// Block comment markers, e.g. (`/*`, `*/`).
    pub block_comment: Option<(String, String)>,
}

/// A bracket at a position and its counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketMatch {
    /// Range of the bracket found at the queried position.
    pub bracket: Range,
    /// Range of the bracket it pairs with.
    pub counterpart: Range,
}

/// Finds the counterpart of a bracket next to a position.
pub trait BracketMatcher {
    /// Looks for a bracket at `pos` (the char after the caret first, then the
    /// char before it) and returns it with its counterpart.
    fn match_bracket(&self, model: &dyn TextModel, pos: Position) -> Option<BracketMatch>;
}

/// What `Type("\n")` should do with the indentation of the new line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnterAction {
    /// Keep the current indentation.
    None,
    /// Indent the new line one level deeper.
    Indent,
    /// Insert an indented line and move the text after the caret to a
    /// further line at the current indentation.
    IndentOutdent,
    /// Outdent the new line one level.
    Outdent,
}

/// Decides the indentation of a line created by pressing Enter.
pub trait AutoIndenter {
    /// `range` is the selection being replaced by the line break.
    fn on_enter(&self, model: &dyn TextModel, range: Range) -> EnterAction;
}

/// The capabilities available for the buffer's language.
#[derive(Default)]
pub struct LanguageServices {
    pub comments: Option<CommentRules>,
    pub brackets: Option<Box<dyn BracketMatcher>>,
    pub indenter: Option<Box<dyn AutoIndenter>>,
}

impl LanguageServices {
    /// No capabilities at all (plain text).
    pub fn plain_text() -> Self {
        Self::default()
    }

    pub fn with_comments(mut self, comments: CommentRules) -> Self {
        self.comments = Some(comments);
        self
    }

    pub fn with_brackets(mut self, brackets: impl BracketMatcher + 'static) -> Self {
        self.brackets = Some(Box::new(brackets));
        self
    }

    pub fn with_indenter(mut self, indenter: impl AutoIndenter + 'static) -> Self {
        self.indenter = Some(Box::new(indenter));
        self
    }

    /// C-family defaults: `//`, `/* */`, pair brackets and bracket indentation.
    pub fn c_like() -> Self {
        Self::default()
            .with_comments(CommentRules {
                line_comment: Some("//".to_string()),
                block_comment: Some(("/*".to_string(), "*/".to_string())),
            })
            .with_brackets(PairBracketMatcher::default())
            .with_indenter(BracketIndenter::default())
    }
}

impl std::fmt::Debug for LanguageServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageServices")
            .field("comments", &self.comments)
            .field("brackets", &self.brackets.is_some())
            .field("indenter", &self.indenter.is_some())
            .finish()
    }
}

// =============================================================================
// Pair bracket matching
// =============================================================================

/// Bracket matching by depth counting over fixed open/close pairs.
///
/// Knows nothing about strings or comments.
#[derive(Debug, Clone)]
pub struct PairBracketMatcher {
    pairs: Vec<(char, char)>,
}

impl Default for PairBracketMatcher {
    fn default() -> Self {
        Self {
            pairs: vec![('(', ')'), ('[', ']'), ('{', '}')],
        }
    }
}

impl PairBracketMatcher {
    pub fn new(pairs: Vec<(char, char)>) -> Self {
        Self { pairs }
    }

    fn pair_of(&self, ch: char) -> Option<(char, char, bool)> {
        self.pairs.iter().find_map(|&(open, close)| {
            if ch == open {
                Some((open, close, true))
            } else if ch == close {
                Some((open, close, false))
            } else {
                None
            }
        })
    }

    fn char_at(model: &dyn TextModel, pos: Position) -> Option<char> {
        model
            .line_content(pos.line)
            .chars()
            .nth(pos.column.checked_sub(1)?)
    }

    fn bracket_near(&self, model: &dyn TextModel, pos: Position) -> Option<(Position, char)> {
        let after = Self::char_at(model, pos).map(|ch| (pos, ch));
        let before = pos
            .column
            .checked_sub(1)
            .filter(|col| *col >= 1)
            .map(|col| Position::new(pos.line, col))
            .and_then(|at| Self::char_at(model, at).map(|ch| (at, ch)));

        [after, before]
            .into_iter()
            .flatten()
            .find(|(_, ch)| self.pair_of(*ch).is_some())
    }

    fn scan_forward(model: &dyn TextModel, from: Position, open: char, close: char) -> Option<Position> {
        let mut depth = 0usize;
        for line in from.line..=model.line_count() {
            let skip = if line == from.line { from.column - 1 } else { 0 };
            for (idx, ch) in model.line_content(line).chars().enumerate().skip(skip) {
                if ch == open {
                    depth += 1;
                } else if ch == close {
                    depth -= 1;
                    if depth == 0 {
                        return Some(Position::new(line, idx + 1));
                    }
                }
            }
        }
        None
    }

    fn scan_backward(model: &dyn TextModel, from: Position, open: char, close: char) -> Option<Position> {
        let mut depth = 0usize;
        for line in (1..=from.line).rev() {
            let chars: Vec<char> = model.line_content(line).chars().collect();
            let end = if line == from.line { from.column } else { chars.len() };
            for idx in (0..end.min(chars.len())).rev() {
                let ch = chars[idx];
                if ch == close {
                    depth += 1;
                } else if ch == open {
                    depth -= 1;
                    if depth == 0 {
                        return Some(Position::new(line, idx + 1));
                    }
                }
            }
        }
        None
    }
}

impl BracketMatcher for PairBracketMatcher {
    fn match_bracket(&self, model: &dyn TextModel, pos: Position) -> Option<BracketMatch> {
        let pos = model.validate_position(pos);
        let (at, ch) = self.bracket_near(model, pos)?;
        let (open, close, is_open) = self.pair_of(ch)?;

        let counterpart = if is_open {
            Self::scan_forward(model, at, open, close)?
        } else {
            Self::scan_backward(model, at, open, close)?
        };

        let span = |p: Position| Range::new(p, Position::new(p.line, p.column + 1));
        Some(BracketMatch {
            bracket: span(at),
            counterpart: span(counterpart),
        })
    }
}

// =============================================================================
// Bracket-driven auto indentation
// =============================================================================

/// Indents after an opening bracket and splits a bracket pair onto three
/// lines when Enter is pressed between them.
#[derive(Debug, Clone)]
pub struct BracketIndenter {
    pairs: Vec<(char, char)>,
}

impl Default for BracketIndenter {
    fn default() -> Self {
        Self {
            pairs: vec![('(', ')'), ('[', ']'), ('{', '}')],
        }
    }
}

impl AutoIndenter for BracketIndenter {
    fn on_enter(&self, model: &dyn TextModel, range: Range) -> EnterAction {
        let before: String = model
            .line_content(range.start.line)
            .chars()
            .take(range.start.column - 1)
            .collect();
        let after: String = model
            .line_content(range.end.line)
            .chars()
            .skip(range.end.column - 1)
            .collect();

        let last = before.trim_end().chars().last();
        let next = after.trim_start().chars().next();

        match last.and_then(|ch| self.pairs.iter().find(|(open, _)| *open == ch)) {
            Some((_, close)) if next == Some(*close) => EnterAction::IndentOutdent,
            Some(_) => EnterAction::Indent,
            None => EnterAction::None,
        }
    }
}
