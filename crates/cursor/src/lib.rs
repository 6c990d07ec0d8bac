// Chunk: docs/chunks/cursor_engine - Cursor and selection engine

//! lite-edit-cursor: cursors, selections and editing commands over a
//! [`TextModel`](lite_edit_buffer::TextModel).
//!
//! # Overview
//!
//! A [`CursorController`] owns one or more cursors. Every user intent is a
//! [`Handler`] passed to [`CursorController::execute`]:
//!
//! ```
//! use lite_edit_buffer::{Position, TextBuffer};
//! use lite_edit_cursor::{CursorController, EditorConfig, Handler, LanguageServices};
//!
//! let mut buffer = TextBuffer::from_str("hello");
//! let config = EditorConfig::default();
//! let language = LanguageServices::plain_text();
//! let mut controller = CursorController::new();
//!
//! controller
//!     .execute(&mut buffer, &config, &language, Handler::CursorEnd)
//!     .unwrap();
//! controller
//!     .execute(&mut buffer, &config, &language, Handler::Type { text: " world".into() })
//!     .unwrap();
//!
//! assert_eq!(buffer.content(), "hello world");
//! assert_eq!(controller.primary().position(), Position::new(1, 12));
//! ```
//!
//! # Editing
//!
//! Commands never mutate the buffer themselves. Each one records edit
//! operations and tracked selections against the pre-edit buffer; the
//! controller applies the combined batch of every cursor at once and then
//! resolves each cursor through it. See [`EditCommand`].
//!
//! Handlers can also be built from an id and a JSON payload with
//! [`Handler::from_parts`].

mod columns;
mod commands;
mod config;
mod context;
mod controller;
mod dispatcher;
mod edit_batch;
mod error;
mod event;
mod history;
mod language;
mod movement;
mod selection;
mod snapshot;
mod word;

pub use columns::{
    column_from_visible_column, indentation_width, next_indent_tab_stop, prev_indent_tab_stop,
    visible_column_from_column,
};
pub use commands::{compute_cursor_state, CaretColumn, CursorPlan, EditCommand};
pub use config::EditorConfig;
pub use context::EditContext;
pub use controller::{CursorController, ExecuteOutcome};
pub use dispatcher::{Handler, HandlerId};
pub use edit_batch::{
    transform_position, EditOperationsBuilder, RecordedEdits, TrackedSelections, TrackingBias, TrackingId,
};
pub use error::{CommandError, ConfigError, SnapshotError};
pub use event::{ChangeReason, CursorEvent, ListenerId};
pub use history::{UndoHistory, UndoStep};
pub use language::{
    AutoIndenter, BracketIndenter, BracketMatch, BracketMatcher, CommentRules, EnterAction, LanguageServices,
    PairBracketMatcher,
};
pub use movement::{expand_line_selection, jump_to_bracket, move_cursor, select_all, Movement};
pub use selection::{CursorState, Selection, SelectionDirection};
pub use snapshot::{CursorSnapshot, CursorStateSnapshot};
pub use word::{classify, next_word_stop, prev_word_stop, CharClass};
