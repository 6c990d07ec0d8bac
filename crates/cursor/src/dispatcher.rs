// Chunk: docs/chunks/handler_dispatch - Stable handler catalogue

//! The handler catalogue.
//!
//! [`Handler`] is the only entry point for intents. It is a closed enum whose
//! serialized form is `{"id": "<HandlerId>", "payload": {...}}`, so the set of
//! supported ids is enumerable through [`HandlerId::ALL`] and a handler can be
//! built from an external `(id, payload)` pair with [`Handler::from_parts`].
//! Ids and payload shapes are a compatibility surface: a `Select` suffix
//! extends the selection, no suffix collapses it.

use std::fmt;
use std::str::FromStr;

use lite_edit_buffer::Position;
use serde::{Deserialize, Serialize};

use crate::commands::EditCommand;
use crate::error::CommandError;
use crate::movement::Movement;
use crate::selection::Selection;

macro_rules! handler_ids {
    ($($name:ident),* $(,)?) => {
        /// Stable identifier of a handler.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HandlerId {
            $($name),*
        }

        impl HandlerId {
            /// Every handler id, in catalogue order.
            pub const ALL: &'static [HandlerId] = &[$(HandlerId::$name),*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(HandlerId::$name => stringify!($name)),*
                }
            }
        }

        impl FromStr for HandlerId {
            type Err = CommandError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($name) => Ok(HandlerId::$name),)*
                    _ => Err(CommandError::UnknownHandler(s.to_string())),
                }
            }
        }
    };
}

handler_ids! {
    MoveTo,
    MoveToSelect,
    CursorLeft,
    CursorLeftSelect,
    CursorRight,
    CursorRightSelect,
    CursorUp,
    CursorUpSelect,
    CursorDown,
    CursorDownSelect,
    CursorWordLeft,
    CursorWordLeftSelect,
    CursorWordRight,
    CursorWordRightSelect,
    CursorPageUp,
    CursorPageUpSelect,
    CursorPageDown,
    CursorPageDownSelect,
    CursorHome,
    CursorHomeSelect,
    CursorEnd,
    CursorEndSelect,
    CursorTop,
    CursorTopSelect,
    CursorBottom,
    CursorBottomSelect,
    ExpandLineSelection,
    SelectAll,
    JumpToBracket,
    Type,
    Tab,
    Indent,
    Outdent,
    DeleteLeft,
    DeleteRight,
    DeleteWordLeft,
    DeleteWordRight,
    LineInsertBefore,
    LineInsertAfter,
    ToggleLineComment,
    ToggleBlockComment,
    Cut,
    Paste,
    Undo,
    Redo,
    AddCursorAbove,
    AddCursorBelow,
    SelectAllOccurrences,
    RemoveSecondaryCursors,
    SetSelections,
}

impl HandlerId {
    /// Whether the handler carries a payload.
    pub fn takes_payload(self) -> bool {
        matches!(
            self,
            HandlerId::MoveTo
                | HandlerId::MoveToSelect
                | HandlerId::CursorPageUp
                | HandlerId::CursorPageUpSelect
                | HandlerId::CursorPageDown
                | HandlerId::CursorPageDownSelect
                | HandlerId::Type
                | HandlerId::Paste
                | HandlerId::SetSelections
        )
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An intent with its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "id", content = "payload")]
pub enum Handler {
    MoveTo { position: Position },
    MoveToSelect { position: Position },
    CursorLeft,
    CursorLeftSelect,
    CursorRight,
    CursorRightSelect,
    CursorUp,
    CursorUpSelect,
    CursorDown,
    CursorDownSelect,
    CursorWordLeft,
    CursorWordLeftSelect,
    CursorWordRight,
    CursorWordRightSelect,
    CursorPageUp {
        #[serde(rename = "pageSize")]
        page_size: usize,
    },
    CursorPageUpSelect {
        #[serde(rename = "pageSize")]
        page_size: usize,
    },
    CursorPageDown {
        #[serde(rename = "pageSize")]
        page_size: usize,
    },
    CursorPageDownSelect {
        #[serde(rename = "pageSize")]
        page_size: usize,
    },
    CursorHome,
    CursorHomeSelect,
    CursorEnd,
    CursorEndSelect,
    CursorTop,
    CursorTopSelect,
    CursorBottom,
    CursorBottomSelect,
    ExpandLineSelection,
    SelectAll,
    JumpToBracket,
    Type { text: String },
    Tab,
    Indent,
    Outdent,
    DeleteLeft,
    DeleteRight,
    DeleteWordLeft,
    DeleteWordRight,
    LineInsertBefore,
    LineInsertAfter,
    ToggleLineComment,
    ToggleBlockComment,
    Cut,
    Paste { text: String },
    Undo,
    Redo,
    AddCursorAbove,
    AddCursorBelow,
    SelectAllOccurrences,
    RemoveSecondaryCursors,
    SetSelections { selections: Vec<Selection> },
}

/// What the controller does for a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    /// Move every cursor.
    Move { movement: Movement, select: bool },
    /// Move the primary cursor and drop the others.
    MoveTo { position: Position, select: bool },
    ExpandLineSelection,
    SelectAll,
    JumpToBracket,
    /// Run an editing command on every cursor.
    Edit(EditCommand),
    Paste(String),
    Undo,
    Redo,
    AddCursor { above: bool },
    SelectAllOccurrences,
    RemoveSecondaryCursors,
    SetSelections(Vec<Selection>),
}

impl Handler {
    /// Builds a handler from an external id and JSON payload.
    ///
    /// Handlers without a payload ignore a `null` or empty-object payload.
    pub fn from_parts(id: &str, payload: serde_json::Value) -> Result<Handler, CommandError> {
        let handler_id: HandlerId = id.parse()?;

        let empty = payload.is_null() || payload.as_object().is_some_and(|map| map.is_empty());
        let mut envelope = serde_json::Map::new();
        envelope.insert("id".to_string(), serde_json::Value::String(id.to_string()));
        if handler_id.takes_payload() || !empty {
            envelope.insert("payload".to_string(), payload);
        }

        serde_json::from_value(serde_json::Value::Object(envelope)).map_err(|source| {
            CommandError::InvalidPayload {
                id: id.to_string(),
                source,
            }
        })
    }

    /// The stable id of this handler.
    pub fn id(&self) -> HandlerId {
        match self {
            Handler::MoveTo { .. } => HandlerId::MoveTo,
            Handler::MoveToSelect { .. } => HandlerId::MoveToSelect,
            Handler::CursorLeft => HandlerId::CursorLeft,
            Handler::CursorLeftSelect => HandlerId::CursorLeftSelect,
            Handler::CursorRight => HandlerId::CursorRight,
            Handler::CursorRightSelect => HandlerId::CursorRightSelect,
            Handler::CursorUp => HandlerId::CursorUp,
            Handler::CursorUpSelect => HandlerId::CursorUpSelect,
            Handler::CursorDown => HandlerId::CursorDown,
            Handler::CursorDownSelect => HandlerId::CursorDownSelect,
            Handler::CursorWordLeft => HandlerId::CursorWordLeft,
            Handler::CursorWordLeftSelect => HandlerId::CursorWordLeftSelect,
            Handler::CursorWordRight => HandlerId::CursorWordRight,
            Handler::CursorWordRightSelect => HandlerId::CursorWordRightSelect,
            Handler::CursorPageUp { .. } => HandlerId::CursorPageUp,
            Handler::CursorPageUpSelect { .. } => HandlerId::CursorPageUpSelect,
            Handler::CursorPageDown { .. } => HandlerId::CursorPageDown,
            Handler::CursorPageDownSelect { .. } => HandlerId::CursorPageDownSelect,
            Handler::CursorHome => HandlerId::CursorHome,
            Handler::CursorHomeSelect => HandlerId::CursorHomeSelect,
            Handler::CursorEnd => HandlerId::CursorEnd,
            Handler::CursorEndSelect => HandlerId::CursorEndSelect,
            Handler::CursorTop => HandlerId::CursorTop,
            Handler::CursorTopSelect => HandlerId::CursorTopSelect,
            Handler::CursorBottom => HandlerId::CursorBottom,
            Handler::CursorBottomSelect => HandlerId::CursorBottomSelect,
            Handler::ExpandLineSelection => HandlerId::ExpandLineSelection,
            Handler::SelectAll => HandlerId::SelectAll,
            Handler::JumpToBracket => HandlerId::JumpToBracket,
            Handler::Type { .. } => HandlerId::Type,
            Handler::Tab => HandlerId::Tab,
            Handler::Indent => HandlerId::Indent,
            Handler::Outdent => HandlerId::Outdent,
            Handler::DeleteLeft => HandlerId::DeleteLeft,
            Handler::DeleteRight => HandlerId::DeleteRight,
            Handler::DeleteWordLeft => HandlerId::DeleteWordLeft,
            Handler::DeleteWordRight => HandlerId::DeleteWordRight,
            Handler::LineInsertBefore => HandlerId::LineInsertBefore,
            Handler::LineInsertAfter => HandlerId::LineInsertAfter,
            Handler::ToggleLineComment => HandlerId::ToggleLineComment,
            Handler::ToggleBlockComment => HandlerId::ToggleBlockComment,
            Handler::Cut => HandlerId::Cut,
            Handler::Paste { .. } => HandlerId::Paste,
            Handler::Undo => HandlerId::Undo,
            Handler::Redo => HandlerId::Redo,
            Handler::AddCursorAbove => HandlerId::AddCursorAbove,
            Handler::AddCursorBelow => HandlerId::AddCursorBelow,
            Handler::SelectAllOccurrences => HandlerId::SelectAllOccurrences,
            Handler::RemoveSecondaryCursors => HandlerId::RemoveSecondaryCursors,
            Handler::SetSelections { .. } => HandlerId::SetSelections,
        }
    }

    /// Resolves the handler to the action the controller performs.
    pub(crate) fn into_action(self) -> Action {
        let mv = |movement: Movement, select: bool| Action::Move { movement, select };
        match self {
            Handler::MoveTo { position } => Action::MoveTo { position, select: false },
            Handler::MoveToSelect { position } => Action::MoveTo { position, select: true },
            Handler::CursorLeft => mv(Movement::Left, false),
            Handler::CursorLeftSelect => mv(Movement::Left, true),
            Handler::CursorRight => mv(Movement::Right, false),
            Handler::CursorRightSelect => mv(Movement::Right, true),
            Handler::CursorUp => mv(Movement::Up(1), false),
            Handler::CursorUpSelect => mv(Movement::Up(1), true),
            Handler::CursorDown => mv(Movement::Down(1), false),
            Handler::CursorDownSelect => mv(Movement::Down(1), true),
            Handler::CursorWordLeft => mv(Movement::WordLeft, false),
            Handler::CursorWordLeftSelect => mv(Movement::WordLeft, true),
            Handler::CursorWordRight => mv(Movement::WordRight, false),
            Handler::CursorWordRightSelect => mv(Movement::WordRight, true),
            Handler::CursorPageUp { page_size } => mv(Movement::Up(page_size.max(1)), false),
            Handler::CursorPageUpSelect { page_size } => mv(Movement::Up(page_size.max(1)), true),
            Handler::CursorPageDown { page_size } => mv(Movement::Down(page_size.max(1)), false),
            Handler::CursorPageDownSelect { page_size } => mv(Movement::Down(page_size.max(1)), true),
            Handler::CursorHome => mv(Movement::Home, false),
            Handler::CursorHomeSelect => mv(Movement::Home, true),
            Handler::CursorEnd => mv(Movement::End, false),
            Handler::CursorEndSelect => mv(Movement::End, true),
            Handler::CursorTop => mv(Movement::Top, false),
            Handler::CursorTopSelect => mv(Movement::Top, true),
            Handler::CursorBottom => mv(Movement::Bottom, false),
            Handler::CursorBottomSelect => mv(Movement::Bottom, true),
            Handler::ExpandLineSelection => Action::ExpandLineSelection,
            Handler::SelectAll => Action::SelectAll,
            Handler::JumpToBracket => Action::JumpToBracket,
            Handler::Type { text } => Action::Edit(EditCommand::Type { text }),
            Handler::Tab => Action::Edit(EditCommand::Tab),
            Handler::Indent => Action::Edit(EditCommand::Indent),
            Handler::Outdent => Action::Edit(EditCommand::Outdent),
            Handler::DeleteLeft => Action::Edit(EditCommand::DeleteLeft),
            Handler::DeleteRight => Action::Edit(EditCommand::DeleteRight),
            Handler::DeleteWordLeft => Action::Edit(EditCommand::DeleteWordLeft),
            Handler::DeleteWordRight => Action::Edit(EditCommand::DeleteWordRight),
            Handler::LineInsertBefore => Action::Edit(EditCommand::LineInsertBefore),
            Handler::LineInsertAfter => Action::Edit(EditCommand::LineInsertAfter),
            Handler::ToggleLineComment => Action::Edit(EditCommand::ToggleLineComment),
            Handler::ToggleBlockComment => Action::Edit(EditCommand::ToggleBlockComment),
            Handler::Cut => Action::Edit(EditCommand::Cut),
            Handler::Paste { text } => Action::Paste(text),
            Handler::Undo => Action::Undo,
            Handler::Redo => Action::Redo,
            Handler::AddCursorAbove => Action::AddCursor { above: true },
            Handler::AddCursorBelow => Action::AddCursor { above: false },
            Handler::SelectAllOccurrences => Action::SelectAllOccurrences,
            Handler::RemoveSecondaryCursors => Action::RemoveSecondaryCursors,
            Handler::SetSelections { selections } => Action::SetSelections(selections),
        }
    }
}
