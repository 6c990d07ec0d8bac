// Chunk: docs/chunks/cursor_engine - Change notifications

//! Cursor change events.

use lite_edit_buffer::Position;

use crate::selection::Selection;

/// Why the cursors changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeReason {
    /// A handler dispatched through the controller.
    Explicit,
    Undo,
    Redo,
    /// The buffer was edited by someone else.
    ExternalEdit,
    /// A snapshot was restored.
    Restore,
}

/// Emitted after an operation has fully applied.
///
/// `PositionChanged` fires first when active ends moved; `SelectionChanged`
/// follows when any end moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorEvent {
    PositionChanged {
        position: Position,
        secondary_positions: Vec<Position>,
        reason: ChangeReason,
    },
    SelectionChanged {
        selection: Selection,
        secondary_selections: Vec<Selection>,
        reason: ChangeReason,
    },
}

/// Handle returned by [`CursorController::subscribe`](crate::CursorController::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);
