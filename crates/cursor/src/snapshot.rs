// Chunk: docs/chunks/cursor_state_persistence - Save and restore of cursor state

//! Save/restore snapshots of the cursor set.
//!
//! The snapshot layout is persisted, so field names are fixed:
//!
//! ```json
//! {
//!   "cursors": [
//!     {
//!       "selectionStartLineNumber": 1,
//!       "selectionStartColumn": 1,
//!       "positionLineNumber": 1,
//!       "positionColumn": 5,
//!       "stickyVisualColumn": null
//!     }
//!   ],
//!   "primary": 0
//! }
//! ```

use lite_edit_buffer::Position;
use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::selection::{CursorState, Selection};

/// One persisted cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorSnapshot {
    pub selection_start_line_number: usize,
    pub selection_start_column: usize,
    pub position_line_number: usize,
    pub position_column: usize,
    #[serde(default)]
    pub sticky_visual_column: Option<usize>,
}

impl From<&CursorState> for CursorSnapshot {
    fn from(cursor: &CursorState) -> Self {
        let Selection { anchor, active } = cursor.selection;
        Self {
            selection_start_line_number: anchor.line,
            selection_start_column: anchor.column,
            position_line_number: active.line,
            position_column: active.column,
            sticky_visual_column: cursor.sticky_visual_column,
        }
    }
}

impl From<&CursorSnapshot> for CursorState {
    fn from(snapshot: &CursorSnapshot) -> Self {
        CursorState {
            selection: Selection::new(
                Position::new(snapshot.selection_start_line_number, snapshot.selection_start_column),
                Position::new(snapshot.position_line_number, snapshot.position_column),
            ),
            sticky_visual_column: snapshot.sticky_visual_column,
        }
    }
}

/// The full cursor set, opaque to callers beyond its serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorStateSnapshot {
    pub cursors: Vec<CursorSnapshot>,
    #[serde(default)]
    pub primary: usize,
}

impl CursorStateSnapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}
