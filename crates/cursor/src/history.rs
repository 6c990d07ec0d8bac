// Chunk: docs/chunks/undo_history - Undo and redo of applied batches

//! Undo history.
//!
//! Every applied batch is stored with its inverse and the cursors before and
//! after it. Undo applies the inverse and restores the "before" cursors; redo
//! re-applies the forward batch and restores the "after" cursors.

use lite_edit_buffer::EditOperation;

use crate::selection::CursorState;

const DEFAULT_MAX_UNDO: usize = 1000;

/// One undoable batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoStep {
    /// The batch as applied, in pre-edit coordinates.
    pub forward: Vec<EditOperation>,
    /// The batch that restores the pre-edit content, in post-edit coordinates.
    pub inverse: Vec<EditOperation>,
    pub before: Vec<CursorState>,
    pub after: Vec<CursorState>,
}

/// Linear undo/redo stacks.
#[derive(Debug, Clone)]
pub struct UndoHistory {
    undo_stack: Vec<UndoStep>,
    redo_stack: Vec<UndoStep>,
    max_undo: usize,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UNDO)
    }
}

impl UndoHistory {
    pub fn new(max_undo: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_undo: max_undo.max(1),
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Records a new edit. The redo branch is discarded.
    pub fn record(&mut self, step: UndoStep) {
        self.redo_stack.clear();
        self.push_undo(step);
    }

    fn push_undo(&mut self, step: UndoStep) {
        if self.undo_stack.len() >= self.max_undo {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(step);
    }

    /// Takes the step to undo.
    pub fn pop_undo(&mut self) -> Option<UndoStep> {
        self.undo_stack.pop()
    }

    /// Takes the step to redo.
    pub fn pop_redo(&mut self) -> Option<UndoStep> {
        self.redo_stack.pop()
    }

    /// Files a step that was just undone so it can be redone.
    pub fn push_redo(&mut self, step: UndoStep) {
        self.redo_stack.push(step);
    }

    /// Files a step that was just redone (or failed to undo) back on the
    /// undo stack without touching the redo branch.
    pub fn push_undone(&mut self, step: UndoStep) {
        self.push_undo(step);
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
