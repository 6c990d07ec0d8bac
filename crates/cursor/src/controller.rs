// Chunk: docs/chunks/cursor_engine - Cursor and selection engine
// Chunk: docs/chunks/multi_cursor - Secondary cursors and merging
// Chunk: docs/chunks/undo_history - Undo and redo of applied batches

//! The cursor controller.
//!
//! Owns the cursor set. Every intent arrives through [`CursorController::execute`]
//! as a [`Handler`]; edits made by other parties arrive through
//! [`CursorController::on_external_edit`]. Both revalidate the cursors against
//! the buffer and notify listeners of what changed.
//!
//! The first cursor is the primary. The others follow in document order and
//! never overlap; overlapping cursors are merged after every operation.

use lite_edit_buffer::{batch_order, normalize_line_breaks, sort_and_validate, EditOperation, Position, Range, TextModel};

use crate::commands::{compute_cursor_state, cut_range, CursorPlan, EditCommand};
use crate::config::EditorConfig;
use crate::context::EditContext;
use crate::dispatcher::{Action, Handler, HandlerId};
use crate::edit_batch::{transform_position, EditOperationsBuilder, RecordedEdits, TrackingBias};
use crate::error::{CommandError, SnapshotError};
use crate::event::{ChangeReason, CursorEvent, ListenerId};
use crate::history::{UndoHistory, UndoStep};
use crate::language::LanguageServices;
use crate::movement::{self, Movement};
use crate::selection::{CursorState, Selection, SelectionDirection};
use crate::snapshot::{CursorSnapshot, CursorStateSnapshot};

type Listener = Box<dyn FnMut(&CursorEvent)>;

/// What an executed handler produced besides cursor changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecuteOutcome {
    /// Text removed by `Cut`, one piece per cursor joined by `\n`.
    pub cut_text: Option<String>,
    /// Whether the buffer content changed.
    pub edited: bool,
}

/// Owner of the cursor set.
pub struct CursorController {
    cursors: Vec<CursorState>,
    history: UndoHistory,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl Default for CursorController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CursorController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorController")
            .field("cursors", &self.cursors)
            .field("history", &self.history)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Whether two ranges from different cursors would overlap in one batch.
fn ranges_conflict(x: &Range, y: &Range) -> bool {
    let (first, second) = if (x.start, x.end) <= (y.start, y.end) { (x, y) } else { (y, x) };
    first.end > second.start
}

impl CursorController {
    /// A controller with one caret at the start of the buffer.
    pub fn new() -> Self {
        Self::with_history(UndoHistory::default())
    }

    pub fn with_history(history: UndoHistory) -> Self {
        Self {
            cursors: vec![CursorState::default()],
            history,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    // ==================== Accessors ====================

    pub fn primary(&self) -> &CursorState {
        &self.cursors[0]
    }

    /// All cursors, primary first.
    pub fn cursors(&self) -> &[CursorState] {
        &self.cursors
    }

    /// All selections, primary first.
    pub fn selections(&self) -> Vec<Selection> {
        self.cursors.iter().map(|cursor| cursor.selection).collect()
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    // ==================== Listeners ====================

    /// Registers a listener called synchronously after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&CursorEvent) + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn emit(&mut self, event: CursorEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }

    fn emit_changes(&mut self, before: &[Selection], reason: ChangeReason) {
        let after = self.selections();
        if before == after.as_slice() {
            return;
        }

        let before_positions: Vec<Position> = before.iter().map(|sel| sel.active).collect();
        let after_positions: Vec<Position> = after.iter().map(|sel| sel.active).collect();
        if before_positions != after_positions {
            self.emit(CursorEvent::PositionChanged {
                position: after_positions[0],
                secondary_positions: after_positions[1..].to_vec(),
                reason,
            });
        }
        self.emit(CursorEvent::SelectionChanged {
            selection: after[0],
            secondary_selections: after[1..].to_vec(),
            reason,
        });
    }

    // ==================== Execution ====================

    /// Executes one handler against `model`.
    ///
    /// `config` and `language` are read for this call only.
    pub fn execute(
        &mut self,
        model: &mut dyn TextModel,
        config: &EditorConfig,
        language: &LanguageServices,
        handler: Handler,
    ) -> Result<ExecuteOutcome, CommandError> {
        let id = handler.id();
        tracing::debug!(handler = %id, cursors = self.cursors.len(), "dispatching handler");

        let reason = match id {
            HandlerId::Undo => ChangeReason::Undo,
            HandlerId::Redo => ChangeReason::Redo,
            _ => ChangeReason::Explicit,
        };
        let before = self.selections();
        let mut outcome = ExecuteOutcome::default();

        match handler.into_action() {
            Action::Move { movement, select } => {
                let ctx = EditContext::new(&*model, config, language);
                self.cursors = self
                    .cursors
                    .iter()
                    .map(|cursor| movement::move_cursor(&ctx, cursor, movement, select))
                    .collect();
            }
            Action::MoveTo { position, select } => {
                let ctx = EditContext::new(&*model, config, language);
                let primary = movement::move_cursor(&ctx, &self.cursors[0], Movement::To(position), select);
                self.cursors = vec![primary];
            }
            Action::ExpandLineSelection => {
                let model: &dyn TextModel = &*model;
                self.cursors = self
                    .cursors
                    .iter()
                    .map(|cursor| movement::expand_line_selection(model, cursor))
                    .collect();
            }
            Action::SelectAll => {
                self.cursors = vec![movement::select_all(&*model)];
            }
            Action::JumpToBracket => {
                let ctx = EditContext::new(&*model, config, language);
                self.cursors = self
                    .cursors
                    .iter()
                    .map(|cursor| movement::jump_to_bracket(&ctx, cursor))
                    .collect();
            }
            Action::Edit(EditCommand::Cut) => {
                let pieces = {
                    let ctx = EditContext::new(&*model, config, language);
                    self.cursors
                        .iter()
                        .map(|cursor| cut_range(&ctx, cursor).map(|(_, text)| text))
                        .collect::<Vec<_>>()
                };
                let commands = vec![EditCommand::Cut; self.cursors.len()];
                let run = self.run_edits(model, config, language, commands)?;
                outcome.edited = run.edited;
                outcome.cut_text = self.join_in_document_order(&before, pieces, &run.accepted);
            }
            Action::Edit(command) => {
                let commands = vec![command; self.cursors.len()];
                outcome.edited = self.run_edits(model, config, language, commands)?.edited;
            }
            Action::Paste(text) => {
                let commands = self.paste_commands(&text);
                outcome.edited = self.run_edits(model, config, language, commands)?.edited;
            }
            Action::Undo => outcome.edited = self.undo(model)?,
            Action::Redo => outcome.edited = self.redo(model)?,
            Action::AddCursor { above } => {
                let ctx = EditContext::new(&*model, config, language);
                self.add_cursors(&ctx, above);
            }
            Action::SelectAllOccurrences => self.select_all_occurrences(&*model),
            Action::RemoveSecondaryCursors => self.cursors.truncate(1),
            Action::SetSelections(selections) => {
                if !selections.is_empty() {
                    let model: &dyn TextModel = &*model;
                    self.cursors = selections
                        .iter()
                        .map(|selection| CursorState::new(selection.validate(model)))
                        .collect();
                }
            }
        }

        self.merge_cursors();
        self.emit_changes(&before, reason);
        Ok(outcome)
    }

    /// Runs the two-phase protocol for `commands[i]` on cursor `i`.
    fn run_edits(
        &mut self,
        model: &mut dyn TextModel,
        config: &EditorConfig,
        language: &LanguageServices,
        commands: Vec<EditCommand>,
    ) -> Result<EditRun, CommandError> {
        let before_cursors = self.cursors.clone();
        let version_before = model.version_id();

        // Phase one: every cursor describes its edits against the same snapshot.
        let mut planned: Vec<(RecordedEdits, CursorPlan)> = Vec::with_capacity(self.cursors.len());
        let mut accepted = Vec::with_capacity(self.cursors.len());
        let mut batch: Vec<EditOperation> = Vec::new();
        let mut owner_of: Vec<usize> = Vec::new();
        {
            let ctx = EditContext::new(&*model, config, language);
            for (idx, (cursor, command)) in self.cursors.iter().zip(&commands).enumerate() {
                let mut builder = EditOperationsBuilder::new();
                let plan = command.get_edit_operations(&ctx, cursor, &mut builder);
                let mut recorded = builder.finish();
                recorded.clamp(ctx.model);

                if let Err(err) = sort_and_validate(recorded.operations()) {
                    tracing::warn!(%err, cursor = idx, ?command, "command produced overlapping edits");
                    return Err(err.into());
                }

                let conflicts = recorded.operations().iter().any(|op| {
                    batch
                        .iter()
                        .any(|earlier| ranges_conflict(&op.range, &earlier.range))
                });
                if conflicts {
                    tracing::debug!(cursor = idx, ?command, "dropping command that conflicts with an earlier cursor");
                    let mut builder = EditOperationsBuilder::new();
                    let id = builder.track_selection(cursor.selection);
                    let mut recorded = builder.finish();
                    recorded.clamp(ctx.model);
                    planned.push((recorded, CursorPlan::Tracked(id)));
                    accepted.push(false);
                    continue;
                }

                batch.extend_from_slice(recorded.operations());
                owner_of.resize(batch.len(), idx);
                planned.push((recorded, plan));
                accepted.push(true);
            }
        }

        let sorted = sort_and_validate(&batch)?;
        let owners: Vec<usize> = batch_order(&batch).into_iter().map(|i| owner_of[i]).collect();
        let applied = model.apply_edits(&sorted).map_err(|err| {
            tracing::warn!(%err, "model rejected edit batch");
            err
        })?;

        // Phase two: resolve every plan through the whole batch.
        let model: &dyn TextModel = &*model;
        self.cursors = planned
            .iter()
            .enumerate()
            .map(|(idx, (recorded, plan))| {
                let owned: Vec<bool> = owners.iter().map(|&owner| owner == idx).collect();
                compute_cursor_state(*plan, model, &recorded.resolve(&sorted, &owned))
            })
            .collect();
        self.merge_cursors();

        let edited = applied.version_id != version_before;
        if edited {
            self.history.record(UndoStep {
                forward: sorted,
                inverse: applied.inverse,
                before: before_cursors,
                after: self.cursors.clone(),
            });
        }

        Ok(EditRun { edited, accepted })
    }

    /// Joins the cut pieces of accepted cursors in document order.
    fn join_in_document_order(
        &self,
        before: &[Selection],
        pieces: Vec<Option<String>>,
        accepted: &[bool],
    ) -> Option<String> {
        let mut ordered: Vec<(Position, String)> = before
            .iter()
            .zip(pieces)
            .zip(accepted)
            .filter_map(|((selection, piece), accepted)| {
                piece.filter(|_| *accepted).map(|piece| (selection.start(), piece))
            })
            .collect();
        if ordered.is_empty() {
            return None;
        }
        ordered.sort_by_key(|(start, _)| *start);
        let texts: Vec<String> = ordered.into_iter().map(|(_, text)| text).collect();
        Some(texts.join("\n"))
    }

    /// One piece per cursor when the pasted lines match the cursor count.
    fn paste_commands(&self, text: &str) -> Vec<EditCommand> {
        let text = normalize_line_breaks(text.to_string());
        let count = self.cursors.len();
        let trimmed = text.strip_suffix('\n').unwrap_or(&text);
        let pieces: Vec<&str> = trimmed.split('\n').collect();

        if count < 2 || pieces.len() != count {
            return vec![EditCommand::InsertText { text: text.clone() }; count];
        }

        let mut order: Vec<usize> = (0..count).collect();
        order.sort_by_key(|&idx| self.cursors[idx].selection.start());
        let mut commands = vec![EditCommand::InsertText { text: String::new() }; count];
        for (piece, idx) in pieces.into_iter().zip(order) {
            commands[idx] = EditCommand::InsertText {
                text: piece.to_string(),
            };
        }
        commands
    }

    // ==================== Undo / Redo ====================

    fn undo(&mut self, model: &mut dyn TextModel) -> Result<bool, CommandError> {
        let Some(step) = self.history.pop_undo() else {
            tracing::debug!("nothing to undo");
            return Ok(false);
        };
        if let Err(err) = model.apply_edits(&step.inverse) {
            tracing::warn!(%err, "undo batch rejected");
            self.history.push_undone(step);
            return Err(err.into());
        }
        let model: &dyn TextModel = &*model;
        self.cursors = step.before.iter().map(|cursor| cursor.validate(model)).collect();
        tracing::debug!(undo_depth = self.history.undo_depth(), "undid batch");
        self.history.push_redo(step);
        Ok(true)
    }

    fn redo(&mut self, model: &mut dyn TextModel) -> Result<bool, CommandError> {
        let Some(step) = self.history.pop_redo() else {
            tracing::debug!("nothing to redo");
            return Ok(false);
        };
        if let Err(err) = model.apply_edits(&step.forward) {
            tracing::warn!(%err, "redo batch rejected");
            self.history.push_redo(step);
            return Err(err.into());
        }
        let model: &dyn TextModel = &*model;
        self.cursors = step.after.iter().map(|cursor| cursor.validate(model)).collect();
        tracing::debug!(redo_depth = self.history.redo_depth(), "redid batch");
        self.history.push_undone(step);
        Ok(true)
    }

    // ==================== Multi-cursor ====================

    fn add_cursors(&mut self, ctx: &EditContext<'_>, above: bool) {
        let movement = if above { Movement::Up(1) } else { Movement::Down(1) };
        let added: Vec<CursorState> = self
            .cursors
            .iter()
            .filter_map(|cursor| {
                let moved = movement::move_cursor(ctx, cursor, movement, false);
                (moved.position().line != cursor.position().line).then_some(moved)
            })
            .collect();
        self.cursors.extend(added);
    }

    fn select_all_occurrences(&mut self, model: &dyn TextModel) {
        let primary = self.cursors[0].selection.validate(model);
        let needle_range = if primary.is_empty() {
            let Some(word) = model.word_at_position(primary.active) else {
                return;
            };
            let line = primary.active.line;
            Range::from_coords(line, word.start_column, line, word.end_column)
        } else {
            primary.range()
        };

        let needle = model.value_in_range(needle_range);
        if needle.is_empty() {
            return;
        }

        let direction = if primary.is_empty() {
            SelectionDirection::LeftToRight
        } else {
            primary.direction()
        };

        // The primary range always survives, even when matches overlap it
        self.cursors = std::iter::once(needle_range)
            .chain(
                find_occurrences(model, &needle)
                    .into_iter()
                    .filter(|range| !range.overlaps(&needle_range)),
            )
            .map(|range| CursorState::new(Selection::from_range(range, direction)))
            .collect();
    }

    /// Merges overlapping cursors; the one added earliest survives, so the
    /// primary always does.
    fn merge_cursors(&mut self) {
        if self.cursors.len() < 2 {
            return;
        }

        let mut indexed: Vec<(usize, CursorState)> = self.cursors.iter().copied().enumerate().collect();
        indexed.sort_by_key(|(_, cursor)| (cursor.selection.start(), cursor.selection.end()));

        let mut merged: Vec<(usize, CursorState)> = Vec::with_capacity(indexed.len());
        for (idx, cursor) in indexed {
            if let Some((last_idx, last)) = merged.last_mut() {
                let (a, b) = (last.selection, cursor.selection);
                let overlapping = if a.is_empty() || b.is_empty() {
                    b.start() <= a.end()
                } else {
                    b.start() < a.end()
                };
                if overlapping {
                    let range = a.range().union(&b.range());
                    let winner = if idx < *last_idx { cursor } else { *last };
                    *last = if winner.selection.range() == range {
                        winner
                    } else {
                        CursorState::new(Selection::from_range(range, winner.selection.direction()))
                    };
                    *last_idx = (*last_idx).min(idx);
                    continue;
                }
            }
            merged.push((idx, cursor));
        }

        if let Some(primary) = merged.iter().position(|(idx, _)| *idx == 0) {
            let entry = merged.remove(primary);
            merged.insert(0, entry);
        }
        self.cursors = merged.into_iter().map(|(_, cursor)| cursor).collect();
    }

    // ==================== External edits ====================

    /// Revalidates the cursors after `ops` were applied to `model` by someone
    /// else. `ops` are in the coordinates of the buffer before that edit.
    ///
    /// The undo history is cleared because its batches no longer line up with
    /// the buffer.
    pub fn on_external_edit(&mut self, model: &dyn TextModel, ops: &[EditOperation]) -> Result<(), CommandError> {
        let sorted = sort_and_validate(ops).map_err(|err| {
            tracing::warn!(%err, "external edit batch overlaps");
            err
        })?;

        let before = self.selections();
        self.cursors = self
            .cursors
            .iter()
            .map(|cursor| {
                let selection = cursor.selection;
                let anchor = transform_position(selection.anchor, TrackingBias::Forward, &sorted);
                let active = transform_position(selection.active, TrackingBias::Forward, &sorted);
                CursorState {
                    selection: Selection::new(anchor, active).validate(model),
                    sticky_visual_column: cursor.sticky_visual_column,
                }
            })
            .collect();

        self.history.clear();
        tracing::debug!(operations = sorted.len(), "revalidated cursors after external edit");

        self.merge_cursors();
        self.emit_changes(&before, ChangeReason::ExternalEdit);
        Ok(())
    }

    // ==================== Save / Restore ====================

    /// Captures every cursor, sticky columns included.
    pub fn save_state(&self) -> CursorStateSnapshot {
        CursorStateSnapshot {
            cursors: self.cursors.iter().map(CursorSnapshot::from).collect(),
            primary: 0,
        }
    }

    /// Restores a snapshot, clamping it to the buffer as it is now.
    pub fn restore_state(
        &mut self,
        model: &dyn TextModel,
        snapshot: &CursorStateSnapshot,
    ) -> Result<(), SnapshotError> {
        if snapshot.cursors.is_empty() {
            return Err(SnapshotError::NoCursors);
        }

        let before = self.selections();
        let mut cursors: Vec<CursorState> = snapshot
            .cursors
            .iter()
            .map(|cursor| CursorState::from(cursor).validate(model))
            .collect();
        let primary = cursors.remove(snapshot.primary.min(cursors.len() - 1));
        cursors.insert(0, primary);
        self.cursors = cursors;

        self.merge_cursors();
        self.emit_changes(&before, ChangeReason::Restore);
        Ok(())
    }
}

struct EditRun {
    edited: bool,
    /// Per cursor, whether its command made it into the batch.
    accepted: Vec<bool>,
}

/// Non-overlapping occurrences of `needle` in `model`, in document order.
fn find_occurrences(model: &dyn TextModel, needle: &str) -> Vec<Range> {
    let haystack = model.value_in_range(model.full_range());
    let line_starts: Vec<usize> = std::iter::once(0)
        .chain(haystack.match_indices('\n').map(|(idx, _)| idx + 1))
        .collect();
    let position_of = |byte: usize| {
        let line = line_starts.partition_point(|start| *start <= byte) - 1;
        let column = haystack[line_starts[line]..byte].chars().count() + 1;
        Position::new(line + 1, column)
    };

    haystack
        .match_indices(needle)
        .map(|(start, matched)| Range::new(position_of(start), position_of(start + matched.len())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lite_edit_buffer::TextBuffer;

    fn caret(line: usize, column: usize) -> Selection {
        Selection::caret(Position::new(line, column))
    }

    #[test]
    fn test_ranges_conflict() {
        let r = |sl, sc, el, ec| Range::from_coords(sl, sc, el, ec);
        assert!(ranges_conflict(&r(1, 1, 1, 5), &r(1, 3, 1, 7)));
        assert!(ranges_conflict(&r(1, 3, 1, 3), &r(1, 1, 1, 5)));
        assert!(!ranges_conflict(&r(1, 1, 1, 3), &r(1, 3, 1, 5)));
        assert!(!ranges_conflict(&r(1, 3, 1, 3), &r(1, 3, 1, 3)));
    }

    #[test]
    fn test_merge_keeps_primary_first() {
        let mut controller = CursorController::new();
        controller.cursors = vec![
            CursorState::new(caret(2, 1)),
            CursorState::new(caret(1, 1)),
            CursorState::new(caret(2, 1)),
        ];
        controller.merge_cursors();
        assert_eq!(controller.selections(), vec![caret(2, 1), caret(1, 1)]);
    }

    #[test]
    fn test_merge_overlapping_selections() {
        let mut controller = CursorController::new();
        controller.cursors = vec![
            CursorState::new(Selection::new(Position::new(1, 4), Position::new(1, 8))),
            CursorState::new(Selection::new(Position::new(1, 6), Position::new(1, 2))),
        ];
        controller.merge_cursors();
        assert_eq!(
            controller.selections(),
            vec![Selection::new(Position::new(1, 2), Position::new(1, 8))]
        );
    }

    #[test]
    fn test_touching_selections_do_not_merge() {
        let mut controller = CursorController::new();
        controller.cursors = vec![
            CursorState::new(Selection::new(Position::new(1, 1), Position::new(1, 3))),
            CursorState::new(Selection::new(Position::new(1, 3), Position::new(1, 5))),
        ];
        controller.merge_cursors();
        assert_eq!(controller.cursors().len(), 2);
    }

    #[test]
    fn test_select_all_occurrences_keeps_overlapping_primary() {
        let mut buf = TextBuffer::from_str("aaaa aa");
        let mut controller = CursorController::new();
        let config = EditorConfig::default();
        let language = LanguageServices::plain_text();
        let primary = Selection::new(Position::new(1, 2), Position::new(1, 4));
        controller
            .execute(
                &mut buf,
                &config,
                &language,
                Handler::SetSelections {
                    selections: vec![primary],
                },
            )
            .unwrap();
        controller
            .execute(&mut buf, &config, &language, Handler::SelectAllOccurrences)
            .unwrap();
        assert_eq!(
            controller.selections(),
            vec![primary, Selection::new(Position::new(1, 6), Position::new(1, 8))]
        );
    }

    #[test]
    fn test_find_occurrences_across_lines() {
        let buf = TextBuffer::from_lines(&["foo bar foo", "ünï foo"]);
        let found = find_occurrences(&buf, "foo");
        assert_eq!(
            found,
            vec![
                Range::from_coords(1, 1, 1, 4),
                Range::from_coords(1, 9, 1, 12),
                Range::from_coords(2, 5, 2, 8),
            ]
        );
    }
}
