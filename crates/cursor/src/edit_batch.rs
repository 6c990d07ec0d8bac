// Chunk: docs/chunks/selection_tracking - Edit batch builder and tracked selections

//! The edit-operation builder and the selection tracker.
//!
//! A command runs in two phases. In the first it inspects the buffer and
//! records edits and tracked selections on an [`EditOperationsBuilder`]. The
//! controller applies the recorded batch in one round-trip, then resolves
//! every tracked selection through the batch with [`TrackedSelections`] so the
//! command can compute its final cursor state.
//!
//! All coordinates recorded on the builder are pre-edit coordinates.

use lite_edit_buffer::{end_position_after, EditOperation, Position, Range, TextModel};

use crate::selection::Selection;

/// How a tracked endpoint behaves when text is inserted exactly at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingBias {
    /// The endpoint moves to the end of the inserted text.
    #[default]
    Forward,
    /// The endpoint stays before the inserted text.
    StickyLeft,
}

/// Handle to a selection tracked by an [`EditOperationsBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackingId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrackedSelection {
    selection: Selection,
    anchor_bias: TrackingBias,
    active_bias: TrackingBias,
}

/// Collects the edits and tracked selections of one command for one cursor.
#[derive(Debug, Default)]
pub struct EditOperationsBuilder {
    operations: Vec<EditOperation>,
    tracked: Vec<TrackedSelection>,
}

impl EditOperationsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a replacement of `range` by `text`.
    pub fn add_edit_operation(&mut self, range: Range, text: impl Into<String>) {
        self.operations.push(EditOperation::replace(range, text));
    }

    /// Tracks `selection` with forward bias on both ends.
    pub fn track_selection(&mut self, selection: Selection) -> TrackingId {
        self.track_selection_with_bias(selection, TrackingBias::Forward, TrackingBias::Forward)
    }

    /// Tracks `selection` with an explicit bias per endpoint.
    pub fn track_selection_with_bias(
        &mut self,
        selection: Selection,
        anchor_bias: TrackingBias,
        active_bias: TrackingBias,
    ) -> TrackingId {
        self.tracked.push(TrackedSelection {
            selection,
            anchor_bias,
            active_bias,
        });
        TrackingId(self.tracked.len() - 1)
    }

    /// Returns the operations recorded so far.
    pub fn operations(&self) -> &[EditOperation] {
        &self.operations
    }

    /// Seals the builder. Phase one is over once this is called.
    pub fn finish(self) -> RecordedEdits {
        RecordedEdits {
            operations: self.operations,
            tracked: self.tracked,
        }
    }
}

/// The sealed output of one command's first phase.
#[derive(Debug, Clone, Default)]
pub struct RecordedEdits {
    pub(crate) operations: Vec<EditOperation>,
    tracked: Vec<TrackedSelection>,
}

impl RecordedEdits {
    pub fn operations(&self) -> &[EditOperation] {
        &self.operations
    }

    /// Clamps every recorded range into `model`, as the model will when it
    /// applies them.
    pub(crate) fn clamp(&mut self, model: &dyn TextModel) {
        for op in &mut self.operations {
            op.range = model.validate_range(op.range);
        }
        for tracked in &mut self.tracked {
            tracked.selection = tracked.selection.validate(model);
        }
    }

    /// Resolves the tracked selections through `batch`.
    ///
    /// `batch` must be the full sorted batch the model applied, since edits
    /// made for other cursors shift this cursor's selections too. `owned[i]`
    /// is true when `batch[i]` was recorded by this command; a missing entry
    /// counts as another cursor's edit.
    pub fn resolve(&self, batch: &[EditOperation], owned: &[bool]) -> TrackedSelections {
        let is_own = |idx: usize| owned.get(idx).copied().unwrap_or(false);
        let resolved = self
            .tracked
            .iter()
            .map(|tracked| {
                let anchor = transform_owned(tracked.selection.anchor, tracked.anchor_bias, batch, is_own);
                let active = transform_owned(tracked.selection.active, tracked.active_bias, batch, is_own);
                tracing::trace!(
                    from = %tracked.selection.range(),
                    anchor = %anchor,
                    active = %active,
                    "resolved tracked selection"
                );
                Selection::new(anchor, active)
            })
            .collect();
        TrackedSelections { resolved }
    }
}

/// Post-edit selections, looked up by [`TrackingId`].
#[derive(Debug, Clone)]
pub struct TrackedSelections {
    resolved: Vec<Selection>,
}

impl TrackedSelections {
    /// The post-edit selection for `id`.
    ///
    /// Ids come from the builder that produced these selections; an id from
    /// another builder resolves to the default caret.
    pub fn get(&self, id: TrackingId) -> Selection {
        self.resolved.get(id.0).copied().unwrap_or_default()
    }
}

fn shift(pos: Position, last: Option<(Position, Position)>, line_delta: isize) -> Position {
    match last {
        Some((old_end, new_end)) if pos.line == old_end.line => {
            Position::new(new_end.line, new_end.column + pos.column - old_end.column)
        }
        _ => Position::new((pos.line as isize + line_delta) as usize, pos.column),
    }
}

/// Maps a pre-edit position through a sorted, non-overlapping batch.
///
/// An operation ending before `pos`, or a pure insert at `pos` with forward
/// bias, shifts it. A position inside a replaced range lands at the end of the
/// replacement (forward) or its start (sticky left).
pub fn transform_position(pos: Position, bias: TrackingBias, batch: &[EditOperation]) -> Position {
    transform_owned(pos, bias, batch, |_| false)
}

/// [`transform_position`] for a point that belongs to the edits `is_own`
/// selects.
///
/// A point at the end of one of its own edits stays there even when another
/// edit starts at the same point. Pure inserts from other cursors that were
/// submitted before an own insert at the same point are passed over, so every
/// insert at a shared point keeps its own caret.
fn transform_owned(
    pos: Position,
    bias: TrackingBias,
    batch: &[EditOperation],
    is_own: impl Fn(usize) -> bool,
) -> Position {
    let mut line_delta: isize = 0;
    let mut last: Option<(Position, Position)> = None;
    let mut bound_to_own = false;

    for (idx, op) in batch.iter().enumerate() {
        let (start, end) = (op.range.start, op.range.end);
        let own = is_own(idx);
        if bound_to_own && !own && start == pos {
            break;
        }

        let new_start = shift(start, last, line_delta);
        let new_end = end_position_after(new_start, &op.text);

        let pure_insert_here = start == end && start == pos;
        let own_insert_follows = || {
            batch[idx + 1..]
                .iter()
                .enumerate()
                .any(|(offset, later)| {
                    is_own(idx + 1 + offset) && later.range.is_empty() && later.range.start == pos
                })
        };
        let before = end < pos
            || (end == pos && start < end)
            || (pure_insert_here && bias == TrackingBias::Forward)
            || (pure_insert_here && !own && own_insert_follows());

        if before {
            line_delta += new_end.line as isize - end.line as isize;
            last = Some((end, new_end));
            bound_to_own = own && end == pos;
            continue;
        }

        if (start <= pos && pos < end) || pure_insert_here {
            return match bias {
                TrackingBias::Forward => new_end,
                TrackingBias::StickyLeft => new_start,
            };
        }

        break;
    }

    shift(pos, last, line_delta)
}
