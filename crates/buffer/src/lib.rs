// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing
// Chunk: docs/chunks/text_model_contract - TextModel trait and batched edits

//! lite-edit-buffer: The text model the lite-edit cursor engine edits.
//!
//! This crate provides the coordinate types shared by the whole editor, the
//! [`TextModel`] contract, and [`TextBuffer`], a gap buffer-backed model.
//!
//! # Overview
//!
//! Positions are 1-based `(line, column)` pairs where the column counts chars.
//! A line of length `n` has a max column of `n + 1`.
//!
//! All mutation happens in batches of [`EditOperation`]s expressed in the
//! coordinates of the buffer *before* the batch:
//!
//! ```
//! use lite_edit_buffer::{EditOperation, Range, TextBuffer, TextModel};
//!
//! let mut buffer = TextBuffer::from_str("one two");
//! let applied = buffer
//!     .apply_edits(&[
//!         EditOperation::replace(Range::from_coords(1, 1, 1, 4), "1"),
//!         EditOperation::replace(Range::from_coords(1, 5, 1, 8), "2"),
//!     ])
//!     .unwrap();
//! assert_eq!(buffer.content(), "1 2");
//!
//! // The inverse batch restores the previous content
//! buffer.apply_edits(&applied.inverse).unwrap();
//! assert_eq!(buffer.content(), "one two");
//! ```

mod edit;
mod gap_buffer;
mod line_index;
mod model;
mod text_buffer;
mod types;

pub use edit::{batch_order, end_position_after, normalize_line_breaks, sort_and_validate, EditError, EditOperation};
pub use model::{AppliedEdits, TextModel, WordRange};
pub use text_buffer::TextBuffer;
pub use types::{Position, Range};
