// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing
// Chunk: docs/chunks/text_model_contract - 1-based positions and ranges

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Position in the buffer as (line, column), both 1-based.
///
/// `column` counts chars within the line, so the caret after the last char of
/// a line of length `n` sits at column `n + 1` (the line's max column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[serde(rename = "lineNumber")]
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare by line first, then by column
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.line, self.column)
    }
}

/// An ordered pair of positions with `start <= end`.
///
/// A range whose ends coincide is empty and stands for a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Creates a range from two positions in either order.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Shorthand for `Range::new(Position::new(..), Position::new(..))`.
    pub fn from_coords(
        start_line: usize,
        start_column: usize,
        end_line: usize,
        end_column: usize,
    ) -> Self {
        Self::new(
            Position::new(start_line, start_column),
            Position::new(end_line, end_column),
        )
    }

    /// An empty range at `pos`.
    pub fn empty_at(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// Returns true if `pos` lies within the range, edges included.
    pub fn contains_position(&self, pos: Position) -> bool {
        self.start <= pos && pos <= self.end
    }

    /// Returns true if the two ranges share any interior point.
    ///
    /// Ranges that only touch at an edge do not overlap.
    pub fn overlaps(&self, other: &Range) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The smallest range covering both.
    pub fn union(&self, other: &Range) -> Range {
        Range {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Position ordering ====================

    #[test]
    fn position_orders_by_line_then_column() {
        assert!(Position::new(1, 9) < Position::new(2, 1));
        assert!(Position::new(3, 2) < Position::new(3, 4));
    }

    // ==================== Range ====================

    #[test]
    fn range_new_normalizes_order() {
        let r = Range::from_coords(3, 1, 1, 4);
        assert_eq!(r.start, Position::new(1, 4));
        assert_eq!(r.end, Position::new(3, 1));
    }

    #[test]
    fn range_contains_edges() {
        let r = Range::from_coords(1, 2, 1, 5);
        assert!(r.contains_position(Position::new(1, 2)));
        assert!(r.contains_position(Position::new(1, 5)));
        assert!(!r.contains_position(Position::new(1, 6)));
    }

    #[test]
    fn touching_ranges_do_not_overlap() {
        let a = Range::from_coords(1, 1, 1, 3);
        let b = Range::from_coords(1, 3, 1, 6);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&Range::from_coords(1, 2, 1, 4)));
        assert_eq!(a.union(&b), Range::from_coords(1, 1, 1, 6));
    }
}
