// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing

//! Gap buffer storage for the text buffer.
//!
//! A gap buffer is a character array with a movable gap. Replacements at the
//! gap are cheap; moving the gap is O(distance). Batched edits are applied
//! back-to-front, so consecutive replacements keep the gap moves short.

const INITIAL_GAP_SIZE: usize = 64;
const GAP_GROWTH_FACTOR: usize = 2;

/// Character storage with a movable gap.
#[derive(Debug)]
pub struct GapBuffer {
    /// The underlying storage. Contains [pre-gap content | gap | post-gap content].
    data: Vec<char>,
    /// Index where the gap starts (first unused position).
    gap_start: usize,
    /// Index where the gap ends (first used position after gap).
    gap_end: usize,
}

impl GapBuffer {
    /// Creates a new empty gap buffer.
    pub fn new() -> Self {
        Self {
            data: vec!['\0'; INITIAL_GAP_SIZE],
            gap_start: 0,
            gap_end: INITIAL_GAP_SIZE,
        }
    }

    /// Creates a gap buffer initialized with the given text.
    pub fn from_str(text: &str) -> Self {
        let mut data: Vec<char> = text.chars().collect();
        let len = data.len();
        let capacity = len + INITIAL_GAP_SIZE;
        data.resize(capacity, '\0');

        Self {
            data,
            gap_start: len,
            gap_end: capacity,
        }
    }

    /// Returns the logical length of the buffer (excluding the gap).
    pub fn len(&self) -> usize {
        self.data.len() - self.gap_len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Moves the gap to the specified logical position.
    fn move_gap_to(&mut self, pos: usize) {
        let pos = pos.min(self.len());

        if pos < self.gap_start {
            // Move gap left: shift content from [pos..gap_start] to [gap_end - shift..gap_end]
            let shift = self.gap_start - pos;
            self.data.copy_within(pos..self.gap_start, self.gap_end - shift);
            self.gap_start = pos;
            self.gap_end -= shift;
        } else if pos > self.gap_start {
            // Move gap right: shift content from [gap_end..gap_end + shift] to [gap_start..]
            let shift = pos - self.gap_start;
            self.data
                .copy_within(self.gap_end..self.gap_end + shift, self.gap_start);
            self.gap_start += shift;
            self.gap_end += shift;
        }
    }

    /// Ensures the gap is at least the specified size.
    ///
    /// Grows the gap in place so that the gap position is preserved.
    fn ensure_gap(&mut self, min_size: usize) {
        if self.gap_len() >= min_size {
            return;
        }

        let needed = min_size - self.gap_len();
        let growth = needed.max(self.data.len() * GAP_GROWTH_FACTOR);

        let old_gap_end = self.gap_end;
        let old_len = self.data.len();
        let post_gap_len = old_len - old_gap_end;

        let new_size = old_len + growth;
        self.data.resize(new_size, '\0');

        if post_gap_len > 0 {
            let new_post_gap_start = new_size - post_gap_len;
            self.data
                .copy_within(old_gap_end..old_len, new_post_gap_start);
        }

        self.gap_end = new_size - post_gap_len;
    }

    /// Replaces the logical range `[start, end)` with `text`.
    ///
    /// Returns the removed characters. Offsets past the end are clamped.
    pub fn replace(&mut self, start: usize, end: usize, text: &str) -> String {
        let start = start.min(self.len());
        let end = end.clamp(start, self.len());

        self.move_gap_to(start);

        // Deleting after the gap is just widening it.
        let removed: String = self.data[self.gap_end..self.gap_end + (end - start)]
            .iter()
            .collect();
        self.gap_end += end - start;

        let count = text.chars().count();
        self.ensure_gap(count);
        for ch in text.chars() {
            self.data[self.gap_start] = ch;
            self.gap_start += 1;
        }

        removed
    }

    /// Returns the character at the given logical position.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        if pos >= self.len() {
            return None;
        }
        let physical = if pos < self.gap_start {
            pos
        } else {
            pos + self.gap_len()
        };
        Some(self.data[physical])
    }

    /// Returns an iterator over all characters in the buffer.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.data[..self.gap_start]
            .iter()
            .chain(self.data[self.gap_end..].iter())
            .copied()
    }

    /// Returns the content of the logical range `[start, end)` as a String.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let start = start.min(self.len());
        let end = end.min(self.len());
        if start >= end {
            return String::new();
        }
        let (before, after) = (&self.data[..self.gap_start], &self.data[self.gap_end..]);
        let split = before.len();
        let mut out = String::with_capacity(end - start);
        if start < split {
            out.extend(&before[start..end.min(split)]);
        }
        if end > split {
            out.extend(&after[start.max(split) - split..end - split]);
        }
        out
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in self.chars() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_empty() {
        let buf = GapBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn test_from_str() {
        let buf = GapBuffer::from_str("hello");
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.to_string(), "hello");
    }

    #[test]
    fn test_replace_pure_insert() {
        let mut buf = GapBuffer::from_str("ac");
        let removed = buf.replace(1, 1, "b");
        assert_eq!(removed, "");
        assert_eq!(buf.to_string(), "abc");
    }

    #[test]
    fn test_replace_pure_delete() {
        let mut buf = GapBuffer::from_str("abcdef");
        let removed = buf.replace(1, 4, "");
        assert_eq!(removed, "bcd");
        assert_eq!(buf.to_string(), "aef");
    }

    #[test]
    fn test_replace_back_to_front() {
        let mut buf = GapBuffer::from_str("one two three");
        buf.replace(8, 13, "3");
        buf.replace(4, 7, "2");
        buf.replace(0, 3, "1");
        assert_eq!(buf.to_string(), "1 2 3");
    }

    #[test]
    fn test_replace_clamps_past_end() {
        let mut buf = GapBuffer::from_str("abc");
        let removed = buf.replace(2, 99, "Z");
        assert_eq!(removed, "c");
        assert_eq!(buf.to_string(), "abZ");
    }

    #[test]
    fn test_char_at_with_gap_in_middle() {
        let mut buf = GapBuffer::from_str("hello");
        buf.replace(2, 2, "");
        assert_eq!(buf.char_at(0), Some('h'));
        assert_eq!(buf.char_at(2), Some('l'));
        assert_eq!(buf.char_at(4), Some('o'));
        assert_eq!(buf.char_at(5), None);
    }

    #[test]
    fn test_slice() {
        let buf = GapBuffer::from_str("hello world");
        assert_eq!(buf.slice(0, 5), "hello");
        assert_eq!(buf.slice(6, 11), "world");
        assert_eq!(buf.slice(4, 2), "");
    }

    #[test]
    fn test_large_insert_grows_gap() {
        let mut buf = GapBuffer::new();
        let text = "x".repeat(1000);
        buf.replace(0, 0, &text);
        buf.replace(500, 500, "|");
        assert_eq!(buf.len(), 1001);
        assert_eq!(buf.char_at(500), Some('|'));
    }
}
