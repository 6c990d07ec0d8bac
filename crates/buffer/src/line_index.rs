// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing

//! Line index for tracking line boundaries in the text buffer.
//!
//! Maintains an array of line start offsets (0-based char offsets into the
//! gap buffer). The index is updated incrementally for every replacement in a
//! batch; `TextBuffer` cross-checks it against a full rebuild in debug builds.

/// Tracks line boundaries in a text buffer.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Character offsets where each line starts. line_starts[0] = 0 always.
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates a new line index with a single empty line.
    pub fn new() -> Self {
        Self {
            line_starts: vec![0],
        }
    }

    /// Rebuilds the line index from the given content.
    pub fn rebuild<I>(&mut self, content: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.line_starts.clear();
        self.line_starts.push(0);

        let mut offset = 0;
        for ch in content {
            offset += 1;
            if ch == '\n' {
                self.line_starts.push(offset);
            }
        }
    }

    /// Returns the number of lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the char offset where the given 0-based line starts.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Returns the char offset of the end of the given 0-based line.
    ///
    /// For all lines except the last, this points to the newline character.
    /// For the last line, this equals `total_len`.
    pub fn line_end(&self, line: usize, total_len: usize) -> Option<usize> {
        if line >= self.line_count() {
            return None;
        }

        if line + 1 < self.line_count() {
            Some(self.line_starts[line + 1] - 1)
        } else {
            Some(total_len)
        }
    }

    /// Returns the length of the given line (excluding the newline character).
    pub fn line_len(&self, line: usize, total_len: usize) -> Option<usize> {
        let start = self.line_start(line)?;
        let end = self.line_end(line, total_len)?;
        Some(end - start)
    }

    /// Returns the 0-based line containing the given char offset.
    pub fn line_at_offset(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        }
    }

    /// Updates the index for a replacement of `removed` chars at `offset`
    /// by `inserted`.
    ///
    /// `removed_newlines` is the number of line breaks inside the removed span.
    pub fn replace(&mut self, offset: usize, removed: usize, removed_newlines: usize, inserted: &str) {
        let line = self.line_at_offset(offset);
        let first_after = line + 1;

        // Line starts inside the removed span disappear.
        let drop_end = (first_after + removed_newlines).min(self.line_starts.len());
        self.line_starts.drain(first_after..drop_end);

        let inserted_len = inserted.chars().count();
        for start in self.line_starts.iter_mut().skip(first_after) {
            *start = *start - removed + inserted_len;
        }

        let new_starts: Vec<usize> = inserted
            .chars()
            .enumerate()
            .filter(|(_, ch)| *ch == '\n')
            .map(|(i, _)| offset + i + 1)
            .collect();
        if !new_starts.is_empty() {
            self.line_starts
                .splice(first_after..first_after, new_starts);
        }
    }

    /// Returns the raw line_starts array (for debug validation).
    #[cfg(any(debug_assertions, test))]
    pub fn line_starts(&self) -> &[usize] {
        &self.line_starts
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}
