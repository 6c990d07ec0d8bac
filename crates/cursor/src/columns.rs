// Chunk: docs/chunks/tab_aware_columns - Buffer column to visual column mapping

//! Tab-aware column mapping.
//!
//! Buffer columns count chars; visual columns account for tab expansion.
//! Both are 1-based in the public API. The tab stop helpers work on 0-based
//! visual widths.

/// Visual width of `chars` when laid out from the start of a line.
fn visual_width(chars: impl Iterator<Item = char>, tab_size: usize) -> usize {
    chars.fold(0, |width, ch| advance(width, ch, tab_size))
}

fn advance(width: usize, ch: char, tab_size: usize) -> usize {
    if ch == '\t' {
        width + tab_size - width % tab_size
    } else {
        width + 1
    }
}

/// Maps a buffer column to the visual column it is drawn at.
///
/// Columns past the end of the line are clamped to the line's max column.
pub fn visible_column_from_column(line: &str, column: usize, tab_size: usize) -> usize {
    let tab_size = tab_size.max(1);
    let take = column.saturating_sub(1);
    visual_width(line.chars().take(take), tab_size) + 1
}

/// Maps a visual column back to the nearest buffer column on `line`.
///
/// When the target falls inside a tab, the closer edge of the tab wins; a tab
/// landing exactly on the target resolves to the column after it.
pub fn column_from_visible_column(line: &str, visible_column: usize, tab_size: usize) -> usize {
    let tab_size = tab_size.max(1);
    let target = visible_column.saturating_sub(1);
    if target == 0 {
        return 1;
    }

    let mut width = 0;
    let mut len = 0;
    for (idx, ch) in line.chars().enumerate() {
        let before = width;
        let after = advance(width, ch, tab_size);
        if after >= target {
            let before_delta = target - before;
            let after_delta = after - target;
            return if after_delta < before_delta { idx + 2 } else { idx + 1 };
        }
        width = after;
        len = idx + 1;
    }
    len + 1
}

/// Visual width (0-based) of the leading whitespace of `line`.
pub fn indentation_width(line: &str, tab_size: usize) -> usize {
    visual_width(
        line.chars().take_while(|ch| *ch == ' ' || *ch == '\t'),
        tab_size.max(1),
    )
}

/// The next tab stop strictly after the 0-based visual width `width`.
pub fn next_indent_tab_stop(width: usize, tab_size: usize) -> usize {
    let tab_size = tab_size.max(1);
    width + tab_size - width % tab_size
}

/// The previous tab stop strictly before `width`, or 0.
pub fn prev_indent_tab_stop(width: usize, tab_size: usize) -> usize {
    let tab_size = tab_size.max(1);
    if width == 0 {
        return 0;
    }
    (width - 1) - (width - 1) % tab_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_column_plain_text() {
        assert_eq!(visible_column_from_column("hello", 1, 4), 1);
        assert_eq!(visible_column_from_column("hello", 4, 4), 4);
        assert_eq!(visible_column_from_column("hello", 6, 4), 6);
    }

    #[test]
    fn test_visible_column_with_tabs() {
        // "\tx": the tab spans visual columns 1..=4
        assert_eq!(visible_column_from_column("\tx", 2, 4), 5);
        assert_eq!(visible_column_from_column("ab\tx", 4, 4), 5);
        assert_eq!(visible_column_from_column("    \tx", 6, 4), 9);
    }

    #[test]
    fn test_visible_column_empty_line() {
        assert_eq!(visible_column_from_column("", 1, 4), 1);
        assert_eq!(visible_column_from_column("", 9, 4), 1);
    }

    #[test]
    fn test_visible_column_clamps_past_end() {
        assert_eq!(visible_column_from_column("ab", 40, 4), 3);
    }

    #[test]
    fn test_column_from_visible_plain_text() {
        assert_eq!(column_from_visible_column("hello", 1, 4), 1);
        assert_eq!(column_from_visible_column("hello", 3, 4), 3);
        assert_eq!(column_from_visible_column("hello", 40, 4), 6);
        assert_eq!(column_from_visible_column("", 7, 4), 1);
    }

    #[test]
    fn test_column_from_visible_tab_landing_on_target() {
        assert_eq!(column_from_visible_column("\tMy Second Line", 5, 4), 2);
    }

    #[test]
    fn test_column_from_visible_inside_tab_picks_nearest_edge() {
        // Target visual 2 (0-based 1) is closer to the tab's start
        assert_eq!(column_from_visible_column("\tx", 2, 4), 1);
        // Target visual 4 (0-based 3) is closer to the tab's end
        assert_eq!(column_from_visible_column("\tx", 4, 4), 2);
        // Dead centre resolves before the tab
        assert_eq!(column_from_visible_column("\tx", 3, 4), 1);
    }

    #[test]
    fn test_roundtrip_on_char_boundaries() {
        let line = "  \tfoo\tbar";
        for column in 1..=line.chars().count() + 1 {
            let visible = visible_column_from_column(line, column, 4);
            assert_eq!(column_from_visible_column(line, visible, 4), column);
        }
    }

    #[test]
    fn test_indentation_width() {
        assert_eq!(indentation_width("    \t\t\t\tYY", 4), 20);
        assert_eq!(indentation_width("\t\t\t   XX", 4), 15);
        assert_eq!(indentation_width("no indent", 4), 0);
        assert_eq!(indentation_width("   ", 4), 3);
    }

    #[test]
    fn test_tab_stops() {
        assert_eq!(next_indent_tab_stop(0, 4), 4);
        assert_eq!(next_indent_tab_stop(3, 4), 4);
        assert_eq!(next_indent_tab_stop(4, 4), 8);
        assert_eq!(prev_indent_tab_stop(0, 4), 0);
        assert_eq!(prev_indent_tab_stop(3, 4), 0);
        assert_eq!(prev_indent_tab_stop(4, 4), 0);
        assert_eq!(prev_indent_tab_stop(5, 4), 4);
        assert_eq!(prev_indent_tab_stop(8, 4), 4);
    }
}
