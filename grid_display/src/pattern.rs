// pattern.rs - Plaintext seed patterns for binary automata

/// A named seed layout in plaintext form.
///
/// Layout lines use `.` for a dead cell and `O` for a live one, top row first.
/// Lines starting with `!` are comments and blank lines are skipped. Leading
/// and trailing whitespace on each line is ignored so layouts can be written
/// as indented text blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub layout: &'a str,
}

pub const DEAD_SYMBOL: char = '.';
pub const ALIVE_SYMBOL: char = 'O';
pub const COMMENT_PREFIX: char = '!';

impl<'a> Pattern<'a> {
    pub const fn new(name: &'a str, description: &'a str, layout: &'a str) -> Self {
        Self {
            name,
            description,
            layout,
        }
    }

    /// The layout's cell rows, comments and blank lines removed.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &'a str)> + 'a {
        layout_rows(self.layout)
    }
}

/// Yields `(source_line_number, trimmed_row)` for every cell row of `text`.
/// Line numbers are 1-based.
pub fn layout_rows(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blanks_are_skipped() {
        let pattern = Pattern::new(
            "Beehive",
            "Still life",
            "
            !Name: Beehive
            !Author: John Conway
            .OO

            O..O
            .OO
            ",
        );
        let rows: Vec<_> = pattern.rows().collect();
        assert_eq!(rows, vec![(4, ".OO"), (6, "O..O"), (7, ".OO")]);
    }

    #[test]
    fn empty_layout_has_no_rows() {
        assert_eq!(layout_rows("").count(), 0);
        assert_eq!(layout_rows("!only a comment\n   \n").count(), 0);
    }
}
