//! Offset arithmetic shared by the table editor and the shell features.
//!
//! The document is addressed two ways: as a flat char offset (the host
//! text control's cursor) and as (line, column). Conversions go through a
//! line-start index computed in one pass so lookups are a binary search
//! rather than a linear walk.

/// Char offset of each line start, in ascending order.
///
/// One entry per line produced by splitting on `\n`; index 0 is always 0.
pub fn line_starts(text: &str) -> Vec<usize> {
    let mut starts = vec![0];
    let mut offset = 0;
    for ch in text.chars() {
        offset += 1;
        if ch == '\n' {
            starts.push(offset);
        }
    }
    starts
}

/// Index of the line containing `offset`.
///
/// An offset sitting exactly on a line start belongs to that line; the
/// caller is responsible for rejecting offsets past the end of the text.
pub fn line_at_offset(starts: &[usize], offset: usize) -> usize {
    starts.partition_point(|&start| start <= offset).saturating_sub(1)
}

/// Number of non-empty whitespace-separated tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_starts_single_line() {
        assert_eq!(line_starts("hello"), vec![0]);
    }

    #[test]
    fn test_line_starts_multiline() {
        assert_eq!(line_starts("ab\ncd\ne"), vec![0, 3, 6]);
    }

    #[test]
    fn test_line_starts_trailing_newline() {
        // A trailing newline opens a final empty line
        assert_eq!(line_starts("ab\n"), vec![0, 3]);
    }

    #[test]
    fn test_line_starts_empty() {
        assert_eq!(line_starts(""), vec![0]);
    }

    #[test]
    fn test_line_at_offset_boundaries() {
        let starts = line_starts("ab\ncd\ne");
        assert_eq!(line_at_offset(&starts, 0), 0);
        assert_eq!(line_at_offset(&starts, 2), 0); // on the newline itself
        assert_eq!(line_at_offset(&starts, 3), 1);
        assert_eq!(line_at_offset(&starts, 6), 2);
    }

    #[test]
    fn test_line_at_offset_multibyte() {
        let starts = line_starts("héllo\nwörld");
        assert_eq!(line_at_offset(&starts, 5), 0);
        assert_eq!(line_at_offset(&starts, 6), 1);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count("  one\ttwo\nthree  "), 3);
    }
}
