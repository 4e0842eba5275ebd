//! Line helpers shared by the block classifiers.
//!
//! Sub-documents (collapse bodies, list item content) are parsed from borrowed
//! line slices. Dedenting only strips leading ASCII whitespace, so a dedented
//! line is still a `&str` into the original input and nothing is re-joined or
//! re-split on the way down.

/// Splits input into lines, accepting both `\n` and `\r\n` endings.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

/// Number of leading space/tab bytes.
pub fn indent_of(line: &str) -> usize {
    line.bytes().take_while(|b| matches!(b, b' ' | b'\t')).count()
}

/// Returns true if the line is empty or whitespace only.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Minimum indentation over the non-blank lines (0 when all lines are blank).
pub fn min_indent(lines: &[&str]) -> usize {
    lines
        .iter()
        .filter(|l| !is_blank(l))
        .map(|l| indent_of(l))
        .min()
        .unwrap_or(0)
}

/// Removes up to `n` leading whitespace bytes from `line`.
pub fn strip_indent(line: &str, n: usize) -> &str {
    let k = indent_of(line).min(n);
    &line[k..]
}

/// Strips the minimum common indentation from every line.
///
/// Blank lines are kept (as their dedented remainder) so paragraph breaks
/// inside the region survive the recursion.
pub fn dedent<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let n = min_indent(lines);
    lines.iter().map(|l| strip_indent(l, n)).collect()
}

/// Drops leading and trailing blank lines.
pub fn trim_blank_edges<'s, 'a>(lines: &'s [&'a str]) -> &'s [&'a str] {
    let start = lines.iter().position(|l| !is_blank(l)).unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !is_blank(l))
        .map_or(start, |i| i + 1);
    &lines[start..end]
}

/// Index of the next non-blank line at or after `from`.
pub fn next_non_blank(lines: &[&str], from: usize) -> Option<usize> {
    (from..lines.len()).find(|&i| !is_blank(lines[i]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("abc", 0)]
    #[case("  abc", 2)]
    #[case("\t\tabc", 2)]
    #[case("    ", 4)]
    #[case("\u{3000}abc", 0)]
    fn indent_counts_ascii_whitespace(#[case] line: &str, #[case] expected: usize) {
        assert_eq!(indent_of(line), expected);
    }

    #[test]
    fn split_lines_handles_crlf() {
        assert_eq!(split_lines("a\r\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn dedent_uses_minimum_non_blank_indent() {
        let lines = ["    a", "", "      b", "  ", "    c"];
        assert_eq!(dedent(&lines), vec!["a", "", "  b", "", "c"]);
    }

    #[test]
    fn dedent_of_blank_only_region_is_noop() {
        let lines = ["", "   "];
        assert_eq!(min_indent(&lines), 0);
        assert_eq!(dedent(&lines), vec!["", "   "]);
    }

    #[test]
    fn strip_indent_never_cuts_text() {
        assert_eq!(strip_indent("  x", 4), "x");
        assert_eq!(strip_indent("      x", 4), "  x");
    }

    #[test]
    fn trim_blank_edges_keeps_inner_blanks() {
        let lines = ["", " ", "a", "", "b", "  "];
        assert_eq!(trim_blank_edges(&lines), &["a", "", "b"]);
        assert!(trim_blank_edges(&["", ""]).is_empty());
    }

    #[test]
    fn next_non_blank_skips_whitespace_lines() {
        let lines = ["a", "", "   ", "b"];
        assert_eq!(next_non_blank(&lines, 1), Some(3));
        assert_eq!(next_non_blank(&lines, 4), None);
    }
}
