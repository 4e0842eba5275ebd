use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::types::Alignment;

/// Pipe table syntax.
pub struct TableSyntax;

impl TableSyntax {
    pub const PIPE: char = '|';
    pub const ALIGN: char = ':';

    fn separator_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"^\|?\s*:?-{3,}:?\s*(\|\s*:?-{3,}:?\s*)*\|?$")
                .expect("Invalid table separator regex")
        })
    }

    /// A pipe-delimited row: starts and ends with `|`.
    pub fn is_row(line: &str) -> bool {
        let t = line.trim();
        t.len() >= 2 && t.starts_with(Self::PIPE) && t.ends_with(Self::PIPE)
    }

    /// The `|---|:---:|---:|` row under the header.
    pub fn is_separator(line: &str) -> bool {
        Self::separator_regex().is_match(line.trim())
    }

    /// A table starts at `at` if that line is a row and the next line is a
    /// separator.
    pub fn starts_at(lines: &[&str], at: usize) -> bool {
        Self::is_row(lines[at]) && lines.get(at + 1).is_some_and(|l| Self::is_separator(l))
    }

    /// Splits a row into trimmed cells on unescaped pipes.
    ///
    /// One outer pipe is dropped on each side. `\|` stays inside the cell so
    /// the inline parser can see it.
    pub fn split_cells(line: &str) -> Vec<&str> {
        let t = line.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let t = match t.strip_suffix(Self::PIPE) {
            Some(inner) if !inner.ends_with('\\') => inner,
            _ => t,
        };

        let mut cells = vec![];
        let mut start = 0;
        let bytes = t.as_bytes();
        for (i, &b) in bytes.iter().enumerate() {
            if b == b'|' && (i == 0 || bytes[i - 1] != b'\\') {
                cells.push(t[start..i].trim());
                start = i + 1;
            }
        }
        cells.push(t[start..].trim());
        cells
    }

    /// Alignment of one separator cell.
    pub fn alignment(cell: &str) -> Alignment {
        let cell = cell.trim();
        match (cell.starts_with(Self::ALIGN), cell.ends_with(Self::ALIGN)) {
            (true, true) => Alignment::Center,
            (false, true) => Alignment::Right,
            _ => Alignment::Left,
        }
    }
}
