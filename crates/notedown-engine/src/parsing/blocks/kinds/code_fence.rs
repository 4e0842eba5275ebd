use crate::parsing::lines::{indent_of, strip_indent};

/// An opening fence line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceOpen<'a> {
    /// Leading whitespace before the backticks.
    pub indent: usize,
    /// Info string after the backticks, if any.
    pub lang: Option<&'a str>,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const ESCAPED: &'static str = "\\```";

    /// Recognises an opening fence: backticks followed by an optional
    /// single-word language.
    pub fn open(line: &str) -> Option<FenceOpen<'_>> {
        let indent = indent_of(line);
        let info = line[indent..].trim_end().strip_prefix(Self::BACKTICKS)?.trim();
        if info.contains(|c: char| c.is_whitespace() || c == '`') {
            return None;
        }
        Some(FenceOpen {
            indent,
            lang: (!info.is_empty()).then_some(info),
        })
    }

    /// A closing fence is bare backticks, at any indentation.
    pub fn is_close(line: &str) -> bool {
        line.trim() == Self::BACKTICKS
    }

    /// Index of the line closing a fence opened at `open`.
    pub fn find_close(lines: &[&str], open: usize) -> Option<usize> {
        (open + 1..lines.len()).find(|&j| Self::is_close(lines[j]))
    }

    /// If `lines[at]` opens a fence that is closed later, returns the index
    /// just past the closing line.
    pub fn skip(lines: &[&str], at: usize) -> Option<usize> {
        Self::open(lines[at])?;
        Self::find_close(lines, at).map(|close| close + 1)
    }

    /// Body text between an opener and its closer.
    ///
    /// Each line loses up to the opener's indentation; `\```` is unescaped.
    pub fn body(lines: &[&str], open: &FenceOpen<'_>) -> String {
        let joined = lines
            .iter()
            .map(|l| strip_indent(l, open.indent))
            .collect::<Vec<_>>()
            .join("\n");
        joined.replace(Self::ESCAPED, Self::BACKTICKS)
    }
}
