use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::lines::{indent_of, is_blank};

use super::kinds::{
    CodeFence, Collapse, CollapseOpen, FenceOpen, ListMarkers, MarkerLine, TableSyntax,
};

/// What a single line could start, judged from the line alone.
///
/// Multi-line facts (does the fence close, is the next line a table
/// separator, does the collapse have a matching close) are left to the
/// segmenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    FenceOpen(FenceOpen<'a>),
    CollapseOpen(CollapseOpen<'a>),
    Heading { size: u8, text: &'a str },
    Desc(&'a str),
    ListItem(MarkerLine<'a>),
    Image { alt: &'a str, link: &'a str },
    Rule,
    /// `\np` alone on a line: ends the current paragraph, emits nothing.
    ParagraphBreak,
    /// `\n` alone on a line: an explicit line break.
    LineBreak,
    PipeRow,
    Text,
}

/// Classification of a single line containing only local facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    pub indent: usize,
    pub kind: LineKind<'a>,
}

impl LineClass<'_> {
    pub fn is_blank(&self) -> bool {
        matches!(self.kind, LineKind::Blank)
    }
}

/// Classifies individual lines for the block segmenter.
pub struct NotedownLineClassifier;

impl NotedownLineClassifier {
    pub const HEADING: u8 = b'#';
    pub const MAX_HEADING: usize = 6;
    pub const DESC_DELIM: char = ':';
    pub const DESC_PREFIX: &'static str = "~#";
    pub const RULE: char = '-';
    pub const PARAGRAPH_BREAK: &'static str = "\\np";
    pub const LINE_BREAK: &'static str = "\\n";

    fn image_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"^!\[([^\]]*)\]\(([^)]+)\)$").expect("Invalid image line regex")
        })
    }

    /// Classifies a line. Fences win over everything, then collapse openers,
    /// headings, description lines, list items, image lines, rules and pipe
    /// rows.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let indent = indent_of(line);
        let kind = if is_blank(line) {
            LineKind::Blank
        } else if let Some(open) = CodeFence::open(line) {
            LineKind::FenceOpen(open)
        } else if let Some(open) = Collapse::open(line) {
            LineKind::CollapseOpen(open)
        } else if let Some((size, text)) = Self::heading(line) {
            LineKind::Heading { size, text }
        } else if let Some(text) = Self::desc(line) {
            LineKind::Desc(text)
        } else if let Some(item) = ListMarkers::parse(line) {
            LineKind::ListItem(item)
        } else if let Some((alt, link)) = Self::image(line) {
            LineKind::Image { alt, link }
        } else if Self::is_rule(line) {
            LineKind::Rule
        } else if line.trim() == Self::PARAGRAPH_BREAK {
            LineKind::ParagraphBreak
        } else if line.trim() == Self::LINE_BREAK {
            LineKind::LineBreak
        } else if TableSyntax::is_row(line) {
            LineKind::PipeRow
        } else {
            LineKind::Text
        };
        LineClass { indent, kind }
    }

    /// `#`..`######`, whitespace, non-empty text. Seven hashes or `#>` are
    /// never headings.
    fn heading(line: &str) -> Option<(u8, &str)> {
        let t = line.trim_start();
        let hashes = t.bytes().take_while(|&b| b == Self::HEADING).count();
        if hashes == 0 || hashes > Self::MAX_HEADING {
            return None;
        }
        let after = &t[hashes..];
        if !after.starts_with(char::is_whitespace) {
            return None;
        }
        let text = after.trim();
        (!text.is_empty()).then_some((hashes as u8, text))
    }

    /// `:Title:` alone on a line, or `~# text`.
    fn desc(line: &str) -> Option<&str> {
        let t = line.trim();
        if let Some(rest) = t.strip_prefix(Self::DESC_PREFIX) {
            let text = rest.trim();
            return (rest.starts_with(char::is_whitespace) && !text.is_empty()).then_some(text);
        }
        let inner = t
            .strip_prefix(Self::DESC_DELIM)?
            .strip_suffix(Self::DESC_DELIM)?;
        let text = inner.trim();
        (!text.is_empty() && !inner.contains(Self::DESC_DELIM)).then_some(text)
    }

    fn image(line: &str) -> Option<(&str, &str)> {
        let caps = Self::image_regex().captures(line.trim())?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }

    fn is_rule(line: &str) -> bool {
        let t = line.trim();
        t.len() >= 3 && t.chars().all(|c| c == Self::RULE)
    }
}
