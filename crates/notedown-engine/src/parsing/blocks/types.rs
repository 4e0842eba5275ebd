use serde::{Deserialize, Serialize};

use crate::parsing::inline::InlineNode;

/// A structural node of a document or sub-document.
///
/// Collapse bodies and list item content blocks are themselves sequences of
/// `Block`, produced by parsing the dedented region as an independent
/// sub-document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Consecutive text lines. Lines are joined with `\n` into one run;
    /// pipe rows that are not part of a table each get a literal run.
    Paragraph { content: Vec<TextRun> },
    /// `#`..`######` heading. `size` is the number of `#`.
    Title { size: u8, text: Vec<InlineNode> },
    /// `:Title:` or `~# text` description line.
    Desc { text: Vec<InlineNode> },
    /// Fenced code. Content is never inline-parsed.
    Code {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
        content: String,
        /// Indentation of the opening fence, when it had any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        indent_level: Option<usize>,
    },
    /// Collapsible section. `size` is set for `#>`-style collapses only.
    Collapse {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<u8>,
        text: Vec<InlineNode>,
        content: Vec<Block>,
    },
    /// An image alone on its line.
    Image { link: String, alt: String },
    Table { rows: Vec<TableRow> },
    List(List),
    Hr,
    Newline,
    /// Node type written by something newer than this crate.
    #[serde(other)]
    Unknown,
}

/// One inline-parsed run of paragraph text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    pub content: Vec<InlineNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub is_header: bool,
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    pub content: Vec<InlineNode>,
    pub align: Alignment,
}

/// Column alignment taken from the separator row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// A run of same-class list items. `ordered` is fixed by the first item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub marker: ListMarker,
    /// Inline content of the marker line.
    pub content: Vec<InlineNode>,
    /// Indented non-list content under the item, parsed as a sub-document.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content_blocks: Vec<Block>,
    /// Indented lists under the item.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<List>,
}

/// The marker an item was written with, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMarker {
    /// The number before the `.`, not renumbered.
    Ordered(String),
    /// `-`, `*` or `+`.
    Bullet(char),
}

impl ListMarker {
    pub fn is_ordered(&self) -> bool {
        matches!(self, ListMarker::Ordered(_))
    }
}
