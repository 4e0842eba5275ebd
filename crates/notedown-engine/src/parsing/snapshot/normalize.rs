use std::collections::BTreeMap;

use serde::Serialize;

use crate::parsing::{
    Document,
    blocks::{Alignment, Block, List, ListItem, ListMarker, TableRow},
    inline::{InlineNode, Style},
};

/// Snapshot of a parsed document for testing with `insta`.
///
/// Inline content is flattened to one token string per node
/// (`bold(text(a) italic(text(b)))`), newlines shown as `↵`, which keeps
/// fixtures readable as YAML.
#[derive(Debug, Serialize)]
pub struct Snap {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, String>,
    pub blocks: Vec<BlockSnap>,
}

/// Snapshot of a single block.
#[derive(Debug, Serialize)]
pub struct BlockSnap {
    /// Block kind with its key attribute, e.g. `Title(2)`, `Code(rust)`, `Item(1.)`.
    pub kind: String,
    /// Inline tokens. Paragraphs get one entry per text run.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inline: Vec<String>,
    /// Raw code content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    /// Collapse content, list items, table rows, or list item content blocks.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BlockSnap>,
    /// Nested lists of a list item.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<BlockSnap>,
}

impl BlockSnap {
    fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            inline: vec![],
            raw: None,
            children: vec![],
            nested: vec![],
        }
    }
}

pub fn normalize(doc: &Document) -> Snap {
    Snap {
        meta: doc.meta.clone(),
        blocks: doc.content.iter().map(block).collect(),
    }
}

fn block(b: &Block) -> BlockSnap {
    match b {
        Block::Paragraph { content } => BlockSnap {
            inline: content.iter().map(|run| tokens(&run.content)).collect(),
            ..BlockSnap::new("Paragraph")
        },
        Block::Title { size, text } => BlockSnap {
            inline: text.iter().map(token).collect(),
            ..BlockSnap::new(format!("Title({size})"))
        },
        Block::Desc { text } => BlockSnap {
            inline: text.iter().map(token).collect(),
            ..BlockSnap::new("Desc")
        },
        Block::Code {
            lang,
            content,
            indent_level,
        } => {
            let mut kind = format!("Code({})", lang.as_deref().unwrap_or("plain"));
            if let Some(n) = indent_level {
                kind.push_str(&format!(" indent={n}"));
            }
            BlockSnap {
                raw: Some(visible_newlines(content)),
                ..BlockSnap::new(kind)
            }
        }
        Block::Collapse {
            size,
            text,
            content,
        } => {
            let kind = match size {
                Some(n) => format!("Collapse({n})"),
                None => "Collapse(simple)".to_string(),
            };
            BlockSnap {
                inline: text.iter().map(token).collect(),
                children: content.iter().map(block).collect(),
                ..BlockSnap::new(kind)
            }
        }
        Block::Image { link, alt } => BlockSnap {
            inline: vec![format!("image({link} {alt})")],
            ..BlockSnap::new("Image")
        },
        Block::Table { rows } => BlockSnap {
            children: rows.iter().map(row).collect(),
            ..BlockSnap::new("Table")
        },
        Block::List(l) => list(l),
        Block::Hr => BlockSnap::new("Hr"),
        Block::Newline => BlockSnap::new("Newline"),
        Block::Unknown => BlockSnap::new("Unknown"),
    }
}

fn list(l: &List) -> BlockSnap {
    let kind = if l.ordered {
        "List(ordered)"
    } else {
        "List(bullet)"
    };
    BlockSnap {
        children: l.items.iter().map(item).collect(),
        ..BlockSnap::new(kind)
    }
}

fn item(i: &ListItem) -> BlockSnap {
    let marker = match &i.marker {
        ListMarker::Ordered(n) => format!("{n}."),
        ListMarker::Bullet(c) => c.to_string(),
    };
    BlockSnap {
        inline: i.content.iter().map(token).collect(),
        children: i.content_blocks.iter().map(block).collect(),
        nested: i.nested.iter().map(list).collect(),
        ..BlockSnap::new(format!("Item({marker})"))
    }
}

fn row(r: &TableRow) -> BlockSnap {
    let kind = if r.is_header { "Header" } else { "Row" };
    BlockSnap {
        inline: r
            .cells
            .iter()
            .map(|c| {
                let align = match c.align {
                    Alignment::Left => "left",
                    Alignment::Center => "center",
                    Alignment::Right => "right",
                };
                format!("cell({align} {})", tokens(&c.content))
            })
            .collect(),
        ..BlockSnap::new(kind)
    }
}

fn tokens(nodes: &[InlineNode]) -> String {
    nodes.iter().map(token).collect::<Vec<_>>().join(" ")
}

fn token(n: &InlineNode) -> String {
    match n {
        InlineNode::Text { text } => format!("text({})", visible_newlines(text)),
        InlineNode::Link { link, text } => format!("link({link} {text})"),
        InlineNode::Image { link, alt } => format!("image({link} {alt})"),
        InlineNode::Meta { key } => format!("meta({key})"),
        InlineNode::Styled { style, content } => {
            let name = match style {
                Style::Bold => "bold",
                Style::Italic => "italic",
                Style::Underline => "underline",
                Style::Crossline => "crossline",
            };
            format!("{name}({})", tokens(content))
        }
        InlineNode::Code { text } => format!("code({text})"),
        InlineNode::Latex { formula } => format!("latex({formula})"),
        InlineNode::Color {
            foreground,
            background,
            content,
        } => {
            let mut parts = vec![];
            if let Some(fg) = foreground {
                parts.push(format!("fg={fg}"));
            }
            if let Some(bg) = background {
                parts.push(format!("bg={bg}"));
            }
            parts.push(tokens(content));
            format!("color({})", parts.join(" "))
        }
        InlineNode::Unknown => "unknown".to_string(),
    }
}

fn visible_newlines(s: &str) -> String {
    s.replace('\n', "↵")
}
