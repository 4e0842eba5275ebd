use serde::{Deserialize, Serialize};

/// Formatting applied by a [`InlineNode::Styled`] span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Bold,
    Italic,
    Underline,
    Crossline,
}

/// A parsed inline node.
///
/// Nodes own their text; unlike block structure there is nothing to point
/// back into once escapes and meta references have been resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineNode {
    /// Literal text.
    Text { text: String },
    /// `[text](link)`.
    Link { link: String, text: String },
    /// `![alt](link)` inside a text run.
    Image { link: String, alt: String },
    /// `@{key}`, resolved against document meta at render time.
    Meta { key: String },
    /// Bold, italic, underline or crossline span with parsed inner content.
    Styled {
        style: Style,
        content: Vec<InlineNode>,
    },
    /// Inline code. Raw zone.
    Code { text: String },
    /// LaTeX passthrough. Raw zone.
    Latex { formula: String },
    /// `|f#C,b#C,text|` and its shorter forms.
    Color {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        foreground: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        background: Option<String>,
        content: Vec<InlineNode>,
    },
    /// Node type written by something newer than this crate.
    #[serde(other)]
    Unknown,
}

impl InlineNode {
    pub fn text(text: impl Into<String>) -> Self {
        InlineNode::Text { text: text.into() }
    }

    pub fn styled(style: Style, content: Vec<InlineNode>) -> Self {
        InlineNode::Styled { style, content }
    }

    /// Concatenated literal text of this node and its children.
    ///
    /// Meta references contribute their `@{key}` form.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            InlineNode::Text { text } | InlineNode::Link { text, .. } => out.push_str(text),
            InlineNode::Code { text } => out.push_str(text),
            InlineNode::Image { alt, .. } => out.push_str(alt),
            InlineNode::Meta { key } => {
                out.push_str("@{");
                out.push_str(key);
                out.push('}');
            }
            InlineNode::Latex { formula } => out.push_str(formula),
            InlineNode::Styled { content, .. } | InlineNode::Color { content, .. } => {
                for node in content {
                    node.push_plain_text(out);
                }
            }
            InlineNode::Unknown => {}
        }
    }
}

/// Concatenated literal text of a node sequence.
pub fn plain_text(nodes: &[InlineNode]) -> String {
    nodes.iter().map(InlineNode::plain_text).collect()
}
