use std::sync::OnceLock;

use regex::Regex;

use super::types::InlineNode;

/// Meta reference syntax: `@{key}`, escaped as `\@{key}`.
pub struct MetaRef;

impl MetaRef {
    pub const OPEN: &'static str = "@{";
    pub const CLOSE: char = '}';

    /// Matches both forms in one scan. An escaped reference always starts one
    /// byte earlier than the unescaped reference it contains, so leftmost
    /// matching never lets the inner `@{key}` win.
    fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"(\\)?@\{([A-Za-z0-9_]+)\}").expect("Invalid meta reference regex")
        })
    }
}

/// Splits literal text into text and meta reference nodes.
///
/// `@{key}` becomes [`InlineNode::Meta`]; `\@{key}` becomes the literal text
/// `@{key}`. Parts are emitted in source order and never merged.
pub fn replace_meta(text: &str) -> Vec<InlineNode> {
    let mut parts = vec![];
    let mut last = 0;

    for caps in MetaRef::regex().captures_iter(text) {
        let (Some(whole), Some(key)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        if whole.start() > last {
            parts.push(InlineNode::text(&text[last..whole.start()]));
        }
        let key = key.as_str();
        if caps.get(1).is_some() {
            parts.push(InlineNode::text(format!(
                "{}{key}{}",
                MetaRef::OPEN,
                MetaRef::CLOSE
            )));
        } else {
            parts.push(InlineNode::Meta {
                key: key.to_string(),
            });
        }
        last = whole.end();
    }

    if last < text.len() {
        parts.push(InlineNode::text(&text[last..]));
    }
    parts
}
