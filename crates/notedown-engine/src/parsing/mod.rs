//! # Parsing
//!
//! Notedown text to [`Document`].
//!
//! A parse runs in three stages: the leading `\meta key=value` section is
//! pulled off the top ([`meta`]), the remaining lines are segmented into
//! blocks ([`blocks`]), and every run of text is inline-parsed ([`inline`]).
//! Parsing never fails: syntax that does not complete is read as text.
//!
//! ## Modules
//!
//! - **`meta`**: leading meta section extraction
//! - **`lines`**: indentation and dedent helpers over borrowed line slices
//! - **`blocks`**: block segmenter and the multi-line classifiers
//! - **`inline`**: inline parser
//! - **`snapshot`**: stable snapshot form of a parse and structural checks

pub mod blocks;
pub mod inline;
pub mod lines;
pub mod meta;
pub mod snapshot;

use serde::{Deserialize, Serialize};

pub use blocks::{Block, parse_blocks};
pub use inline::{InlineNode, parse_inline};
pub use meta::Meta;

/// A parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Values from the leading `\meta` section.
    #[serde(default, skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
    pub content: Vec<Block>,
}

/// Parses a complete document, including its meta section.
pub fn parse(text: &str) -> Document {
    let lines = lines::split_lines(text);
    let (meta, body) = meta::extract_meta(&lines);
    Document {
        meta,
        content: parse_blocks(&body),
    }
}

/// Parses text as a sub-document: `\meta` lines are ordinary text here.
pub fn parse_fragment(text: &str) -> Vec<Block> {
    parse_blocks(&lines::split_lines(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn meta_is_extracted_only_at_document_level() {
        let src = "\\meta title=Notes\n\nbody";
        let doc = parse(src);
        assert_eq!(doc.meta.get("title").map(String::as_str), Some("Notes"));
        assert_eq!(doc.content.len(), 1);

        let blocks = parse_fragment(src);
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse(""), Document::default());
    }

    #[test]
    fn document_serializes_with_type_tags() {
        let doc = parse("# Hi\n\n---");
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["content"][0]["type"], "title");
        assert_eq!(json["content"][0]["size"], 1);
        assert_eq!(json["content"][1]["type"], "hr");
        assert!(json.get("meta").is_none());
    }

    #[test]
    fn document_round_trips_through_json() {
        let doc = parse("\\meta a=1\n- x\n  - y\n\n| h |\n|---|\n| c |");
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
