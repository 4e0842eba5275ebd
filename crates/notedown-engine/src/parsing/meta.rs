//! Leading `\meta key=value` section.
//!
//! Only the top of a top-level document may declare meta values. The first
//! non-blank line that is not a well-formed declaration closes the section for
//! good; later `\meta` lines are ordinary body text.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use super::lines::is_blank;

/// Document-level key/value declarations.
pub type Meta = BTreeMap<String, String>;

/// Meta declaration syntax with owned prefix.
pub struct MetaDecl;

impl MetaDecl {
    /// Line prefix that introduces a declaration.
    pub const PREFIX: &'static str = "\\meta";

    fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"^\s+([A-Za-z0-9_]+)=(.+)$").expect("Invalid meta declaration regex")
        })
    }

    /// Parses a declaration line into `(key, value)`.
    pub fn parse(line: &str) -> Option<(&str, &str)> {
        let rest = line.strip_prefix(Self::PREFIX)?;
        let caps = Self::regex().captures(rest)?;
        let key = caps.get(1)?.as_str();
        let value = caps.get(2)?.as_str();
        Some((key, value))
    }
}

/// Splits the leading meta section off `lines`.
///
/// Returns the collected meta (later duplicates win) and the body lines with
/// every consumed declaration removed. Blank lines are kept in the body.
pub fn extract_meta<'a>(lines: &[&'a str]) -> (Meta, Vec<&'a str>) {
    let mut meta = Meta::new();
    let mut body = Vec::with_capacity(lines.len());
    let mut open = true;

    for &line in lines {
        if open {
            if let Some((key, value)) = MetaDecl::parse(line) {
                meta.insert(key.to_string(), value.to_string());
                continue;
            }
            if !is_blank(line) {
                open = false;
            }
        }
        body.push(line);
    }

    (meta, body)
}
