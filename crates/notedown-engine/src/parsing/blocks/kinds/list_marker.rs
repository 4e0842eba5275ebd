use crate::parsing::{blocks::types::ListMarker, lines::indent_of};

/// A line that starts a list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerLine<'a> {
    pub indent: usize,
    pub marker: ListMarker,
    /// Item text after the marker; may be empty.
    pub text: &'a str,
}

/// List marker syntax: `N. text` and `- text` / `* text` / `+ text`.
pub struct ListMarkers;

impl ListMarkers {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    pub const ORDERED_SUFFIX: char = '.';

    /// Recognises an item line. The marker must be followed by whitespace, so
    /// `**bold**`, `---`, `1.5` and a bare `-` are not items.
    pub fn parse(line: &str) -> Option<MarkerLine<'_>> {
        let indent = indent_of(line);
        let rest = &line[indent..];

        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        let (marker, after) = if digits > 0 {
            let after = rest[digits..].strip_prefix(Self::ORDERED_SUFFIX)?;
            (ListMarker::Ordered(rest[..digits].to_string()), after)
        } else {
            let glyph = rest.chars().next().filter(|c| Self::BULLETS.contains(c))?;
            (ListMarker::Bullet(glyph), &rest[glyph.len_utf8()..])
        };

        if !after.starts_with([' ', '\t']) {
            return None;
        }

        Some(MarkerLine {
            indent,
            marker,
            text: after.trim(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("1. first", 0, ListMarker::Ordered("1".into()), "first")]
    #[case("  42.  answer ", 2, ListMarker::Ordered("42".into()), "answer")]
    #[case("- dash", 0, ListMarker::Bullet('-'), "dash")]
    #[case("    * star", 4, ListMarker::Bullet('*'), "star")]
    #[case("+ plus", 0, ListMarker::Bullet('+'), "plus")]
    #[case("1. ", 0, ListMarker::Ordered("1".into()), "")]
    #[case("- ", 0, ListMarker::Bullet('-'), "")]
    fn detect_items(
        #[case] line: &str,
        #[case] indent: usize,
        #[case] marker: ListMarker,
        #[case] text: &str,
    ) {
        assert_eq!(
            ListMarkers::parse(line),
            Some(MarkerLine {
                indent,
                marker,
                text
            })
        );
    }

    #[rstest]
    #[case("**bold** text")]
    #[case("---")]
    #[case("1.5 percent")]
    #[case("1) paren")]
    #[case("-")]
    #[case("1.")]
    #[case("plain")]
    #[case("")]
    fn reject_non_items(#[case] line: &str) {
        assert_eq!(ListMarkers::parse(line), None);
    }
}
