use std::sync::OnceLock;

use regex::Regex;

/// The body of a `|...|` span, after the pipes are stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipeBody<'a> {
    /// `|\text|`: literal `|text|`.
    Escaped(&'a str),
    /// A color span. Both colors are raw tokens (hex digits or a name).
    Color {
        foreground: Option<&'a str>,
        background: Option<&'a str>,
        content: &'a str,
    },
}

/// Colored text span: `|f#C,b#C,text|`, `|b#C,text|`, `|f#C,text|`, `|text|`.
pub struct ColorSpan;

impl ColorSpan {
    pub const PIPE: u8 = b'|';
    pub const BACKGROUND: &'static str = "b#";

    fn both_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"(?s)^f#([A-Za-z0-9_]+),b#([A-Za-z0-9_]+),(.+)$")
                .expect("Invalid color span regex")
        })
    }

    fn single_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"(?s)^([fb])#([A-Za-z0-9_]+),(.+)$").expect("Invalid color span regex")
        })
    }

    /// Classifies a non-empty pipe body, most specific form first.
    pub fn classify(body: &str) -> PipeBody<'_> {
        if let Some(rest) = body.strip_prefix('\\')
            && !rest.is_empty()
        {
            return PipeBody::Escaped(rest);
        }

        if let Some(caps) = Self::both_regex().captures(body)
            && let (Some(fg), Some(bg), Some(content)) = (caps.get(1), caps.get(2), caps.get(3))
        {
            return PipeBody::Color {
                foreground: Some(fg.as_str()),
                background: Some(bg.as_str()),
                content: content.as_str(),
            };
        }

        if let Some(caps) = Self::single_regex().captures(body)
            && let (Some(color), Some(content)) = (caps.get(2), caps.get(3))
        {
            let color = Some(color.as_str());
            let (foreground, background) = if body.starts_with(Self::BACKGROUND) {
                (None, color)
            } else {
                (color, None)
            };
            return PipeBody::Color {
                foreground,
                background,
                content: content.as_str(),
            };
        }

        PipeBody::Color {
            foreground: None,
            background: None,
            content: body,
        }
    }
}
