use std::sync::OnceLock;

use regex::{Captures, Regex};

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(//[^\n]*)|("(?:[^"\\\n]|\\.)*")"#).expect("Invalid basic highlight regex")
    })
}

/// Language-agnostic fallback: escapes the code and marks `//` line comments
/// and double-quoted strings.
pub fn basic_highlight(code: &str) -> String {
    let escaped = html_escape::encode_text(code);
    token_regex()
        .replace_all(&escaped, |caps: &Captures<'_>| {
            if let Some(comment) = caps.get(1) {
                format!(r#"<span class="hljs-comment">{}</span>"#, comment.as_str())
            } else {
                format!(r#"<span class="hljs-string">{}</span>"#, &caps[2])
            }
        })
        .into_owned()
}
