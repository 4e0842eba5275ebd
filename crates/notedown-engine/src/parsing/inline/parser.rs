use super::{
    cursor::Cursor,
    kinds::{CodeSpan, ColorSpan, Emphasis, Escape, LatexSpan, Link, color::PipeBody},
    meta_ref::replace_meta,
    types::{InlineNode, Style},
};

/// Parses a text run into a sequence of [`InlineNode`]s.
///
/// At each position every construct that can start there is tried in
/// priority order; the first match wins. Because the cursor only advances
/// when nothing matched, the earliest-starting construct always wins over a
/// later one, whatever their priority.
///
/// Text between constructs is emitted through [`replace_meta`]. Unclosed
/// constructs are plain text.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    fn flush_text(out: &mut Vec<InlineNode>, text: &str) {
        if !text.is_empty() {
            out.extend(replace_meta(text));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        if let Some(node) = try_parse_at(&mut cur) {
            flush_text(&mut out, &s[text_start..start]);
            out.push(node);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, &s[text_start..]);
    out
}

/// Dispatches on the byte under the cursor.
fn try_parse_at(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    match cur.peek()? {
        Escape::BACKSLASH => try_parse_escape(cur)
            .or_else(|| try_parse_escaped_image(cur))
            .or_else(|| try_parse_escaped_link(cur))
            .or_else(|| try_parse_escaped_pipe(cur)),
        Emphasis::STAR => try_parse_bold(cur).or_else(|| try_parse_italic(cur)),
        b'_' => try_parse_paired(cur, Emphasis::UNDERLINE, Style::Underline),
        b'~' => try_parse_paired(cur, Emphasis::CROSSLINE, Style::Crossline),
        CodeSpan::TICK => try_parse_verbatim(cur, CodeSpan::TICK)
            .map(|inner| InlineNode::Code {
                text: CodeSpan::unescape(inner),
            }),
        LatexSpan::DOLLAR => try_parse_verbatim(cur, LatexSpan::DOLLAR)
            .map(|inner| InlineNode::Latex {
                formula: LatexSpan::unescape(inner),
            }),
        ColorSpan::PIPE => try_parse_pipe(cur),
        Link::BANG => try_parse_image(cur),
        Link::OPEN => try_parse_link(cur),
        _ => None,
    }
}

/// Steps over `\` plus the escaped byte, the way `\\.` does in a regex:
/// a backslash at end of input or before a newline escapes nothing.
fn skip_escape(cur: &mut Cursor<'_>) -> bool {
    match cur.peek_at(1) {
        Some(b'\n') | None => false,
        Some(_) => {
            cur.bump_n(2);
            true
        }
    }
}

/// `\*`, `` \` ``, `\$`, `\_`, `\~`, `\#` and the list markers produce the
/// bare character.
fn try_parse_escape(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let escaped = cur.peek_at(1).filter(|b| Escape::is_literal(*b))?;
    cur.bump_n(2);
    Some(InlineNode::text(char::from(escaped)))
}

/// `\![alt](url)` produces the literal `![alt](url)`.
fn try_parse_escaped_image(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek_at(1) != Some(Link::BANG) {
        return None;
    }
    let saved = cur.clone();
    cur.bump_n(2);
    match Link::scan(cur, true) {
        Some((alt, url)) => Some(InlineNode::text(format!("![{alt}]({url})"))),
        None => {
            *cur = saved;
            None
        }
    }
}

/// `\[text](url)` produces the literal `[text](url)`.
fn try_parse_escaped_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let saved = cur.clone();
    cur.bump();
    match Link::scan(cur, false) {
        Some((text, url)) => Some(InlineNode::text(format!("[{text}]({url})"))),
        None => {
            *cur = saved;
            None
        }
    }
}

/// `\|text\|` produces the literal `|text|`.
fn try_parse_escaped_pipe(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek_at(1) != Some(ColorSpan::PIPE) {
        return None;
    }
    let saved = cur.clone();
    cur.bump_n(2);
    let content_start = cur.pos();

    // The body cannot contain a pipe, so the first pipe must be the escaped
    // closing one.
    if cur.seek(ColorSpan::PIPE) {
        let close = cur.pos();
        let bytes = cur.s.as_bytes();
        if close > content_start + 1 && bytes[close - 1] == Escape::BACKSLASH {
            let content = cur.slice(content_start, close - 1);
            cur.bump();
            return Some(InlineNode::text(format!("|{content}|")));
        }
    }

    *cur = saved;
    None
}

/// `**text**`. A single `*` may appear inside; `**` always closes.
fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(Emphasis::BOLD) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(Emphasis::BOLD.len());
    let inner_start = cur.pos();

    loop {
        if cur.starts_with(Emphasis::BOLD) && cur.pos() > inner_start {
            let inner = cur.slice(inner_start, cur.pos());
            cur.bump_n(Emphasis::BOLD.len());
            return Some(InlineNode::styled(Style::Bold, parse_inline(inner)));
        }
        match cur.peek() {
            None => break,
            Some(Escape::BACKSLASH) => {
                if !skip_escape(cur) {
                    break;
                }
            }
            Some(Emphasis::STAR) if cur.peek_at(1) == Some(Emphasis::STAR) => break,
            Some(_) => {
                cur.bump();
            }
        }
    }

    *cur = saved;
    None
}

/// `*text*`. The body may not contain an unescaped `*` and may not be empty.
fn try_parse_italic(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let saved = cur.clone();
    cur.bump();
    let inner_start = cur.pos();

    loop {
        match cur.peek() {
            None => break,
            Some(Emphasis::STAR) => {
                if cur.pos() == inner_start {
                    break;
                }
                let inner = cur.slice(inner_start, cur.pos());
                cur.bump();
                return Some(InlineNode::styled(Style::Italic, parse_inline(inner)));
            }
            Some(Escape::BACKSLASH) => {
                if !skip_escape(cur) {
                    break;
                }
            }
            Some(_) => {
                cur.bump();
            }
        }
    }

    *cur = saved;
    None
}

/// `__text__` and `~~text~~`: shortest non-empty body on the same line.
fn try_parse_paired(cur: &mut Cursor<'_>, delim: &[u8], style: Style) -> Option<InlineNode> {
    if !cur.starts_with(delim) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(delim.len());
    let inner_start = cur.pos();

    while let Some(b) = cur.peek() {
        if b == b'\n' {
            break;
        }
        if cur.pos() > inner_start && cur.starts_with(delim) {
            let inner = cur.slice(inner_start, cur.pos());
            cur.bump_n(delim.len());
            return Some(InlineNode::styled(style, parse_inline(inner)));
        }
        cur.bump();
    }

    *cur = saved;
    None
}

/// Code and latex spans. Returns the raw inner text; the body may be empty
/// and may contain escapes, which are left for the caller to undo.
fn try_parse_verbatim<'a>(cur: &mut Cursor<'a>, delim: u8) -> Option<&'a str> {
    let saved = cur.clone();
    cur.bump();
    let inner_start = cur.pos();

    loop {
        match cur.peek() {
            None => break,
            Some(b) if b == delim => {
                let inner = cur.slice(inner_start, cur.pos());
                cur.bump();
                return Some(inner);
            }
            Some(Escape::BACKSLASH) => {
                if !skip_escape(cur) {
                    break;
                }
            }
            Some(_) => {
                cur.bump();
            }
        }
    }

    *cur = saved;
    None
}

/// `|...|` spans: escaped content, then color forms from most to least
/// specific. A span never crosses a line break.
fn try_parse_pipe(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let saved = cur.clone();
    cur.bump();
    let body_start = cur.pos();

    if !cur.seek(ColorSpan::PIPE) || cur.pos() == body_start {
        *cur = saved;
        return None;
    }
    let body = cur.slice(body_start, cur.pos());
    if body.contains('\n') {
        *cur = saved;
        return None;
    }
    cur.bump();

    Some(match ColorSpan::classify(body) {
        PipeBody::Escaped(content) => InlineNode::text(format!("|{content}|")),
        PipeBody::Color {
            foreground,
            background,
            content,
        } => InlineNode::Color {
            foreground: foreground.map(str::to_string),
            background: background.map(str::to_string),
            content: parse_inline(content),
        },
    })
}

/// `![alt](url)` inside a text run.
fn try_parse_image(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek_at(1) != Some(Link::OPEN) {
        return None;
    }
    let saved = cur.clone();
    cur.bump();
    match Link::scan(cur, true) {
        Some((alt, url)) => Some(InlineNode::Image {
            link: url.to_string(),
            alt: alt.to_string(),
        }),
        None => {
            *cur = saved;
            None
        }
    }
}

/// `[text](url)`. The caption is kept as literal text.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let saved = cur.clone();
    match Link::scan(cur, false) {
        Some((text, url)) => Some(InlineNode::Link {
            link: url.to_string(),
            text: text.to_string(),
        }),
        None => {
            *cur = saved;
            None
        }
    }
}
