use crate::parsing::inline::cursor::Cursor;

/// Link and image delimiters: `[text](url)` and `![alt](url)`.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
    pub const BANG: u8 = b'!';

    /// Scans `[text](url)` at the cursor and returns `(text, url)`.
    ///
    /// The text may be empty only when `allow_empty_text` is set (image alt
    /// text). The url is never empty. On failure the cursor is left wherever
    /// scanning stopped; callers restore it.
    pub fn scan<'a>(cur: &mut Cursor<'a>, allow_empty_text: bool) -> Option<(&'a str, &'a str)> {
        if cur.peek() != Some(Self::OPEN) {
            return None;
        }
        cur.bump();
        let text_start = cur.pos();
        if !cur.seek(Self::CLOSE) {
            return None;
        }
        let text = cur.slice(text_start, cur.pos());
        if text.is_empty() && !allow_empty_text {
            return None;
        }
        cur.bump(); // ]

        if cur.peek() != Some(Self::URL_OPEN) {
            return None;
        }
        cur.bump();
        let url_start = cur.pos();
        if !cur.seek(Self::URL_CLOSE) {
            return None;
        }
        let url = cur.slice(url_start, cur.pos());
        if url.is_empty() {
            return None;
        }
        cur.bump(); // )

        Some((text, url))
    }
}
