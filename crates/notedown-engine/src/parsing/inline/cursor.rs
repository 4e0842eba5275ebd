/// A cursor for byte-wise inline scanning.
///
/// Every delimiter the inline grammar knows is ASCII, so positions where the
/// parser slices `s` always fall on char boundaries even though the cursor
/// itself steps over bytes.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Peeks `n` bytes ahead of the current position.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances until `byte` is under the cursor, returning false (and leaving
    /// the cursor at EOF) if it never appears.
    pub fn seek(&mut self, byte: u8) -> bool {
        while let Some(b) = self.peek() {
            if b == byte {
                return true;
            }
            self.i += 1;
        }
        false
    }

    /// Slice of the input between two byte positions.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
        assert_eq!(cur.peek_at(1), Some(b'l'));
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("**bold**");
        assert!(cur.starts_with(b"**"));
        assert!(!cur.starts_with(b"__"));
    }

    #[test]
    fn starts_with_at_and_past_eof() {
        let mut cur = Cursor::new("ab");
        cur.bump_n(2);
        assert!(cur.eof());
        assert!(cur.starts_with(b""));
        assert!(!cur.starts_with(b"a"));
        cur.bump_n(3);
        assert!(!cur.starts_with(b""));
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn seek_stops_on_byte() {
        let mut cur = Cursor::new("abc|def");
        assert!(cur.seek(b'|'));
        assert_eq!(cur.pos(), 3);
        assert_eq!(cur.slice(0, cur.pos()), "abc");
        assert!(!cur.seek(b'#'));
        assert!(cur.eof());
    }

    #[test]
    fn multibyte_text_slices_on_ascii_delimiters() {
        let mut cur = Cursor::new("한글|x");
        assert!(cur.seek(b'|'));
        assert_eq!(cur.slice(0, cur.pos()), "한글");
    }
}
