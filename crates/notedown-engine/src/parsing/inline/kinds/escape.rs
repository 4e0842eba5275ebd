/// Backslash escapes.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';

    /// Bytes that turn into themselves when preceded by a backslash.
    ///
    /// Escaped links, images and pipes have their own constructs because the
    /// whole construct, not just the first byte, becomes literal. The list
    /// markers and `>` let a line start with `\-`, `1\.` or `\#>` as text.
    pub const LITERAL: &'static [u8] = b"*`$_~#-+.>";

    pub fn is_literal(b: u8) -> bool {
        Self::LITERAL.contains(&b)
    }
}
