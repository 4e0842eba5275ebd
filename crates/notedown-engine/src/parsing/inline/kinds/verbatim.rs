/// Code span delimiter. Code spans are raw zones.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: u8 = b'`';

    /// Undoes the one escape a code span honours.
    pub fn unescape(inner: &str) -> String {
        inner.replace("\\`", "`")
    }
}

/// LaTeX span delimiter. The formula is passed through untouched.
pub struct LatexSpan;

impl LatexSpan {
    pub const DOLLAR: u8 = b'$';

    pub fn unescape(inner: &str) -> String {
        inner.replace("\\$", "$")
    }
}
