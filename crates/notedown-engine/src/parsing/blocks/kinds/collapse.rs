/// Which delimiter opened a collapse. Only the same delimiter can close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseDelim {
    /// `#>` .. `######>`, with the number of `#`.
    Header(u8),
    /// `|>`.
    Simple,
}

/// An opening collapse line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapseOpen<'a> {
    pub delim: CollapseDelim,
    pub title: &'a str,
}

pub struct Collapse;

impl Collapse {
    pub const HASH: u8 = b'#';
    pub const ARROW: char = '>';
    pub const SIMPLE: &'static str = "|>";
    pub const CLOSE_PREFIX: char = '\\';
    pub const MAX_SIZE: usize = 6;

    /// Recognises `#>title` .. `######>title` and `|>title`, optionally
    /// indented.
    pub fn open(line: &str) -> Option<CollapseOpen<'_>> {
        let t = line.trim_start();
        if let Some(title) = t.strip_prefix(Self::SIMPLE) {
            return Some(CollapseOpen {
                delim: CollapseDelim::Simple,
                title: title.trim(),
            });
        }

        let hashes = t.bytes().take_while(|&b| b == Self::HASH).count();
        if hashes == 0 || hashes > Self::MAX_SIZE {
            return None;
        }
        let title = t[hashes..].strip_prefix(Self::ARROW)?;
        Some(CollapseOpen {
            delim: CollapseDelim::Header(hashes as u8),
            title: title.trim(),
        })
    }

    /// True if `line` is the closing delimiter for `delim`: `\` followed by
    /// the exact opening delimiter, alone on the line.
    pub fn closes(delim: CollapseDelim, line: &str) -> bool {
        let Some(rest) = line.trim().strip_prefix(Self::CLOSE_PREFIX) else {
            return false;
        };
        match delim {
            CollapseDelim::Simple => rest == Self::SIMPLE,
            CollapseDelim::Header(n) => {
                let n = usize::from(n);
                rest.len() == n + 1
                    && rest.bytes().take(n).all(|b| b == Self::HASH)
                    && rest.ends_with(Self::ARROW)
            }
        }
    }
}
