//! Collapse classifier.
//!
//! `SCANNING -> ACCUMULATING(depth) -> CLOSED`. Openers with the same
//! delimiter as the outer collapse push the depth, matching closers pop it.
//! Other collapse kinds inside the body are left alone here: the body is
//! reparsed as a sub-document, and that parse finds them. Complete code
//! fences in the body are stepped over so a delimiter inside code never
//! counts.

use crate::parsing::{inline::parse_inline, lines::dedent};

use super::{
    builder::parse_blocks,
    kinds::{CodeFence, Collapse, CollapseDelim, CollapseOpen},
    types::Block,
};

/// Parses a collapse opened at `lines[start]`.
///
/// Returns the block and the index after the closing line, or `None` when
/// the matching close never appears.
pub fn try_parse(lines: &[&str], start: usize, open: &CollapseOpen<'_>) -> Option<(Block, usize)> {
    let close = find_close(lines, start, open.delim)?;

    let body = dedent(&lines[start + 1..close]);
    let size = match open.delim {
        CollapseDelim::Header(n) => Some(n),
        CollapseDelim::Simple => None,
    };

    let block = Block::Collapse {
        size,
        text: parse_inline(open.title),
        content: parse_blocks(&body),
    };
    Some((block, close + 1))
}

/// Index of the line that closes the collapse opened at `start`.
fn find_close(lines: &[&str], start: usize, delim: CollapseDelim) -> Option<usize> {
    let mut depth = 1usize;
    let mut j = start + 1;

    while j < lines.len() {
        if let Some(after_fence) = CodeFence::skip(lines, j) {
            j = after_fence;
            continue;
        }

        let line = lines[j];
        if Collapse::closes(delim, line) {
            depth -= 1;
            if depth == 0 {
                return Some(j);
            }
        } else if Collapse::open(line).is_some_and(|inner| inner.delim == delim) {
            depth += 1;
        }
        j += 1;
    }

    log::trace!("collapse {delim:?} at line {start} has no matching close; reading it as text");
    None
}
