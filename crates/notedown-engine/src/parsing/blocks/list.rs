//! List classifier.
//!
//! The first item fixes `ordered` and the base indentation. Each item owns
//! every following line that is blank or indented deeper than the base; that
//! region is dedented and becomes the item's sub-content: runs opened by a
//! marker line become `nested` lists, every other run lands in
//! `content_blocks`. The list ends at the first non-blank line at or below
//! the base indentation that is not an item of the same class.
//!
//! Fences are stepped over while collecting a region, so blank lines and
//! shallow lines inside code never end an item early.

use crate::parsing::{
    inline::parse_inline,
    lines::{dedent, indent_of, is_blank, trim_blank_edges},
};

use super::{
    builder::{code_block, parse_blocks},
    kinds::{CodeFence, ListMarkers, MarkerLine},
    types::{Block, List, ListItem},
};

/// Parses the list whose first item is `first`, found at `lines[start]`.
///
/// Returns the list and the index of the first line after it.
pub fn parse(lines: &[&str], start: usize, first: MarkerLine<'_>) -> (List, usize) {
    let base = first.indent;
    let ordered = first.marker.is_ordered();

    let mut items = vec![];
    let mut marker = first;
    let mut i = start;

    loop {
        let region_end = region_end(lines, i + 1, base);
        items.push(item(marker, &lines[i + 1..region_end]));

        match lines
            .get(region_end)
            .and_then(|line| ListMarkers::parse(line))
            .filter(|next| next.indent == base && next.marker.is_ordered() == ordered)
        {
            Some(next) => {
                marker = next;
                i = region_end;
            }
            None => {
                // Trailing blank lines belong to whatever follows the list.
                let end = (i + 1..region_end)
                    .rev()
                    .find(|&j| !is_blank(lines[j]))
                    .map_or(i + 1, |j| j + 1);
                return (List { ordered, items }, end);
            }
        }
    }
}

/// First index at or after `from` holding a non-blank line indented no
/// deeper than `base`, stepping over complete fences.
fn region_end(lines: &[&str], from: usize, base: usize) -> usize {
    let mut j = from;
    while j < lines.len() {
        let line = lines[j];
        if is_blank(line) {
            j += 1;
            continue;
        }
        if indent_of(line) <= base {
            break;
        }
        j = CodeFence::skip(lines, j).unwrap_or(j + 1);
    }
    j
}

fn item(marker: MarkerLine<'_>, region: &[&str]) -> ListItem {
    let mut item = ListItem {
        marker: marker.marker,
        content: parse_inline(marker.text),
        content_blocks: vec![],
        nested: vec![],
    };

    let region = dedent(trim_blank_edges(region));
    if region.is_empty() {
        return item;
    }

    if let Some(code) = whole_fence(&region) {
        item.content_blocks.push(code);
        return item;
    }

    // The segmenter already splits the region into runs: each run opened by
    // a marker line is a list, everything else is content.
    for block in parse_blocks(&region) {
        match block {
            Block::List(list) => item.nested.push(list),
            other => item.content_blocks.push(other),
        }
    }
    item
}

/// A region that is exactly one fenced block becomes a code node directly.
fn whole_fence(region: &[&str]) -> Option<Block> {
    let open = CodeFence::open(region.first()?)?;
    let last = region.len() - 1;
    if last == 0 || CodeFence::find_close(region, 0)? != last {
        return None;
    }
    Some(code_block(&region[1..last], &open))
}
