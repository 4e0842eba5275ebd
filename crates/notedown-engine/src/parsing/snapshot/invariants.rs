use crate::parsing::{
    Document,
    blocks::{Block, List, TextRun},
    inline::InlineNode,
};

/// Asserts the structural invariants of a parse, recursing into collapse
/// bodies and list item content.
pub fn check(doc: &Document) {
    for b in &doc.content {
        check_block(b);
    }
}

fn check_block(b: &Block) {
    match b {
        Block::Paragraph { content } => {
            assert!(!content.is_empty(), "paragraph without text runs");
            for TextRun { content } in content {
                check_inline(content);
            }
        }
        Block::Title { size, text } => {
            assert!((1..=6).contains(size), "title size out of range: {size}");
            check_inline(text);
        }
        Block::Desc { text } => check_inline(text),
        Block::Code { indent_level, .. } => {
            assert_ne!(*indent_level, Some(0), "indent_level recorded as zero");
        }
        Block::Collapse {
            size,
            text,
            content,
        } => {
            if let Some(size) = size {
                assert!((1..=6).contains(size), "collapse size out of range: {size}");
            }
            check_inline(text);
            for b in content {
                check_block(b);
            }
        }
        Block::Image { .. } | Block::Hr | Block::Newline => {}
        Block::Table { rows } => {
            assert!(!rows.is_empty(), "table without rows");
            for (i, row) in rows.iter().enumerate() {
                assert_eq!(
                    row.is_header,
                    i == 0,
                    "only the first table row is a header (row {i})"
                );
                for cell in &row.cells {
                    check_inline(&cell.content);
                }
            }
        }
        Block::List(list) => check_list(list),
        Block::Unknown => panic!("parser produced an unknown block"),
    }
}

fn check_list(list: &List) {
    assert!(!list.items.is_empty(), "list without items");
    for item in &list.items {
        assert_eq!(
            item.marker.is_ordered(),
            list.ordered,
            "item marker {:?} disagrees with list ordered={}",
            item.marker,
            list.ordered
        );
        check_inline(&item.content);
        for b in &item.content_blocks {
            check_block(b);
        }
        for nested in &item.nested {
            check_list(nested);
        }
    }
}

fn check_inline(nodes: &[InlineNode]) {
    for n in nodes {
        match n {
            InlineNode::Styled { content, .. } | InlineNode::Color { content, .. } => {
                check_inline(content)
            }
            InlineNode::Unknown => panic!("parser produced an unknown inline node"),
            _ => {}
        }
    }
}
