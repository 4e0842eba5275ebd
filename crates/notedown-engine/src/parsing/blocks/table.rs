//! Table classifier.
//!
//! A header row and a separator row are required before anything counts as
//! a table; the segmenter checks that with [`TableSyntax::starts_at`] before
//! calling in here. Alignment comes from the separator only.

use crate::parsing::inline::parse_inline;

use super::{
    kinds::TableSyntax,
    types::{Alignment, Block, TableCell, TableRow},
};

/// Parses the table whose header is `lines[start]`.
///
/// Returns the block and the index of the first line after the last data row.
pub fn parse(lines: &[&str], start: usize) -> (Block, usize) {
    let alignments: Vec<Alignment> = lines
        .get(start + 1)
        .map(|sep| {
            TableSyntax::split_cells(sep)
                .into_iter()
                .map(TableSyntax::alignment)
                .collect()
        })
        .unwrap_or_default();

    let mut rows = vec![row(lines[start], true, &alignments)];
    let mut j = start + 2;
    while j < lines.len() && TableSyntax::is_row(lines[j]) {
        rows.push(row(lines[j], false, &alignments));
        j += 1;
    }

    (Block::Table { rows }, j.min(lines.len()))
}

/// Cells past the separator's column count fall back to left alignment;
/// short rows are not padded.
fn row(line: &str, is_header: bool, alignments: &[Alignment]) -> TableRow {
    let cells = TableSyntax::split_cells(line)
        .into_iter()
        .enumerate()
        .map(|(idx, cell)| TableCell {
            content: parse_inline(cell),
            align: alignments.get(idx).copied().unwrap_or_default(),
        })
        .collect();
    TableRow { is_header, cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::{InlineNode, Style, types::plain_text};
    use pretty_assertions::assert_eq;

    fn rows(block: Block) -> Vec<TableRow> {
        match block {
            Block::Table { rows } => rows,
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn header_and_data_rows() {
        let lines = ["| a | b |", "|---|---|", "| 1 | 2 |", "| 3 | 4 |", "after"];
        let (block, next) = parse(&lines, 0);
        assert_eq!(next, 4);
        let rows = rows(block);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_header);
        assert!(!rows[1].is_header);
        assert_eq!(rows[2].cells[1].content, vec![InlineNode::text("4")]);
    }

    #[test]
    fn alignment_applies_by_column() {
        let lines = ["| l | c | r |", "| --- | :---: | ---: |", "| 1 | 2 | 3 |"];
        let rows = rows(parse(&lines, 0).0);
        let aligns: Vec<_> = rows[1].cells.iter().map(|c| c.align).collect();
        assert_eq!(aligns, vec![Alignment::Left, Alignment::Center, Alignment::Right]);
    }

    #[test]
    fn short_rows_are_not_padded() {
        let lines = ["| a | b | c |", "|---|---|---|", "| 1 |"];
        let rows = rows(parse(&lines, 0).0);
        assert_eq!(rows[1].cells.len(), 1);
    }

    #[test]
    fn cells_are_inline_parsed() {
        let lines = ["| **h** |", "|---|", r"| \|x\| |"];
        let rows = rows(parse(&lines, 0).0);
        assert_eq!(
            rows[0].cells[0].content,
            vec![InlineNode::styled(Style::Bold, vec![InlineNode::text("h")])]
        );
        assert_eq!(plain_text(&rows[1].cells[0].content), "|x|");
    }

    #[test]
    fn header_only_table() {
        let (block, next) = parse(&["| a |", "|---|"], 0);
        assert_eq!(next, 2);
        assert_eq!(rows(block).len(), 1);
    }
}
