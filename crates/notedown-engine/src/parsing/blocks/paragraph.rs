//! Paragraph classifier: the fallback for every line nothing else claims.

use crate::parsing::inline::{InlineNode, parse_inline};

use super::{
    classify::{LineKind, NotedownLineClassifier},
    kinds::TableSyntax,
    types::{Block, TextRun},
};

/// Collects the paragraph starting at `lines[start]`.
///
/// The first line is always taken, whatever it looks like, since it only
/// gets here when every other classifier declined it. Collection stops at a
/// blank line or at a line that starts another block. Text lines are joined
/// with `\n` into one run; a pipe row without a separator under it gets a
/// literal run of its own.
pub fn parse(lines: &[&str], start: usize, classifier: &NotedownLineClassifier) -> (Block, usize) {
    let mut runs = vec![];
    let mut text: Vec<&str> = vec![];

    let mut j = start;
    while j < lines.len() {
        let line = lines[j];
        let kind = classifier.classify(line).kind;
        if j > start && starts_block(lines, j, &kind) {
            break;
        }
        if matches!(kind, LineKind::Blank) {
            break;
        }

        if is_literal_row(line) {
            flush(&mut runs, &mut text);
            runs.push(TextRun {
                content: vec![InlineNode::text(line.trim())],
            });
        } else {
            text.push(line.trim());
        }
        j += 1;
    }
    flush(&mut runs, &mut text);

    (Block::Paragraph { content: runs }, j)
}

fn starts_block(lines: &[&str], at: usize, kind: &LineKind<'_>) -> bool {
    match kind {
        LineKind::Blank | LineKind::Text => false,
        LineKind::PipeRow => TableSyntax::starts_at(lines, at),
        _ => true,
    }
}

/// A pipe row with at least two cells. A single `|...|` is left to the inline
/// parser as a color span.
fn is_literal_row(line: &str) -> bool {
    TableSyntax::is_row(line) && TableSyntax::split_cells(line).len() > 1
}

fn flush(runs: &mut Vec<TextRun>, text: &mut Vec<&str>) {
    if text.is_empty() {
        return;
    }
    runs.push(TextRun {
        content: parse_inline(&text.join("\n")),
    });
    text.clear();
}
