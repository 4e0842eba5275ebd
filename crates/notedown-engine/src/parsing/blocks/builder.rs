use crate::parsing::inline::parse_inline;

use super::{
    classify::{LineKind, NotedownLineClassifier},
    collapse,
    kinds::{CodeFence, FenceOpen, TableSyntax},
    list, paragraph, table,
    types::Block,
};

/// Segments a run of lines into blocks.
///
/// This is the function every recursive sub-document parse re-enters: the
/// top-level document body, collapse bodies and list item content all come
/// through here as dedented line slices. Meta extraction happens once, before
/// the first call, and never again.
pub fn parse_blocks(lines: &[&str]) -> Vec<Block> {
    BlockBuilder::new(lines).build()
}

/// Single pass over line indices. At each position the line is classified
/// and handed to the matching classifier, which reports how many lines it
/// consumed. Classifiers that need a closing line they cannot find decline,
/// and the line falls through to paragraph text.
pub struct BlockBuilder<'s, 'a> {
    lines: &'s [&'a str],
    classifier: NotedownLineClassifier,
    out: Vec<Block>,
}

impl<'s, 'a> BlockBuilder<'s, 'a> {
    pub fn new(lines: &'s [&'a str]) -> Self {
        Self {
            lines,
            classifier: NotedownLineClassifier,
            out: vec![],
        }
    }

    pub fn build(mut self) -> Vec<Block> {
        let mut i = 0;
        while i < self.lines.len() {
            i = self.step(i);
        }
        self.out
    }

    /// Emits whatever starts at line `i` and returns the next index.
    fn step(&mut self, i: usize) -> usize {
        let lines = self.lines;
        let class = self.classifier.classify(lines[i]);

        let consumed = match class.kind {
            LineKind::Blank => return i + 1,
            LineKind::FenceOpen(open) => self.try_code(i, &open),
            LineKind::CollapseOpen(open) => match collapse::try_parse(lines, i, &open) {
                Some((block, next)) => {
                    self.out.push(block);
                    Some(next)
                }
                None => None,
            },
            LineKind::Heading { size, text } => {
                self.out.push(Block::Title {
                    size,
                    text: parse_inline(text),
                });
                Some(i + 1)
            }
            LineKind::Desc(text) => {
                self.out.push(Block::Desc {
                    text: parse_inline(text),
                });
                Some(i + 1)
            }
            LineKind::ListItem(first) => {
                let (list, next) = list::parse(lines, i, first);
                self.out.push(Block::List(list));
                Some(next)
            }
            LineKind::PipeRow if TableSyntax::starts_at(lines, i) => {
                let (block, next) = table::parse(lines, i);
                self.out.push(block);
                Some(next)
            }
            LineKind::Image { alt, link } => {
                self.out.push(Block::Image {
                    link: link.to_string(),
                    alt: alt.to_string(),
                });
                Some(i + 1)
            }
            LineKind::Rule => {
                self.out.push(Block::Hr);
                Some(i + 1)
            }
            LineKind::ParagraphBreak => return i + 1,
            LineKind::LineBreak => {
                self.out.push(Block::Newline);
                Some(i + 1)
            }
            LineKind::PipeRow | LineKind::Text => None,
        };

        consumed.unwrap_or_else(|| {
            let (block, next) = paragraph::parse(lines, i, &self.classifier);
            self.out.push(block);
            next
        })
    }

    fn try_code(&mut self, i: usize, open: &FenceOpen<'_>) -> Option<usize> {
        let Some(close) = CodeFence::find_close(self.lines, i) else {
            log::trace!("code fence at line {i} is never closed; reading it as text");
            return None;
        };
        self.out.push(code_block(&self.lines[i + 1..close], open));
        Some(close + 1)
    }
}

/// Builds a code block from the lines between a fence pair.
pub(crate) fn code_block(body: &[&str], open: &FenceOpen<'_>) -> Block {
    Block::Code {
        lang: open.lang.map(str::to_string),
        content: CodeFence::body(body, open),
        indent_level: (open.indent > 0).then_some(open.indent),
    }
}
