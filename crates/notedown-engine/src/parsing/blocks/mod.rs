//! # Block Parsing
//!
//! Line-based block segmentation with recursive sub-document parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding only local facts (indentation, which construct the
//!    line could open).
//!
//! 2. **Segmentation** (`builder`): a `BlockBuilder` walks the lines once and
//!    hands each construct start to its classifier. Classifiers report how
//!    many lines they consumed, or decline so the line becomes paragraph text.
//!
//! Collapse bodies and list item regions are dedented and handed back to
//! [`parse_blocks`], so indentation is always measured relative to the
//! enclosing block rather than the document root.
//!
//! ## Segmenter Priority
//!
//! | Line | Construct |
//! |---|---|
//! | `` ``` ``/`` ```lang `` | code fence, if a closing fence follows |
//! | `#>`..`######>`, `\|>` | collapse, if the matching close follows |
//! | `#`..`######` + space | title |
//! | `:Title:`, `~# text` | description |
//! | `N. `, `- `, `* `, `+ ` | list |
//! | pipe row + separator row | table |
//! | `![alt](url)` alone | image |
//! | `---` or longer | horizontal rule |
//! | anything else | paragraph |
//!
//! ## Modules
//!
//! - **`types`**: AST node types (`Block`, `List`, `ListItem`, `TableRow`, ...)
//! - **`kinds`**: Block constructs with owned delimiters (CodeFence, Collapse, ListMarkers, TableSyntax)
//! - **`classify`**: `NotedownLineClassifier` produces a `LineClass` per line
//! - **`builder`**: `BlockBuilder` segmenter and the `parse_blocks` entry point
//! - **`collapse`**, **`list`**, **`table`**, **`paragraph`**: multi-line classifiers
//!
//! ## Key Invariants
//!
//! - Nesting depth is unbounded (lists in collapses in lists, etc.)
//! - Fenced code blocks are raw zones: no block or inline parsing inside, and
//!   no delimiter inside a fence ever closes an outer block
//! - Constructs missing their closing line fall back to paragraph text

pub mod builder;
pub mod classify;
pub mod collapse;
pub mod kinds;
pub mod list;
pub mod paragraph;
pub mod table;
pub mod types;

pub use builder::{BlockBuilder, parse_blocks};
pub use classify::{LineClass, LineKind, NotedownLineClassifier};
pub use types::{Alignment, Block, List, ListItem, ListMarker, TableCell, TableRow, TextRun};
