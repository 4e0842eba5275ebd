//! # Inline Parsing
//!
//! Cursor-based inline parsing of a single text run (a paragraph run, a title,
//! a list item line, a table cell).
//!
//! ## Resolution Rule
//!
//! The parser walks the text left to right and, at each position, tries every
//! construct that can start there in priority order. The first construct that
//! matches at the earliest position wins. Escaped forms are tried before the
//! unescaped forms that share a leading byte, and the more specific color
//! spans are tried before the bare `|text|` span.
//!
//! | Lead | Constructs, in priority order |
//! |---|---|
//! | `\` | escaped delimiter (`\*` `` \` `` `\$` `\_` `\~` `\#`), `\![alt](url)`, `\[text](url)`, `\|text\|` |
//! | `*` | bold `**x**`, italic `*x*` |
//! | `_` | underline `__x__` |
//! | `~` | crossline `~~x~~` |
//! | `` ` `` | code span |
//! | `$` | latex span |
//! | `\|` | `\|\x\|`, `\|f#C,b#C,x\|`, `\|b#C,x\|`, `\|f#C,x\|`, `\|x\|` |
//! | `!` | image `![alt](url)` |
//! | `[` | link `[text](url)` |
//!
//! Bold, italic, underline, crossline and color spans recurse into
//! [`parse_inline`] for their inner text. Code and latex spans are raw zones:
//! only the escaped closing delimiter is unescaped.
//!
//! Text between constructs goes through [`replace_meta`], which turns
//! `@{key}` into meta reference nodes and `\@{key}` into literal text.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum and `Style`
//! - **`kinds`**: Inline constructs with owned delimiters
//! - **`cursor`**: `Cursor` for byte-wise scanning
//! - **`meta_ref`**: `replace_meta()` for `@{key}` references
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers

pub mod cursor;
pub mod kinds;
pub mod meta_ref;
pub mod parser;
pub mod types;

pub use meta_ref::replace_meta;
pub use parser::parse_inline;
pub use types::{InlineNode, Style};
