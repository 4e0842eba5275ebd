//! Notedown: a lightweight markup language with collapsible sections,
//! meta variables and colored text.
//!
//! - [`parsing`]: text to [`Document`]
//! - [`render`]: [`Document`] to HTML
//! - [`highlight`]: syntax highlighting for code blocks
//! - [`io`]: reading sources and writing pages

pub mod highlight;
pub mod io;
pub mod parsing;
pub mod render;

pub use highlight::{CodeHighlighter, HighlightBackend, HighlightError, Highlighter};
pub use io::*;
pub use parsing::{Block, Document, InlineNode, Meta, parse, parse_fragment};
pub use render::{HtmlRenderer, RenderOptions, render_html};
