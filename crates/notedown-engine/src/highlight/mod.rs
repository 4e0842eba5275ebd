//! # Code Highlighting
//!
//! Turns fenced code into highlighted HTML for the renderer.
//!
//! [`Highlighter`] is the entry point. It wraps a [`HighlightBackend`],
//! caches results per `language:code` and never fails: a backend error is
//! logged and the code goes through [`basic_highlight`] instead.
//!
//! ## Modules
//!
//! - **`classed`**: `SyntectBackend`, class-based HTML from `syntect`
//! - **`basic`**: `basic_highlight()` regex fallback for comments and strings
//! - **`cache`**: `Highlighter` cache with in-flight de-duplication

pub mod basic;
pub mod cache;
pub mod classed;

pub use basic::basic_highlight;
pub use cache::Highlighter;
pub use classed::SyntectBackend;

#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
    #[error("No language given and none detected")]
    NoLanguage,
    #[error("Highlighting failed: {0}")]
    Syntect(#[from] syntect::Error),
}

/// A highlighter that may fail.
pub trait HighlightBackend: Send + Sync {
    /// Highlights `code` as `lang`, or detects the language when `lang` is
    /// `None`. Returns HTML to be placed inside a `<code>` element.
    fn highlight(&self, code: &str, lang: Option<&str>) -> Result<String, HighlightError>;
}

/// What the renderer needs from a highlighter: HTML for every input.
pub trait CodeHighlighter {
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String;
}
