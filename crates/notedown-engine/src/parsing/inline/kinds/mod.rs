//! Inline constructs with owned delimiter constants.
//!
//! Each type here is the single place that knows its delimiter bytes; the
//! parser only dispatches.

pub mod color;
pub mod emphasis;
pub mod escape;
pub mod link;
pub mod verbatim;

pub use color::ColorSpan;
pub use emphasis::Emphasis;
pub use escape::Escape;
pub use link::Link;
pub use verbatim::{CodeSpan, LatexSpan};
