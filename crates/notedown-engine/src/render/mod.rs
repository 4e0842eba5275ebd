//! # HTML Rendering
//!
//! A tree walk from [`Document`](crate::parsing::Document) to an HTML string.
//! Every block maps to one element with a `notedown-*` class; collapse
//! bodies and list item content re-enter the same block dispatch.
//!
//! Meta references are resolved here, against the document's meta layered
//! over [`RenderOptions::default_meta`]. An unresolved reference is shown as
//! `@{key}` in a warning style rather than failing.

pub mod html;

pub use html::{HtmlRenderer, RenderOptions, render_html};
