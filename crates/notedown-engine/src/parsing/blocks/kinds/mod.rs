//! Block constructs with owned delimiter constants and line-local detection.

pub mod code_fence;
pub mod collapse;
pub mod list_marker;
pub mod table;

pub use code_fence::{CodeFence, FenceOpen};
pub use collapse::{Collapse, CollapseDelim, CollapseOpen};
pub use list_marker::{ListMarkers, MarkerLine};
pub use table::TableSyntax;
