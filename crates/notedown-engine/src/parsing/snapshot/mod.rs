//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a parsed [`Document`](crate::parsing::Document) to a
//!   stable, compact `Snap` for `insta` snapshot testing
//! - **`invariants`**: Structural checks every parse must satisfy (heading and
//!   collapse sizes in range, list items agree with their list's marker class,
//!   only the first table row is a header, no `unknown` nodes come out of the parser)
//!
//! Snapshots are the readable record of grammar decisions: each fixture pins
//! down how one combination of constructs segments and nests.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
