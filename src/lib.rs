//! Event Lens
//!
//! Keyword categorization and summary analytics for event records.
//!
//! The engine is two groups of pure functions:
//! - [`classifier`] maps a title and description to a [`Category`]
//! - [`aggregator`] turns a list of [`Event`]s into summary views
//!
//! Records arrive as loosely-typed JSON objects and are normalized by
//! [`parser`] before aggregation. Nothing here holds process-wide state;
//! callers pass the event list in and get a [`Report`] back.
//!
//! ## Getting Started
//!
//! ```bash
//! event-lens summarize --input events.json --summary
//! event-lens classify --title "NBA Finals tonight"
//! ```

pub mod aggregator;
pub mod classifier;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

pub use classifier::{classify, Category};
pub use parser::schema::{Event, Report};
