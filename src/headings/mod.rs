//! Heading lists supplied by the caller, one `{ id, text, level }` per heading.

mod loader;
mod types;

pub use loader::{load_headings, load_root, parse_headings};
pub use types::{HeadingEntry, HeadingsFile};
