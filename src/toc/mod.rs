//! Table of contents: a heading tree built from level-tagged inserts and
//! rendered to nested HTML lists.

mod render;
mod tree;

pub use render::{ListTag, UNBOUNDED};
pub use tree::{Header, Root};
