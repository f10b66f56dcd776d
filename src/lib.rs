//! Table of contents generation for static sites.
//!
//! Headings are added one by one in document order with [`Root::add_at`],
//! then rendered as nested HTML lists with [`Root::to_html`]:
//!
//! ```
//! use navtoc::{Header, Root, UNBOUNDED};
//!
//! let mut toc = Root::new();
//! toc.add_at(Header::new("a", "A"), 1);
//!
//! assert_eq!(
//!     toc.to_html(1, UNBOUNDED, false),
//!     "<nav id=\"TableOfContents\">\n  <ul>\n    <li><a href=\"#a\">A</a></li>\n  </ul>\n</nav>"
//! );
//! ```

pub mod config;
pub mod headings;
pub mod toc;
pub mod utils;

pub use config::TocConfig;
pub use toc::{Header, ListTag, Root, UNBOUNDED};
