use log::debug;

use crate::config::TocConfig;
use crate::toc::tree::{Header, Root};

/// End level meaning "no upper bound"
pub const UNBOUNDED: i32 = -1;

/// List element used for every list in one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTag {
    Ordered,
    Unordered,
}

impl ListTag {
    pub fn as_str(self) -> &'static str {
        match self {
            ListTag::Ordered => "ol",
            ListTag::Unordered => "ul",
        }
    }
}

impl From<bool> for ListTag {
    fn from(ordered: bool) -> Self {
        if ordered {
            ListTag::Ordered
        } else {
            ListTag::Unordered
        }
    }
}

impl Root {
    /// Render the ToC as nested HTML lists wrapped in a `<nav>`.
    ///
    /// Only levels in `start_level..=stop_level` get a list; a `stop_level`
    /// of [`UNBOUNDED`] includes every level from `start_level` down. Levels
    /// shallower than `start_level` are not dropped but flattened, so their
    /// children show up as top-level items. A bounded `stop_level` below
    /// `start_level` yields an empty `<nav>`.
    ///
    /// IDs and texts are written verbatim, escaping is up to the caller.
    pub fn to_html(&self, start_level: i32, stop_level: i32, ordered: bool) -> String {
        let mut b = TocBuilder {
            s: String::new(),
            start_level,
            stop_level,
            tag: ListTag::from(ordered),
        };
        b.write_nav(&self.headers);
        debug!(
            "Rendered table of contents ({}..={}, {}): {} bytes",
            start_level,
            stop_level,
            b.tag.as_str(),
            b.s.len()
        );
        b.s
    }

    /// Render using the levels and list style of `config`
    pub fn to_html_with(&self, config: &TocConfig) -> String {
        self.to_html(config.start_level, config.end_level, config.ordered)
    }
}

struct TocBuilder {
    s: String,
    start_level: i32,
    stop_level: i32,
    tag: ListTag,
}

/// Pending work while walking the tree. Kept on a heap stack so tree depth
/// is not limited by the thread's stack.
enum Step<'a> {
    /// A sibling sequence at `level`
    Headers {
        level: i32,
        indent: usize,
        headers: &'a [Header],
    },
    /// One list item whose children sit at `level`
    Item {
        level: i32,
        indent: usize,
        header: &'a Header,
    },
    CloseItem,
    CloseList { indent: usize },
}

impl TocBuilder {
    fn write_nav(&mut self, headers: &[Header]) {
        self.s.push_str("<nav id=\"TableOfContents\">");
        self.write_headers(headers);
        self.s.push_str("</nav>");
    }

    fn write_headers(&mut self, headers: &[Header]) {
        let mut stack = vec![Step::Headers {
            level: 1,
            indent: 0,
            headers,
        }];

        // Children are pushed in reverse so they pop in document order
        while let Some(step) = stack.pop() {
            match step {
                Step::Headers {
                    level,
                    indent,
                    headers,
                } => {
                    if level < self.start_level {
                        stack.extend(headers.iter().rev().map(|h| Step::Headers {
                            level: level + 1,
                            indent,
                            headers: &h.headers,
                        }));
                        continue;
                    }

                    if self.stop_level != UNBOUNDED && level > self.stop_level {
                        continue;
                    }

                    if headers.is_empty() {
                        continue;
                    }

                    self.open_list(indent);
                    stack.push(Step::CloseList { indent });
                    stack.extend(headers.iter().rev().map(|header| Step::Item {
                        level: level + 1,
                        indent: indent + 2,
                        header,
                    }));
                }
                Step::Item {
                    level,
                    indent,
                    header,
                } => {
                    self.open_item(indent, header);
                    stack.push(Step::CloseItem);
                    stack.push(Step::Headers {
                        level,
                        indent,
                        headers: &header.headers,
                    });
                }
                Step::CloseItem => self.s.push_str("</li>\n"),
                Step::CloseList { indent } => self.close_list(indent),
            }
        }
    }

    fn open_list(&mut self, indent: usize) {
        self.s.push('\n');
        self.indent(indent + 1);
        self.s.push('<');
        self.s.push_str(self.tag.as_str());
        self.s.push_str(">\n");
    }

    fn close_list(&mut self, indent: usize) {
        self.indent(indent + 1);
        self.s.push_str("</");
        self.s.push_str(self.tag.as_str());
        self.s.push_str(">\n");
        self.indent(indent);
    }

    fn open_item(&mut self, indent: usize, h: &Header) {
        self.indent(indent);
        self.s.push_str("<li>");
        if !h.is_empty() {
            self.s.push_str("<a href=\"#");
            self.s.push_str(&h.id);
            self.s.push_str("\">");
            self.s.push_str(&h.text);
            self.s.push_str("</a>");
        }
    }

    fn indent(&mut self, n: usize) {
        for _ in 0..n {
            self.s.push_str("  ");
        }
    }
}
