use log::trace;
use serde::{Deserialize, Serialize};

/// A single heading in the table of contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Anchor the entry links to, without the leading `#`
    #[serde(default)]
    pub id: String,

    /// Display text, inserted into the markup as-is
    #[serde(default)]
    pub text: String,

    /// Sub-headings, one level deeper
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,
}

impl Header {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            headers: Vec::new(),
        }
    }

    /// True when neither an ID nor a text is set.
    ///
    /// Empty headers are placeholders for a skipped level, e.g. an h3
    /// directly below an h1. They render as a bare `<li>`.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.text.is_empty()
    }
}

impl Drop for Header {
    // Unlink descendants onto a heap stack so deep trees don't overflow the
    // thread stack on drop
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.headers);
        while let Some(mut h) = stack.pop() {
            stack.append(&mut h.headers);
        }
    }
}

/// Holds the top level (h1) headers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    #[serde(default)]
    pub headers: Vec<Header>,
}

impl Root {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Add `header` at the given level, starting at 1.
    ///
    /// The header becomes the last child of the last header one level up.
    /// Missing ancestors are filled in with empty placeholders, so a first
    /// insert at level 3 creates two placeholders above it. Levels below 1
    /// are treated as 1.
    pub fn add_at(&mut self, header: Header, level: i32) {
        let mut headers = &mut self.headers;
        for depth in 1..level {
            if headers.is_empty() {
                trace!("Adding placeholder header at level {}", depth);
                headers.push(Header::default());
            }
            let last = headers.len() - 1;
            headers = &mut headers[last].headers;
        }
        headers.push(header);
    }

    /// Add headers in document order
    pub fn extend_at<I>(&mut self, headers: I)
    where
        I: IntoIterator<Item = (Header, i32)>,
    {
        for (header, level) in headers {
            self.add_at(header, level);
        }
    }
}

impl Extend<(Header, i32)> for Root {
    fn extend<I: IntoIterator<Item = (Header, i32)>>(&mut self, iter: I) {
        self.extend_at(iter);
    }
}

impl FromIterator<(Header, i32)> for Root {
    fn from_iter<I: IntoIterator<Item = (Header, i32)>>(iter: I) -> Self {
        let mut root = Root::new();
        root.extend_at(iter);
        root
    }
}
