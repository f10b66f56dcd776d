use serde::{Deserialize, Serialize};

use crate::toc::{Header, Root};

fn default_level() -> i32 {
    1
}

/// One heading as found in the document, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingEntry {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub text: String,

    /// Heading depth, h1 = 1
    #[serde(default = "default_level")]
    pub level: i32,
}

impl HeadingEntry {
    pub fn new(id: impl Into<String>, text: impl Into<String>, level: i32) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            level,
        }
    }
}

impl From<HeadingEntry> for (Header, i32) {
    fn from(entry: HeadingEntry) -> Self {
        (Header::new(entry.id, entry.text), entry.level)
    }
}

/// A headings data file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingsFile {
    #[serde(default)]
    pub headings: Vec<HeadingEntry>,
}

impl HeadingsFile {
    /// Build the table of contents tree from the headings
    pub fn into_root(self) -> Root {
        self.headings.into_iter().map(<(Header, i32)>::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_root() {
        let file = HeadingsFile {
            headings: vec![
                HeadingEntry::new("intro", "Introduction", 1),
                HeadingEntry::new("setup", "Setup", 2),
                HeadingEntry::new("deep", "Deep", 4),
            ],
        };

        let root = file.into_root();
        assert_eq!(root.headers.len(), 1);
        assert_eq!(root.headers[0].headers[0].id, "setup");

        // h3 placeholder between setup and deep
        let placeholder = &root.headers[0].headers[0].headers[0];
        assert!(placeholder.is_empty());
        assert_eq!(placeholder.headers[0].text, "Deep");
    }

    #[test]
    fn test_entry_defaults() {
        let entry: HeadingEntry = serde_json::from_str(r#"{"id": "a"}"#).unwrap();
        assert_eq!(entry, HeadingEntry::new("a", "", 1));
    }
}
