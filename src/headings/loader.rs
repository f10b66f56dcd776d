use std::path::Path;

use log::debug;

use crate::headings::types::HeadingsFile;
use crate::toc::Root;
use crate::utils::error::{BoxResult, NavtocError};
use crate::utils::format::DataFormat;
use crate::utils::fs;

/// Load a headings file (YAML, TOML or JSON, picked by extension)
pub fn load_headings<P: AsRef<Path>>(path: P) -> BoxResult<HeadingsFile> {
    let path = path.as_ref();
    let format = DataFormat::from_path(path).ok_or_else(|| {
        NavtocError::Headings(format!(
            "Unsupported headings file format: {}",
            path.display()
        ))
    })?;

    let content = fs::read_file(path)?;
    let file = parse_headings(&content, format).map_err(|e| {
        NavtocError::Headings(format!("{}: {}", path.display(), e))
    })?;

    debug!(
        "Loaded {} headings from {}",
        file.headings.len(),
        path.display()
    );
    Ok(file)
}

/// Parse headings from a string in the given format
pub fn parse_headings(content: &str, format: DataFormat) -> Result<HeadingsFile, String> {
    if content.trim().is_empty() {
        return Ok(HeadingsFile::default());
    }
    format
        .parse(content)
        .map_err(|e| format!("Failed to parse {} headings: {}", format.name(), e))
}

/// Load a headings file and build its table of contents tree
pub fn load_root<P: AsRef<Path>>(path: P) -> BoxResult<Root> {
    Ok(load_headings(path)?.into_root())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headings::types::HeadingEntry;
    use std::fs::write;
    use tempfile::tempdir;

    #[test]
    fn test_parse_yaml() {
        let yaml = "headings:\n  - id: intro\n    text: Introduction\n  - id: setup\n    text: Setup\n    level: 2\n";
        let file = parse_headings(yaml, DataFormat::Yaml).unwrap();

        assert_eq!(
            file.headings,
            vec![
                HeadingEntry::new("intro", "Introduction", 1),
                HeadingEntry::new("setup", "Setup", 2),
            ]
        );
    }

    #[test]
    fn test_parse_toml() {
        let toml = "[[headings]]\nid = \"a\"\ntext = \"A\"\nlevel = 3\n";
        let file = parse_headings(toml, DataFormat::Toml).unwrap();
        assert_eq!(file.headings, vec![HeadingEntry::new("a", "A", 3)]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_headings("  \n", DataFormat::Json).unwrap().headings.is_empty());
    }

    #[test]
    fn test_load_root() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("headings.json");
        write(
            &path,
            r#"{"headings": [{"id": "x", "text": "X", "level": 2}, {"id": "y", "text": "Y", "level": 2}]}"#,
        )
        .unwrap();

        let root = load_root(&path).unwrap();
        assert_eq!(
            root.to_html(2, -1, true),
            "<nav id=\"TableOfContents\">\n  <ol>\n    <li><a href=\"#x\">X</a></li>\n    <li><a href=\"#y\">Y</a></li>\n  </ol>\n</nav>"
        );
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();

        let path = dir.path().join("headings.csv");
        write(&path, "id,text").unwrap();
        assert!(load_headings(&path).unwrap_err().to_string().contains("Unsupported"));

        let path = dir.path().join("headings.yml");
        write(&path, "headings: 3").unwrap();
        let err = load_headings(&path).unwrap_err().to_string();
        assert!(err.starts_with("Headings error:"));
        assert!(err.contains("Failed to parse YAML headings"));
    }
}
