use std::fs;
use std::io::Write;
use std::path::Path;

use crate::utils::error::{BoxResult, NavtocError};

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| {
        NavtocError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
        .into()
    })
}

/// Write a string to a file, creating the file if it doesn't exist
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = fs::File::create(path.as_ref())?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out/toc.html");

        write_file(&path, "<nav id=\"TableOfContents\"></nav>").unwrap();
        assert_eq!(read_file(&path).unwrap(), "<nav id=\"TableOfContents\"></nav>");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_file(dir.path().join("missing.yml")).unwrap_err();
        assert!(err.to_string().contains("missing.yml"));
    }
}
