use std::fs;
use std::path::{Path, PathBuf};

use crate::parsing::{Document, parse};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub const HTML_EXTENSION: &str = "html";

/// Read a notedown source file
pub fn read_source(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read and parse a notedown file
pub fn read_document(path: &Path) -> Result<Document, IoError> {
    read_source(path).map(|text| parse(&text))
}

/// Write rendered HTML, creating parent directories as needed
pub fn write_html(path: &Path, html: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::write(path, html).map_err(IoError::Io)
}

/// `<output_dir>/<source stem>.html`
pub fn html_output_path(source: &Path, output_dir: &Path) -> PathBuf {
    let mut name = source
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "index".into());
    name.push(".");
    name.push(HTML_EXTENSION);
    output_dir.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn read_document_parses_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.nd");
        fs::write(&path, "\\meta title=T\n# Hello").unwrap();

        let doc = read_document(&path).unwrap();
        assert_eq!(doc.meta.get("title").map(String::as_str), Some("T"));
        assert_eq!(doc.content.len(), 1);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.nd");
        assert!(matches!(read_source(&path), Err(IoError::NotFound(p)) if p == path));
    }

    #[test]
    fn write_html_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out/deep/page.html");
        write_html(&path, "<p></p>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p></p>");
    }

    #[test]
    fn output_path_uses_source_stem() {
        assert_eq!(
            html_output_path(Path::new("notes/daily.nd"), Path::new("/site")),
            PathBuf::from("/site/daily.html")
        );
        assert_eq!(
            html_output_path(Path::new("v1.2.nd"), Path::new("out")),
            PathBuf::from("out/v1.2.html")
        );
    }
}
