//! Document input from files and readers

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::scan::{self, Block};
use crate::selection::Selection;

/// Where the document text came from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Stdin,
    Memory,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Stdin => write!(f, "<stdin>"),
            Source::Memory => write!(f, "<memory>"),
        }
    }
}

/// Decode raw input as UTF-8, replacing invalid bytes with U+FFFD and
/// dropping a leading byte order mark
fn decode(buf: &[u8]) -> String {
    let text = String::from_utf8_lossy(buf);
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text.into_owned(),
    }
}

/// A fully loaded Markdown document
#[derive(Clone, Debug)]
pub struct Document {
    pub source: Source,
    text: String,
}

impl Document {
    /// Load a document from a file path
    pub fn load(path: &Path) -> Result<Self> {
        let buf = fs::read(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let text = decode(&buf);

        log::debug!("loaded {} bytes from {}", text.len(), path.display());

        Ok(Self {
            source: Source::File(path.to_path_buf()),
            text,
        })
    }

    /// Drain a reader (usually stdin) into a document
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut buf = Vec::new();
        reader
            .read_to_end(&mut buf)
            .context("Failed to read standard input")?;

        let text = decode(&buf);

        log::debug!("loaded {} bytes from stdin", text.len());

        Ok(Self {
            source: Source::Stdin,
            text,
        })
    }

    /// Wrap text that is already in memory
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            source: Source::Memory,
            text: text.into(),
        }
    }

    /// Convert `\r\n` and lone `\r` line endings to `\n`
    pub fn normalized(mut self) -> Self {
        if self.text.contains('\r') {
            self.text = self.text.replace("\r\n", "\n").replace('\r', "\n");
        }
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of lines when split on `\n`
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Completed fenced blocks in document order
    pub fn blocks(&self) -> Vec<Block<'_>> {
        scan::scan(&self.text)
    }

    /// Extract the selected block text
    pub fn extract(&self, selection: Selection, separator: &str) -> String {
        scan::extract_with(&self.text, selection, separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"")?;

        let doc = Document::load(file.path())?;
        assert_eq!(doc.line_count(), 1);
        assert!(doc.blocks().is_empty());
        assert_eq!(doc.source, Source::File(file.path().to_path_buf()));

        Ok(())
    }

    #[test]
    fn test_load_file_with_blocks() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"# Title\n\n```sh\necho hi\n```\n")?;

        let doc = Document::load(file.path())?;
        assert_eq!(doc.line_count(), 6);
        assert_eq!(doc.extract(Selection::All, "\n\n"), "echo hi");

        Ok(())
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let result = Document::load(Path::new("/definitely/not/here.md"));
        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("/definitely/not/here.md"));
    }

    #[test]
    fn test_from_reader() -> Result<()> {
        let input: &[u8] = b"```\nfrom stdin\n```";
        let doc = Document::from_reader(input)?;
        assert_eq!(doc.source, Source::Stdin);
        assert_eq!(doc.extract(Selection::Index(0), "\n\n"), "from stdin");
        Ok(())
    }

    #[test]
    fn test_from_reader_replaces_invalid_utf8() -> Result<()> {
        let input: &[u8] = b"```\ncaf\xe9\n```\n";
        let doc = Document::from_reader(input)?;
        assert_eq!(doc.extract(Selection::All, "\n\n"), "caf\u{fffd}");
        Ok(())
    }

    #[test]
    fn test_load_latin1_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"prose \xe0 la carte\n```\nna\xefve\n```\n")?;

        let doc = Document::load(file.path())?;
        assert_eq!(doc.extract(Selection::All, "\n\n"), "na\u{fffd}ve");

        Ok(())
    }

    #[test]
    fn test_load_strips_byte_order_mark() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all("\u{feff}```sh\necho hi\n```\nprose\n```\nsecond\n```\n".as_bytes())?;

        let doc = Document::load(file.path())?;
        assert!(!doc.text().starts_with('\u{feff}'));
        assert_eq!(doc.extract(Selection::All, "\n\n"), "echo hi\n\nsecond");

        Ok(())
    }

    #[test]
    fn test_from_reader_strips_byte_order_mark() -> Result<()> {
        let input = "\u{feff}```\nfirst\n```".as_bytes();
        let doc = Document::from_reader(input)?;
        assert_eq!(doc.extract(Selection::Index(0), "\n\n"), "first");
        Ok(())
    }

    #[test]
    fn test_only_leading_byte_order_mark_removed() {
        assert_eq!(decode("\u{feff}\u{feff}x".as_bytes()), "\u{feff}x");
        assert_eq!(decode("a\u{feff}b".as_bytes()), "a\u{feff}b");
    }

    #[test]
    fn test_normalized_line_endings() {
        let doc = Document::from_text("```\r\nwin\r\n```\rmac\r```\rold\r```").normalized();
        assert!(!doc.text().contains('\r'));
        assert_eq!(doc.extract(Selection::All, "\n\n"), "win\n\nold");
    }

    #[test]
    fn test_crlf_without_normalizing_keeps_carriage_returns() {
        let doc = Document::from_text("```\r\nwin\r\n```");
        assert_eq!(doc.extract(Selection::All, "\n\n"), "win\r");
    }

    #[test]
    fn test_source_display() {
        assert_eq!(Source::Stdin.to_string(), "<stdin>");
        assert_eq!(Source::Memory.to_string(), "<memory>");
    }
}
