//! Append-only Markdown writer for the generated pages.

use std::borrow::Cow;
use std::io::{BufWriter, Write};

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::Result;

/// A Markdown document being written to disk.
///
/// Output goes through a buffer; call [`DocWriter::finish`] to flush it. If a
/// run fails halfway, whatever was flushed so far stays on disk.
pub struct DocWriter {
    path: Utf8PathBuf,
    out: BufWriter<fs_err::File>,
}

impl DocWriter {
    /// Create (or truncate) the document at `path`.
    pub fn create(path: &Utf8Path) -> Result<Self> {
        let file = fs_err::File::create(path)?;
        Ok(Self {
            path: path.to_owned(),
            out: BufWriter::new(file),
        })
    }

    pub fn line(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        self.line("")
    }

    /// `# text`, `## text`, ... followed by a blank line.
    pub fn heading(&mut self, level: usize, text: &str) -> Result<()> {
        self.line(&format!("{} {text}", "#".repeat(level)))?;
        self.blank()
    }

    /// A fenced code block followed by a blank line. `body` is written as is.
    pub fn fence(&mut self, tag: &str, body: &[u8]) -> Result<()> {
        self.line(&format!("```{tag}"))?;
        self.out.write_all(body)?;
        self.out.write_all(b"\n")?;
        self.line("```")?;
        self.blank()
    }

    /// Flush the document to disk.
    pub fn finish(mut self) -> Result<Utf8PathBuf> {
        self.out.flush()?;
        Ok(self.path)
    }
}

/// Wrap `text` in backticks.
pub fn code(text: &str) -> String {
    format!("`{text}`")
}

/// A link or image destination for `target`.
///
/// Names with spaces or parentheses would end a bare destination early, so
/// they go inside angle brackets.
pub fn link_target(target: &str) -> Cow<'_, str> {
    if target.contains(|c: char| c.is_whitespace() || c == '(' || c == ')') {
        Cow::Owned(format!("<{target}>"))
    } else {
        Cow::Borrowed(target)
    }
}
