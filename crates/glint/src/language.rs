//! Language registry and detection.

use std::path::Path;

use syntect::parsing::{SyntaxReference, SyntaxSet};

/// A language the printer can highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Display name, e.g. `Go` or `Bourne Again Shell (bash)`.
    pub name: String,
    /// Alternative names accepted by [`find`]; these are the file
    /// extensions and file names the syntax claims.
    pub aliases: Vec<String>,
}

impl Language {
    pub(crate) fn from_syntax(syntax: &SyntaxReference) -> Self {
        Self {
            name: syntax.name.clone(),
            aliases: syntax.file_extensions.clone(),
        }
    }
}

/// All visible syntaxes, in registry order.
pub(crate) fn languages(syntaxes: &SyntaxSet) -> Vec<Language> {
    syntaxes
        .syntaxes()
        .iter()
        .filter(|syntax| !syntax.hidden)
        .map(Language::from_syntax)
        .collect()
}

/// Look a syntax up by alias, then by name ignoring case.
pub(crate) fn find<'a>(syntaxes: &'a SyntaxSet, language: &str) -> Option<&'a SyntaxReference> {
    syntaxes.find_syntax_by_token(language)
}

/// Pick a syntax from the filename hint, then the first line, then plain text.
pub(crate) fn detect<'a>(
    syntaxes: &'a SyntaxSet,
    filename: Option<&str>,
    source: &str,
) -> &'a SyntaxReference {
    filename
        .and_then(|filename| from_filename(syntaxes, filename))
        .or_else(|| {
            let first_line = source.lines().next()?;
            syntaxes.find_syntax_by_first_line(first_line)
        })
        .unwrap_or_else(|| syntaxes.find_syntax_plain_text())
}

fn from_filename<'a>(syntaxes: &'a SyntaxSet, filename: &str) -> Option<&'a SyntaxReference> {
    let path = Path::new(filename);

    // Names like `Makefile` are registered as extensions too.
    let by_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| syntaxes.find_syntax_by_extension(name));

    by_name.or_else(|| {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| syntaxes.find_syntax_by_extension(ext))
    })
}
