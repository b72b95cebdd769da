//! The highlighting engine as seen by the docs generator.
//!
//! The generator only needs read access to the three catalogues and a way to
//! print a snippet. [`glint::Printer`] is the real implementation; tests use
//! a scripted fake.

use glint::{PrintInput, Printer, PrinterConfig};

use crate::error::{DocsError, Result};

/// One row of the languages page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub name: String,
    pub aliases: Vec<String>,
}

pub trait HighlightEngine {
    /// Supported languages, in registry order.
    fn languages(&self) -> Vec<LanguageEntry>;

    /// Output format names, in registry order.
    fn formats(&self) -> Vec<String>;

    /// Theme names, in registry order.
    fn themes(&self) -> Vec<String>;

    fn print(&self, config: &PrinterConfig, input: PrintInput<'_>) -> Result<(), glint::Error>;
}

impl HighlightEngine for Printer {
    fn languages(&self) -> Vec<LanguageEntry> {
        Printer::languages(self)
            .into_iter()
            .map(|language| LanguageEntry {
                name: language.name,
                aliases: language.aliases,
            })
            .collect()
    }

    fn formats(&self) -> Vec<String> {
        Printer::formats(self).into_iter().map(String::from).collect()
    }

    fn themes(&self) -> Vec<String> {
        Printer::theme_names(self)
    }

    fn print(&self, config: &PrinterConfig, input: PrintInput<'_>) -> Result<(), glint::Error> {
        Printer::print(self, config, input)
    }
}

/// Render `source` once with the given format and theme.
///
/// The whole rendering is buffered; callers decide how to post-process it.
pub fn render_sample(
    engine: &dyn HighlightEngine,
    source: &str,
    filename: &str,
    format: &str,
    theme: &str,
) -> Result<Vec<u8>> {
    let config = PrinterConfig {
        format: format.to_string(),
        theme: theme.to_string(),
        lang: None,
    };

    let mut output = Vec::new();
    engine
        .print(
            &config,
            PrintInput {
                input: &mut source.as_bytes(),
                output: &mut output,
                filename: Some(filename),
            },
        )
        .map_err(|source| DocsError::Render {
            format: format.to_string(),
            theme: theme.to_string(),
            source,
        })?;

    tracing::debug!(format, theme, bytes = output.len(), "rendered sample");
    Ok(output)
}
