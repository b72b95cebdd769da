//! The printer: read source, highlight it, write it out in some format.
//!
//! A [`Printer`] owns the syntax and theme sets, which are expensive to load.
//! Build one and reuse it for every call to [`Printer::print`].
//!
//! # Example
//!
//! ```rust,ignore
//! use glint::{PrintInput, Printer, PrinterConfig};
//!
//! let printer = Printer::new();
//! let config = PrinterConfig {
//!     format: "terminal256".into(),
//!     ..Default::default()
//! };
//!
//! let mut out = Vec::new();
//! printer.print(
//!     &config,
//!     PrintInput {
//!         input: &mut "fn main() {}".as_bytes(),
//!         output: &mut out,
//!         filename: Some("main.rs"),
//!     },
//! )?;
//! ```

use std::io::{Read, Write};

use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;

use crate::format::Format;
use crate::language::{self, Language};
use crate::{DEFAULT_THEME, Error, highlight};

/// What to print and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Output format name, see [`Format`].
    pub format: String,
    /// Theme name, see [`Printer::theme_names`].
    pub theme: String,
    /// Language name or alias. Detected from the filename or the content when
    /// `None`.
    pub lang: Option<String>,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            format: Format::Terminal256.name().to_string(),
            theme: DEFAULT_THEME.to_string(),
            lang: None,
        }
    }
}

/// Where the source comes from and where the rendered output goes.
pub struct PrintInput<'a> {
    /// Source text. Read to the end.
    pub input: &'a mut dyn Read,
    /// Receives the fully rendered output.
    pub output: &'a mut dyn Write,
    /// Name of the source file; only used to pick a language.
    pub filename: Option<&'a str>,
}

/// Syntax highlighting printer.
pub struct Printer {
    syntaxes: SyntaxSet,
    themes: ThemeSet,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    /// Create a printer with the built-in syntaxes and themes.
    pub fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            themes: ThemeSet::load_defaults(),
        }
    }

    /// Every language the printer can highlight, in registry order.
    pub fn languages(&self) -> Vec<Language> {
        language::languages(&self.syntaxes)
    }

    /// Every output format name, sorted.
    pub fn formats(&self) -> Vec<&'static str> {
        Format::ALL.iter().map(|format| format.name()).collect()
    }

    /// Every built-in theme name, sorted.
    pub fn theme_names(&self) -> Vec<String> {
        self.themes.themes.keys().cloned().collect()
    }

    /// Read all of `input.input`, highlight it and write the rendering to
    /// `input.output`.
    ///
    /// Nothing is written when the format, theme or language is unknown.
    pub fn print(&self, config: &PrinterConfig, input: PrintInput<'_>) -> Result<(), Error> {
        let format: Format = config.format.parse()?;
        let theme = self
            .themes
            .themes
            .get(&config.theme)
            .ok_or_else(|| Error::UnknownTheme {
                theme: config.theme.clone(),
            })?;

        let mut source = String::new();
        input.input.read_to_string(&mut source)?;

        let syntax = match config.lang.as_deref() {
            Some(lang) => {
                language::find(&self.syntaxes, lang).ok_or_else(|| Error::UnsupportedLanguage {
                    language: lang.to_string(),
                })?
            }
            None => language::detect(&self.syntaxes, input.filename, &source),
        };

        let highlighted = highlight::highlight(&source, syntax, &self.syntaxes, theme)?;
        let rendered = format.render(&source, &highlighted)?;

        input.output.write_all(rendered.as_bytes())?;
        input.output.flush()?;
        Ok(())
    }

    /// Convenience wrapper around [`print`](Self::print) for in-memory source.
    pub fn print_to_string(
        &self,
        config: &PrinterConfig,
        source: &str,
        filename: Option<&str>,
    ) -> Result<String, Error> {
        let mut output = Vec::new();
        self.print(
            config,
            PrintInput {
                input: &mut source.as_bytes(),
                output: &mut output,
                filename,
            },
        )?;
        // Every format renders from a `String`.
        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {r#"
        package main

        import "fmt"

        func main() {
        	fmt.Println("hello world")
        }"#};

    fn config(format: &str) -> PrinterConfig {
        PrinterConfig {
            format: format.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_every_format_renders_the_sample() {
        let printer = Printer::new();
        for format in printer.formats() {
            let out = printer
                .print_to_string(&config(format), SAMPLE, Some("main.go"))
                .unwrap();
            assert!(out.contains("main"), "{format} output lost the source");
        }
    }

    #[test]
    fn test_every_theme_renders_svg() {
        let printer = Printer::new();
        for theme in printer.theme_names() {
            let config = PrinterConfig {
                format: "svg".into(),
                theme,
                lang: None,
            };
            let out = printer.print_to_string(&config, SAMPLE, Some("main.go")).unwrap();
            assert!(out.starts_with("<?xml"));
            assert!(out.trim_end().ends_with("</svg>"));
        }
    }

    #[test]
    fn test_noop_is_identity() {
        let printer = Printer::new();
        let out = printer
            .print_to_string(&config("noop"), SAMPLE, Some("main.go"))
            .unwrap();
        assert_eq!(out, SAMPLE);
    }

    #[test]
    fn test_terminal_output_is_colored() {
        let printer = Printer::new();
        let out = printer
            .print_to_string(&config("terminal16m"), SAMPLE, Some("main.go"))
            .unwrap();
        assert!(out.contains("\x1b[38;2;"));
        assert_eq!(out.lines().count(), SAMPLE.lines().count());
    }

    #[test]
    fn test_output_is_deterministic() {
        let printer = Printer::new();
        let a = printer.print_to_string(&config("html"), SAMPLE, Some("main.go")).unwrap();
        let b = printer.print_to_string(&config("html"), SAMPLE, Some("main.go")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_format() {
        let printer = Printer::new();
        let err = printer
            .print_to_string(&config("gif"), SAMPLE, None)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownFormat { .. }));
    }

    #[test]
    fn test_unknown_theme_writes_nothing() {
        let printer = Printer::new();
        let config = PrinterConfig {
            theme: "no-such-theme".into(),
            ..Default::default()
        };
        let mut output = Vec::new();
        let err = printer
            .print(
                &config,
                PrintInput {
                    input: &mut SAMPLE.as_bytes(),
                    output: &mut output,
                    filename: None,
                },
            )
            .unwrap_err();
        assert!(matches!(err, Error::UnknownTheme { theme } if theme == "no-such-theme"));
        assert!(output.is_empty());
    }

    #[test]
    fn test_explicit_language_overrides_filename() {
        let printer = Printer::new();
        let config = PrinterConfig {
            format: "json".into(),
            lang: Some("nope-lang".into()),
            ..Default::default()
        };
        let err = printer
            .print_to_string(&config, SAMPLE, Some("main.go"))
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedLanguage { .. }));
    }

    #[test]
    fn test_default_theme_is_builtin() {
        let printer = Printer::new();
        assert!(printer.theme_names().iter().any(|t| t == DEFAULT_THEME));
    }
}
