//! Errors returned by the printer.

use std::io;

/// Everything that can go wrong while printing highlighted source.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested output format is not in the format catalogue.
    #[error("unknown format `{format}`")]
    UnknownFormat { format: String },

    /// The requested theme is not in the theme catalogue.
    #[error("unknown theme `{theme}`")]
    UnknownTheme { theme: String },

    /// An explicitly requested language has no registered syntax.
    #[error("unsupported language `{language}`")]
    UnsupportedLanguage { language: String },

    /// The tokenizer failed on the input.
    #[error("failed to highlight {language} source: {message}")]
    Highlight { language: String, message: String },

    /// Reading the input or writing the rendered output failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Serializing the token stream failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
