//! Tokenizing source into styled lines.
//!
//! Renderers never see the tokenizer directly: they get a [`Highlighted`]
//! document where each line is a list of [`Token`]s and adjacent tokens
//! sharing a style have already been merged.

use syntect::easy::HighlightLines;
use syntect::highlighting::{Color, FontStyle, Style, Theme};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::Error;

/// A run of text sharing one style. Never contains a line break.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub style: Style,
    pub text: String,
}

impl Token {
    pub fn is_bold(&self) -> bool {
        self.style.font_style.contains(FontStyle::BOLD)
    }

    pub fn is_italic(&self) -> bool {
        self.style.font_style.contains(FontStyle::ITALIC)
    }

    pub fn is_underline(&self) -> bool {
        self.style.font_style.contains(FontStyle::UNDERLINE)
    }

    /// True when the token looks exactly like unstyled text.
    pub fn is_plain(&self, foreground: Color) -> bool {
        self.style.foreground == foreground && self.style.font_style.is_empty()
    }
}

/// Highlighted source, ready for a renderer.
#[derive(Debug, Clone)]
pub(crate) struct Highlighted {
    pub lines: Vec<Vec<Token>>,
    /// Theme foreground, used for text without a more specific color.
    pub foreground: Color,
    /// Theme background.
    pub background: Color,
    /// Whether the source ended with a line break.
    pub trailing_newline: bool,
}

pub(crate) fn highlight(
    source: &str,
    syntax: &SyntaxReference,
    syntaxes: &SyntaxSet,
    theme: &Theme,
) -> Result<Highlighted, Error> {
    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut lines = Vec::new();

    for line in LinesWithEndings::from(source) {
        let ranges = highlighter
            .highlight_line(line, syntaxes)
            .map_err(|e| Error::Highlight {
                language: syntax.name.clone(),
                message: e.to_string(),
            })?;
        lines.push(coalesce(ranges));
    }

    Ok(Highlighted {
        lines,
        foreground: theme.settings.foreground.unwrap_or(Color::BLACK),
        background: theme.settings.background.unwrap_or(Color::WHITE),
        trailing_newline: source.ends_with('\n'),
    })
}

/// Drop line endings and merge adjacent ranges with the same style.
fn coalesce(ranges: Vec<(Style, &str)>) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::with_capacity(ranges.len());

    for (style, text) in ranges {
        let text = text.trim_end_matches(['\r', '\n']);
        if text.is_empty() {
            continue;
        }
        if let Some(last) = tokens.last_mut() {
            if last.style == style {
                last.text.push_str(text);
                continue;
            }
        }
        tokens.push(Token {
            style,
            text: text.to_string(),
        });
    }

    tokens
}

/// `#rrggbb` for a color, alpha ignored.
pub(crate) fn hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}
