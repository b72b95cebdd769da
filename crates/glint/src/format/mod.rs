//! The format catalogue.
//!
//! Every format turns a [`Highlighted`] document into a string, except `noop`
//! which passes the source through untouched.

mod ansi;
mod html;
mod json;
mod svg;

use std::fmt;
use std::str::FromStr;

use crate::Error;
use crate::highlight::Highlighted;

use ansi::ColorDepth;

/// An output format supported by the printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Standalone HTML document with inline styles.
    Html,
    /// Same document as [`Format::Html`] without whitespace between tags.
    HtmlMin,
    /// Token list as pretty-printed JSON.
    Json,
    /// The input, unchanged.
    Noop,
    /// SVG image of the highlighted source.
    Svg,
    /// 8-color ANSI escapes.
    Terminal,
    /// 16-color ANSI escapes.
    Terminal16,
    /// 24-bit ANSI escapes.
    Terminal16m,
    /// 256-color ANSI escapes.
    Terminal256,
    /// 8-color ANSI escapes.
    Terminal8,
}

impl Format {
    /// Every format, sorted by name.
    pub const ALL: &'static [Format] = &[
        Format::Html,
        Format::HtmlMin,
        Format::Json,
        Format::Noop,
        Format::Svg,
        Format::Terminal,
        Format::Terminal16,
        Format::Terminal16m,
        Format::Terminal256,
        Format::Terminal8,
    ];

    /// The catalogue name of this format.
    pub fn name(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::HtmlMin => "html-min",
            Format::Json => "json",
            Format::Noop => "noop",
            Format::Svg => "svg",
            Format::Terminal => "terminal",
            Format::Terminal16 => "terminal16",
            Format::Terminal16m => "terminal16m",
            Format::Terminal256 => "terminal256",
            Format::Terminal8 => "terminal8",
        }
    }

    /// Render highlighted source in this format.
    pub(crate) fn render(self, source: &str, highlighted: &Highlighted) -> Result<String, Error> {
        let rendered = match self {
            Format::Html => html::render(highlighted, false),
            Format::HtmlMin => html::render(highlighted, true),
            Format::Json => json::render(highlighted)?,
            Format::Svg => svg::render(highlighted),
            Format::Terminal | Format::Terminal8 => ansi::render(highlighted, ColorDepth::Eight),
            Format::Terminal16 => ansi::render(highlighted, ColorDepth::Sixteen),
            Format::Terminal256 => ansi::render(highlighted, ColorDepth::Indexed256),
            Format::Terminal16m => ansi::render(highlighted, ColorDepth::TrueColor),
            Format::Noop => source.to_string(),
        };
        Ok(rendered)
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .iter()
            .copied()
            .find(|format| format.name() == name)
            .ok_or_else(|| Error::UnknownFormat {
                format: name.to_string(),
            })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Escape text for HTML and SVG output.
pub(crate) fn escape_markup(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_sorted_and_unique() {
        let names: Vec<_> = Format::ALL.iter().map(|f| f.name()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_parse_round_trips_names() {
        for format in Format::ALL {
            assert_eq!(format.name().parse::<Format>().unwrap(), *format);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "terminal9000".parse::<Format>().unwrap_err();
        assert!(matches!(err, Error::UnknownFormat { format } if format == "terminal9000"));
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape_markup("<a href='x'>&\"</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&quot;&lt;/a&gt;");
    }
}
