//! JSON token list.

use serde::Serialize;

use crate::Error;
use crate::highlight::{Highlighted, hex};

#[derive(Debug, Serialize)]
struct JsonToken<'a> {
    line: usize,
    text: &'a str,
    color: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    bold: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    italic: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    underline: bool,
}

pub(crate) fn render(highlighted: &Highlighted) -> Result<String, Error> {
    let tokens: Vec<JsonToken<'_>> = highlighted
        .lines
        .iter()
        .enumerate()
        .flat_map(|(index, line)| {
            line.iter().map(move |token| JsonToken {
                line: index + 1,
                text: &token.text,
                color: hex(token.style.foreground),
                bold: token.is_bold(),
                italic: token.is_italic(),
                underline: token.is_underline(),
            })
        })
        .collect();

    Ok(serde_json::to_string_pretty(&tokens)?)
}
