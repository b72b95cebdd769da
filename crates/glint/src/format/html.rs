//! Standalone HTML output with inline styles.

use crate::format::escape_markup;
use crate::highlight::{Highlighted, Token, hex};

pub(crate) fn render(highlighted: &Highlighted, minified: bool) -> String {
    let background = hex(highlighted.background);
    let foreground = hex(highlighted.foreground);

    let code = highlighted
        .lines
        .iter()
        .map(|line| {
            line.iter()
                .map(|token| span(token, highlighted))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n");

    let parts = [
        "<!DOCTYPE html>".to_string(),
        "<html>".to_string(),
        "<head>".to_string(),
        "<meta charset=\"utf-8\">".to_string(),
        "</head>".to_string(),
        format!("<body style=\"background-color:{background};\">"),
        format!(
            "<pre style=\"color:{foreground};background-color:{background};\"><code>{code}</code></pre>"
        ),
        "</body>".to_string(),
        "</html>".to_string(),
    ];

    let separator = if minified { "" } else { "\n" };
    let mut html = parts.join(separator);
    if !minified {
        html.push('\n');
    }
    html
}

fn span(token: &Token, highlighted: &Highlighted) -> String {
    let text = escape_markup(&token.text);
    if token.is_plain(highlighted.foreground) {
        return text;
    }

    let mut style = format!("color:{}", hex(token.style.foreground));
    if token.is_bold() {
        style.push_str(";font-weight:bold");
    }
    if token.is_italic() {
        style.push_str(";font-style:italic");
    }
    if token.is_underline() {
        style.push_str(";text-decoration:underline");
    }
    format!("<span style=\"{style}\">{text}</span>")
}
