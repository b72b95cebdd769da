//! SVG image output.
//!
//! One `<text>` element per source line on a background rectangle. Tabs are
//! expanded to spaces since SVG text has no tab stops.

use std::fmt::Write;

use crate::format::escape_markup;
use crate::highlight::{Highlighted, Token, hex};

const FONT_FAMILY: &str = "Menlo, Consolas, 'DejaVu Sans Mono', monospace";
const FONT_SIZE: u32 = 14;
const LINE_HEIGHT: u32 = 20;
/// Advance width of one monospace cell at `FONT_SIZE`, in tenths of a pixel.
const CELL_WIDTH_TENTHS: u32 = 84;
const PADDING: u32 = 16;
const TAB_WIDTH: usize = 4;

pub(crate) fn render(highlighted: &Highlighted) -> String {
    let lines: Vec<Vec<(&Token, String)>> = highlighted
        .lines
        .iter()
        .map(|line| expand_tabs(line))
        .collect();

    let columns = lines
        .iter()
        .map(|line| line.iter().map(|(_, text)| text.chars().count()).sum::<usize>())
        .max()
        .unwrap_or(0) as u32;
    let rows = lines.len() as u32;

    let width = PADDING * 2 + (columns * CELL_WIDTH_TENTHS).div_ceil(10);
    let height = PADDING * 2 + rows * LINE_HEIGHT;

    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(svg, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>");
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );
    let _ = writeln!(
        svg,
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        hex(highlighted.background)
    );
    let _ = writeln!(
        svg,
        "<g font-family=\"{FONT_FAMILY}\" font-size=\"{FONT_SIZE}px\" fill=\"{}\" xml:space=\"preserve\">",
        hex(highlighted.foreground)
    );

    for (row, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let y = PADDING + row as u32 * LINE_HEIGHT + FONT_SIZE;
        let _ = write!(svg, "<text x=\"{PADDING}\" y=\"{y}\">");
        for (token, text) in line {
            svg.push_str(&tspan(token, text, highlighted));
        }
        svg.push_str("</text>\n");
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

/// Pair each token with its text, tabs replaced by spaces up to the next stop.
fn expand_tabs(line: &[Token]) -> Vec<(&Token, String)> {
    let mut column = 0;
    line.iter()
        .map(|token| {
            let mut text = String::with_capacity(token.text.len());
            for c in token.text.chars() {
                if c == '\t' {
                    let stop = (column / TAB_WIDTH + 1) * TAB_WIDTH;
                    text.extend(std::iter::repeat_n(' ', stop - column));
                    column = stop;
                } else {
                    text.push(c);
                    column += 1;
                }
            }
            (token, text)
        })
        .collect()
}

fn tspan(token: &Token, text: &str, highlighted: &Highlighted) -> String {
    let text = escape_markup(text);
    if token.is_plain(highlighted.foreground) {
        return text;
    }

    let mut attributes = format!("fill=\"{}\"", hex(token.style.foreground));
    if token.is_bold() {
        attributes.push_str(" font-weight=\"bold\"");
    }
    if token.is_italic() {
        attributes.push_str(" font-style=\"italic\"");
    }
    if token.is_underline() {
        attributes.push_str(" text-decoration=\"underline\"");
    }
    format!("<tspan {attributes}>{text}</tspan>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use syntect::highlighting::{Color, FontStyle, Style};

    fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    fn document() -> Highlighted {
        let keyword = Style {
            foreground: rgb(255, 0, 0),
            background: rgb(0, 0, 0),
            font_style: FontStyle::UNDERLINE,
        };
        let plain = Style {
            foreground: rgb(200, 200, 200),
            background: rgb(0, 0, 0),
            font_style: FontStyle::empty(),
        };
        Highlighted {
            lines: vec![
                vec![Token { style: keyword, text: "func".into() }],
                vec![],
                vec![Token { style: plain, text: "\tx<y".into() }],
            ],
            foreground: rgb(200, 200, 200),
            background: rgb(1, 2, 3),
            trailing_newline: true,
        }
    }

    #[test]
    fn test_svg_layout() {
        let svg = render(&document());
        // Widest line is "\tx<y": 7 cells once the tab is expanded.
        assert!(svg.contains("width=\"91\" height=\"92\""));
        assert!(svg.contains("<rect width=\"100%\" height=\"100%\" fill=\"#010203\"/>"));
        assert!(svg.contains("<text x=\"16\" y=\"30\"><tspan fill=\"#ff0000\" text-decoration=\"underline\">func</tspan></text>"));
        assert!(svg.contains("<text x=\"16\" y=\"70\">    x&lt;y</text>"));
        assert_eq!(svg.matches("<text ").count(), 2);
    }

    #[test]
    fn test_tab_stops_follow_columns() {
        let style = Style::default();
        let line = vec![
            Token { style, text: "ab".into() },
            Token { style, text: "\tc".into() },
        ];
        let expanded = expand_tabs(&line);
        assert_eq!(expanded[1].1, "  c");
    }
}
