//! ANSI terminal output.
//!
//! Each line is rendered independently: styles never leak across a line
//! break, so every colored line ends with a reset.

use syntect::highlighting::Color;

use crate::highlight::{Highlighted, Token};

const RESET: &str = "\x1b[0m";

/// How many colors the target terminal understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColorDepth {
    Eight,
    Sixteen,
    Indexed256,
    TrueColor,
}

/// The xterm default values of the 16 basic colors.
const BASIC_COLORS: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

/// Channel levels of the 6x6x6 color cube in the 256-color palette.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

pub(crate) fn render(highlighted: &Highlighted, depth: ColorDepth) -> String {
    let mut out = String::new();

    for (i, line) in highlighted.lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }

        let mut active: Option<String> = None;
        for token in line {
            let desired = (!token.is_plain(highlighted.foreground)).then(|| escape(token, depth));

            match (&active, &desired) {
                (Some(a), Some(d)) if a == d => {}
                (Some(_), Some(d)) => {
                    out.push_str(RESET);
                    out.push_str(d);
                }
                (None, Some(d)) => out.push_str(d),
                (Some(_), None) => out.push_str(RESET),
                (None, None) => {}
            }
            out.push_str(&token.text);
            active = desired;
        }

        if active.is_some() {
            out.push_str(RESET);
        }
    }

    if highlighted.trailing_newline {
        out.push('\n');
    }
    out
}

/// The SGR sequence selecting a token's style.
fn escape(token: &Token, depth: ColorDepth) -> String {
    let mut params: Vec<String> = Vec::with_capacity(4);
    if token.is_bold() {
        params.push("1".to_string());
    }
    if token.is_italic() {
        params.push("3".to_string());
    }
    if token.is_underline() {
        params.push("4".to_string());
    }
    params.push(foreground(token.style.foreground, depth));
    format!("\x1b[{}m", params.join(";"))
}

fn foreground(color: Color, depth: ColorDepth) -> String {
    match depth {
        ColorDepth::TrueColor => format!("38;2;{};{};{}", color.r, color.g, color.b),
        ColorDepth::Indexed256 => format!("38;5;{}", xterm256(color)),
        ColorDepth::Sixteen => basic_sgr(nearest_basic(color, 16)).to_string(),
        ColorDepth::Eight => basic_sgr(nearest_basic(color, 8)).to_string(),
    }
}

/// SGR foreground code for a basic palette index.
fn basic_sgr(index: usize) -> usize {
    if index < 8 { 30 + index } else { 90 + index - 8 }
}

fn distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let d = |x: u8, y: u8| (i32::from(x) - i32::from(y)).unsigned_abs().pow(2);
    d(a.0, b.0) + d(a.1, b.1) + d(a.2, b.2)
}

fn nearest_basic(color: Color, count: usize) -> usize {
    let rgb = (color.r, color.g, color.b);
    BASIC_COLORS[..count]
        .iter()
        .enumerate()
        .min_by_key(|(_, candidate)| distance(rgb, **candidate))
        .map(|(index, _)| index)
        .unwrap_or(7)
}

/// Nearest entry of the 256-color palette, looking at the color cube and
/// the grayscale ramp.
fn xterm256(color: Color) -> u8 {
    let rgb = (color.r, color.g, color.b);

    let level = |channel: u8| -> usize {
        CUBE_LEVELS
            .iter()
            .enumerate()
            .min_by_key(|(_, level)| (i32::from(**level) - i32::from(channel)).unsigned_abs())
            .map(|(index, _)| index)
            .unwrap_or(0)
    };
    let (r, g, b) = (level(color.r), level(color.g), level(color.b));
    let cube_rgb = (CUBE_LEVELS[r], CUBE_LEVELS[g], CUBE_LEVELS[b]);
    let cube_index = 16 + 36 * r + 6 * g + b;

    let average = (u32::from(color.r) + u32::from(color.g) + u32::from(color.b)) / 3;
    let gray_step = (average.saturating_sub(3) / 10).min(23);
    let gray_value = (8 + 10 * gray_step) as u8;
    let gray_index = 232 + gray_step as usize;

    if distance(rgb, (gray_value, gray_value, gray_value)) < distance(rgb, cube_rgb) {
        gray_index as u8
    } else {
        cube_index as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syntect::highlighting::{FontStyle, Style};

    fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    fn token(text: &str, foreground: Color, font_style: FontStyle) -> Token {
        Token {
            style: Style {
                foreground,
                background: rgb(0, 0, 0),
                font_style,
            },
            text: text.to_string(),
        }
    }

    fn document(lines: Vec<Vec<Token>>) -> Highlighted {
        Highlighted {
            lines,
            foreground: rgb(200, 200, 200),
            background: rgb(0, 0, 0),
            trailing_newline: false,
        }
    }

    #[test]
    fn test_true_color_line() {
        let doc = document(vec![vec![
            token("fn", rgb(255, 0, 0), FontStyle::BOLD),
            token(" main", rgb(200, 200, 200), FontStyle::empty()),
        ]]);
        let out = render(&doc, ColorDepth::TrueColor);
        assert_eq!(out, "\x1b[1;38;2;255;0;0mfn\x1b[0m main");
    }

    #[test]
    fn test_style_reset_at_line_end() {
        let doc = document(vec![
            vec![token("a", rgb(255, 0, 0), FontStyle::empty())],
            vec![token("b", rgb(255, 0, 0), FontStyle::empty())],
        ]);
        let out = render(&doc, ColorDepth::Eight);
        assert_eq!(out, "\x1b[31ma\x1b[0m\n\x1b[31mb\x1b[0m");
    }

    #[test]
    fn test_plain_text_has_no_escapes() {
        let doc = document(vec![vec![token("plain", rgb(200, 200, 200), FontStyle::empty())]]);
        assert_eq!(render(&doc, ColorDepth::Indexed256), "plain");
    }

    #[test]
    fn test_basic_palette_matching() {
        assert_eq!(basic_sgr(nearest_basic(rgb(250, 5, 5), 16)), 91);
        assert_eq!(basic_sgr(nearest_basic(rgb(250, 5, 5), 8)), 31);
        assert_eq!(basic_sgr(nearest_basic(rgb(10, 10, 10), 8)), 30);
    }

    #[test]
    fn test_xterm256() {
        assert_eq!(xterm256(rgb(255, 0, 0)), 196);
        assert_eq!(xterm256(rgb(0, 0, 0)), 16);
        assert_eq!(xterm256(rgb(128, 128, 128)), 244);
    }
}
