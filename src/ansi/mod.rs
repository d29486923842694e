//! ANSI SGR rendering
//!
//! Splits text carrying `ESC [ <params> m` sequences into styled spans. Only
//! weight, dim and foreground color are tracked; every other sequence is
//! consumed silently.

use vte::{Params, Parser, Perform};

use crate::theme::StyleVar;

/// Foreground color of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanColor {
    /// Fixed `#rrggbb` value
    Hex(&'static str),
    /// Follows the active theme's style variable
    Var(StyleVar),
}

/// Accumulated SGR state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanStyle {
    pub bold: bool,
    pub dim: bool,
    pub color: Option<SpanColor>,
}

impl SpanStyle {
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// A run of text sharing one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

/// Color for a foreground SGR code
pub fn color_for_code(code: u16) -> Option<SpanColor> {
    let color = match code {
        30 => SpanColor::Hex("#6e7681"),
        31 => SpanColor::Hex("#ff7b72"),
        32 => SpanColor::Var(StyleVar::Prompt),
        33 => SpanColor::Hex("#e3b341"),
        34 => SpanColor::Hex("#58a6ff"),
        35 => SpanColor::Hex("#d2a8ff"),
        36 => SpanColor::Hex("#39c5cf"),
        37 => SpanColor::Var(StyleVar::Fg),
        90 => SpanColor::Hex("#8b949e"),
        91 => SpanColor::Hex("#ffaba8"),
        92 => SpanColor::Hex("#56d364"),
        93 => SpanColor::Hex("#e3b341"),
        94 => SpanColor::Hex("#79c0ff"),
        95 => SpanColor::Hex("#d2a8ff"),
        96 => SpanColor::Hex("#56d4dd"),
        97 => SpanColor::Hex("#ffffff"),
        _ => return None,
    };
    Some(color)
}

struct SpanCollector {
    spans: Vec<Span>,
    current: String,
    style: SpanStyle,
}

impl SpanCollector {
    fn new() -> Self {
        Self {
            spans: Vec::new(),
            current: String::new(),
            style: SpanStyle::default(),
        }
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.spans.push(Span {
                text: std::mem::take(&mut self.current),
                style: self.style,
            });
        }
    }

    fn apply_sgr(&mut self, params: &Params) {
        let codes: Vec<u16> = params.iter().map(|p| p[0]).collect();
        if codes.is_empty() {
            self.style = SpanStyle::default();
            return;
        }
        for code in codes {
            match code {
                0 => self.style = SpanStyle::default(),
                1 => self.style.bold = true,
                2 => self.style.dim = true,
                other => {
                    if let Some(color) = color_for_code(other) {
                        self.style.color = Some(color);
                    }
                }
            }
        }
    }
}

impl Perform for SpanCollector {
    fn print(&mut self, ch: char) {
        self.current.push(ch);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            b'\n' => self.current.push('\n'),
            b'\t' => self.current.push('\t'),
            _ => {}
        }
    }

    fn csi_dispatch(&mut self, params: &Params, _ints: &[u8], _ignore: bool, action: char) {
        if action != 'm' {
            return;
        }
        self.flush();
        self.apply_sgr(params);
    }
}

/// Split `text` into styled spans; never yields empty spans
pub fn render(text: &str) -> Vec<Span> {
    let mut collector = SpanCollector::new();
    let mut parser = Parser::new();
    parser.advance(&mut collector, text.as_bytes());
    collector.flush();
    collector.spans
}

/// Text with every escape sequence removed
pub fn strip(text: &str) -> String {
    render(text).into_iter().map(|span| span.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_colored_span() {
        let spans = render("\x1b[32mOK\x1b[0m");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "OK");
        assert_eq!(spans[0].style.color, Some(SpanColor::Var(StyleVar::Prompt)));
        assert!(!spans[0].style.bold);
    }

    #[test]
    fn test_plain_text() {
        let spans = render("hello world");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "hello world");
        assert!(spans[0].style.is_plain());
    }

    #[test]
    fn test_empty_input() {
        assert!(render("").is_empty());
    }

    #[test]
    fn test_consecutive_escapes() {
        let spans = render("\x1b[1m\x1b[34mdir/\x1b[0m\x1b[m rest");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "dir/");
        assert!(spans[0].style.bold);
        assert_eq!(spans[0].style.color, Some(SpanColor::Hex("#58a6ff")));
        assert_eq!(spans[1].text, " rest");
        assert!(spans[1].style.is_plain());
    }

    #[test]
    fn test_multiple_codes() {
        let spans = render("\x1b[1;2;95mName\x1b[0m: Alex");
        assert_eq!(spans[0].text, "Name");
        assert!(spans[0].style.bold);
        assert!(spans[0].style.dim);
        assert_eq!(spans[0].style.color, Some(SpanColor::Hex("#d2a8ff")));
        assert_eq!(spans[1].text, ": Alex");
    }

    #[test]
    fn test_bare_reset() {
        let spans = render("\x1b[1mA\x1b[mB");
        assert!(spans[0].style.bold);
        assert!(spans[1].style.is_plain());
    }

    #[test]
    fn test_unknown_codes_ignored() {
        let spans = render("\x1b[4;31mX");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].style.color, Some(SpanColor::Hex("#ff7b72")));
        assert!(!spans[0].style.bold);
    }

    #[test]
    fn test_style_accumulates() {
        let spans = render("\x1b[1ma\x1b[36mb");
        assert_eq!(spans.len(), 2);
        assert!(spans[1].style.bold);
        assert_eq!(spans[1].style.color, Some(SpanColor::Hex("#39c5cf")));
    }

    #[test]
    fn test_newlines_and_unicode_preserved() {
        let text = "├── \x1b[34ma/\x1b[0m\n└── b";
        assert_eq!(strip(text), "├── a/\n└── b");
    }
}
