//! Terminal theme and color definitions

use crossterm::style::Color;

use crate::ansi::SpanColor;
use crate::theme::{StyleState, StyleVar};

/// Parse `#rrggbb` into a true-color value
pub fn hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |idx: usize| u8::from_str_radix(digits.get(idx..idx + 2)?, 16).ok();
    Some(Color::Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Colors resolved from the live style state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Color for the user prompt and `32` spans
    pub prompt: Color,
    /// Default text and `37` spans
    pub fg: Color,
    /// Color for dim/secondary info
    pub muted: Color,
    /// Banner accents
    pub cursor: Color,
    /// Bold themed text
    pub glow: bool,
}

impl Theme {
    pub fn from_style(style: &StyleState) -> Self {
        let var = |var: StyleVar, fallback: Color| {
            style.get(var).and_then(hex_color).unwrap_or(fallback)
        };
        Self {
            prompt: var(StyleVar::Prompt, Color::Green),
            fg: var(StyleVar::Fg, Color::White),
            muted: var(StyleVar::FgMuted, Color::DarkGrey),
            cursor: var(StyleVar::Cursor, Color::White),
            glow: style.glow,
        }
    }

    /// Concrete color for a span
    pub fn span_color(&self, color: SpanColor) -> Color {
        match color {
            SpanColor::Hex(hex) => hex_color(hex).unwrap_or(self.fg),
            SpanColor::Var(StyleVar::Prompt) => self.prompt,
            SpanColor::Var(StyleVar::FgMuted) => self.muted,
            SpanColor::Var(StyleVar::Cursor) => self.cursor,
            SpanColor::Var(_) => self.fg,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            prompt: Color::Green,
            fg: Color::White,
            muted: Color::DarkGrey,
            cursor: Color::White,
            glow: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryStateStore;
    use crate::theme::{ThemeEngine, ThemeName};

    #[test]
    fn test_hex_color() {
        assert_eq!(
            hex_color("#3fb950"),
            Some(Color::Rgb {
                r: 0x3f,
                g: 0xb9,
                b: 0x50
            })
        );
        assert_eq!(hex_color("3fb950"), None);
        assert_eq!(hex_color("#3fb95"), None);
        assert_eq!(hex_color("#zzzzzz"), None);
    }

    #[test]
    fn test_vars_follow_theme() {
        let mut engine = ThemeEngine::new(Box::new(MemoryStateStore::new()), ThemeName::Dark);
        let dark = Theme::from_style(engine.style());
        engine.apply(ThemeName::Matrix);
        let matrix = Theme::from_style(engine.style());

        let prompt = SpanColor::Var(StyleVar::Prompt);
        assert_ne!(dark.span_color(prompt), matrix.span_color(prompt));
        assert_eq!(matrix.span_color(prompt), hex_color("#00ff99").unwrap());

        let fixed = SpanColor::Hex("#58a6ff");
        assert_eq!(dark.span_color(fixed), matrix.span_color(fixed));
    }
}
