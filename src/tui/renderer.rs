//! Terminal rendering of shell output

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

use super::theme::Theme;
use crate::ansi::{self, Span};
use crate::theme::StyleState;

/// Prints dispatcher output with theme-resolved colors
pub struct TerminalRenderer {
    theme: Theme,
    color: bool,
}

impl TerminalRenderer {
    pub fn new(color: bool) -> Self {
        Self {
            theme: Theme::default(),
            color,
        }
    }

    /// Re-resolve colors after a theme change
    pub fn set_style(&mut self, style: &StyleState) {
        self.theme = Theme::from_style(style);
    }

    /// Convert text with SGR codes into terminal escape sequences
    pub fn format(&self, text: &str) -> String {
        if !self.color {
            return ansi::strip(text);
        }
        ansi::render(text)
            .iter()
            .map(|span| self.format_span(span))
            .collect()
    }

    fn format_span(&self, span: &Span) -> String {
        let style = span.style;
        let color = style
            .color
            .map(|c| self.theme.span_color(c))
            .unwrap_or(self.theme.fg);

        let mut styled = span.text.as_str().with(color);
        if style.bold || (self.theme.glow && style.color.is_some()) {
            styled = styled.bold();
        }
        if style.dim {
            styled = styled.dim();
        }
        styled.to_string()
    }

    /// Render the welcome banner
    pub fn render_banner(&self, version: &str, host: &str, theme: &str) {
        println!();
        self.print_accent(&format!("  termfolio {}", version));
        self.render_info(&format!("Connected to {} (theme: {})", host, theme));
        self.render_info("Type 'help' for commands, 'exit' to leave");
        println!();
    }

    /// Render one dispatcher output entry
    pub fn render_output(&self, text: &str) {
        println!("{}", self.format(text));
    }

    /// Render info text
    pub fn render_info(&self, msg: &str) {
        if self.color {
            println!("{}", msg.with(self.theme.muted));
        } else {
            println!("{}", msg);
        }
    }

    fn print_accent(&self, msg: &str) {
        if self.color {
            println!("{}", msg.with(self.theme.cursor).bold());
        } else {
            println!("{}", msg);
        }
    }

    /// Print the prompt without a trailing newline
    pub fn render_prompt(&self, prompt: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", self.format(prompt))?;
        stdout.flush()
    }

    /// Wipe the screen and home the cursor
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
    }
}
