//! Per-theme ANSI palettes for command output

use super::ThemeName;

pub const BOLD: u8 = 1;
pub const RESET: u8 = 0;

/// SGR foreground codes per output category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Labels for personal info
    pub personal: u8,
    /// Labels for system info
    pub system: u8,
    /// Resume sections and help grouping
    pub resume: u8,
    /// Theme commands
    pub theme: u8,
    /// Neofetch and highlighted text
    pub special: u8,
    pub file: u8,
    pub dir: u8,
    pub dim: u8,
}

impl Palette {
    pub fn for_theme(theme: ThemeName) -> Self {
        match theme {
            ThemeName::Matrix => Self {
                personal: 96,
                system: 92,
                resume: 32,
                theme: 93,
                special: 95,
                file: 92,
                dir: 36,
                dim: 90,
            },
            ThemeName::Light => Self {
                personal: 35,
                system: 34,
                resume: 32,
                theme: 33,
                special: 95,
                file: 32,
                dir: 34,
                dim: 90,
            },
            // grayscale: categories differ by weight only
            ThemeName::Mono => Self {
                personal: 97,
                system: 97,
                resume: 97,
                theme: 97,
                special: 97,
                file: 97,
                dir: 97,
                dim: 90,
            },
            ThemeName::Solarized => Self {
                personal: 36,
                system: 33,
                resume: 32,
                theme: 35,
                special: 94,
                file: 32,
                dir: 36,
                dim: 90,
            },
            ThemeName::Dark | ThemeName::Ultraviolet => Self {
                personal: 36,
                system: 33,
                resume: 32,
                theme: 35,
                special: 95,
                file: 32,
                dir: 34,
                dim: 90,
            },
        }
    }

    /// `text` in bold with the given color code
    pub fn label(&self, code: u8, text: &str) -> String {
        format!("\x1b[{};{}m{}\x1b[{}m", BOLD, code, text, RESET)
    }

    /// `text` in the given color code
    pub fn paint(&self, code: u8, text: &str) -> String {
        format!("\x1b[{}m{}\x1b[{}m", code, text, RESET)
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(self.dim, text)
    }

    /// Dimmed bullet followed by `text`
    pub fn bullet(&self, text: &str) -> String {
        format!("{} {}", self.dim("\u{2022}"), text)
    }

    /// Every category with its name, in display order
    pub fn categories(&self) -> [(&'static str, u8); 8] {
        [
            ("personal", self.personal),
            ("system", self.system),
            ("resume", self.resume),
            ("theme", self.theme),
            ("special", self.special),
            ("file", self.file),
            ("dir", self.dir),
            ("dim", self.dim),
        ]
    }
}
