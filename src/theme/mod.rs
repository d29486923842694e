//! Theme engine
//!
//! A theme is a set of style variable values. Applying one pushes every
//! value into the live [`StyleState`] and persists the theme name. The
//! `ultraviolet` theme is gated behind an unlock flag.

mod palette;

pub use palette::{Palette, BOLD, RESET};

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

use crate::state::{self, PersistedState, StateStore};

/// Fixed set of themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeName {
    Dark,
    Light,
    Matrix,
    Mono,
    Solarized,
    Ultraviolet,
}

impl ThemeName {
    pub const ALL: [ThemeName; 6] = [
        ThemeName::Dark,
        ThemeName::Light,
        ThemeName::Matrix,
        ThemeName::Mono,
        ThemeName::Solarized,
        ThemeName::Ultraviolet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Dark => "dark",
            ThemeName::Light => "light",
            ThemeName::Matrix => "matrix",
            ThemeName::Mono => "mono",
            ThemeName::Solarized => "solarized",
            ThemeName::Ultraviolet => "ultraviolet",
        }
    }

    /// Whether the theme must be unlocked before use
    pub fn is_gated(&self) -> bool {
        matches!(self, ThemeName::Ultraviolet)
    }

    /// Style variable values, in [`StyleVar::ALL`] order
    pub fn values(&self) -> [&'static str; 12] {
        match self {
            ThemeName::Dark => [
                "#161b22", "#30363d", "#e6edf3", "#94a3b8", "#3fb950", "#e6edf3", "#20262e",
                "#1a2027", "#586069", "#30363d", "#484f58", "#0d1117",
            ],
            ThemeName::Light => [
                "#ffffff", "#d0d7de", "#24292f", "#57606a", "#0969da", "#24292f", "#f6f8fa",
                "#eaeef2", "#57606a", "#d0d7de", "#afb8c1", "#f0f2f4",
            ],
            ThemeName::Matrix => [
                "#000000", "#003300", "#00ff66", "#009944", "#00ff99", "#00ff66", "#001a00",
                "#001300", "#008833", "#003300", "#005500", "#000000",
            ],
            ThemeName::Mono => [
                "#1b1b1b", "#333333", "#f0f0f0", "#b5b5b5", "#f0f0f0", "#ffffff", "#262626",
                "#1f1f1f", "#9a9a9a", "#333333", "#4a4a4a", "#121212",
            ],
            ThemeName::Solarized => [
                "#002b36", "#073642", "#eee8d5", "#93a1a1", "#b58900", "#eee8d5", "#073642",
                "#002b36", "#93a1a1", "#073642", "#586e75", "#001f27",
            ],
            ThemeName::Ultraviolet => [
                "#120019", "#3d0d52", "#f5e9ff", "#bfa3d4", "#d66bff", "#ffb3ff", "#22072e",
                "#170520", "#a87fc2", "#3d0d52", "#5a1478", "#0b0010",
            ],
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeName::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or(())
    }
}

/// Named style variables a theme assigns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleVar {
    Bg,
    Border,
    Fg,
    FgMuted,
    Prompt,
    Cursor,
    TitlebarBg1,
    TitlebarBg2,
    FooterFg,
    Scrollbar,
    ScrollbarHover,
    PageBg,
}

impl StyleVar {
    pub const ALL: [StyleVar; 12] = [
        StyleVar::Bg,
        StyleVar::Border,
        StyleVar::Fg,
        StyleVar::FgMuted,
        StyleVar::Prompt,
        StyleVar::Cursor,
        StyleVar::TitlebarBg1,
        StyleVar::TitlebarBg2,
        StyleVar::FooterFg,
        StyleVar::Scrollbar,
        StyleVar::ScrollbarHover,
        StyleVar::PageBg,
    ];

    pub fn css_name(&self) -> &'static str {
        match self {
            StyleVar::Bg => "--term-bg",
            StyleVar::Border => "--term-border",
            StyleVar::Fg => "--term-fg",
            StyleVar::FgMuted => "--term-fg-muted",
            StyleVar::Prompt => "--term-prompt",
            StyleVar::Cursor => "--term-cursor",
            StyleVar::TitlebarBg1 => "--term-titlebar-bg1",
            StyleVar::TitlebarBg2 => "--term-titlebar-bg2",
            StyleVar::FooterFg => "--term-footer-fg",
            StyleVar::Scrollbar => "--term-scrollbar",
            StyleVar::ScrollbarHover => "--term-scrollbar-hover",
            StyleVar::PageBg => "--page-bg",
        }
    }
}

/// Live style values consumed by the display
#[derive(Debug, Clone, Default)]
pub struct StyleState {
    vars: HashMap<StyleVar, &'static str>,
    /// Glow embellishment, on only for ultraviolet
    pub glow: bool,
}

impl StyleState {
    pub fn get(&self, var: StyleVar) -> Option<&'static str> {
        self.vars.get(&var).copied()
    }

    fn set(&mut self, var: StyleVar, value: &'static str) {
        self.vars.insert(var, value);
    }
}

/// Applies themes and tracks the unlock flag
pub struct ThemeEngine {
    current: ThemeName,
    unlocked: bool,
    style: StyleState,
    store: Box<dyn StateStore>,
}

impl ThemeEngine {
    /// Restore persisted state, falling back to `default_theme`
    pub fn new(store: Box<dyn StateStore>, default_theme: ThemeName) -> Self {
        let saved = state::load_or_default(store.as_ref());
        let mut engine = Self {
            current: default_theme,
            unlocked: saved.unlocked,
            style: StyleState::default(),
            store,
        };

        let theme = saved
            .theme
            .as_deref()
            .and_then(|name| name.parse::<ThemeName>().ok())
            .filter(|theme| engine.is_available(*theme))
            .unwrap_or(default_theme);
        engine.push_style(theme);
        engine
    }

    /// Apply `theme` and persist its name
    pub fn apply(&mut self, theme: ThemeName) -> String {
        self.push_style(theme);
        info!("Applied theme {}", theme);
        self.persist();
        format!("Theme set to {}", theme)
    }

    /// Apply a theme by user-supplied name
    ///
    /// Gated themes are reported as missing until unlocked.
    pub fn apply_named(&mut self, name: &str) -> String {
        match name.parse::<ThemeName>() {
            Ok(theme) if self.is_available(theme) => self.apply(theme),
            _ => format!("Theme not found: {}", name),
        }
    }

    /// Set the unlock flag and persist it; never reset afterwards
    pub fn unlock(&mut self) {
        if !self.unlocked {
            info!("Hidden theme unlocked");
        }
        self.unlocked = true;
        self.persist();
    }

    pub fn current(&self) -> ThemeName {
        self.current
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn is_available(&self, theme: ThemeName) -> bool {
        !theme.is_gated() || self.unlocked
    }

    /// Themes the user may list and select
    pub fn available(&self) -> Vec<ThemeName> {
        ThemeName::ALL
            .into_iter()
            .filter(|theme| self.is_available(*theme))
            .collect()
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.current)
    }

    pub fn style(&self) -> &StyleState {
        &self.style
    }

    fn push_style(&mut self, theme: ThemeName) {
        for (var, value) in StyleVar::ALL.into_iter().zip(theme.values()) {
            self.style.set(var, value);
        }
        self.style.glow = theme == ThemeName::Ultraviolet;
        self.current = theme;
    }

    fn persist(&self) {
        let state = PersistedState {
            theme: Some(self.current.to_string()),
            unlocked: self.unlocked,
        };
        if let Err(e) = self.store.save(&state) {
            warn!("Failed to persist shell state: {}", e);
        }
    }
}
