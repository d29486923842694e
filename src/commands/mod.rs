//! Static command table
//!
//! Table commands take no arguments. Each one renders text with embedded
//! ANSI codes from a [`RenderContext`] describing the current session.

pub mod fortune;
pub mod neofetch;
pub mod resume;

use chrono::{DateTime, Local};
use std::collections::BTreeMap;

use crate::profile::Profile;
use crate::theme::{Palette, ThemeName};

/// Everything a command or file needs to render its text
pub struct RenderContext<'a> {
    pub profile: &'a Profile,
    pub theme: ThemeName,
    pub palette: Palette,
    pub now: DateTime<Local>,
}

impl<'a> RenderContext<'a> {
    pub fn new(profile: &'a Profile, theme: ThemeName, now: DateTime<Local>) -> Self {
        Self {
            profile,
            theme,
            palette: Palette::for_theme(theme),
            now,
        }
    }
}

pub type CommandFn = fn(&RenderContext<'_>) -> String;

/// Command name to renderer mapping
pub struct CommandTable {
    entries: BTreeMap<&'static str, CommandFn>,
}

impl CommandTable {
    pub fn new() -> Self {
        let mut table = Self {
            entries: BTreeMap::new(),
        };
        table.register("help", help);
        table.register("palette", palette);
        table.register("theme", theme_status);
        table.register("neofetch", neofetch::neofetch);
        table.register("about", resume::about);
        table.register("summary", resume::summary);
        table.register("skills", resume::skills);
        table.register("stack", resume::skills);
        table.register("experience", resume::experience);
        table.register("education", resume::education);
        table.register("projects", resume::projects);
        table.register("certs", resume::certs);
        table.register("social", resume::social);
        table.register("contact", resume::contact);
        table.register("whoami", whoami);
        table.register("date", date);
        table
    }

    pub fn register(&mut self, name: &'static str, command: CommandFn) {
        self.entries.insert(name, command);
    }

    /// Look up by lowercase name
    pub fn get(&self, name: &str) -> Option<CommandFn> {
        self.entries.get(name).copied()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
enum HelpCategory {
    System,
    Theme,
    Special,
    Resume,
}

const HELP_ROWS: [(&str, &str, HelpCategory); 25] = [
    ("help", "Show this help", HelpCategory::System),
    ("clear", "Clear screen", HelpCategory::System),
    ("date", "Show current date", HelpCategory::System),
    ("pwd", "Print working directory", HelpCategory::System),
    ("ls [path]", "List directory contents", HelpCategory::System),
    ("tree [path]", "Recursive directory listing", HelpCategory::System),
    ("cd <dir>", "Change directory (.., ., ~ supported)", HelpCategory::System),
    ("cat <file>", "Print file contents", HelpCategory::System),
    ("8ball <q>", "Magic 8-Ball answer", HelpCategory::Special),
    ("neofetch", "Profile/system summary", HelpCategory::Special),
    ("palette", "Show active ANSI palette", HelpCategory::Theme),
    ("theme list", "List available themes", HelpCategory::Theme),
    ("theme set <name>", "Switch theme", HelpCategory::Theme),
    (
        "unlock-theme <name>",
        "Unlock hidden theme (look around for the key!)",
        HelpCategory::Theme,
    ),
    ("about", "Brief profile + summary", HelpCategory::Resume),
    ("summary", "One-line summary", HelpCategory::Resume),
    ("skills", "Detailed skills listing", HelpCategory::Resume),
    ("stack", "Alias of skills", HelpCategory::Resume),
    ("experience", "Experience entries", HelpCategory::Resume),
    ("education", "Education history", HelpCategory::Resume),
    ("projects", "Project highlights", HelpCategory::Resume),
    ("certs", "Certifications list", HelpCategory::Resume),
    ("social", "Social links", HelpCategory::Resume),
    ("contact", "Contact info", HelpCategory::Resume),
    ("whoami", "Display username", HelpCategory::Resume),
];

pub fn help(ctx: &RenderContext<'_>) -> String {
    let pal = &ctx.palette;
    let width = HELP_ROWS.iter().map(|(cmd, _, _)| cmd.len()).max().unwrap_or(0);

    let mut lines = vec![pal.label(pal.personal, "Commands"), String::new()];
    for (cmd, desc, category) in HELP_ROWS {
        let code = match category {
            HelpCategory::System => pal.system,
            HelpCategory::Theme => pal.theme,
            HelpCategory::Special => pal.special,
            HelpCategory::Resume => pal.resume,
        };
        lines.push(format!(
            "  {}  {}",
            pal.label(code, &format!("{:<width$}", cmd, width = width)),
            desc
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "Type {} for an overview, or explore the virtual FS with {}, {}, {}",
        pal.label(pal.special, "neofetch"),
        pal.label(pal.system, "ls"),
        pal.label(pal.system, "tree"),
        pal.label(pal.system, "cat readme.txt"),
    ));
    lines.join("\n")
}

pub fn palette(ctx: &RenderContext<'_>) -> String {
    let pal = &ctx.palette;
    let mut lines = vec![format!("Theme: {}", ctx.theme)];
    for (name, code) in pal.categories() {
        lines.push(format!("{} -> {}", pal.label(code, name), code));
    }
    lines.join("\n")
}

/// Current theme plus `theme` usage
pub fn theme_status(ctx: &RenderContext<'_>) -> String {
    [
        format!("Current theme: {}", ctx.theme),
        "Usage:".to_string(),
        "  theme list            # list themes".to_string(),
        "  theme set <name>      # switch theme".to_string(),
    ]
    .join("\n")
}

pub fn whoami(ctx: &RenderContext<'_>) -> String {
    ctx.profile.name.clone()
}

pub fn date(ctx: &RenderContext<'_>) -> String {
    ctx.now.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
}
