//! Command dispatcher
//!
//! Maps a raw input line to output lines and session state changes. Built-in
//! filesystem and theme commands take precedence over the static command
//! table. Errors never escape: each one becomes an output line.

mod error;
mod history;
mod listing;
mod parse;

pub use error::ShellError;
pub use history::{CommandHistory, EntryKind, Transcript, TranscriptEntry};
pub use parse::{parse_command, ShellCommand, ThemeAction};

use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::commands::{fortune, theme_status, CommandTable, RenderContext};
use crate::fs::{self, resolve, Node, KEY_FILE};
use crate::profile::Profile;
use crate::theme::{ThemeEngine, ThemeName};

const UNLOCK_USAGE: &str = "Usage: unlock-theme <name> (after discovering a key file)";
const THEME_SET_USAGE: &str = "Specify a theme name. Usage: theme set <name>";
const THEME_USAGE: &str = "Unknown theme subcommand. Use: theme list | theme set <name>";

/// Result of one submitted line
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Output entries in order; each may span several lines
    pub lines: Vec<String>,
    /// The display should be wiped
    pub clear: bool,
}

/// One interactive session
pub struct Shell {
    profile: Profile,
    root: Node,
    cwd: Vec<String>,
    transcript: Transcript,
    history: CommandHistory,
    themes: ThemeEngine,
    table: CommandTable,
    rng: StdRng,
    /// The key file was printed since the last `clear`
    key_seen: bool,
}

impl Shell {
    pub fn new(profile: Profile, themes: ThemeEngine) -> Self {
        let root = Node::Dir(fs::build(&profile));
        Self {
            profile,
            root,
            cwd: Vec::new(),
            transcript: Transcript::default(),
            history: CommandHistory::new(),
            themes,
            table: CommandTable::new(),
            rng: StdRng::from_entropy(),
            key_seen: false,
        }
    }

    /// Use a fixed seed for `8ball`
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// `~` or `~/a/b`
    pub fn cwd_display(&self) -> String {
        if self.cwd.is_empty() {
            "~".to_string()
        } else {
            format!("~/{}", self.cwd.join("/"))
        }
    }

    /// Colored `user@host:path$ ` prompt
    pub fn prompt(&self) -> String {
        format!(
            "\x1b[32m{}\x1b[0m@\x1b[34m{}\x1b[0m:\x1b[36m{}\x1b[0m$ ",
            self.profile.shell_user,
            self.profile.host,
            self.cwd_display()
        )
    }

    pub fn cwd(&self) -> &[String] {
        &self.cwd
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn themes(&self) -> &ThemeEngine {
        &self.themes
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    fn context(&self) -> RenderContext<'_> {
        RenderContext::new(&self.profile, self.themes.current(), Local::now())
    }

    /// Run one input line
    pub fn execute(&mut self, raw: &str) -> Execution {
        let prompt = self.prompt();
        self.history.push(raw);

        let input = raw.trim();
        let command = parse_command(input);
        debug!("Dispatching {:?}", command);

        if command == ShellCommand::Empty {
            self.transcript.push_command(prompt);
            return Execution::default();
        }
        self.transcript.push_command(format!("{}{}", prompt, input));

        if command == ShellCommand::Clear {
            self.transcript.clear();
            self.key_seen = false;
            return Execution {
                lines: Vec::new(),
                clear: true,
            };
        }

        let lines: Vec<String> = match self.dispatch(command, input) {
            Ok(Some(text)) => vec![text],
            Ok(None) => Vec::new(),
            Err(e) => vec![e.to_string()],
        };
        for line in &lines {
            self.transcript.push_output(line.clone());
        }
        Execution {
            lines,
            clear: false,
        }
    }

    fn dispatch(&mut self, command: ShellCommand, input: &str) -> error::Result<Option<String>> {
        match command {
            ShellCommand::Empty | ShellCommand::Clear => Ok(None),
            ShellCommand::Pwd => Ok(Some(listing::pwd(&self.profile.shell_user, &self.cwd))),
            ShellCommand::Cd(None) => {
                self.cwd.clear();
                Ok(None)
            }
            ShellCommand::Cd(Some(target)) => {
                self.cwd = listing::change_dir(&self.root, &self.cwd, &target)?;
                Ok(None)
            }
            ShellCommand::UnlockTheme(name) => self.unlock_theme(name).map(Some),
            ShellCommand::EightBall(question) => {
                if !fortune::is_question(&question) {
                    return Err(ShellError::Usage(fortune::USAGE));
                }
                Ok(Some(fortune::answer(&mut self.rng).to_string()))
            }
            ShellCommand::Ls(target) => {
                listing::ls(&self.root, &self.cwd, &target, &self.themes.palette()).map(Some)
            }
            ShellCommand::Tree(target) => {
                listing::tree(&self.root, &self.cwd, &target, &self.themes.palette()).map(Some)
            }
            ShellCommand::Cat(path) => {
                let ctx = self.context();
                let text = listing::cat(&self.root, &self.cwd, &path, &ctx)?;
                if resolve(&self.root, &self.cwd, &path).node.map(Node::name) == Some(KEY_FILE) {
                    self.key_seen = true;
                }
                Ok(Some(text))
            }
            ShellCommand::Theme(action) => self.theme(action).map(Some),
            ShellCommand::Table(name) => {
                let command = self
                    .table
                    .get(&name)
                    .ok_or_else(|| ShellError::CommandNotFound(input.to_string()))?;
                let text = command(&self.context());
                Ok((!text.is_empty()).then_some(text))
            }
            ShellCommand::Unknown => Err(ShellError::CommandNotFound(input.to_string())),
        }
    }

    fn unlock_theme(&mut self, name: Option<String>) -> error::Result<String> {
        let name = name.ok_or(ShellError::Usage(UNLOCK_USAGE))?;
        let theme = name
            .parse::<ThemeName>()
            .ok()
            .filter(ThemeName::is_gated)
            .ok_or_else(|| ShellError::UnknownHiddenTheme(name.clone()))?;

        if !self.key_seen {
            return Err(ShellError::KeyNotDiscovered);
        }
        info!("Unlocking theme {}", theme);
        self.themes.unlock();
        Ok(self.themes.apply(theme))
    }

    fn theme(&mut self, action: ThemeAction) -> error::Result<String> {
        match action {
            ThemeAction::Show => Ok(theme_status(&self.context())),
            ThemeAction::List => Ok(self
                .themes
                .available()
                .iter()
                .map(ThemeName::as_str)
                .collect::<Vec<_>>()
                .join("\n")),
            ThemeAction::Set(None) => Err(ShellError::Usage(THEME_SET_USAGE)),
            ThemeAction::Set(Some(name)) => Ok(self.themes.apply_named(&name)),
            ThemeAction::Invalid => Err(ShellError::Usage(THEME_USAGE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi;
    use crate::fs::KEY_MARKER;
    use crate::state::MemoryStateStore;

    fn shell() -> (Shell, MemoryStateStore) {
        let store = MemoryStateStore::new();
        let themes = ThemeEngine::new(Box::new(store.clone()), ThemeName::Dark);
        (Shell::new(Profile::default(), themes).with_seed(1), store)
    }

    fn run(shell: &mut Shell, line: &str) -> String {
        ansi::strip(&shell.execute(line).lines.join("\n"))
    }

    #[test]
    fn test_empty_input_echoes_prompt_only() {
        let (mut shell, _) = shell();
        let exec = shell.execute("   ");
        assert!(exec.lines.is_empty());
        assert_eq!(shell.transcript().entries().len(), 1);
        assert_eq!(shell.transcript().entries()[0].text, shell.prompt());
        assert!(shell.history().is_empty());
    }

    #[test]
    fn test_clear_wipes_transcript() {
        let (mut shell, _) = shell();
        shell.execute("whoami");
        let exec = shell.execute("clear");
        assert!(exec.clear);
        assert!(shell.transcript().entries().is_empty());
    }

    #[test]
    fn test_pwd_and_cd() {
        let (mut shell, _) = shell();
        assert_eq!(run(&mut shell, "pwd"), "/home/alex");

        assert!(shell.execute("cd projects/lumen").lines.is_empty());
        assert_eq!(shell.cwd_display(), "~/projects/lumen");
        assert_eq!(run(&mut shell, "pwd"), "/home/alex/projects/lumen");

        shell.execute("cd ..");
        assert_eq!(shell.cwd(), ["projects"]);

        shell.execute("CD");
        assert!(shell.cwd().is_empty());
    }

    #[test]
    fn test_cd_failure_keeps_cwd() {
        let (mut shell, _) = shell();
        shell.execute("cd skills");
        assert_eq!(
            run(&mut shell, "cd frontend/missing"),
            "bash: cd: frontend/missing: No such file or directory"
        );
        assert_eq!(shell.cwd(), ["skills"]);

        assert_eq!(
            run(&mut shell, "cd skills.txt"),
            "bash: cd: skills.txt: No such file or directory"
        );
        assert_eq!(shell.cwd(), ["skills"]);
    }

    #[test]
    fn test_cat() {
        let (mut shell, _) = shell();
        assert_eq!(run(&mut shell, "cat social"), "cat: social: Is a directory");
        assert_eq!(
            run(&mut shell, "cat nope.txt"),
            "cat: nope.txt: No such file or directory"
        );
        let github = shell.profile().github.clone();
        assert_eq!(run(&mut shell, "cat ~/social/github.txt"), github);
    }

    #[test]
    fn test_cat_follows_theme() {
        let (mut shell, _) = shell();
        let dark = shell.execute("cat summary/summary.txt").lines.join("");
        shell.execute("theme set mono");
        let mono = shell.execute("cat summary/summary.txt").lines.join("");
        assert_ne!(dark, mono);
        assert_eq!(ansi::strip(&dark), ansi::strip(&mono));
    }

    #[test]
    fn test_ls_and_tree() {
        let (mut shell, _) = shell();
        let ls = run(&mut shell, "ls projects/depoindex");
        assert_eq!(ls, format!("{}  project.txt", KEY_FILE));
        assert_eq!(run(&mut shell, "ls readme.txt"), "readme.txt");

        let tree = run(&mut shell, "tree");
        assert!(tree.starts_with(".\n├── about/"));
        assert!(!tree.contains(KEY_FILE));
        assert!(!run(&mut shell, "tree projects/depoindex").contains(KEY_FILE));

        assert_eq!(run(&mut shell, "tree nowhere"), "tree: 'nowhere' not found");
    }

    #[test]
    fn test_eight_ball() {
        let (mut shell, _) = shell();
        assert_eq!(run(&mut shell, "8ball"), fortune::USAGE);
        assert_eq!(run(&mut shell, "8ball tomorrow?"), fortune::USAGE);
        let answer = run(&mut shell, "8ball will it work?");
        assert!(fortune::ANSWERS.contains(&answer.as_str()));
    }

    #[test]
    fn test_table_fallback_and_unknown() {
        let (mut shell, _) = shell();
        let name = shell.profile().name.clone();
        assert_eq!(run(&mut shell, "WHOAMI"), name);
        assert_eq!(run(&mut shell, "Frobnicate Now"), "Command not found: Frobnicate Now");
        assert_eq!(run(&mut shell, "cat"), "Command not found: cat");
        assert_eq!(run(&mut shell, "help me"), "Command not found: help me");
    }

    #[test]
    fn test_theme_commands() {
        let (mut shell, store) = shell();
        assert!(run(&mut shell, "theme").starts_with("Current theme: dark"));
        assert_eq!(run(&mut shell, "theme list"), "dark\nlight\nmatrix\nmono\nsolarized");
        assert_eq!(run(&mut shell, "theme set"), THEME_SET_USAGE);
        assert_eq!(run(&mut shell, "theme set neon"), "Theme not found: neon");
        assert_eq!(run(&mut shell, "theme bogus"), THEME_USAGE);
        assert_eq!(run(&mut shell, "theme set mono"), "Theme set to mono");
        assert_eq!(shell.themes().current(), ThemeName::Mono);
        assert_eq!(store.snapshot().theme.as_deref(), Some("mono"));
    }

    #[test]
    fn test_unlock_sequence() {
        let (mut shell, store) = shell();
        assert_eq!(run(&mut shell, "unlock-theme"), UNLOCK_USAGE);
        assert_eq!(run(&mut shell, "unlock-theme dark"), "Unknown hidden theme: dark");
        assert_eq!(run(&mut shell, "unlock-theme ultraviolet"), "Key not yet discovered.");
        assert!(!run(&mut shell, "theme list").contains("ultraviolet"));
        assert_eq!(
            run(&mut shell, "theme set ultraviolet"),
            "Theme not found: ultraviolet"
        );

        let key = run(&mut shell, "cat projects/depoindex/.ultraviolet.key");
        assert!(key.contains(KEY_MARKER));

        assert_eq!(run(&mut shell, "unlock-theme ultraviolet"), "Theme set to ultraviolet");
        assert!(shell.themes().is_unlocked());
        assert!(shell.themes().style().glow);
        assert!(store.snapshot().unlocked);
        assert!(run(&mut shell, "theme list").ends_with("ultraviolet"));
    }

    #[test]
    fn test_unlock_evidence_lost_after_clear() {
        let (mut shell, _) = shell();
        shell.execute("cat projects/depoindex/.ultraviolet.key");
        shell.execute("clear");
        assert_eq!(run(&mut shell, "unlock-theme ultraviolet"), "Key not yet discovered.");
    }

    #[test]
    fn test_echoed_marker_does_not_unlock() {
        let (mut shell, store) = shell();
        assert_eq!(
            run(&mut shell, "unlock-theme unlock-theme ultraviolet"),
            "Unknown hidden theme: unlock-theme ultraviolet"
        );
        assert_eq!(
            run(&mut shell, "cat unlock-theme ultraviolet"),
            "cat: unlock-theme ultraviolet: No such file or directory"
        );
        assert_eq!(run(&mut shell, "unlock-theme ultraviolet"), "Key not yet discovered.");
        assert!(!shell.themes().is_unlocked());
        assert!(!store.snapshot().unlocked);
    }

    #[test]
    fn test_key_read_by_relative_path_unlocks() {
        let (mut shell, _) = shell();
        shell.execute("cd projects/depoindex");
        shell.execute(&format!("cat {}", KEY_FILE));
        assert_eq!(run(&mut shell, "unlock-theme ultraviolet"), "Theme set to ultraviolet");
    }

    #[test]
    fn test_failed_commands_leave_state() {
        let (mut shell, store) = shell();
        shell.execute("cd experience");
        shell.execute("cat ../nope");
        shell.execute("theme set nope");
        assert_eq!(shell.cwd(), ["experience"]);
        assert_eq!(shell.themes().current(), ThemeName::Dark);
        assert!(store.snapshot().theme.is_none());
    }

    #[test]
    fn test_transcript_and_history() {
        let (mut shell, _) = shell();
        shell.execute("whoami");
        shell.execute("whoami");
        shell.execute("cd projects");
        assert_eq!(shell.history().entries(), ["whoami", "cd projects"]);

        let entries = shell.transcript().entries();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].kind, EntryKind::Command);
        assert!(ansi::strip(&entries[0].text).ends_with("alex@portfolio:~$ whoami"));
        assert_eq!(entries[1].kind, EntryKind::Output);
        assert!(ansi::strip(&shell.prompt()).contains(":~/projects$"));
    }

    #[test]
    fn test_resolve_walk_matches_listing() {
        let (shell, _) = shell();
        for path in ["skills/ml", "projects/lumen", "misc", "experience"] {
            let resolved = resolve(&shell.root, &[], path);
            let mut node = &shell.root;
            for seg in path.split('/') {
                node = node.as_dir().unwrap().child(seg).unwrap();
            }
            assert!(std::ptr::eq(resolved.node.unwrap(), node));
        }
    }
}
