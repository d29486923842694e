//! Command line parsing

/// A parsed input line
///
/// The command word is matched case-insensitively; arguments keep their case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Empty,
    Clear,
    Pwd,
    Cd(Option<String>),
    UnlockTheme(Option<String>),
    /// Question text, possibly empty
    EightBall(String),
    /// Target path, empty for the current directory
    Ls(String),
    Tree(String),
    Cat(String),
    Theme(ThemeAction),
    /// Candidate static table command, lowercased
    Table(String),
    Unknown,
}

/// `theme` sub-actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    List,
    Set(Option<String>),
    Invalid,
}

/// Parse a raw input line
pub fn parse_command(input: &str) -> ShellCommand {
    let input = input.trim();
    if input.is_empty() {
        return ShellCommand::Empty;
    }

    let (word, args) = match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    };
    let cmd = word.to_lowercase();
    let arg = || (!args.is_empty()).then(|| args.to_string());

    match cmd.as_str() {
        "clear" if args.is_empty() => ShellCommand::Clear,
        "pwd" if args.is_empty() => ShellCommand::Pwd,
        "cd" => ShellCommand::Cd(arg()),
        "unlock-theme" => ShellCommand::UnlockTheme(arg()),
        "8ball" => ShellCommand::EightBall(args.to_string()),
        "ls" => ShellCommand::Ls(args.to_string()),
        "tree" => ShellCommand::Tree(args.to_string()),
        "cat" if !args.is_empty() => ShellCommand::Cat(args.to_string()),
        "theme" => ShellCommand::Theme(parse_theme(args)),
        _ if args.is_empty() => ShellCommand::Table(cmd),
        _ => ShellCommand::Unknown,
    }
}

fn parse_theme(args: &str) -> ThemeAction {
    let mut parts = args.split_whitespace();
    match parts.next().map(str::to_lowercase).as_deref() {
        None => ThemeAction::Show,
        Some("list") => ThemeAction::List,
        Some("set") => ThemeAction::Set(parts.next().map(str::to_string)),
        Some(_) => ThemeAction::Invalid,
    }
}
