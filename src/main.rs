//! termfolio CLI - a portfolio presented as a simulated terminal

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use termfolio::{
    config::Config,
    profile::Profile,
    shell::Shell,
    state::{FileStateStore, MemoryStateStore, StateStore},
    theme::ThemeEngine,
    tui::InteractiveShell,
};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "termfolio")]
#[command(about = "Browse a developer portfolio through a simulated terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Config file (default: ~/.config/termfolio/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep theme state in memory only
    #[arg(long)]
    ephemeral: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell (default)
    Shell,

    /// Run command lines in one session and exit
    Exec {
        /// Lines to run, in order
        #[arg(required = true)]
        lines: Vec<String>,
    },

    /// List themes, marking the active one
    Themes,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize configuration file with defaults
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },

    /// Show current configuration
    Show {
        /// Show only specific section (shell, profile, state, display)
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Show configuration file path
    Path,

    /// Validate configuration
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);

    match cli.command {
        None | Some(Commands::Shell) => {
            let (shell, color) = build_session(&config_path, cli.ephemeral)?;
            InteractiveShell::new(shell, color).run()?;
        }
        Some(Commands::Exec { lines }) => {
            let (shell, color) = build_session(&config_path, cli.ephemeral)?;
            InteractiveShell::new(shell, color).run_lines(&lines)?;
        }
        Some(Commands::Themes) => {
            let (shell, _) = build_session(&config_path, cli.ephemeral)?;
            list_themes(&shell);
        }
        Some(Commands::Config(cmd)) => {
            run_config_command(cmd, config_path)?;
        }
    }

    Ok(())
}

/// Build a dispatcher session from configuration
fn build_session(config_path: &Path, ephemeral: bool) -> Result<(Shell, bool)> {
    let config = Config::load_from(config_path.to_path_buf())
        .with_context(|| format!("loading {}", config_path.display()))?;
    let default_theme = config.default_theme()?;
    debug!("Loaded config from {}", config_path.display());

    let profile = Profile::load_or_builtin(config.profile.path.as_deref())?;

    let store: Box<dyn StateStore> = if ephemeral {
        Box::new(MemoryStateStore::new())
    } else {
        debug!("Persisting state to {}", config.state.path.display());
        Box::new(FileStateStore::new(config.state.path.clone()))
    };
    let themes = ThemeEngine::new(store, default_theme);

    let mut shell = Shell::new(profile, themes);
    if let Some(seed) = config.shell.seed {
        shell = shell.with_seed(seed);
    }
    Ok((shell, config.display.color))
}

fn list_themes(shell: &Shell) {
    let current = shell.themes().current();
    for theme in shell.themes().available() {
        let marker = if theme == current { "*" } else { " " };
        println!("{} {}", marker, theme);
    }
}

fn run_config_command(cmd: ConfigCommands, path: PathBuf) -> Result<()> {
    match cmd {
        ConfigCommands::Init { force } => {
            config_init(force, path)?;
        }
        ConfigCommands::Show { section } => {
            config_show(section, path)?;
        }
        ConfigCommands::Path => {
            println!("{}", path.display());
        }
        ConfigCommands::Validate => {
            config_validate(path)?;
        }
    }
    Ok(())
}

fn config_init(force: bool, path: PathBuf) -> Result<()> {
    if path.exists() && !force {
        println!("Configuration file already exists at: {}", path.display());
        println!("Use --force to overwrite");
        return Ok(());
    }

    Config::default().save_to(path.clone())?;

    println!("Configuration file created at: {}", path.display());
    println!();
    println!("Environment overrides:");
    println!("  TERMFOLIO_THEME    default theme");
    println!("  TERMFOLIO_PROFILE  profile TOML file");
    println!("  TERMFOLIO_STATE    theme state file");
    println!("  NO_COLOR           disable colors");

    Ok(())
}

fn config_show(section: Option<String>, path: PathBuf) -> Result<()> {
    let config = Config::load_from(path)?;

    let display = if let Some(sec) = section {
        match sec.to_lowercase().as_str() {
            "shell" => toml::to_string_pretty(&config.shell)?,
            "profile" => toml::to_string_pretty(&config.profile)?,
            "state" => toml::to_string_pretty(&config.state)?,
            "display" => toml::to_string_pretty(&config.display)?,
            _ => {
                println!("Unknown section: {}", sec);
                println!("Available: shell, profile, state, display");
                return Ok(());
            }
        }
    } else {
        toml::to_string_pretty(&config)?
    };

    println!("{}", display);
    Ok(())
}

fn config_validate(path: PathBuf) -> Result<()> {
    let config = Config::load_from(path)?;
    match config.validate() {
        Ok(()) => println!("Configuration is valid"),
        Err(e) => println!("Configuration error: {}", e),
    }
    Ok(())
}
