//! Interactive terminal UI for termfolio
//!
//! Reads lines, hands them to the [`Shell`] dispatcher and prints the
//! results. `exit`, `quit` and EOF end the session here; the dispatcher
//! never sees them.

pub mod prompt;
pub mod renderer;
pub mod theme;

use anyhow::Result;
use std::io::BufRead;
use tracing::debug;

use crate::shell::Shell;
use prompt::PromptHandler;
use renderer::TerminalRenderer;

/// Interactive shell session
pub struct InteractiveShell {
    shell: Shell,
    renderer: TerminalRenderer,
}

impl InteractiveShell {
    pub fn new(shell: Shell, color: bool) -> Self {
        let mut renderer = TerminalRenderer::new(color);
        renderer.set_style(shell.themes().style());
        Self { shell, renderer }
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Run the interactive shell main loop on stdin
    pub fn run(&mut self) -> Result<()> {
        self.run_with(&mut PromptHandler::stdin())
    }

    /// Run the main loop on any line source
    pub fn run_with<R: BufRead>(&mut self, input: &mut PromptHandler<R>) -> Result<()> {
        let profile = self.shell.profile();
        self.renderer.render_banner(
            env!("CARGO_PKG_VERSION"),
            &profile.host,
            self.shell.themes().current().as_str(),
        );

        loop {
            self.renderer.render_prompt(&self.shell.prompt())?;
            let Some(line) = input.read_line() else {
                // EOF (Ctrl+D)
                println!();
                self.render_session_summary();
                break;
            };

            match self.handle(&line)? {
                CommandResult::Continue => continue,
                CommandResult::Quit => {
                    self.render_session_summary();
                    break;
                }
            }
        }

        Ok(())
    }

    /// Run each line in order, echoing the prompt before it
    pub fn run_lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            self.renderer.render_prompt(&self.shell.prompt())?;
            println!("{}", line);
            if let CommandResult::Quit = self.handle(line)? {
                break;
            }
        }
        Ok(())
    }

    fn handle(&mut self, line: &str) -> Result<CommandResult> {
        if matches!(line.trim(), "exit" | "quit") {
            return Ok(CommandResult::Quit);
        }

        let execution = self.shell.execute(line);
        if execution.clear {
            self.renderer.clear_screen()?;
        }
        // theme commands may have changed the live style
        self.renderer.set_style(self.shell.themes().style());
        for text in &execution.lines {
            self.renderer.render_output(text);
        }
        debug!("Rendered {} output entries", execution.lines.len());
        Ok(CommandResult::Continue)
    }

    fn render_session_summary(&self) {
        let count = self.shell.history().len();
        self.renderer.render_info(&format!(
            "{} command{} this session. Goodbye!",
            count,
            if count == 1 { "" } else { "s" }
        ));
    }
}

/// Result of handling one input line
enum CommandResult {
    Continue,
    Quit,
}
