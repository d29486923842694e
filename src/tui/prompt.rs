//! Line input

use std::io::{self, BufRead, StdinLock};

/// Reads submitted lines from a buffered source
pub struct PromptHandler<R> {
    input: R,
}

impl PromptHandler<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> PromptHandler<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Read one line without its terminator.
    /// Returns None on EOF (Ctrl+D) or a read error.
    pub fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let len = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(len);
                Some(line)
            }
            Err(_) => None,
        }
    }
}
