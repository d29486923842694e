//! Raw text assets bundled into the binary

pub const NEOFETCH_ART: &str = include_str!("../assets/neofetch.txt");
pub const DRAGON_ART: &str = include_str!("../assets/dragon.txt");

/// Art lines with trailing whitespace removed, trailing blank lines dropped
pub fn art_lines(raw: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = raw.lines().map(str::trim_end).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Art as one string, see [`art_lines`]
pub fn art(raw: &str) -> String {
    art_lines(raw).join("\n")
}
