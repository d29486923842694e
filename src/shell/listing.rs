//! Filesystem commands: pwd, cd, ls, tree, cat

use super::error::{Result, ShellError};
use crate::commands::RenderContext;
use crate::fs::{resolve, Directory, Node, KEY_FILE};
use crate::theme::Palette;

/// Absolute-style path under `/home/<user>`
pub fn pwd(user: &str, cwd: &[String]) -> String {
    let mut path = format!("/home/{}", user);
    for segment in cwd {
        path.push('/');
        path.push_str(segment);
    }
    path
}

/// New cwd segments when `target` is a directory
pub fn change_dir(root: &Node, cwd: &[String], target: &str) -> Result<Vec<String>> {
    let resolved = resolve(root, cwd, target);
    match resolved.node {
        Some(Node::Dir(_)) => Ok(resolved.segments),
        _ => Err(ShellError::CdNotFound(target.to_string())),
    }
}

pub fn ls(root: &Node, cwd: &[String], target: &str, pal: &Palette) -> Result<String> {
    match resolve(root, cwd, target).node {
        None => Err(ShellError::LsNotFound(target.to_string())),
        Some(Node::File(file)) => Ok(file.name().to_string()),
        Some(Node::Dir(dir)) => Ok(dir
            .children()
            .map(|(name, child)| entry_name(name, child, pal))
            .collect::<Vec<_>>()
            .join("  ")),
    }
}

pub fn tree(root: &Node, cwd: &[String], target: &str, pal: &Palette) -> Result<String> {
    match resolve(root, cwd, target).node {
        None => Err(ShellError::TreeNotFound(target.to_string())),
        Some(Node::File(file)) => Ok(file.name().to_string()),
        Some(Node::Dir(dir)) => {
            let label = if target.is_empty() { "." } else { target };
            let mut lines = vec![label.to_string()];
            walk(dir, "", pal, &mut lines);
            Ok(lines.join("\n"))
        }
    }
}

fn walk(dir: &Directory, prefix: &str, pal: &Palette, lines: &mut Vec<String>) {
    let entries: Vec<(&str, &Node)> = dir
        .children()
        .filter(|(name, _)| *name != KEY_FILE)
        .collect();
    let count = entries.len();

    for (idx, (name, child)) in entries.into_iter().enumerate() {
        let is_last = idx + 1 == count;
        let branch = if is_last { "└── " } else { "├── " };
        lines.push(format!("{}{}{}", prefix, branch, entry_name(name, child, pal)));
        if let Node::Dir(sub) = child {
            let next = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            walk(sub, &next, pal, lines);
        }
    }
}

fn entry_name(name: &str, node: &Node, pal: &Palette) -> String {
    if node.is_dir() {
        pal.paint(pal.dir, &format!("{}/", name))
    } else {
        name.to_string()
    }
}

pub fn cat(root: &Node, cwd: &[String], path: &str, ctx: &RenderContext<'_>) -> Result<String> {
    match resolve(root, cwd, path).node {
        None => Err(ShellError::CatNotFound(path.to_string())),
        Some(Node::Dir(_)) => Err(ShellError::CatIsDirectory(path.to_string())),
        Some(Node::File(file)) => Ok(file.read(ctx)),
    }
}
