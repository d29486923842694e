//! Read-only virtual filesystem
//!
//! The tree is built once per session from the profile and never mutated.
//! File content is produced on every read from the current
//! [`RenderContext`], so it follows the active theme.

mod builder;
mod path;

pub use builder::{build, KEY_FILE, KEY_MARKER};
pub use path::{resolve, Resolved};

use std::collections::BTreeMap;
use std::fmt;

use crate::commands::RenderContext;

/// Content producer stored on a file node
pub type Producer = Box<dyn Fn(&RenderContext<'_>) -> String>;

pub struct File {
    name: String,
    content: Producer,
}

impl File {
    pub fn new<F>(name: impl Into<String>, content: F) -> Self
    where
        F: Fn(&RenderContext<'_>) -> String + 'static,
    {
        Self {
            name: name.into(),
            content: Box::new(content),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Produce the file's text for the current session state
    pub fn read(&self, ctx: &RenderContext<'_>) -> String {
        (self.content)(ctx)
    }
}

impl fmt::Debug for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("File").field("name", &self.name).finish()
    }
}

/// Directory whose children iterate in name order
#[derive(Debug, Default)]
pub struct Directory {
    name: String,
    children: BTreeMap<String, Node>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    /// Children sorted by name
    pub fn children(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub(crate) fn insert(&mut self, node: Node) {
        self.children.insert(node.name().to_string(), node);
    }

    pub(crate) fn with_file<F>(mut self, name: &str, content: F) -> Self
    where
        F: Fn(&RenderContext<'_>) -> String + 'static,
    {
        self.insert(Node::File(File::new(name, content)));
        self
    }

    pub(crate) fn with_dir(mut self, dir: Directory) -> Self {
        self.insert(Node::Dir(dir));
        self
    }
}

#[derive(Debug)]
pub enum Node {
    File(File),
    Dir(Directory),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => file.name(),
            Node::Dir(dir) => dir.name(),
        }
    }

    pub fn as_dir(&self) -> Option<&Directory> {
        match self {
            Node::Dir(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Dir(_))
    }
}
