//! Path resolution over the virtual tree

use super::Node;

/// Outcome of resolving a user path
#[derive(Debug)]
pub struct Resolved<'a> {
    /// `None` when any segment failed to resolve
    pub node: Option<&'a Node>,
    /// Validated segments, or the starting cwd on failure
    pub segments: Vec<String>,
}

/// Walk `segments` from `root`
fn walk<'a>(root: &'a Node, segments: &[String]) -> Option<&'a Node> {
    let mut node = root;
    for segment in segments {
        node = node.as_dir()?.child(segment)?;
    }
    Some(node)
}

/// Resolve `input` against `cwd`
///
/// `/` and `~` start from the root, anything else from `cwd`. `..` at the
/// root stays at the root. If any segment is missing the whole resolution
/// fails and `cwd` is returned unchanged.
pub fn resolve<'a>(root: &'a Node, cwd: &[String], input: &str) -> Resolved<'a> {
    let tokens: Vec<String> = if input.is_empty() || input == "." {
        cwd.to_vec()
    } else if let Some(rest) = input.strip_prefix('/') {
        split(rest)
    } else if let Some(rest) = input.strip_prefix('~') {
        split(rest)
    } else {
        cwd.iter().cloned().chain(split(input)).collect()
    };

    let fail = || Resolved {
        node: None,
        segments: cwd.to_vec(),
    };

    let mut segments: Vec<String> = Vec::new();
    let mut node = root;
    for token in tokens {
        match token.as_str() {
            "." => {}
            ".." => {
                segments.pop();
                node = walk(root, &segments).unwrap_or(root);
            }
            name => {
                let Some(next) = node.as_dir().and_then(|dir| dir.child(name)) else {
                    return fail();
                };
                segments.push(token);
                node = next;
            }
        }
    }

    Resolved {
        node: Some(node),
        segments,
    }
}

fn split(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{Directory, Node};

    fn segs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn tree() -> Node {
        let projects = Directory::new("projects")
            .with_dir(Directory::new("alpha").with_file("project.txt", |_| "alpha".into()))
            .with_file("projects.txt", |_| "alpha".into());
        Node::Dir(
            Directory::new("")
                .with_dir(projects)
                .with_file("readme.txt", |_| "hi".into()),
        )
    }

    #[test]
    fn test_relative_and_absolute() {
        let root = tree();
        let r = resolve(&root, &[], "projects/alpha");
        assert_eq!(r.node.map(Node::name), Some("alpha"));
        assert_eq!(r.segments, segs(&["projects", "alpha"]));

        let cwd = segs(&["projects"]);
        let r = resolve(&root, &cwd, "/readme.txt");
        assert_eq!(r.node.map(Node::name), Some("readme.txt"));
        assert_eq!(r.segments, segs(&["readme.txt"]));

        let r = resolve(&root, &cwd, "~/projects/alpha/");
        assert_eq!(r.segments, segs(&["projects", "alpha"]));

        let r = resolve(&root, &cwd, "~");
        assert!(r.node.unwrap().is_dir());
        assert!(r.segments.is_empty());
    }

    #[test]
    fn test_dot_keeps_cwd() {
        let root = tree();
        let cwd = segs(&["projects", "alpha"]);
        assert_eq!(resolve(&root, &cwd, ".").segments, cwd);
        assert_eq!(resolve(&root, &cwd, "").segments, cwd);
        assert_eq!(resolve(&root, &cwd, "./././").segments, cwd);
    }

    #[test]
    fn test_parent_segments() {
        let root = tree();
        let cwd = segs(&["projects", "alpha"]);
        let r = resolve(&root, &cwd, "..");
        assert_eq!(r.segments, segs(&["projects"]));
        assert_eq!(r.node.map(Node::name), Some("projects"));

        let r = resolve(&root, &cwd, "../../readme.txt");
        assert_eq!(r.segments, segs(&["readme.txt"]));
    }

    #[test]
    fn test_parent_past_root_is_noop() {
        let root = tree();
        let r = resolve(&root, &[], "..");
        assert!(r.node.unwrap().is_dir());
        assert!(r.segments.is_empty());

        let r = resolve(&root, &[], "../../projects");
        assert_eq!(r.segments, segs(&["projects"]));
    }

    #[test]
    fn test_failure_reverts_to_cwd() {
        let root = tree();
        let r = resolve(&root, &[], "projects/doesnotexist/x");
        assert!(r.node.is_none());
        assert!(r.segments.is_empty());

        let cwd = segs(&["projects"]);
        let r = resolve(&root, &cwd, "alpha/missing");
        assert!(r.node.is_none());
        assert_eq!(r.segments, cwd);
    }

    #[test]
    fn test_cannot_descend_into_file() {
        let root = tree();
        let r = resolve(&root, &[], "readme.txt/more");
        assert!(r.node.is_none());
        assert!(r.segments.is_empty());
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let root = tree();
        assert!(resolve(&root, &[], "Projects").node.is_none());
    }
}
