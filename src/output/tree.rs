// src/output/tree.rs

//! `tree`-style rendering of the input directory and of a plan's result.

use crate::core_types::PlannedOperation;
use log::warn;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Component, Path};
use walkdir::WalkDir;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

#[derive(Default)]
struct TreeNode {
    children: BTreeMap<String, TreeNode>,
}

impl TreeNode {
    fn insert(&mut self, relative: &Path) {
        let mut node = self;
        for component in relative.components() {
            if let Component::Normal(name) = component {
                node = node
                    .children
                    .entry(name.to_string_lossy().into_owned())
                    .or_default();
            }
        }
    }

    fn render(&self, prefix: &str, out: &mut String) {
        let count = self.children.len();
        for (i, (name, child)) in self.children.iter().enumerate() {
            let last = i + 1 == count;
            let _ = writeln!(out, "{}{}{}", prefix, if last { LAST_BRANCH } else { BRANCH }, name);
            let extension = if last { SPACE } else { PIPE };
            child.render(&format!("{prefix}{extension}"), out);
        }
    }
}

/// Renders the directory tree under `root`, skipping dot-prefixed entries.
///
/// The first line is `root` itself; entries are sorted by name.
pub fn input_tree(root: &Path) -> String {
    let mut tree = TreeNode::default();
    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0 || !entry.file_name().to_string_lossy().starts_with('.')
        });

    for entry in walker {
        match entry {
            Ok(entry) => {
                if let Ok(relative) = entry.path().strip_prefix(root) {
                    tree.insert(relative);
                }
            }
            Err(e) => warn!("Skipping entry in tree view: {}", e),
        }
    }

    let mut out = format!("{}\n", root.display());
    tree.render("", &mut out);
    out
}

/// Renders the folder tree a plan would produce under `output_root`.
///
/// # Examples
/// ```
/// use dirsort::core_types::{Action, PlannedOperation};
/// use dirsort::output::simulated_tree;
/// use std::path::{Path, PathBuf};
///
/// let ops: Vec<PlannedOperation> = ["out/photos/sunset.jpg", "out/notes/todo.txt", "out/photos/beach.png"]
///     .iter()
///     .map(|dest| PlannedOperation {
///         source_path: PathBuf::from("in/x"),
///         destination_path: PathBuf::from(dest),
///         action: Action::Copy,
///     })
///     .collect();
///
/// let expected = "\
/// out
/// ├── notes
/// │   └── todo.txt
/// └── photos
///     ├── beach.png
///     └── sunset.jpg
/// ";
/// assert_eq!(simulated_tree(&ops, Path::new("out")), expected);
/// ```
pub fn simulated_tree(operations: &[PlannedOperation], output_root: &Path) -> String {
    let mut tree = TreeNode::default();
    for op in operations {
        match op.destination_path.strip_prefix(output_root) {
            Ok(relative) => tree.insert(relative),
            Err(_) => tree.insert(&op.destination_path),
        }
    }
    let mut out = format!("{}\n", output_root.display());
    tree.render("", &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_input_tree_sorted_and_hides_dotfiles() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::create_dir(temp.path().join("docs"))?;
        fs::write(temp.path().join("docs").join("b.md"), "")?;
        fs::write(temp.path().join("docs").join("a.md"), "")?;
        fs::write(temp.path().join("zeta.txt"), "")?;
        fs::write(temp.path().join(".DS_Store"), "")?;

        let rendered = input_tree(temp.path());
        let body: Vec<&str> = rendered.lines().skip(1).collect();
        assert_eq!(
            body,
            vec!["├── docs", "│   ├── a.md", "│   └── b.md", "└── zeta.txt"]
        );
        Ok(())
    }

    #[test]
    fn test_empty_tree_prints_only_root() {
        let rendered = simulated_tree(&[], Path::new("/out"));
        assert_eq!(rendered, "/out\n");
    }
}
