//! Directory traversal and ASCII tree rendering.
//!
//! A single walk builds a pruned [`DirNode`] tree. The rendered text and the
//! flat list of files are both derived from it, so the two views always list
//! the same files in the same order.

use crate::options::SelectionConfig;
use crate::selector::{is_dir_included, is_file_included};
use crate::types::FileRecord;
use ignore::{DirEntry, WalkBuilder};
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

/// An included file found during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLeaf {
    pub name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// A directory that survived pruning, with its files and subdirectories in
/// byte-wise name order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirNode {
    pub name: String,
    pub path: PathBuf,
    pub files: Vec<FileLeaf>,
    pub dirs: Vec<DirNode>,
}

impl DirNode {
    fn new(name: String, path: PathBuf) -> Self {
        Self {
            name,
            path,
            files: Vec::new(),
            dirs: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }

    /// Renders the children of this node, one line per entry.
    pub fn render(&self, prefix: &str) -> String {
        let mut out = String::new();
        render_into(self, prefix, &mut out);
        out
    }

    /// Files in the order the rendered tree shows them.
    pub fn file_leaves(&self) -> Vec<&FileLeaf> {
        let mut leaves = Vec::new();
        collect_leaves(self, &mut leaves);
        leaves
    }
}

fn render_into(node: &DirNode, prefix: &str, out: &mut String) {
    let total = node.files.len() + node.dirs.len();
    for (idx, file) in node.files.iter().enumerate() {
        let connector = if idx + 1 == total { LAST_BRANCH } else { BRANCH };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(&file.name);
        out.push('\n');
    }
    for (idx, dir) in node.dirs.iter().enumerate() {
        let is_last = node.files.len() + idx + 1 == total;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(&dir.name);
        out.push_str("/\n");
        let extension = if is_last { SPACE_INDENT } else { PIPE_INDENT };
        render_into(dir, &format!("{}{}", prefix, extension), out);
    }
}

fn collect_leaves<'a>(node: &'a DirNode, leaves: &mut Vec<&'a FileLeaf>) {
    leaves.extend(node.files.iter());
    for dir in &node.dirs {
        collect_leaves(dir, leaves);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Dir,
}

/// Symlinked directories are never entered; symlinks to regular files count
/// as files.
fn classify(entry: &DirEntry) -> Option<EntryKind> {
    let file_type = entry.file_type()?;
    if file_type.is_dir() {
        Some(EntryKind::Dir)
    } else if file_type.is_file() || (file_type.is_symlink() && entry.path().is_file()) {
        Some(EntryKind::File)
    } else {
        None
    }
}

/// Walks `root` and returns the pruned tree of included entries.
///
/// `skip` names a file to leave out regardless of the selection rules,
/// normally the snapshot artifact itself. Unreadable directories yield empty
/// subtrees instead of errors.
pub fn scan_tree(root: &Path, config: &SelectionConfig, skip: Option<&Path>) -> DirNode {
    let filter_config = config.clone();
    let skip_path = skip.map(Path::to_path_buf);
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            match classify(entry) {
                Some(EntryKind::Dir) => is_dir_included(&name, &filter_config),
                Some(EntryKind::File) => {
                    is_file_included(&name, &filter_config)
                        && skip_path.as_deref() != Some(entry.path())
                }
                None => false,
            }
        });

    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string());
    let mut stack = vec![DirNode::new(root_name, root.to_path_buf())];

    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping unreadable entry: {}", _e);
                continue;
            }
        };
        let depth = entry.depth();
        if depth == 0 {
            continue;
        }
        while stack.len() > depth {
            close_top(&mut stack);
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        match classify(&entry) {
            Some(EntryKind::Dir) => stack.push(DirNode::new(name, entry.into_path())),
            Some(EntryKind::File) => match fs::metadata(entry.path()) {
                Ok(metadata) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.files.push(FileLeaf {
                            name,
                            path: entry.into_path(),
                            size_bytes: metadata.len(),
                        });
                    }
                }
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Dropping {}: {}", entry.path().display(), _e);
                }
            },
            None => {}
        }
    }
    while stack.len() > 1 {
        close_top(&mut stack);
    }
    stack
        .pop()
        .unwrap_or_else(|| DirNode::new(".".to_string(), root.to_path_buf()))
}

/// Pops the innermost open directory and attaches it to its parent unless it
/// ended up empty.
fn close_top(stack: &mut Vec<DirNode>) {
    if let Some(done) = stack.pop() {
        if done.is_empty() {
            #[cfg(feature = "logging")]
            tracing::trace!("Pruning empty directory {}", done.path.display());
            return;
        }
        if let Some(parent) = stack.last_mut() {
            parent.dirs.push(done);
        }
    }
}

/// Renders the filtered tree below `dir`, each line starting with `prefix`.
///
/// Returns an empty string when nothing under `dir` is included.
pub fn render_tree(dir: &Path, config: &SelectionConfig, prefix: &str) -> String {
    scan_tree(dir, config, None).render(prefix)
}

/// Lists the included files under `root` in tree order.
pub fn collect_files(
    root: &Path,
    config: &SelectionConfig,
    skip: Option<&Path>,
) -> Vec<FileRecord> {
    records_from_tree(root, &scan_tree(root, config, skip))
}

pub(crate) fn records_from_tree(root: &Path, tree: &DirNode) -> Vec<FileRecord> {
    tree.file_leaves()
        .into_iter()
        .map(|leaf| FileRecord {
            absolute_path: leaf.path.clone(),
            relative_path: leaf
                .path
                .strip_prefix(root)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| PathBuf::from(&leaf.name)),
            size_bytes: leaf.size_bytes,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str) -> FileLeaf {
        FileLeaf {
            name: name.to_string(),
            path: PathBuf::from(name),
            size_bytes: 0,
        }
    }

    fn dir(name: &str, files: &[&str], dirs: Vec<DirNode>) -> DirNode {
        DirNode {
            name: name.to_string(),
            path: PathBuf::from(name),
            files: files.iter().map(|f| leaf(f)).collect(),
            dirs,
        }
    }

    #[test]
    fn files_then_last_directory() {
        let root = dir(".", &["a.py", "b.py"], vec![dir("sub", &["c.py"], vec![])]);
        assert_eq!(
            root.render(""),
            "├── a.py\n├── b.py\n└── sub/\n    └── c.py\n"
        );
    }

    #[test]
    fn non_last_directory_keeps_vertical_guide() {
        let root = dir(
            ".",
            &[],
            vec![
                dir("a", &[], vec![dir("deep", &["x.rs"], vec![])]),
                dir("b", &["y.rs"], vec![]),
            ],
        );
        assert_eq!(
            root.render(""),
            "├── a/\n│   └── deep/\n│       └── x.rs\n└── b/\n    └── y.rs\n"
        );
    }

    #[test]
    fn prefix_is_applied_to_every_line() {
        let root = dir(".", &["a"], vec![dir("d", &["b"], vec![])]);
        assert_eq!(root.render("  "), "  ├── a\n  └── d/\n      └── b\n");
    }

    #[test]
    fn empty_node_renders_nothing() {
        assert_eq!(dir(".", &[], vec![]).render(""), "");
    }

    #[test]
    fn leaves_follow_render_order() {
        let root = dir(
            ".",
            &["z.py"],
            vec![dir("a", &["m.py"], vec![dir("b", &["n.py"], vec![])])],
        );
        let names: Vec<_> = root.file_leaves().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["z.py", "m.py", "n.py"]);
    }
}
