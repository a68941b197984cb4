use crate::error::SnapshotError;
use crate::options::{OUTPUT_FILENAME, SnapshotOptions};
use crate::tree::{records_from_tree, scan_tree};
use crate::types::Snapshot;
use std::path::{Component, Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

/// Drops `.` components and folds each `..` into its parent, without touching
/// the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(component),
            },
            other => normalized.push(other),
        }
    }
    normalized
}

/// Makes `root` absolute and normalized without resolving symlinks, and checks
/// that it is a directory.
pub fn resolve_root(root: &Path) -> Result<PathBuf, SnapshotError> {
    let absolute = std::path::absolute(root).map_err(|e| SnapshotError::io(root, e))?;
    let absolute = normalize_lexically(&absolute);
    if !absolute.is_dir() {
        return Err(SnapshotError::InvalidPath(format!(
            "{} is not a directory",
            absolute.display()
        )));
    }
    Ok(absolute)
}

/// Where the artifact for `root` is written.
pub fn output_path_for(root: &Path) -> PathBuf {
    root.join(OUTPUT_FILENAME)
}

/// Scans `options.root` and returns the rendered tree together with the
/// ordered list of files to dump. The artifact itself is never listed.
pub fn snapshot(options: &SnapshotOptions) -> Result<Snapshot, SnapshotError> {
    let root = resolve_root(&options.root)?;
    #[cfg(feature = "logging")]
    tracing::debug!("Starting snapshot with root: {}", root.display());
    let output_path = output_path_for(&root);
    let tree = scan_tree(&root, &options.selection, Some(&output_path));
    let files = records_from_tree(&root, &tree);
    #[cfg(feature = "logging")]
    tracing::debug!("Selected {} files", files.len());
    let root_label = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());
    Ok(Snapshot {
        tree: tree.render(""),
        root,
        root_label,
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_components_are_folded() {
        let path = Path::new("/srv/proj/sub/../src/./lib");
        assert_eq!(normalize_lexically(path), PathBuf::from("/srv/proj/src/lib"));
    }

    #[test]
    fn parent_of_root_stays_at_root() {
        assert_eq!(normalize_lexically(Path::new("/..")), PathBuf::from("/"));
    }
}
