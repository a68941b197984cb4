//! Keeping the snapshot artifact out of version control.

use crate::SnapshotError;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Outcome of [`update_gitignore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitignoreUpdate {
    /// There is no `.gitignore` in the root; nothing was created.
    Missing,
    /// A line equal to the entry already exists.
    AlreadyPresent,
    /// The entry was appended.
    Appended,
}

/// Appends `entry` as its own line to `<root>/.gitignore`.
///
/// Does nothing if the file is missing or already has the line.
pub fn update_gitignore(root: &Path, entry: &str) -> Result<GitignoreUpdate, SnapshotError> {
    let path = root.join(".gitignore");
    if !path.is_file() {
        return Ok(GitignoreUpdate::Missing);
    }
    let bytes = fs::read(&path).map_err(|e| SnapshotError::io(&path, e))?;
    let existing = String::from_utf8_lossy(&bytes);
    if existing.lines().any(|line| line.trim() == entry) {
        return Ok(GitignoreUpdate::AlreadyPresent);
    }
    let separator = if !existing.is_empty() && !existing.ends_with('\n') {
        "\n"
    } else {
        ""
    };
    let mut file = OpenOptions::new()
        .append(true)
        .open(&path)
        .map_err(|e| SnapshotError::io(&path, e))?;
    writeln!(file, "{}{}", separator, entry).map_err(|e| SnapshotError::io(&path, e))?;
    Ok(GitignoreUpdate::Appended)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_not_created() {
        let dir = tempdir().unwrap();
        assert_eq!(
            update_gitignore(dir.path(), "out.txt").unwrap(),
            GitignoreUpdate::Missing
        );
        assert!(!dir.path().join(".gitignore").exists());
    }

    #[test]
    fn appends_after_unterminated_last_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".gitignore");
        fs::write(&path, "target").unwrap();
        assert_eq!(
            update_gitignore(dir.path(), "out.txt").unwrap(),
            GitignoreUpdate::Appended
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "target\nout.txt\n");
    }

    #[test]
    fn second_update_is_a_no_op() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".gitignore");
        fs::write(&path, "target\n").unwrap();
        update_gitignore(dir.path(), "out.txt").unwrap();
        assert_eq!(
            update_gitignore(dir.path(), "out.txt").unwrap(),
            GitignoreUpdate::AlreadyPresent
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "target\nout.txt\n");
    }

    #[test]
    fn matching_ignores_surrounding_whitespace() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "  out.txt  \n").unwrap();
        assert_eq!(
            update_gitignore(dir.path(), "out.txt").unwrap(),
            GitignoreUpdate::AlreadyPresent
        );
    }
}
