use std::path::PathBuf;

/// A file selected for the content dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// The full path to the file.
    pub absolute_path: PathBuf,
    /// The path relative to the snapshot root, as printed in `FILE:` headers.
    pub relative_path: PathBuf,
    /// Size measured during the walk.
    pub size_bytes: u64,
}

/// The complete result of scanning a directory.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Absolute root that was scanned.
    pub root: PathBuf,
    /// Base name of the root, used in the header line.
    pub root_label: String,
    /// Rendered tree lines, without the leading `.` line.
    pub tree: String,
    /// Included files in the order the tree lists them.
    pub files: Vec<FileRecord>,
}
