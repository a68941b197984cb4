//! Writing a [`Snapshot`] as a single text artifact.
//!
//! The layout is a header naming the root, the rendered tree, and one block
//! per file. Files that are too large, media files, and unreadable files get
//! a bracketed placeholder instead of their content.

use crate::options::DumpOptions;
use crate::types::{FileRecord, Snapshot};
use crate::SnapshotError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

const SECTION_RULE_WIDTH: usize = 50;
const FILE_RULE_WIDTH: usize = 20;

/// What to write in place of, or as, a file's content.
#[derive(Debug, Clone, PartialEq)]
pub enum FileContent {
    Text(String),
    TooLarge { size_kb: f64 },
    Media,
    ReadError(String),
}

impl FileContent {
    fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        match self {
            FileContent::Text(text) => out.write_all(text.as_bytes()),
            FileContent::TooLarge { size_kb } => {
                write!(out, "[CONTENT SKIPPED: file too large ({:.2} KB)]", size_kb)
            }
            FileContent::Media => write!(out, "[CONTENT SKIPPED: media file]"),
            FileContent::ReadError(message) => write!(out, "[ERROR READING FILE: {}]", message),
        }
    }
}

/// Returns true if the text after the last `.` in `name` is a media suffix.
pub fn is_media_file(name: &str, options: &DumpOptions) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| options.media_extensions.contains(&ext.to_lowercase()))
}

/// Decides what goes in a file's block. Never fails: I/O problems become a
/// [`FileContent::ReadError`].
pub fn load_content(record: &FileRecord, options: &DumpOptions) -> FileContent {
    let size_kb = record.size_bytes as f64 / 1024.0;
    if size_kb > options.max_size_kb as f64 {
        #[cfg(feature = "logging")]
        tracing::debug!(
            "File too large ({:.2} KB > {} KB), skipping content",
            size_kb,
            options.max_size_kb
        );
        return FileContent::TooLarge { size_kb };
    }
    let name = record
        .absolute_path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    if !options.read_media && is_media_file(&name, options) {
        return FileContent::Media;
    }
    match fs::read(&record.absolute_path) {
        Ok(bytes) => FileContent::Text(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::warn!("Failed to read {}: {}", record.absolute_path.display(), e);
            FileContent::ReadError(e.to_string())
        }
    }
}

/// Writes the full artifact for `snapshot` to `out`.
pub fn write_snapshot<W: Write>(
    snapshot: &Snapshot,
    options: &DumpOptions,
    out: &mut W,
) -> std::io::Result<()> {
    let section_rule = "=".repeat(SECTION_RULE_WIDTH);
    let file_rule = "-".repeat(FILE_RULE_WIDTH);

    write!(out, "HIERARCHY (Root: {})\n\n.\n", snapshot.root_label)?;
    out.write_all(snapshot.tree.as_bytes())?;
    write!(out, "\n{}\n\n", section_rule)?;

    for record in &snapshot.files {
        writeln!(out, "FILE: {}", record.relative_path.display())?;
        writeln!(out, "{}", file_rule)?;
        load_content(record, options).write_to(out)?;
        write!(out, "\n\n{}\n\n", section_rule)?;
    }
    Ok(())
}

/// Formats the artifact into a string.
pub fn format_snapshot(snapshot: &Snapshot, options: &DumpOptions) -> std::io::Result<String> {
    let mut buf = Vec::with_capacity(1024);
    write_snapshot(snapshot, options, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Creates (or truncates) `path` and writes the artifact into it.
pub fn write_snapshot_to_file(
    snapshot: &Snapshot,
    options: &DumpOptions,
    path: impl AsRef<Path>,
) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| SnapshotError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_snapshot(snapshot, options, &mut writer).map_err(|e| SnapshotError::io(path, e))?;
    writer.flush().map_err(|e| SnapshotError::io(path, e))?;
    Ok(())
}
