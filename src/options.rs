use std::collections::BTreeSet;
use std::path::PathBuf;

/// Name of the artifact written at the root of the scanned directory.
pub const OUTPUT_FILENAME: &str = "ResumeFolderInFile.txt";

/// Directory names skipped when no `--exclude-dirs` list is given.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] =
    &["node_modules", "__pycache__", "venv", "env", "dist", "build"];

/// Lowercase file names skipped when no extension filter is given.
pub const DEFAULT_DENY_FILENAMES: &[&str] = &[
    "poetry.lock",
    "package-lock.json",
    "yarn.lock",
    ".gitignore",
    "readme.md",
    "license",
    "changelog.md",
    "contributing.md",
    "composer.lock",
    "pnpm-lock.yaml",
];

/// Image, video and audio suffixes whose content is not read by default.
pub const MEDIA_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "svg", "webp", "ico", "mp4", "mkv", "avi", "mov", "wmv",
    "flv", "mp3", "wav", "flac", "m4a",
];

pub const DEFAULT_MAX_SIZE_KB: u64 = 500;

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Rules deciding which files and directories appear in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Lowercase extensions without the leading dot. Empty selects the deny-list policy.
    pub allowed_extensions: BTreeSet<String>,
    pub excluded_dir_names: BTreeSet<String>,
    pub include_hidden: bool,
    /// Lowercase file names rejected under the deny-list policy.
    pub default_deny_filenames: BTreeSet<String>,
}
impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: BTreeSet::new(),
            excluded_dir_names: to_set(DEFAULT_EXCLUDED_DIRS),
            include_hidden: false,
            default_deny_filenames: to_set(DEFAULT_DENY_FILENAMES),
        }
    }
}

/// Controls how file contents are written after the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpOptions {
    pub max_size_kb: u64,
    pub read_media: bool,
    pub media_extensions: BTreeSet<String>,
}
impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            max_size_kb: DEFAULT_MAX_SIZE_KB,
            read_media: false,
            media_extensions: to_set(MEDIA_EXTENSIONS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SnapshotOptions {
    pub root: PathBuf,
    pub selection: SelectionConfig,
    pub dump: DumpOptions,
    /// When set, the artifact name is not added to `.gitignore`.
    pub track: bool,
}
impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            selection: SelectionConfig::default(),
            dump: DumpOptions::default(),
            track: false,
        }
    }
}

/// Normalizes a user-supplied extension: `.PY` becomes `py`.
pub fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}

#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    options: SnapshotOptions,
}
impl SnapshotBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: SnapshotOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options.selection.allowed_extensions = extensions
            .into_iter()
            .map(|e| normalize_extension(e.as_ref()))
            .filter(|e| !e.is_empty())
            .collect();
        self
    }
    pub fn exclude_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.selection.excluded_dir_names = names.into_iter().map(Into::into).collect();
        self
    }
    pub fn max_size_kb(mut self, kb: u64) -> Self {
        self.options.dump.max_size_kb = kb;
        self
    }
    pub fn read_media(mut self, yes: bool) -> Self {
        self.options.dump.read_media = yes;
        self
    }
    pub fn track(mut self, yes: bool) -> Self {
        self.options.track = yes;
        self
    }
    pub fn build(self) -> SnapshotOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_are_normalized() {
        let options = SnapshotBuilder::new(".").extensions([".PY", "rs", "."]).build();
        let exts: Vec<_> = options.selection.allowed_extensions.into_iter().collect();
        assert_eq!(exts, vec!["py".to_string(), "rs".to_string()]);
    }

    #[test]
    fn exclude_dirs_replace_defaults() {
        let options = SnapshotBuilder::new(".").exclude_dirs(["target"]).build();
        assert!(options.selection.excluded_dir_names.contains("target"));
        assert!(!options.selection.excluded_dir_names.contains("node_modules"));
    }
}
