//! # Treedump
//!
//! `treedump` snapshots a project directory into a single text file: an ASCII tree of the
//! selected files followed by each file's content under a `FILE:` header.
//!
//! Selection is driven by a [`SelectionConfig`]: either an extension allow-list, or, when no
//! extensions are given, a deny-list of well-known non-source files (lock files, README,
//! LICENSE, ...). Hidden entries and excluded directories are never entered. Empty
//! directories are pruned from the tree, and the content dump lists exactly the files the
//! tree shows, in the same order.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate (on by default).
//!
//! # Example
//!
//! ```no_run
//! use treedump::{SnapshotBuilder, output_path_for, snapshot, write_snapshot_to_file};
//!
//! let options = SnapshotBuilder::new(".")
//!     .extensions(["rs", "toml"])
//!     .exclude_dirs(["target"])
//!     .max_size_kb(200)
//!     .build();
//!
//! let result = snapshot(&options).expect("Failed to scan directory");
//! print!("{}", result.tree);
//! write_snapshot_to_file(&result, &options.dump, output_path_for(&result.root))
//!     .expect("Failed to write snapshot");
//! ```

mod engine;
mod error;
mod extensions;
mod gitignore;
mod options;
pub mod output;
mod selector;
mod tree;
mod types;

pub use engine::{output_path_for, resolve_root, snapshot};
pub use error::SnapshotError;
pub use extensions::list_extensions;
pub use gitignore::{GitignoreUpdate, update_gitignore};
pub use options::{
    DEFAULT_DENY_FILENAMES, DEFAULT_EXCLUDED_DIRS, DEFAULT_MAX_SIZE_KB, DumpOptions,
    MEDIA_EXTENSIONS, OUTPUT_FILENAME, SelectionConfig, SnapshotBuilder, SnapshotOptions,
    normalize_extension,
};
pub use output::{format_snapshot, write_snapshot_to_file};
pub use selector::{is_dir_included, is_file_included};
pub use tree::{DirNode, FileLeaf, collect_files, render_tree, scan_tree};
pub use types::{FileRecord, Snapshot};
