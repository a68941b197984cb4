//! Command-line interface for treedump.
//!
//! Writes the tree and file contents of a project directory into
//! `ResumeFolderInFile.txt` at its root.

use clap::Parser;
use std::path::PathBuf;
use std::process::exit;
use treedump::{
    DEFAULT_EXCLUDED_DIRS, GitignoreUpdate, OUTPUT_FILENAME, SnapshotBuilder, SnapshotOptions,
    output_path_for, resolve_root, snapshot, update_gitignore, write_snapshot_to_file,
};

/// treedump — snapshot a project's tree and file contents into one text file
#[derive(Parser)]
#[command(name = "treedump", version, about, long_about = None)]
struct Cli {
    /// Root directory of the project
    #[arg(long)]
    path: PathBuf,

    /// Extensions to include, without the leading dot. Without any, every file
    /// is included except lock files and project meta-docs
    #[arg(long, num_args = 0..)]
    extensions: Vec<String>,

    /// Directory names to exclude (hidden directories are always excluded).
    /// Replaces the default list
    #[arg(long, num_args = 0..)]
    exclude_dirs: Option<Vec<String>>,

    /// Files larger than this many KB have their content skipped
    #[arg(long, default_value_t = treedump::DEFAULT_MAX_SIZE_KB)]
    max_kb: u64,

    /// Also dump the content of images, video and audio files
    #[arg(long)]
    read_media: bool,

    /// Do not add the output file to .gitignore
    #[arg(long)]
    track: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_options(self) -> SnapshotOptions {
        let exclude_dirs = self.exclude_dirs.unwrap_or_else(|| {
            DEFAULT_EXCLUDED_DIRS
                .iter()
                .map(|s| s.to_string())
                .collect()
        });
        SnapshotBuilder::new(self.path)
            .extensions(self.extensions)
            .exclude_dirs(exclude_dirs)
            .max_size_kb(self.max_kb)
            .read_media(self.read_media)
            .track(self.track)
            .build()
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    use tracing::Level;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

#[cfg(not(feature = "logging"))]
fn init_logging(_verbose: bool) {}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let options = cli.into_options();

    let root = match resolve_root(&options.root) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            exit(1);
        }
    };

    if !options.track {
        match update_gitignore(&root, OUTPUT_FILENAME) {
            Ok(GitignoreUpdate::Appended) => {
                println!("INFO: '{}' added to .gitignore.", OUTPUT_FILENAME)
            }
            Ok(_) => {}
            Err(e) => eprintln!("WARNING: could not update .gitignore: {}", e),
        }
    }

    let output_path = output_path_for(&root);
    let result = snapshot(&options)
        .and_then(|snap| write_snapshot_to_file(&snap, &options.dump, &output_path));
    match result {
        Ok(()) => println!("SUCCESS: file written to {}", output_path.display()),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            exit(1);
        }
    }
}
