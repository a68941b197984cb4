//! Lists the file extensions present in a project, to help pick `--extensions`.

use clap::Parser;
use std::path::PathBuf;
use std::process::exit;
use treedump::{list_extensions, resolve_root};

/// Print every distinct file extension under a directory
#[derive(Parser)]
#[command(name = "treedump-extensions", version, about, long_about = None)]
struct Cli {
    /// Root directory of the project
    #[arg(long)]
    path: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    let root = match resolve_root(&cli.path) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };
    let found = list_extensions(&root);
    if found.is_empty() {
        println!("No extensions found.");
        return;
    }
    for ext in found {
        println!("{}", ext);
    }
}
