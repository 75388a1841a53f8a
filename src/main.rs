//! CLI entry point for dirtree

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use dirtree::{ColorMode, OutputConfig, TreeFormatter, gather, should_use_color};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Print a directory tree, optionally with each file's full path")]
#[command(version)]
#[command(disable_help_flag = true)]
struct Args {
    /// Directory to display; if several are given the last one wins
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Show each file's full path, aligned in one column
    #[arg(short = 'f', long = "full-path")]
    full_path: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Print help
    #[arg(short = 'h', long = "help", visible_short_alias = '?', action = ArgAction::Help)]
    help: Option<bool>,
}

impl Args {
    /// The directory to walk, exactly as given on the command line.
    fn root(&self) -> PathBuf {
        self.paths
            .last()
            .cloned()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Diagnostics go to stderr, filtered by RUST_LOG (errors only by default).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
}

fn main() {
    init_logging();
    let args = Args::parse();

    let root = args.root();
    let gathered = gather(&root);

    for failure in &gathered.failures {
        eprintln!(
            "dirtree: cannot read '{}': {}",
            failure.path.display(),
            failure.error
        );
    }

    let formatter = TreeFormatter::new(OutputConfig {
        use_color: should_use_color(args.color),
        show_full_path: args.full_path,
    });

    if let Err(e) = formatter.print(&root.to_string_lossy(), &gathered) {
        eprintln!("dirtree: error writing output: {}", e);
        process::exit(1);
    }
}
