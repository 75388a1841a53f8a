//! dirtree - print a directory tree, optionally with aligned full paths

pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use output::{ColorMode, OutputConfig, TreeFormatter, max_width, should_use_color};
pub use tree::{Collector, DirSource, FsSource, Gathered, TraversalCounter, VisualEntry, gather};
