//! Directory tree gathering
//!
//! The walk produces a flat, pre-ordered sequence of `VisualEntry` values,
//! each carrying everything the renderer needs, plus the directory/file
//! counter and any directories that could not be read.
//!
//! - `source` - `DirSource` listing seam and the filesystem implementation
//! - `entry` - `VisualEntry` and the box-drawing symbols
//! - `counter` - `TraversalCounter` and the summary line
//! - `collector` - iterative pre-order walk

mod collector;
mod counter;
mod entry;
pub mod source;

pub use collector::{Collector, Gathered, ReadFailure, gather, is_visible};
pub use counter::TraversalCounter;
pub use entry::{
    BLANK, CONTINUATION, LAST_BRANCH, MID_BRANCH, VisualEntry, child_prefix, connector,
    display_width,
};
pub use source::{DirChild, DirSource, FsSource};
