//! Alignment column for trailing full paths

use crate::tree::VisualEntry;

/// Gap between the widest line and the full-path column.
pub const PATH_GAP: usize = 4;

/// Widest unstyled `prefix + connector + name` in the sequence, or 0 if empty.
pub fn max_width(entries: &[VisualEntry]) -> usize {
    entries.iter().map(|e| e.display_width).max().unwrap_or(0)
}

/// Column at which full paths start.
pub fn path_column(max_width: usize) -> usize {
    max_width + PATH_GAP
}

/// Spaces needed after a line of `width` to reach `column`, at least one.
pub fn padding(width: usize, column: usize) -> usize {
    column.saturating_sub(width).max(1)
}
