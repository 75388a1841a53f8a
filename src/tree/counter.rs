//! Directory and file tallies gathered during traversal

/// Running count of visited directories and files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalCounter {
    pub directories: usize,
    pub files: usize,
}

impl TraversalCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one visited entry.
    pub fn record(&mut self, is_dir: bool) {
        if is_dir {
            self.directories += 1;
        } else {
            self.files += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.directories + self.files
    }

    /// Summary line, preceded by a blank line.
    pub fn summary(&self) -> String {
        format!("\n{} directories, {} files", self.directories, self.files)
    }
}
