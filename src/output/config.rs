//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Append each file's full path, aligned in a single column
    pub show_full_path: bool,
}

impl OutputConfig {
    pub fn plain() -> Self {
        Self {
            use_color: false,
            show_full_path: false,
        }
    }

    pub fn with_full_path(mut self, show_full_path: bool) -> Self {
        self.show_full_path = show_full_path;
        self
    }
}
