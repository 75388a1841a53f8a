//! Visual entries and the box-drawing symbols used to lay them out

use std::path::PathBuf;

/// Connector for a child that has later siblings.
pub const MID_BRANCH: &str = "├── ";
/// Connector for the last child of a directory.
pub const LAST_BRANCH: &str = "└── ";
/// Prefix segment below an ancestor that has later siblings.
pub const CONTINUATION: &str = "│   ";
/// Prefix segment below an ancestor that was the last child.
pub const BLANK: &str = "    ";

/// Connector drawn in front of an entry's name.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { MID_BRANCH }
}

/// Prefix handed down to the children of an entry.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    let segment = if is_last { BLANK } else { CONTINUATION };
    format!("{}{}", prefix, segment)
}

/// Number of display units in `text`, one per Unicode scalar value.
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// One filesystem child as it will appear in the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualEntry {
    pub prefix: String,
    pub is_last: bool,
    pub name: String,
    pub full_path: PathBuf,
    pub is_dir: bool,
    /// Width of `prefix + connector + name`, unstyled.
    pub display_width: usize,
}

impl VisualEntry {
    pub fn new(
        prefix: &str,
        is_last: bool,
        name: String,
        full_path: PathBuf,
        is_dir: bool,
    ) -> Self {
        let display_width =
            display_width(prefix) + display_width(connector(is_last)) + display_width(&name);
        Self {
            prefix: prefix.to_string(),
            is_last,
            name,
            full_path,
            is_dir,
            display_width,
        }
    }

    pub fn connector(&self) -> &'static str {
        connector(self.is_last)
    }

    /// Prefix used by this entry's direct children.
    pub fn child_prefix(&self) -> String {
        child_prefix(&self.prefix, self.is_last)
    }

    /// The unstyled `prefix + connector + name` text.
    pub fn raw_line(&self) -> String {
        format!("{}{}{}", self.prefix, self.connector(), self.name)
    }
}
