//! Directory listing providers
//!
//! The collector only needs "list the immediate children of this directory,
//! each tagged as file or directory". `DirSource` is that seam; `FsSource`
//! backs it with the real filesystem.

use std::ffi::OsString;
use std::io;
use std::path::Path;

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirChild {
    pub name: OsString,
    pub is_dir: bool,
}

impl DirChild {
    pub fn new(name: impl Into<OsString>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            is_dir,
        }
    }
}

/// Provider of directory listings.
pub trait DirSource {
    /// List the immediate children of `dir`, in any order.
    fn list(&self, dir: &Path) -> io::Result<Vec<DirChild>>;
}

/// Lists directories through `std::fs::read_dir`.
///
/// Symlinks are typed by their target, so a link to a directory is listed
/// (and walked) as a directory. A link whose target cannot be resolved,
/// broken or looping, keeps the link's own type and is listed as a file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl DirSource for FsSource {
    fn list(&self, dir: &Path) -> io::Result<Vec<DirChild>> {
        // The ReadDir handle is dropped when this returns.
        let children = std::fs::read_dir(dir)?
            .filter_map(|e| e.ok())
            .map(|entry| {
                let is_dir = match std::fs::metadata(entry.path()) {
                    Ok(meta) => meta.is_dir(),
                    Err(_) => entry.file_type().map(|t| t.is_dir()).unwrap_or(false),
                };
                DirChild::new(entry.file_name(), is_dir)
            })
            .collect();
        Ok(children)
    }
}

#[cfg(test)]
pub use memory::MemorySource;
