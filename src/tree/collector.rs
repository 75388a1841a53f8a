//! Entry collection: walks a directory tree into an ordered sequence of
//! `VisualEntry` values.
//!
//! The walk uses an explicit stack instead of recursion, so arbitrarily deep
//! trees cannot overflow the call stack. Listing a directory pushes its
//! children in reverse order; popping an entry appends it to the sequence and,
//! for directories, lists its children next. The result is the same pre-order
//! a recursive walk produces.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::counter::TraversalCounter;
use super::entry::VisualEntry;
use super::source::{DirChild, DirSource};

/// A directory whose listing failed. Its subtree is rendered as empty.
#[derive(Debug)]
pub struct ReadFailure {
    pub path: PathBuf,
    pub error: io::Error,
}

/// Everything produced by one traversal.
#[derive(Debug, Default)]
pub struct Gathered {
    pub entries: Vec<VisualEntry>,
    pub counter: TraversalCounter,
    pub failures: Vec<ReadFailure>,
}

/// Walks directories from a `DirSource`.
pub struct Collector<'a, S: DirSource> {
    source: &'a S,
}

impl<'a, S: DirSource> Collector<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Collect every visible entry below `root`, in pre-order.
    pub fn gather(&self, root: &Path) -> Gathered {
        let mut gathered = Gathered::default();
        let mut stack = Vec::new();

        self.push_children(root, "", &mut stack, &mut gathered.failures);

        while let Some(entry) = stack.pop() {
            gathered.counter.record(entry.is_dir);
            if entry.is_dir {
                let child_prefix = entry.child_prefix();
                self.push_children(
                    &entry.full_path,
                    &child_prefix,
                    &mut stack,
                    &mut gathered.failures,
                );
            }
            gathered.entries.push(entry);
        }

        gathered
    }

    /// List `dir` and push its visible children onto `stack`, last child first.
    fn push_children(
        &self,
        dir: &Path,
        prefix: &str,
        stack: &mut Vec<VisualEntry>,
        failures: &mut Vec<ReadFailure>,
    ) {
        let children = match self.source.list(dir) {
            Ok(children) => visible_sorted(children),
            Err(error) => {
                warn!(path = %dir.display(), %error, "cannot read directory");
                failures.push(ReadFailure {
                    path: dir.to_path_buf(),
                    error,
                });
                return;
            }
        };
        debug!(path = %dir.display(), children = children.len(), "listed directory");

        let total = children.len();
        let entries: Vec<VisualEntry> = children
            .into_iter()
            .enumerate()
            .map(|(i, child)| {
                let name = child.name.to_string_lossy().to_string();
                let full_path = dir.join(&child.name);
                VisualEntry::new(prefix, i == total - 1, name, full_path, child.is_dir)
            })
            .collect();

        stack.extend(entries.into_iter().rev());
    }
}

/// Collect the visible entries below `root` from the real filesystem.
pub fn gather(root: &Path) -> Gathered {
    Collector::new(&super::source::FsSource).gather(root)
}

/// Whether a listed name is shown: drops `.`, `..` and dot-prefixed names.
pub fn is_visible(name: &str) -> bool {
    !name.starts_with('.')
}

/// Drop hidden children and sort the rest by name, byte-wise.
fn visible_sorted(children: Vec<DirChild>) -> Vec<DirChild> {
    let mut children: Vec<DirChild> = children
        .into_iter()
        .filter(|c| is_visible(&c.name.to_string_lossy()))
        .collect();
    children.sort_by(|a, b| a.name.cmp(&b.name));
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::source::MemorySource;

    fn gather_from(source: &MemorySource, root: &str) -> Gathered {
        Collector::new(source).gather(Path::new(root))
    }

    fn raw_lines(gathered: &Gathered) -> Vec<String> {
        gathered.entries.iter().map(|e| e.raw_line()).collect()
    }

    #[test]
    fn test_hidden_entries_excluded() {
        let source = MemorySource::new("root")
            .file("root/a.txt")
            .dir("root/b")
            .file("root/.hidden");
        let gathered = gather_from(&source, "root");

        assert_eq!(raw_lines(&gathered), vec!["├── a.txt", "└── b"]);
        assert_eq!(gathered.counter.summary(), "\n1 directories, 1 files");
    }

    #[test]
    fn test_pseudo_entries_excluded() {
        let source = MemorySource::new("root")
            .raw_child("root", ".", true)
            .raw_child("root", "..", true)
            .file("root/only.txt");
        let gathered = gather_from(&source, "root");

        assert_eq!(raw_lines(&gathered), vec!["└── only.txt"]);
        assert_eq!(gathered.counter.total(), 1);
    }

    #[test]
    fn test_last_sibling_ignores_trailing_hidden_name() {
        // ".z" sorts after "-b" byte-wise but must not take the last slot
        let source = MemorySource::new("root")
            .file("root/-a")
            .file("root/-b")
            .file("root/.z");
        let gathered = gather_from(&source, "root");

        assert!(!gathered.entries[0].is_last);
        assert!(gathered.entries[1].is_last);
    }

    #[test]
    fn test_nested_prefix_closes_under_last_child() {
        let source = MemorySource::new("root").file("root/sub/leaf.txt");
        let gathered = gather_from(&source, "root");

        assert_eq!(raw_lines(&gathered), vec!["└── sub", "    └── leaf.txt"]);
        assert_eq!(gathered.entries[1].full_path, PathBuf::from("root/sub/leaf.txt"));
    }

    #[test]
    fn test_nested_prefix_continues_under_mid_child() {
        let source = MemorySource::new("root")
            .file("root/a/x.txt")
            .file("root/a/y.txt")
            .file("root/z.txt");
        let gathered = gather_from(&source, "root");

        assert_eq!(
            raw_lines(&gathered),
            vec!["├── a", "│   ├── x.txt", "│   └── y.txt", "└── z.txt"]
        );
    }

    #[test]
    fn test_siblings_sorted_bytewise() {
        let source = MemorySource::new("root")
            .file("root/b")
            .file("root/B")
            .file("root/a")
            .file("root/_");
        let gathered = gather_from(&source, "root");

        let names: Vec<&str> = gathered.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["B", "_", "a", "b"]);
    }

    #[test]
    fn test_preorder_parent_before_descendants_before_siblings() {
        let source = MemorySource::new("r")
            .file("r/a/b/c.txt")
            .file("r/a/d.txt")
            .file("r/e/f.txt")
            .file("r/g.txt");
        let gathered = gather_from(&source, "r");

        let paths: Vec<String> = gathered
            .entries
            .iter()
            .map(|e| e.full_path.to_string_lossy().to_string())
            .collect();
        assert_eq!(
            paths,
            vec![
                "r/a", "r/a/b", "r/a/b/c.txt", "r/a/d.txt", "r/e", "r/e/f.txt", "r/g.txt"
            ]
        );
    }

    #[test]
    fn test_exactly_one_last_per_sibling_group() {
        let source = MemorySource::new("r")
            .file("r/a/1")
            .file("r/a/2")
            .file("r/a/3")
            .file("r/b/1")
            .file("r/c");
        let gathered = gather_from(&source, "r");

        let mut by_parent: std::collections::HashMap<PathBuf, Vec<&VisualEntry>> =
            std::collections::HashMap::new();
        for entry in &gathered.entries {
            let parent = entry.full_path.parent().unwrap().to_path_buf();
            by_parent.entry(parent).or_default().push(entry);
        }
        for (parent, siblings) in by_parent {
            let lasts: Vec<_> = siblings.iter().filter(|e| e.is_last).collect();
            assert_eq!(lasts.len(), 1, "parent {:?}", parent);
            let max_name = siblings.iter().map(|e| e.name.as_str()).max().unwrap();
            assert_eq!(lasts[0].name, max_name);
        }
    }

    #[test]
    fn test_children_prefix_is_parent_child_prefix() {
        let source = MemorySource::new("r")
            .file("r/a/b/c")
            .file("r/a/d")
            .file("r/e/f");
        let gathered = gather_from(&source, "r");

        for parent in gathered.entries.iter().filter(|e| e.is_dir) {
            for child in gathered
                .entries
                .iter()
                .filter(|e| e.full_path.parent() == Some(parent.full_path.as_path()))
            {
                assert_eq!(child.prefix, parent.child_prefix());
                assert_eq!(
                    child.prefix.chars().count(),
                    parent.prefix.chars().count() + 4
                );
            }
        }
    }

    #[test]
    fn test_counts_every_visible_entry() {
        let source = MemorySource::new("r")
            .file("r/a/b/c")
            .file("r/a/.secret/d")
            .dir("r/empty")
            .file("r/top");
        let gathered = gather_from(&source, "r");

        assert_eq!(gathered.counter.directories, 3);
        assert_eq!(gathered.counter.files, 2);
        assert_eq!(gathered.counter.total(), gathered.entries.len());
    }

    #[test]
    fn test_unreadable_root_yields_nothing() {
        let gathered = gather_from(&MemorySource::new("r"), "missing");

        assert!(gathered.entries.is_empty());
        assert_eq!(gathered.counter.summary(), "\n0 directories, 0 files");
        assert_eq!(gathered.failures.len(), 1);
        assert_eq!(gathered.failures[0].path, PathBuf::from("missing"));
    }

    #[test]
    fn test_unreadable_subdir_recorded_and_walk_continues() {
        let source = MemorySource::new("r")
            .file("r/locked/inside")
            .file("r/open/visible")
            .unreadable("r/locked");
        let gathered = gather_from(&source, "r");

        assert_eq!(
            raw_lines(&gathered),
            vec!["├── locked", "└── open", "    └── visible"]
        );
        assert_eq!(gathered.counter.directories, 2);
        assert_eq!(gathered.counter.files, 1);
        assert_eq!(gathered.failures.len(), 1);
        assert_eq!(gathered.failures[0].path, PathBuf::from("r/locked"));
        assert_eq!(
            gathered.failures[0].error.kind(),
            io::ErrorKind::PermissionDenied
        );
    }

    #[test]
    fn test_deep_tree_does_not_recurse() {
        let depth = 2_000;
        let path = (0..depth).map(|i| format!("d{}", i)).collect::<Vec<_>>().join("/");
        let source = MemorySource::new("r").file(&format!("r/{}/leaf", path));
        let gathered = gather_from(&source, "r");

        assert_eq!(gathered.counter.directories, depth);
        assert_eq!(gathered.counter.files, 1);
        let leaf = gathered.entries.last().unwrap();
        assert_eq!(leaf.prefix.chars().count(), depth * 4);
    }

    #[test]
    fn test_is_visible() {
        assert!(is_visible("a"));
        assert!(is_visible("a.b"));
        assert!(!is_visible(".a"));
        assert!(!is_visible("."));
        assert!(!is_visible(".."));
    }
}
