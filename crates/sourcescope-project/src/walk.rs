use std::path::{Component, Path, PathBuf};

use sourcescope_core::is_source_file;
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

type ExcludeFilter = Box<dyn FnMut(&DirEntry) -> bool>;

const VCS_DIR: &str = ".git";

/// Single-pass iterator over the Go source files of a tree.
///
/// Yields paths relative to the root, in file-name order per directory. Entries that
/// cannot be read are logged and skipped.
pub struct SourceWalk {
    root: PathBuf,
    entries: walkdir::FilterEntry<walkdir::IntoIter, ExcludeFilter>,
}

/// Walks `root`, pruning every subtree whose root-relative path starts with one of
/// `excluded_dirs` (compared by path component). `.git` directories are never entered.
#[must_use]
pub fn walk_sources(root: &Path, excluded_dirs: &[String]) -> SourceWalk {
    let prune_root = root.to_path_buf();
    let excluded: Vec<PathBuf> = excluded_dirs
        .iter()
        .filter_map(|entry| {
            let dir = normalize_dir(entry);
            if dir.is_none() {
                warn!(entry = %entry, "ignoring excluded directory outside the tree");
            }
            dir
        })
        .collect();

    let filter: ExcludeFilter = Box::new(move |entry: &DirEntry| {
        let is_vcs_dir = entry.file_type().is_dir() && entry.file_name() == VCS_DIR;
        !is_vcs_dir && !is_excluded(entry.path(), &prune_root, &excluded)
    });

    let entries = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(filter);

    SourceWalk {
        root: root.to_path_buf(),
        entries,
    }
}

/// Reduces `entry` to its plain directory names, so `./vendor/` and `vendor` compare
/// equal. Returns `None` for entries that name the root itself or reach outside it.
pub(crate) fn normalize_dir(entry: &str) -> Option<PathBuf> {
    let mut dir = PathBuf::new();
    for component in Path::new(entry).components() {
        match component {
            Component::Normal(name) => dir.push(name),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    (!dir.as_os_str().is_empty()).then_some(dir)
}

fn is_excluded(path: &Path, root: &Path, excluded: &[PathBuf]) -> bool {
    let Ok(relative) = path.strip_prefix(root) else {
        return false;
    };
    if relative.as_os_str().is_empty() {
        return false;
    }
    excluded.iter().any(|dir| relative.starts_with(dir))
}

impl Iterator for SourceWalk {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(
                        path = ?err.path(),
                        error = %err,
                        "skipping unreadable entry"
                    );
                    continue;
                }
            };

            if !entry.file_type().is_file() || !is_source_file(entry.file_name()) {
                continue;
            }

            if let Ok(relative) = entry.path().strip_prefix(&self.root) {
                return Some(relative.to_path_buf());
            }
        }
    }
}
