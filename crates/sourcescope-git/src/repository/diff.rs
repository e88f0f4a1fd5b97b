use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{FileChange, FileStatus, GitError, Result};

use super::Repository;

impl Repository {
    /// Changes between the merge base of `base` and `HEAD`, and the working tree.
    ///
    /// This matches `git diff <base>...` extended with uncommitted changes: commits that
    /// landed on `base` after the branch point are not reported. Untracked files are not
    /// reported. Paths are relative to the repository root.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if `base` or `HEAD` cannot be resolved to a commit,
    /// and [`GitError::NoMergeBase`] if the two histories are unrelated.
    pub fn changed_files_since_merge_base(&self, base: &str) -> Result<Vec<FileChange>> {
        let base_commit = self.resolve_commit(base)?;
        let head_commit = self.resolve_commit("HEAD")?;

        let merge_base = self
            .inner
            .merge_base(base_commit.id(), head_commit.id())
            .map_err(|source| GitError::NoMergeBase {
                base: base.to_string(),
                source,
            })?;
        debug!(%merge_base, base, "resolved merge base");

        let merge_base_tree = self.inner.find_commit(merge_base)?.tree()?;

        let mut diff = self
            .inner
            .diff_tree_to_workdir_with_index(Some(&merge_base_tree), None)?;

        let mut find_opts = git2::DiffFindOptions::new();
        find_opts.renames(true);
        diff.find_similar(Some(&mut find_opts))?;

        let mut changes = Vec::new();

        for delta in diff.deltas() {
            let status = match delta.status() {
                git2::Delta::Added => FileStatus::Added,
                git2::Delta::Deleted => FileStatus::Deleted,
                git2::Delta::Modified => FileStatus::Modified,
                git2::Delta::Renamed => FileStatus::Renamed,
                git2::Delta::Copied => FileStatus::Copied,
                git2::Delta::Typechange => FileStatus::TypeChanged,
                _ => continue,
            };

            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .map(PathBuf::from)
                .ok_or(GitError::MissingDeltaPath)?;

            let mut change = FileChange::new(path, status);

            if status == FileStatus::Renamed || status == FileStatus::Copied {
                if let Some(old_path) = delta.old_file().path() {
                    change = change.with_old_path(old_path.to_path_buf());
                }
            }

            changes.push(change);
        }

        debug!(count = changes.len(), "collected changed files");
        Ok(changes)
    }

    /// Same as [`Repository::changed_files_since_merge_base`], restricted to files under
    /// `dir` and with paths relative to `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::OutsideRepository`] if `dir` is not inside the working tree, or any
    /// error from [`Repository::changed_files_since_merge_base`].
    pub fn changed_files_in(&self, dir: &Path, base: &str) -> Result<Vec<FileChange>> {
        let prefix = self.to_relative_path(dir)?;
        let changes = self.changed_files_since_merge_base(base)?;

        if prefix.as_os_str().is_empty() {
            return Ok(changes);
        }

        Ok(changes
            .into_iter()
            .filter_map(|change| {
                let path = change.path.strip_prefix(&prefix).ok()?.to_path_buf();
                let old_path = change
                    .old_path
                    .as_ref()
                    .and_then(|old| old.strip_prefix(&prefix).ok())
                    .map(Path::to_path_buf);
                Some(FileChange {
                    path,
                    status: change.status,
                    old_path,
                })
            })
            .collect())
    }

    fn resolve_commit(&self, refspec: &str) -> Result<git2::Commit<'_>> {
        let obj = self
            .inner
            .revparse_single(refspec)
            .map_err(|_| GitError::RefNotFound {
                refspec: refspec.to_string(),
            })?;

        obj.peel_to_commit().map_err(|_| GitError::RefNotFound {
            refspec: refspec.to_string(),
        })
    }
}
