mod diff;

use std::path::{Path, PathBuf};

use crate::{GitError, Result};

pub struct Repository {
    pub(crate) inner: git2::Repository,
    root: PathBuf,
}

impl Repository {
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] if the path is not inside a git repository.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = git2::Repository::discover(path).map_err(|_| GitError::NotARepository {
            path: path.to_path_buf(),
        })?;

        let root = inner.workdir().ok_or_else(|| GitError::BareRepository {
            path: path.to_path_buf(),
        })?;

        // Canonical so that relative paths can be derived from canonical subdirectories
        let root = dunce::canonicalize(root).unwrap_or_else(|_| dunce::simplified(root).to_path_buf());

        Ok(Self { inner, root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `dir` relative to the working tree root. Relative `dir`s are resolved
    /// against the current directory first.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::OutsideRepository`] if `dir` does not live under the working tree.
    pub(crate) fn to_relative_path(&self, dir: &Path) -> Result<PathBuf> {
        let normalized = dunce::canonicalize(dir)
            .or_else(|_| std::path::absolute(dir))
            .map(|absolute| dunce::simplified(&absolute).to_path_buf())
            .map_err(|_| GitError::OutsideRepository {
                path: dir.to_path_buf(),
                root: self.root.clone(),
            })?;
        normalized
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .map_err(|_| GitError::OutsideRepository {
                path: dir.to_path_buf(),
                root: self.root.clone(),
            })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::TempDir;

    pub(crate) fn setup_test_repo() -> anyhow::Result<(TempDir, Repository)> {
        let dir = TempDir::new()?;
        let repo = git2::Repository::init(dir.path())?;

        let mut config = repo.config()?;
        config.set_str("user.name", "Test")?;
        config.set_str("user.email", "test@example.com")?;

        let sig = git2::Signature::now("Test", "test@example.com")?;
        let tree_id = repo.index()?.write_tree()?;
        let tree = repo.find_tree(tree_id)?;
        repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])?;

        let repository = Repository::open(dir.path())?;
        Ok((dir, repository))
    }

    /// Stages every change in the working tree and commits it onto `HEAD`.
    pub(crate) fn commit_all(repo: &Repository, message: &str) -> anyhow::Result<()> {
        commit_all_to(repo, "HEAD", message)
    }

    /// Stages every change in the working tree and commits it onto `update_ref`.
    pub(crate) fn commit_all_to(
        repo: &Repository,
        update_ref: &str,
        message: &str,
    ) -> anyhow::Result<()> {
        let mut index = repo.inner.index()?;
        index.add_all(["*"], git2::IndexAddOption::DEFAULT, None)?;
        index.update_all(["*"], None)?;
        index.write()?;

        let sig = git2::Signature::now("Test", "test@example.com")?;
        let tree_id = index.write_tree()?;
        let tree = repo.inner.find_tree(tree_id)?;
        let parent = repo.inner.revparse_single(update_ref)?.peel_to_commit()?;
        repo.inner
            .commit(Some(update_ref), &sig, &sig, message, &tree, &[&parent])?;
        Ok(())
    }

    #[test]
    fn open_repository() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        let expected = dir.path().canonicalize()?;
        let actual = repo.root().canonicalize()?;
        assert_eq!(actual, expected);
        Ok(())
    }

    #[test]
    fn open_nonexistent_repository() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let result = Repository::open(dir.path());
        assert!(matches!(result, Err(GitError::NotARepository { .. })));
    }

    #[test]
    fn open_from_subdirectory_finds_root() -> anyhow::Result<()> {
        let (dir, _repo) = setup_test_repo()?;
        std::fs::create_dir_all(dir.path().join("pkg/a"))?;

        let repo = Repository::open(&dir.path().join("pkg/a"))?;

        assert_eq!(repo.root(), dir.path().canonicalize()?);
        Ok(())
    }

    #[test]
    fn relative_path_of_subdirectory() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        std::fs::create_dir_all(dir.path().join("services/api"))?;

        let relative = repo.to_relative_path(&dir.path().join("services/api"))?;

        assert_eq!(relative, PathBuf::from("services/api"));
        assert_eq!(repo.to_relative_path(dir.path())?, PathBuf::new());
        Ok(())
    }

    /// `dir` spelled relative to the current directory, which is never the temp repo.
    #[cfg(unix)]
    pub(crate) fn relative_to_cwd(dir: &Path) -> anyhow::Result<PathBuf> {
        let cwd = std::env::current_dir()?.canonicalize()?;
        let dir = dir.canonicalize()?;
        let mut relative = PathBuf::new();
        for _ in cwd.components().skip(1) {
            relative.push("..");
        }
        relative.push(dir.strip_prefix("/")?);
        Ok(relative)
    }

    #[cfg(unix)]
    #[test]
    fn relative_dir_is_resolved_against_current_dir() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        std::fs::create_dir_all(dir.path().join("services/api"))?;

        let relative = repo.to_relative_path(&relative_to_cwd(&dir.path().join("services/api"))?)?;

        assert_eq!(relative, PathBuf::from("services/api"));
        Ok(())
    }

    #[test]
    fn current_dir_outside_repository_fails() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;

        let result = repo.to_relative_path(Path::new("."));

        assert!(matches!(result, Err(GitError::OutsideRepository { .. })));
        Ok(())
    }

    #[test]
    fn relative_path_outside_repository_fails() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        let other = TempDir::new()?;

        let result = repo.to_relative_path(other.path());

        assert!(matches!(result, Err(GitError::OutsideRepository { .. })));
        Ok(())
    }
}
