//! Path normalization for report output
//!
//! Report lines show file paths relative to the directory frontcheck was
//! invoked from, with `..` segments when a file lives outside it.

use std::path::{Component, Path, PathBuf};

/// Renders paths relative to a fixed base directory.
///
/// Purely lexical: symlinks are never resolved, so a file reached through a
/// linked directory is shown under the link, as it was walked.
#[derive(Debug, Clone)]
pub struct PathNormalizer {
    base: PathBuf,
}

impl PathNormalizer {
    /// Create a normalizer; `base` should be absolute
    pub fn new(base: &Path) -> Self {
        Self {
            base: lexical_clean(base),
        }
    }

    /// Forward-slash representation used in output
    pub fn to_normalized_str(path: &Path) -> String {
        path.to_string_lossy().replace('\\', "/")
    }

    /// Path of `path` relative to the base, e.g. `posts/a.md` or `../posts/a.md`.
    /// Falls back to the cleaned absolute path when no relative form exists
    /// (different Windows drives).
    pub fn relative(&self, path: &Path) -> String {
        let target = lexical_clean(path);
        match relative_path(&self.base, &target) {
            Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
            Some(rel) => Self::to_normalized_str(&rel),
            None => Self::to_normalized_str(&target),
        }
    }
}

/// Fold `.` and `..` components without touching the file system.
/// `..` at the root of an absolute path stays at the root.
fn lexical_clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}

fn relative_path(base: &Path, target: &Path) -> Option<PathBuf> {
    let base: Vec<Component> = base.components().collect();
    let target: Vec<Component> = target.components().collect();

    if base.first() != target.first() {
        return None;
    }

    let common = base
        .iter()
        .zip(&target)
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..base.len() {
        rel.push("..");
    }
    for component in &target[common..] {
        rel.push(component);
    }
    Some(rel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_to_normalized_str() {
        assert_eq!(PathNormalizer::to_normalized_str(Path::new("a/b/c")), "a/b/c");
        assert_eq!(PathNormalizer::to_normalized_str(Path::new("a\\b\\c")), "a/b/c");
    }

    #[test]
    fn test_relative_inside_base() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let file = temp.path().join("posts/hello.md");
        std::fs::create_dir_all(file.parent().unwrap()).unwrap();
        std::fs::write(&file, "x").unwrap();

        let normalizer = PathNormalizer::new(temp.path());
        assert_eq!(normalizer.relative(&file), "posts/hello.md");
    }

    #[test]
    fn test_relative_outside_base_uses_parent_segments() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let site = temp.path().join("site");
        let post = temp.path().join("posts/a.md");
        std::fs::create_dir_all(&site).unwrap();
        std::fs::create_dir_all(post.parent().unwrap()).unwrap();
        std::fs::write(&post, "x").unwrap();

        let normalizer = PathNormalizer::new(&site);
        assert_eq!(normalizer.relative(&post), "../posts/a.md");
        assert_eq!(normalizer.relative(&site.join("../posts/a.md")), "../posts/a.md");
    }

    #[test]
    fn test_relative_to_itself() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let normalizer = PathNormalizer::new(temp.path());
        assert_eq!(normalizer.relative(temp.path()), ".");
    }

    #[test]
    fn test_relative_for_missing_path() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let normalizer = PathNormalizer::new(temp.path());
        assert_eq!(
            normalizer.relative(&temp.path().join("nope/./x/../y.md")),
            "nope/y.md"
        );
    }

    #[test]
    fn test_lexical_clean() {
        assert_eq!(lexical_clean(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(lexical_clean(Path::new("../x")), PathBuf::from("../x"));
        assert_eq!(lexical_clean(Path::new("../../x")), PathBuf::from("../../x"));
        assert_eq!(lexical_clean(Path::new("/../x")), PathBuf::from("/x"));
    }

    #[cfg(unix)]
    #[test]
    fn test_relative_keeps_symlinked_directory() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let storage = temp.path().join("storage/posts");
        let repo = temp.path().join("repo");
        let site = repo.join("site");
        std::fs::create_dir_all(&storage).unwrap();
        std::fs::create_dir_all(&site).unwrap();
        std::fs::write(storage.join("hello.md"), "x").unwrap();
        std::os::unix::fs::symlink(&storage, repo.join("posts")).unwrap();

        let normalizer = PathNormalizer::new(&site);
        assert_eq!(
            normalizer.relative(&site.join("../posts/hello.md")),
            "../posts/hello.md"
        );
    }
}
