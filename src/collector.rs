//! Markdown file discovery for collection roots
//!
//! A missing, unreadable or non-directory root is not an error: it simply yields no files.
//! Unreadable entries below the root are skipped the same way, except for
//! broken `.md` links: those are kept so that reading them fails loudly.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension of content files, including the dot
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Collect every Markdown file under `root`, recursively.
///
/// Paths come back in directory enumeration order unless `sorted` is set,
/// in which case entries are visited in file-name order at every level.
pub fn collect_markdown_files(root: &Path, sorted: bool) -> Vec<PathBuf> {
    if !root.is_dir() {
        tracing::debug!(root = %root.display(), "collection root is not a directory");
        return Vec::new();
    }

    let walker = WalkDir::new(root).follow_links(true);
    let walker = if sorted {
        walker.sort_by_file_name()
    } else {
        walker
    };

    let files: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) if entry.file_type().is_dir() => None,
            Ok(entry) => Some(entry.into_path()),
            Err(err) => broken_link(&err).or_else(|| {
                tracing::debug!(root = %root.display(), error = %err, "skipping unreadable entry");
                None
            }),
        })
        .filter(|path| is_markdown(path))
        .collect();

    tracing::debug!(root = %root.display(), count = files.len(), "collected markdown files");
    files
}

fn is_markdown(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(MARKDOWN_EXTENSION))
}

/// Path of a symlink whose target is gone
fn broken_link(err: &walkdir::Error) -> Option<PathBuf> {
    let path = err.path()?;
    let not_found = err
        .io_error()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound);
    let is_link = path
        .symlink_metadata()
        .is_ok_and(|meta| meta.file_type().is_symlink());
    (not_found && is_link).then(|| path.to_path_buf())
}
