//! Common test utilities for frontcheck integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const VALID_POST: &str = "---\n\
title: \"Hello\"\n\
slug: hello\n\
description: \"First post\"\n\
pubDatetime: 2024-05-01T10:00:00Z\n\
tags: [spring, aws]\n\
draft: false\n\
---\n\
\n\
Body text.\n";

#[allow(dead_code)]
pub const VALID_EXAMPLE: &str = "---\n\
title: \"SQS overview\"\n\
slug: sqs-overview\n\
description: \"Architecture walkthrough\"\n\
createdDate: 2024-04-10\n\
repoPath: examples/sqs-architecture-overview\n\
githubUrl: https://github.com/example/sqs\n\
postSlugs: [hello]\n\
---\n";

/// A throwaway repository with the site layout frontcheck expects:
/// `<repo>/posts` for the blog and `<repo>/site/src/data/examples` for examples
pub struct TestSite {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Repository root
    pub repo: PathBuf,
    /// Site directory, the default project base
    pub site: PathBuf,
}

impl TestSite {
    /// Create an empty site; neither collection directory exists yet
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let repo = temp.path().to_path_buf();
        let site = repo.join("site");
        std::fs::create_dir_all(&site).expect("Failed to create site directory");
        Self { temp, repo, site }
    }

    /// Write a file relative to the repository root
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.repo.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write a blog post under `<repo>/posts`
    #[allow(dead_code)]
    pub fn write_post(&self, name: &str, content: &str) -> PathBuf {
        self.write_file(&format!("posts/{name}"), content)
    }

    /// Write an example under `<site>/src/data/examples`
    #[allow(dead_code)]
    pub fn write_example(&self, name: &str, content: &str) -> PathBuf {
        self.write_file(&format!("site/src/data/examples/{name}"), content)
    }

    /// frontcheck command running from `dir` with a clean environment
    #[allow(deprecated)]
    pub fn cmd_in(&self, dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin("frontcheck").expect("frontcheck binary should build");
        cmd.current_dir(dir)
            .env_remove("FRONTCHECK_BASE")
            .env_remove("FRONTCHECK_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// frontcheck command running from the site directory
    pub fn cmd(&self) -> Command {
        self.cmd_in(&self.site)
    }
}
