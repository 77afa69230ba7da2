//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use git2::{Repository, Signature};

use vgn_check::CheckConfig;

pub const MANIFEST: &str = "module go.kwusen.ca/app\n\
                            \n\
                            go 1.21\n\
                            \n\
                            require (\n\
                            \tgithub.com/pkg/errors v0.9.1\n\
                            \tgo.kwusen.ca/vgn v1.2.3\n\
                            )\n";

pub const REGISTRY: &str = "[submodule \"vendor/vgn\"]\n\
                            \tpath = vendor/vgn\n\
                            \turl = git@example.com:kwusen/vgn.git\n";

/// A scratch repository root with go.mod, .gitmodules and submodule dirs.
pub struct Checkout {
    pub dir: tempfile::TempDir,
}

impl Checkout {
    /// Create an empty checkout in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        Self { dir }
    }

    /// The standard scenario: vgn v1.2.3 required, one submodule at vendor/vgn.
    pub fn standard(marker: &str) -> Self {
        let checkout = Self::new();
        checkout.write("go.mod", MANIFEST);
        checkout.write(".gitmodules", REGISTRY);
        checkout.write("vendor/vgn/vgn-version.txt", marker);
        checkout
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> CheckConfig {
        CheckConfig::with_root(self.root())
    }

    /// Write a file relative to the checkout root, creating parent dirs.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Append a line to go.mod.
    pub fn append_manifest(&self, line: &str) {
        let path = self.root().join("go.mod");
        let mut content = std::fs::read_to_string(&path).expect("Failed to read go.mod");
        content.push_str(line);
        content.push('\n');
        std::fs::write(&path, content).expect("Failed to write go.mod");
    }

    /// Turn `rel` into a git repository with everything in it committed.
    pub fn commit_submodule(&self, rel: &str) -> Repository {
        let path = self.root().join(rel);
        std::fs::create_dir_all(&path).expect("Failed to create submodule dir");
        let repo = Repository::init(&path).expect("Failed to init git repo");

        {
            let mut index = repo.index().expect("Failed to get index");
            index
                .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
                .expect("Failed to add files");
            index.write().expect("Failed to write index");
            let tree_id = index.write_tree().expect("Failed to write tree");
            let tree = repo.find_tree(tree_id).expect("Failed to find tree");
            let sig =
                Signature::now("Test User", "test@example.com").expect("Failed to create signature");
            repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
                .expect("Failed to create commit");
        }

        repo
    }
}
