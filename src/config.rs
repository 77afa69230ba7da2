//! Fixed file conventions the checker operates on.

use std::path::{Path, PathBuf};

/// Module path of the tracked dependency.
pub const DEFAULT_MODULE: &str = "go.kwusen.ca/vgn";

/// Module manifest, relative to the repository root.
pub const DEFAULT_MANIFEST: &str = "go.mod";

/// Submodule registry, relative to the repository root.
pub const DEFAULT_REGISTRY: &str = ".gitmodules";

/// Version marker expected inside every registered submodule.
pub const DEFAULT_MARKER_FILE: &str = "vgn-version.txt";

/// Where to look and what to look for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub root: PathBuf,
    pub module: String,
    pub manifest: PathBuf,
    pub registry: PathBuf,
    pub marker_file: PathBuf,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            module: DEFAULT_MODULE.to_string(),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            registry: PathBuf::from(DEFAULT_REGISTRY),
            marker_file: PathBuf::from(DEFAULT_MARKER_FILE),
        }
    }
}

impl CheckConfig {
    /// Default conventions, rooted at `root` instead of the current directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.resolve(&self.manifest)
    }

    pub fn registry_path(&self) -> PathBuf {
        self.resolve(&self.registry)
    }

    /// Working directory of a submodule as registered in `.gitmodules`.
    pub fn submodule_dir(&self, submodule: &Path) -> PathBuf {
        self.resolve(submodule)
    }

    pub fn marker_path(&self, submodule: &Path) -> PathBuf {
        self.submodule_dir(submodule).join(&self.marker_file)
    }

    // Keeps messages free of a leading "./" when running from the repo root.
    fn resolve(&self, relative: &Path) -> PathBuf {
        if self.root == Path::new(".") {
            relative.to_path_buf()
        } else {
            self.root.join(relative)
        }
    }
}
