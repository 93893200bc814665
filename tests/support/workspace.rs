//! Temporary project directories for end-to-end checks.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A scratch directory holding a manifest and optional `bindcheck.toml`.
pub struct TempWorkspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl TempWorkspace {
    /// Creates an empty workspace.
    ///
    /// # Panics
    ///
    /// Panics when the temporary directory cannot be created or its path is
    /// not UTF-8.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temporary workspace");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .expect("temporary workspace path is UTF-8");
        Self { _dir: dir, root }
    }

    /// Path of `name` inside the workspace, whether or not it exists.
    pub fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Writes `contents` to `name` inside the workspace.
    ///
    /// # Panics
    ///
    /// Panics when the file cannot be written.
    pub fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).unwrap_or_else(|error| panic!("write {path}: {error}"));
        path
    }

    /// Copies `tests/fixtures/<name>` into the workspace as `bindings.toml`.
    ///
    /// # Panics
    ///
    /// Panics when the fixture is missing.
    pub fn install_fixture(&self, name: &str) -> Utf8PathBuf {
        let source = Utf8Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name);
        let contents = std::fs::read_to_string(&source)
            .unwrap_or_else(|error| panic!("read fixture {source}: {error}"));
        self.write("bindings.toml", &contents)
    }
}
