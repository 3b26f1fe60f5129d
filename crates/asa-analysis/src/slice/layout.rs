//! Fixed file layout of a slice directory.

use std::path::{Path, PathBuf};

use asa_core::constants::{GOVERNED_SOURCE_FILES, REQUIRED_FILES};

/// A slice directory and the paths the checks expect inside it.
///
/// Read-only: nothing here touches the filesystem beyond path arithmetic,
/// except `slice_name` which may canonicalize a path with no final component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceLayout {
    root: PathBuf,
}

impl SliceLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Leaf directory name, used for the naming rules.
    pub fn slice_name(&self) -> String {
        if let Some(name) = self.root.file_name() {
            return name.to_string_lossy().into_owned();
        }
        // `.` or `..` carry no final component; fall back to the resolved path.
        self.root
            .canonicalize()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_default()
    }

    /// Required entries as (relative name, absolute path), in reporting order.
    pub fn required_paths(&self) -> impl Iterator<Item = (&'static str, PathBuf)> + '_ {
        REQUIRED_FILES.iter().map(move |rel| (*rel, self.root.join(rel)))
    }

    /// Governed source files as (file name, path), in reporting order.
    pub fn governed_files(&self) -> impl Iterator<Item = (&'static str, PathBuf)> + '_ {
        GOVERNED_SOURCE_FILES.iter().map(move |name| (*name, self.root.join(name)))
    }
}
