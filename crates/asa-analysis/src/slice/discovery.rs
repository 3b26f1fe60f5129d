//! Slice discovery: `<root>/domains/<domain>/slices/<slice>`.

use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use asa_core::constants::{DOMAINS_DIR, SLICES_DIR};
use asa_core::errors::ScanError;

/// A slice found under a project root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct SliceRef {
    pub domain: String,
    pub name: String,
    pub path: PathBuf,
}

impl SliceRef {
    /// `<domain>/<slice>`.
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.domain, self.name)
    }
}

/// Enumerate every slice under `project_root`, optionally limited to one domain.
///
/// Hidden (`.`) and dunder (`__`) slice directories are skipped, as are
/// domains without a `slices/` directory. Output is sorted by (domain, slice).
pub fn discover_slices(project_root: &Path, domain_filter: Option<&str>) -> Result<Vec<SliceRef>, ScanError> {
    let domains_path = project_root.join(DOMAINS_DIR);
    if !domains_path.is_dir() {
        return Err(ScanError::DomainsNotFound {
            path: project_root.to_path_buf(),
        });
    }

    let mut slices = Vec::new();
    for (domain, domain_path) in child_dirs(&domains_path)? {
        if domain_filter.is_some_and(|wanted| wanted != domain) {
            continue;
        }

        let slices_path = domain_path.join(SLICES_DIR);
        if !slices_path.is_dir() {
            continue;
        }

        for (name, path) in child_dirs(&slices_path)? {
            if name.starts_with('.') || name.starts_with("__") {
                continue;
            }
            slices.push(SliceRef {
                domain: domain.clone(),
                name,
                path,
            });
        }
    }

    slices.sort();
    tracing::debug!(root = %project_root.display(), count = slices.len(), "discovered slices");
    Ok(slices)
}

/// Immediate subdirectories of `dir`, sorted by name. Symlinks are followed;
/// dangling ones are skipped.
fn child_dirs(dir: &Path) -> Result<Vec<(String, PathBuf)>, ScanError> {
    let mut out = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            // Only a failure to list `dir` itself aborts discovery.
            Err(e) if e.depth() == 0 => {
                return Err(ScanError::Io {
                    path: e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf()),
                    message: e.to_string(),
                })
            }
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        out.push((name, entry.into_path()));
    }
    Ok(out)
}
