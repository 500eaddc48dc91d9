//! Package marker insertion for generated output trees.
//!
//! The schema compiler emits binding files but not the marker files that make
//! each directory an importable package. [`repair_packages`] walks upward from
//! every generated directory to the output root and fills in the gaps.

use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::error::RepairError;

/// Marker file name for Python packages.
pub const DEFAULT_PACKAGE_MARKER: &str = "__init__.py";

/// Ensure `marker` exists in every directory from each of `dirs` up to `root`.
///
/// `root` itself is never marked and nothing above it is touched. Every
/// target is checked against `root` before any file is written; a target that
/// is not a descendant yields [`RepairError::OutsideRoot`]. Existing markers
/// are left as they are, so repeated runs are no-ops.
///
/// Returns the marker files that were created by this call.
pub fn repair_packages<I, P>(
    root: &Path,
    dirs: I,
    marker: &str,
) -> Result<Vec<PathBuf>, RepairError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let dirs: Vec<P> = dirs.into_iter().collect();
    for dir in &dirs {
        let dir = dir.as_ref();
        if !dir.starts_with(root) {
            return Err(RepairError::OutsideRoot {
                dir: dir.to_path_buf(),
                root: root.to_path_buf(),
            });
        }
    }

    let mut created = Vec::new();
    for dir in &dirs {
        let mut current = dir.as_ref();
        while current != root {
            if let Some(path) = ensure_marker(current, marker)? {
                created.push(path);
            }
            current = current.parent().ok_or_else(|| RepairError::OutsideRoot {
                dir: dir.as_ref().to_path_buf(),
                root: root.to_path_buf(),
            })?;
        }
    }
    Ok(created)
}

fn ensure_marker(dir: &Path, marker: &str) -> Result<Option<PathBuf>, RepairError> {
    let path = dir.join(marker);
    let file = OpenOptions::new().write(true).create_new(true).open(&path);
    let mut file = match file {
        Ok(file) => file,
        // another run may have won the race; presence is all that matters
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(None),
        Err(source) => return Err(RepairError::CreateMarker { path, source }),
    };
    if let Err(source) = file.write_all(b"\n") {
        return Err(RepairError::CreateMarker { path, source });
    }
    tracing::debug!(path = %path.display(), "created package marker");
    Ok(Some(path))
}
