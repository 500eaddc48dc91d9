//! Error types for schema scanning and indexing.

use std::path::PathBuf;

/// Error produced while scanning the text of a single schema file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// A file may declare at most one `package` statement.
    #[error("multiple package declarations: {}", packages.join(", "))]
    MultiplePackages { packages: Vec<String> },
}

/// Errors produced by [`SchemaIndex::build`](crate::SchemaIndex::build).
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The configured schema root does not exist or is not a directory.
    #[error("schema root {} is not a directory", root.display())]
    RootNotDirectory { root: PathBuf },

    /// Directory traversal failed (permission denied, symlink loop, ...).
    #[error("failed to walk schema tree under {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A schema file could not be read as UTF-8 text.
    #[error("failed to read schema file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A schema file is structurally invalid.
    #[error("malformed schema file {}: {source}", path.display())]
    MalformedSchema {
        path: PathBuf,
        #[source]
        source: ScanError,
    },
}
