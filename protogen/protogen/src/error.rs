//! Error types for binding generation.

use std::{path::PathBuf, process::ExitStatus};

use protogen_schema::SchemaError;

/// Errors produced while making the output tree importable.
#[derive(Debug, thiserror::Error)]
pub enum RepairError {
    /// A target directory is not below the root the ascent is bounded by.
    #[error("{} is not inside package root {}", dir.display(), root.display())]
    OutsideRoot { dir: PathBuf, root: PathBuf },

    /// A marker file could not be created.
    #[error("failed to create package marker {}: {source}", path.display())]
    CreateMarker {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors produced by [`BindingGenerator`](crate::BindingGenerator).
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// A configured root directory could not be made absolute.
    #[error("invalid directory {}: {source}", path.display())]
    InvalidRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Building the schema index failed.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// One or more requested names have no definition in the schema tree.
    #[error(
        "could not find definition for {}; are you using the full package-qualified name?",
        quote_names(names)
    )]
    UnresolvedNames { names: Vec<String> },

    /// The compiler executable could not be started.
    #[error("failed to start schema compiler `{program}`: {source}")]
    CompilerSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The compiler ran and exited unsuccessfully.
    #[error("schema compiler `{program}` failed ({status})")]
    CompilerFailed { program: String, status: ExitStatus },

    #[error(transparent)]
    Repair(#[from] RepairError),
}

fn quote_names(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("`{n}`"))
        .collect::<Vec<_>>()
        .join(", ")
}
