//! Qualified-name index over a `.proto` source tree.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::{
    error::SchemaError,
    scanner::{ScannedSchema, scan_schema},
};

/// File extension (without the dot) of indexed schema files.
pub const SCHEMA_EXTENSION: &str = "proto";

/// A qualified message name declared by more than one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMessage {
    pub name: String,
    /// The file whose entry was overwritten.
    pub shadowed: PathBuf,
    /// The file the index now points at.
    pub winner: PathBuf,
}

/// Maps qualified message names and file stems to defining schema files.
///
/// Built once per run by [`SchemaIndex::build`] and never mutated afterwards.
/// Directory entries are visited in file-name order, so when two files declare
/// the same qualified name the one visited last wins. Every such overwrite is
/// logged and kept in [`SchemaIndex::duplicates`].
#[derive(Debug, Clone, Default)]
pub struct SchemaIndex {
    root: PathBuf,
    message_to_file: BTreeMap<String, PathBuf>,
    stem_to_file: BTreeMap<String, PathBuf>,
    duplicates: Vec<DuplicateMessage>,
    file_count: usize,
}

impl SchemaIndex {
    /// Walk `root` recursively and index every `*.proto` file found.
    pub fn build(root: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(SchemaError::RootNotDirectory {
                root: root.to_path_buf(),
            });
        }

        let mut index = Self {
            root: root.to_path_buf(),
            ..Self::default()
        };

        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|source| SchemaError::Walk {
                root: root.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if !is_schema_file(path) {
                continue;
            }

            let text = fs::read_to_string(path).map_err(|source| SchemaError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let scanned = scan_schema(&text).map_err(|source| SchemaError::MalformedSchema {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::debug!(
                path = %path.display(),
                package = scanned.package.as_deref().unwrap_or(""),
                messages = scanned.messages.len(),
                "scanned schema file"
            );
            index.insert_file(path, &scanned);
        }

        tracing::debug!(
            root = %root.display(),
            messages = index.message_to_file.len(),
            files = index.file_count,
            "built schema index"
        );
        Ok(index)
    }

    fn insert_file(&mut self, path: &Path, scanned: &ScannedSchema) {
        self.file_count += 1;
        for name in scanned.qualified_messages() {
            if let Some(previous) = self.message_to_file.insert(name.clone(), path.to_path_buf())
                && previous != path
            {
                tracing::warn!(
                    message = %name,
                    shadowed = %previous.display(),
                    winner = %path.display(),
                    "message declared in more than one schema file"
                );
                self.duplicates.push(DuplicateMessage {
                    name,
                    shadowed: previous,
                    winner: path.to_path_buf(),
                });
            }
        }

        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            self.stem_to_file
                .insert(stem.to_string(), path.to_path_buf());
        }
    }

    /// The directory this index was built from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Defining file for a fully qualified message name.
    pub fn file_for(&self, qualified_name: &str) -> Option<&Path> {
        self.message_to_file.get(qualified_name).map(PathBuf::as_path)
    }

    /// Schema file with the given stem (file name without `.proto`).
    pub fn file_for_stem(&self, stem: &str) -> Option<&Path> {
        self.stem_to_file.get(stem).map(PathBuf::as_path)
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.message_to_file.contains_key(qualified_name)
    }

    /// Indexed `(qualified name, file)` pairs, sorted by name.
    pub fn messages(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.message_to_file
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_path()))
    }

    /// Number of distinct qualified message names.
    pub fn len(&self) -> usize {
        self.message_to_file.len()
    }

    pub fn is_empty(&self) -> bool {
        self.message_to_file.is_empty()
    }

    /// Number of schema files visited.
    pub fn file_count(&self) -> usize {
        self.file_count
    }

    pub fn duplicates(&self) -> &[DuplicateMessage] {
        &self.duplicates
    }
}

fn is_schema_file(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(&format!(".{SCHEMA_EXTENSION}")))
}
