//! Message-name resolution and compiler driving.

use std::{
    collections::{BTreeSet, HashSet},
    ffi::OsString,
    path::{Path, PathBuf},
};

use protogen_schema::SchemaIndex;

use crate::{
    command::CompilerCommand,
    error::{GenerateError, RepairError},
    language::Language,
    repair,
};

/// Generates bindings for fully qualified message names found under a schema root.
#[derive(Debug, Clone)]
pub struct BindingGenerator {
    schema_root: PathBuf,
    output_root: PathBuf,
    compiler: OsString,
    compiler_args: Vec<OsString>,
    language: Language,
    package_marker: Option<String>,
}

/// Builder for configuring [`BindingGenerator`].
#[derive(Debug, Clone)]
pub struct BindingGeneratorBuilder {
    schema_root: PathBuf,
    output_root: Option<PathBuf>,
    compiler: OsString,
    compiler_args: Vec<OsString>,
    language: Language,
    package_marker: Option<Option<String>>,
}

/// Outcome of a successful [`BindingGenerator::generate`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Schema files handed to the compiler, in request order without repeats.
    pub inputs: Vec<PathBuf>,
    /// Marker files created while repairing the output tree.
    pub markers_created: Vec<PathBuf>,
}

impl BindingGeneratorBuilder {
    /// Directory receiving generated files. Defaults to the schema root.
    pub fn output_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_root = Some(path.into());
        self
    }

    /// Compiler executable. Defaults to `protoc` looked up on `PATH`.
    pub fn compiler(mut self, program: impl Into<OsString>) -> Self {
        self.compiler = program.into();
        self
    }

    /// Extra arguments passed to the compiler before the include flag.
    pub fn compiler_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        self.compiler_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Override the package marker file name. `None` disables the repair step.
    ///
    /// Without an override the marker follows [`Language::package_marker`].
    pub fn package_marker(mut self, marker: Option<impl Into<String>>) -> Self {
        self.package_marker = Some(marker.map(Into::into));
        self
    }

    /// Resolve both roots to absolute paths and finish configuration.
    pub fn build(self) -> Result<BindingGenerator, GenerateError> {
        let schema_root = absolute(&self.schema_root)?;
        let output_root = match self.output_root {
            Some(path) => absolute(&path)?,
            None => schema_root.clone(),
        };
        let package_marker = self
            .package_marker
            .unwrap_or_else(|| self.language.package_marker().map(str::to_string));

        Ok(BindingGenerator {
            schema_root,
            output_root,
            compiler: self.compiler,
            compiler_args: self.compiler_args,
            language: self.language,
            package_marker,
        })
    }
}

impl BindingGenerator {
    /// Create a builder for a generator reading schemas below `schema_root`.
    pub fn builder(schema_root: impl Into<PathBuf>) -> BindingGeneratorBuilder {
        BindingGeneratorBuilder {
            schema_root: schema_root.into(),
            output_root: None,
            compiler: OsString::from("protoc"),
            compiler_args: Vec::new(),
            language: Language::default(),
            package_marker: None,
        }
    }

    pub fn schema_root(&self) -> &Path {
        &self.schema_root
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn package_marker(&self) -> Option<&str> {
        self.package_marker.as_deref()
    }

    /// Build a fresh index of the schema root.
    pub fn index(&self) -> Result<SchemaIndex, GenerateError> {
        Ok(SchemaIndex::build(&self.schema_root)?)
    }

    /// Map every name to its defining file, preserving request order.
    ///
    /// Fails with [`GenerateError::UnresolvedNames`] listing every name that
    /// is missing from `index`. A file requested through several messages
    /// appears once, at its first position.
    pub fn resolve<S: AsRef<str>>(
        &self,
        index: &SchemaIndex,
        names: &[S],
    ) -> Result<Vec<PathBuf>, GenerateError> {
        let missing: Vec<String> = names
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|name| !index.contains(name))
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(GenerateError::UnresolvedNames { names: missing });
        }

        let mut seen = HashSet::new();
        Ok(names
            .iter()
            .filter_map(|name| index.file_for(name.as_ref()))
            .filter(|path| seen.insert(*path))
            .map(Path::to_path_buf)
            .collect())
    }

    /// The compiler invocation for `inputs`.
    pub fn command(&self, inputs: &[PathBuf]) -> CompilerCommand {
        CompilerCommand::new(
            self.compiler.clone(),
            &self.schema_root,
            self.language,
            &self.output_root,
        )
        .with_prefix_args(self.compiler_args.iter().cloned())
        .with_inputs(inputs.iter().cloned())
    }

    /// Output directories mirroring the parents of `inputs`.
    pub fn package_dirs(&self, inputs: &[PathBuf]) -> Result<BTreeSet<PathBuf>, GenerateError> {
        inputs
            .iter()
            .map(|input| -> Result<PathBuf, GenerateError> {
                let parent = input.parent().unwrap_or(&self.schema_root);
                let rel = parent.strip_prefix(&self.schema_root).map_err(|_| {
                    RepairError::OutsideRoot {
                        dir: parent.to_path_buf(),
                        root: self.schema_root.clone(),
                    }
                })?;
                Ok(self.output_root.join(rel))
            })
            .collect()
    }

    /// Validate `names`, run the compiler once for their files, then make the
    /// output tree importable.
    ///
    /// Nothing is executed unless every name resolves, and the output tree is
    /// only repaired after the compiler succeeds. With `verbose` the assembled
    /// command is printed to stdout before it runs.
    pub fn generate<S: AsRef<str>>(
        &self,
        names: &[S],
        verbose: bool,
    ) -> Result<GenerateReport, GenerateError> {
        let index = self.index()?;
        let inputs = self.resolve(&index, names)?;

        let command = self.command(&inputs);
        if verbose {
            println!("{command}");
        }
        tracing::info!(
            program = %command.program().to_string_lossy(),
            language = %self.language,
            files = inputs.len(),
            output = %command.output().display(),
            "running schema compiler"
        );
        command.run()?;

        let markers_created = match &self.package_marker {
            Some(marker) => {
                let dirs = self.package_dirs(&inputs)?;
                repair::repair_packages(&self.output_root, &dirs, marker)?
            }
            None => Vec::new(),
        };
        tracing::info!(
            markers = markers_created.len(),
            "generated bindings for {} message(s)",
            names.len()
        );

        Ok(GenerateReport {
            inputs,
            markers_created,
        })
    }
}

fn absolute(path: &Path) -> Result<PathBuf, GenerateError> {
    std::path::absolute(path).map_err(|source| GenerateError::InvalidRoot {
        path: path.to_path_buf(),
        source,
    })
}
