//! Command line for the external schema compiler.

use std::{
    ffi::OsString,
    fmt,
    path::{Path, PathBuf},
    process::Command,
};

use crate::{error::GenerateError, language::Language};

/// A fully assembled schema compiler invocation:
/// `<program> [prefix args] -I<include> --<lang>_out=<output> <input>...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerCommand {
    program: OsString,
    prefix_args: Vec<OsString>,
    include: PathBuf,
    out_flag: String,
    output: PathBuf,
    inputs: Vec<PathBuf>,
}

impl CompilerCommand {
    pub fn new(
        program: impl Into<OsString>,
        include: impl Into<PathBuf>,
        language: Language,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            prefix_args: Vec::new(),
            include: include.into(),
            out_flag: language.out_flag(),
            output: output.into(),
            inputs: Vec::new(),
        }
    }

    /// Arguments placed between the program and the include flag,
    /// e.g. `-m grpc_tools.protoc` when the program is a Python interpreter.
    pub fn with_prefix_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        self.prefix_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_inputs<I, P>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.inputs = inputs.into_iter().map(Into::into).collect();
        self
    }

    pub fn program(&self) -> &OsString {
        &self.program
    }

    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Every argument after the program, in order.
    pub fn args(&self) -> Vec<OsString> {
        let mut args = self.prefix_args.clone();

        let mut include = OsString::from("-I");
        include.push(&self.include);
        args.push(include);

        let mut out = OsString::from(format!("{}=", self.out_flag));
        out.push(&self.output);
        args.push(out);

        args.extend(self.inputs.iter().map(|p| p.as_os_str().to_owned()));
        args
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args());
        cmd
    }

    /// Run the compiler to completion, inheriting stdio.
    pub fn run(&self) -> Result<(), GenerateError> {
        let program = self.program.to_string_lossy().into_owned();
        let status = self
            .to_command()
            .status()
            .map_err(|source| GenerateError::CompilerSpawn {
                program: program.clone(),
                source,
            })?;
        if !status.success() {
            return Err(GenerateError::CompilerFailed { program, status });
        }
        Ok(())
    }
}

/// One argument per line, shell-continued:
///
/// ```text
///   protoc \
///     -I/src \
///     --python_out=/src \
///     /src/foo.proto
/// ```
impl fmt::Display for CompilerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}", self.program.to_string_lossy())?;
        for arg in self.args() {
            write!(f, " \\\n    {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
