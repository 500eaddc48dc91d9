pub mod generate;
pub mod list;

use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;

/// Location of the schema tree, shared by every subcommand.
#[derive(Args)]
pub struct SchemaRootArgs {
    /// Root of the .proto source tree [default: <exe dir>/../deps/avsoftware]
    #[arg(long, env = "PROTOGEN_SCHEMA_ROOT")]
    schema_root: Option<PathBuf>,
}

impl SchemaRootArgs {
    pub fn schema_root(&self) -> Result<PathBuf> {
        match &self.schema_root {
            Some(path) => Ok(path.clone()),
            None => default_schema_root(),
        }
    }
}

fn default_schema_root() -> Result<PathBuf> {
    let exe = env::current_exe().context("cannot locate the protogen executable")?;
    let exe_dir = exe
        .parent()
        .context("protogen executable has no parent directory")?;
    Ok(exe_dir.join("..").join("deps").join("avsoftware"))
}
