use std::{fmt::Write as _, fs, path::PathBuf};

use anyhow::Result;
use clap::Args;
use protogen::SchemaIndex;

use super::SchemaRootArgs;

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    root: SchemaRootArgs,

    /// Only list messages whose qualified name starts with this prefix
    #[arg(short, long)]
    prefix: Option<String>,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let index = SchemaIndex::build(self.root.schema_root()?)?;
        let prefix = self.prefix.as_deref().unwrap_or("");

        let mut text = String::new();
        for (name, path) in index.messages().filter(|(name, _)| name.starts_with(prefix)) {
            writeln!(text, "{name}\t{}", path.display())?;
        }

        match self.output {
            Some(path) => fs::write(path, text)?,
            None => print!("{text}"),
        }
        Ok(())
    }
}
