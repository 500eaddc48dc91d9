use std::{ffi::OsString, path::PathBuf};

use anyhow::Result;
use clap::Args;
use protogen::BindingGenerator;

use super::SchemaRootArgs;
use crate::format::OutputLanguage;

#[derive(Args)]
pub struct GenerateArgs {
    /// Fully qualified message names, e.g. avsoftware.avs.GUID
    message_names: Vec<String>,

    #[command(flatten)]
    root: SchemaRootArgs,

    /// Output root for generated bindings (defaults to the schema root)
    #[arg(long, env = "PROTOGEN_OUT")]
    out: Option<PathBuf>,

    /// Schema compiler executable
    #[arg(long, env = "PROTOC", default_value = "protoc")]
    protoc: OsString,

    /// Extra argument passed to the compiler before the include flag (repeatable)
    #[arg(long = "protoc-arg", allow_hyphen_values = true)]
    protoc_args: Vec<OsString>,

    /// Binding language
    #[arg(short, long, value_enum, default_value_t = OutputLanguage::Python)]
    lang: OutputLanguage,

    /// Package marker file name (defaults to __init__.py for python, none otherwise)
    #[arg(long)]
    marker: Option<String>,
}

impl GenerateArgs {
    pub fn run(self, verbose: bool) -> Result<()> {
        let mut builder = BindingGenerator::builder(self.root.schema_root()?)
            .compiler(self.protoc)
            .compiler_args(self.protoc_args)
            .language(self.lang.language());
        if let Some(out) = self.out {
            builder = builder.output_root(out);
        }
        if let Some(marker) = self.marker {
            builder = builder.package_marker(Some(marker));
        }

        let report = builder.build()?.generate(&self.message_names, verbose)?;
        if !report.markers_created.is_empty() {
            tracing::info!(
                "created {} package marker(s)",
                report.markers_created.len()
            );
        }
        Ok(())
    }
}
