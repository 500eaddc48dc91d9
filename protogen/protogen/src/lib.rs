//! Generate importable protobuf bindings for selected messages.
//!
//! [`BindingGenerator`] resolves fully qualified message names against a
//! [`SchemaIndex`] built from the schema tree, runs the external schema
//! compiler once for all defining files, and then drops package marker files
//! into every output directory between the generated files and the output
//! root so the result is importable.
//!
//! ```no_run
//! use protogen::BindingGenerator;
//!
//! let generator = BindingGenerator::builder("deps/avsoftware")
//!     .compiler("protoc")
//!     .build()?;
//! generator.generate(&["avsoftware.avs.GUID"], true)?;
//! # Ok::<(), protogen::GenerateError>(())
//! ```

mod command;
mod error;
mod generator;
mod language;
mod repair;

pub use command::CompilerCommand;
pub use error::{GenerateError, RepairError};
pub use generator::{BindingGenerator, BindingGeneratorBuilder, GenerateReport};
pub use language::Language;
pub use protogen_schema as schema;
pub use protogen_schema::SchemaIndex;
pub use repair::{DEFAULT_PACKAGE_MARKER, repair_packages};
