//! `.proto` source-tree indexing for `protogen`.
//!
//! Recovers package and message ownership from raw schema text so that a
//! fully qualified message name can be mapped back to the file declaring it.
//!
//! # Pipeline
//!
//! ```text
//! schema root
//!   └─ SchemaIndex::build      – walkdir traversal of *.proto files
//!       └─ blank_comments      – strip // and /* */ comments, offsets kept
//!           └─ scan_schema     – nom-based package / message scanner
//!               └─ SchemaIndex – qualified name → file, stem → file
//! ```

mod error;
mod index;
mod lex;
mod scanner;

pub use error::{ScanError, SchemaError};
pub use index::{DuplicateMessage, SCHEMA_EXTENSION, SchemaIndex};
pub use lex::blank_comments;
pub use scanner::{ScannedSchema, qualify, scan_schema};
