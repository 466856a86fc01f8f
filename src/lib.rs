//! # projctx
//!
//! `projctx` flattens a source tree into one plain-text document: every file
//! that survives the exclusion policy is appended under a header naming its
//! path. The result is a single "project context" artifact that can be pasted
//! into another tool.
//!
//! The walk is sequential. Directories named `node_modules` or `.next` are
//! pruned, image/PDF/archive extensions are skipped, and a file that cannot be
//! read is written with an `Error reading file: ...` placeholder instead of
//! failing the run.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use projctx::{ContextBuilder, ExclusionPolicy, write_context};
//!
//! let options = ContextBuilder::new("src")
//!     .policy(ExclusionPolicy::new(["target"], ["lock"]))
//!     .build();
//!
//! let mut document: Vec<u8> = Vec::new();
//! let summary = write_context(&options, &mut document).expect("Failed to walk directory");
//! println!("{} files, {} unreadable", summary.files_written, summary.read_failures);
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod policy;
mod types;

pub use engine::{create_project_context, create_project_context_at, read_file_content, write_context};
pub use error::ContextError;
pub use options::{ContextBuilder, ContextOptions};
pub use output::OUTPUT_FILE_NAME;
pub use policy::{DEFAULT_EXCLUDED_DIRS, DEFAULT_EXCLUDED_EXTENSIONS, ExclusionPolicy};
pub use types::{ContextSummary, FileContent};
