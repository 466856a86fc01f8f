//! The layout of the context document.
//!
//! Every included file becomes one block:
//!
//! ```text
//!
//! ================================================================================
//! File: ./src/main.rs
//! ================================================================================
//!
//! <content>
//! ```

use std::io::{self, Write};
use std::path::Path;

/// Name of the document written into the current directory.
pub const OUTPUT_FILE_NAME: &str = "project_context.txt";

/// The separator line above and below each header, 80 `=` characters.
pub const SEPARATOR: &str =
    "================================================================================";

/// Writes one file block to `out`.
pub fn write_entry<W: Write + ?Sized>(out: &mut W, path: &Path, content: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "File: {}", path.display())?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out)?;
    out.write_all(content.as_bytes())?;
    out.write_all(b"\n")
}

/// Formats one file block as a string.
pub fn format_entry(path: &Path, content: &str) -> String {
    format!(
        "\n{sep}\nFile: {}\n{sep}\n\n{}\n",
        path.display(),
        content,
        sep = SEPARATOR
    )
}
