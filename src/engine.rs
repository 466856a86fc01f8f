use crate::error::ContextError;
use crate::options::{ContextBuilder, ContextOptions};
use crate::output::{OUTPUT_FILE_NAME, write_entry};
use crate::policy::ExclusionPolicy;
use crate::types::{ContextSummary, FileContent};
use ignore::{DirEntry, WalkBuilder};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &ContextOptions) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        // Only the exclusion policy decides: no hidden-file or ignore-file rules.
        builder.standard_filters(false).follow_links(false);
        if options.sort_entries {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }
        let policy = options.policy.clone();
        builder.filter_entry(move |entry| !is_pruned_dir(&policy, entry));
        Self {
            inner: builder.build(),
        }
    }
    fn entries(self) -> impl Iterator<Item = Result<DirEntry, ContextError>> {
        self.inner
            .map(|result| result.map_err(|e| ContextError::Walk(e.to_string())))
    }
}
fn is_pruned_dir(policy: &ExclusionPolicy, entry: &DirEntry) -> bool {
    let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
    if is_dir && policy.is_excluded(entry.path()) {
        #[cfg(feature = "logging")]
        tracing::debug!("Pruning excluded directory: {}", entry.path().display());
        return true;
    }
    false
}
/// Files that get a block: regular files, and symlinks that do not lead to a
/// directory. A dangling symlink is kept so its block records the read error.
fn is_file_candidate(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
        Some(ft) => ft.is_file(),
        None => false,
    }
}
struct SkipList {
    canonical: Vec<PathBuf>,
}
impl SkipList {
    fn new(paths: &[PathBuf]) -> Self {
        Self {
            canonical: paths
                .iter()
                .filter_map(|p| fs::canonicalize(p).ok())
                .collect(),
        }
    }
    fn contains(&self, path: &Path) -> bool {
        if self.canonical.is_empty() {
            return false;
        }
        let name_matches = self
            .canonical
            .iter()
            .any(|skip| skip.file_name() == path.file_name());
        name_matches
            && fs::canonicalize(path).is_ok_and(|resolved| self.canonical.contains(&resolved))
    }
}
fn check_root(root: &Path) -> Result<(), ContextError> {
    let is_dir = fs::metadata(root).is_ok_and(|m| m.is_dir());
    if !is_dir {
        return Err(ContextError::InvalidRoot(root.to_path_buf()));
    }
    fs::read_dir(root).map_err(|e| ContextError::io(root, e))?;
    Ok(())
}
/// Reads the whole file as strict UTF-8.
///
/// Line breaks and every other byte are preserved; invalid UTF-8 is an error
/// rather than being replaced.
pub fn read_file_content(path: &Path) -> Result<String, ContextError> {
    let bytes = fs::read(path).map_err(|e| ContextError::io(path, e))?;
    String::from_utf8(bytes).map_err(|e| ContextError::decode(path, e))
}
/// Walks `options.root` and writes one block per included file to `out`.
///
/// Excluded directories are pruned, excluded files leave no trace, and a file
/// that cannot be read is written with an `Error reading file: ...` placeholder
/// instead of aborting the run.
///
/// # Errors
///
/// Fails if the root is missing or not a readable directory, or if writing to
/// `out` fails.
pub fn write_context<W: Write + ?Sized>(
    options: &ContextOptions,
    out: &mut W,
) -> Result<ContextSummary, ContextError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Building context from root: {}", options.root.display());
    check_root(&options.root)?;
    let mut summary = ContextSummary::default();
    if options.policy.is_excluded(&options.root) {
        #[cfg(feature = "logging")]
        tracing::debug!("Root is excluded, nothing to write");
        return Ok(summary);
    }
    let skip = SkipList::new(&options.skip_files);
    for result in Walker::new(options).entries() {
        let entry = match result {
            Ok(entry) => entry,
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::warn!("Skipping unreadable entry: {}", _e);
                continue;
            }
        };
        if !is_file_candidate(&entry) {
            continue;
        }
        let path = entry.path();
        if skip.contains(path) {
            continue;
        }
        if options.policy.is_excluded(path) {
            #[cfg(feature = "logging")]
            tracing::debug!("Excluded file: {}", path.display());
            summary.files_excluded += 1;
            continue;
        }
        let content = FileContent::from_read(read_file_content(path));
        if content.is_unreadable() {
            #[cfg(feature = "logging")]
            tracing::warn!("Could not read {}, writing placeholder", path.display());
            summary.read_failures += 1;
        }
        write_entry(out, path, &content.render()).map_err(ContextError::Write)?;
        summary.files_written += 1;
    }
    Ok(summary)
}
/// Writes the context of `root` to `project_context.txt` in the current
/// directory, replacing any previous document.
pub fn create_project_context(root: impl Into<PathBuf>) -> Result<ContextSummary, ContextError> {
    create_project_context_at(root, OUTPUT_FILE_NAME)
}
/// Writes the context of `root` to `output`, replacing any previous document.
///
/// The output file itself is never included, even when it lies under `root`.
pub fn create_project_context_at(
    root: impl Into<PathBuf>,
    output: impl AsRef<Path>,
) -> Result<ContextSummary, ContextError> {
    let output = output.as_ref();
    let file = File::create(output).map_err(|e| ContextError::io(output, e))?;
    let options = ContextBuilder::new(root).skip_file(output).build();
    let mut writer = BufWriter::new(file);
    let summary = write_context(&options, &mut writer)?;
    writer.flush().map_err(|e| ContextError::io(output, e))?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Wrote {} files ({} unreadable, {} excluded) to {}",
        summary.files_written,
        summary.read_failures,
        summary.files_excluded,
        output.display()
    );
    Ok(summary)
}
