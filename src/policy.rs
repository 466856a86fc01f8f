//! The exclusion policy: which directories and file extensions never make it
//! into the context document.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Component, Path};

/// Directory names excluded by the default policy.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules", ".next"];

/// File extensions excluded by the default policy.
pub const DEFAULT_EXCLUDED_EXTENSIONS: &[&str] =
    &["jpg", "jpeg", "png", "gif", "ico", "svg", "pdf", "zip"];

/// Two fixed sets deciding what the walker skips.
///
/// Directory names match a whole path segment exactly. Extensions are stored
/// lowercased and without a leading dot, and match case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPolicy")]
pub struct ExclusionPolicy {
    dirs: BTreeSet<String>,
    extensions: BTreeSet<String>,
}

#[derive(Deserialize)]
struct RawPolicy {
    #[serde(default)]
    dirs: Vec<String>,
    #[serde(default)]
    extensions: Vec<String>,
}

impl From<RawPolicy> for ExclusionPolicy {
    fn from(raw: RawPolicy) -> Self {
        Self::new(raw.dirs, raw.extensions)
    }
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_EXCLUDED_DIRS.iter().copied(),
            DEFAULT_EXCLUDED_EXTENSIONS.iter().copied(),
        )
    }
}

impl ExclusionPolicy {
    pub fn new<D, E>(dirs: D, extensions: E) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
            extensions: extensions
                .into_iter()
                .map(|ext| normalize_extension(ext.as_ref()))
                .filter(|ext| !ext.is_empty())
                .collect(),
        }
    }

    /// A policy that excludes nothing.
    pub fn empty() -> Self {
        Self {
            dirs: BTreeSet::new(),
            extensions: BTreeSet::new(),
        }
    }

    pub fn dirs(&self) -> impl Iterator<Item = &str> {
        self.dirs.iter().map(String::as_str)
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    /// Returns `true` if the path must be skipped (and, for a directory, pruned).
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.is_excluded_dir_segment(path) || self.is_excluded_extension(path)
    }

    /// Returns `true` if any segment of `path` is exactly an excluded directory name.
    pub fn is_excluded_dir_segment(&self, path: &Path) -> bool {
        path.components().any(|component| match component {
            Component::Normal(name) => name.to_str().is_some_and(|n| self.dirs.contains(n)),
            _ => false,
        })
    }

    /// Returns `true` if the lowercased extension of `path` is excluded.
    ///
    /// Dotfiles such as `.png` have no extension and never match.
    pub fn is_excluded_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| self.extensions.contains(&ext.to_lowercase()))
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}
