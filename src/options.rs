use crate::policy::ExclusionPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextOptions {
    pub root: PathBuf,
    pub policy: ExclusionPolicy,
    pub sort_entries: bool,
    pub skip_files: Vec<PathBuf>,
}
impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            policy: ExclusionPolicy::default(),
            sort_entries: true,
            skip_files: Vec::new(),
        }
    }
}
#[derive(Debug, Default)]
pub struct ContextBuilder {
    options: ContextOptions,
}
impl ContextBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ContextOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn policy(mut self, policy: ExclusionPolicy) -> Self {
        self.options.policy = policy;
        self
    }
    /// Sort siblings by file name. When disabled, entries come in directory
    /// enumeration order.
    pub fn sort_entries(mut self, yes: bool) -> Self {
        self.options.sort_entries = yes;
        self
    }
    pub fn skip_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.skip_files.push(path.into());
        self
    }
    pub fn build(self) -> ContextOptions {
        self.options
    }
}
