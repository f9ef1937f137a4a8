//! Source file collection.

use std::path::PathBuf;

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::{DirEntry, WalkBuilder};

use crate::domain::languages::ExtensionSet;
use crate::domain::model::{BundleConfig, FileEntry};

/// Build-output directories that are never bundled. Matched case-sensitively.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["bin", "debug"];

/// Configuration inputs for the scanner.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub root: PathBuf,
    pub extensions: ExtensionSet,
    pub excluded_dirs: Vec<String>,
    /// Files skipped even when they match, such as the bundle being written.
    pub skip_files: Vec<PathBuf>,
}

impl ScannerConfig {
    pub fn new(root: PathBuf, extensions: ExtensionSet) -> Self {
        Self {
            root,
            extensions,
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
            skip_files: Vec::new(),
        }
    }

    pub fn from_bundle(config: &BundleConfig) -> Self {
        Self::new(config.root.clone(), config.extensions.clone())
            .skipping(config.output_path.clone())
    }

    pub fn skipping(mut self, path: PathBuf) -> Self {
        self.skip_files.push(path);
        self
    }
}

/// Walks the root directory and collects files with selected extensions.
#[derive(Debug, Default)]
pub struct Scanner;

impl Scanner {
    pub fn new() -> Self {
        Self
    }

    pub fn scan(&self, cfg: &ScannerConfig) -> Result<Vec<FileEntry>> {
        let matcher = build_exclusion_matcher(&cfg.excluded_dirs)?;
        let mut builder = WalkBuilder::new(&cfg.root);
        builder.standard_filters(false).follow_links(false);

        let root = cfg.root.clone();
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let rel = entry.path().strip_prefix(&root).unwrap_or(entry.path());
            !matcher.is_match(rel)
        });

        let mut files = Vec::new();
        for result in builder.build() {
            let entry = result
                .with_context(|| format!("failed to walk {}", cfg.root.display()))?;
            if let Some(file) = process_entry(&entry, cfg) {
                tracing::debug!(path = %file.display_path, "collected file");
                files.push(file);
            }
        }

        tracing::info!(
            root = %cfg.root.display(),
            count = files.len(),
            "scan complete"
        );
        Ok(files)
    }
}

fn process_entry(entry: &DirEntry, cfg: &ScannerConfig) -> Option<FileEntry> {
    let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
    if !is_file || !cfg.extensions.matches(entry.path()) {
        return None;
    }
    if cfg.skip_files.iter().any(|skip| skip == entry.path()) {
        tracing::debug!(path = %entry.path().display(), "skipping output file");
        return None;
    }
    Some(FileEntry::new(&cfg.root, entry.path().to_path_buf()))
}

fn build_exclusion_matcher(dirs: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for dir in dirs {
        for expanded in expand_dir_pattern(dir) {
            let glob = Glob::new(&expanded).context("invalid excluded directory pattern")?;
            builder.add(glob);
        }
    }
    builder.build().context("failed to build exclusion matcher")
}

fn expand_dir_pattern(raw: &str) -> Vec<String> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return Vec::new();
    }
    vec![
        trimmed.to_owned(),
        format!("{trimmed}/**"),
        format!("**/{trimmed}"),
        format!("**/{trimmed}/**"),
    ]
}

/// Convenience wrapper used by the bundle command.
pub fn collect(config: &BundleConfig) -> Result<Vec<FileEntry>> {
    Scanner::new().scan(&ScannerConfig::from_bundle(config))
}
