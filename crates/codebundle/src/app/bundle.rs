//! Bundle rendering and output handling.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::app::scan;
use crate::domain::errors::BundleError;
use crate::domain::model::{BundleConfig, FileEntry, SortMode};

const COMMENT_PREFIX: &str = "//";
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Outcome of a successful bundle run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleSummary {
    pub output_path: PathBuf,
    pub file_count: usize,
}

/// Collect, order, and write the bundle described by `config`.
pub fn run(config: &BundleConfig) -> Result<BundleSummary> {
    let mut files = scan::collect(config)?;
    if files.is_empty() {
        return Err(BundleError::NoFilesFound {
            root: config.root.clone(),
        }
        .into());
    }
    order_files(&mut files, config.sort_mode);
    Bundler::new(config).write_bundle(&files)
}

/// Sort files in place according to the requested mode.
pub fn order_files(files: &mut [FileEntry], mode: SortMode) {
    match mode {
        SortMode::ByName => files.sort_by_cached_key(FileEntry::sort_key),
        SortMode::ByType => files.sort_by_cached_key(|file| {
            (file.extension().to_ascii_lowercase(), file.sort_key())
        }),
    }
}

/// Writes ordered files into a single bundle.
pub struct Bundler<'a> {
    config: &'a BundleConfig,
}

impl<'a> Bundler<'a> {
    pub fn new(config: &'a BundleConfig) -> Self {
        Self { config }
    }

    /// Render the bundle into an arbitrary writer.
    pub fn write_to<W: Write>(&self, files: &[FileEntry], out: &mut W) -> Result<()> {
        if let Some(author) = &self.config.author {
            writeln!(out, "{COMMENT_PREFIX} Author: {author}")?;
        }

        for file in files {
            let bytes = fs::read(&file.path)
                .with_context(|| format!("failed to read {}", file.path.display()))?;
            let decoded = String::from_utf8_lossy(&bytes);
            let contents = decoded.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&decoded);

            if self.config.include_note {
                writeln!(out, "{COMMENT_PREFIX} Source: {}", file.display_path)?;
            }
            for line in contents.lines() {
                if self.config.remove_empty_lines && line.trim().is_empty() {
                    continue;
                }
                writeln!(out, "{line}")?;
            }
            writeln!(out)?;
            tracing::debug!(path = %file.display_path, "bundled file");
        }
        Ok(())
    }

    /// Write the bundle to the configured output path.
    ///
    /// Content goes to a temporary file beside the target and is moved into place only once
    /// every source file has been written, so a failed run leaves no partial bundle.
    pub fn write_bundle(&self, files: &[FileEntry]) -> Result<BundleSummary> {
        let output = &self.config.output_path;
        let dir = output
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;

        let mut builder = tempfile::Builder::new();
        builder.prefix(".codebundle-");
        // Requested mode is filtered by the umask, matching `fs::write`.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        let mut temp = builder
            .tempfile_in(dir)
            .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;

        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            self.write_to(files, &mut writer)
                .with_context(|| format!("failed to write bundle {}", output.display()))?;
            writer
                .flush()
                .with_context(|| format!("failed to write bundle {}", output.display()))?;
        }

        match_permissions(&temp, output)?;
        temp.persist(output)
            .map_err(|err| err.error)
            .with_context(|| format!("failed to write bundle {}", output.display()))?;

        tracing::info!(
            output = %output.display(),
            files = files.len(),
            "bundle written"
        );
        Ok(BundleSummary {
            output_path: output.clone(),
            file_count: files.len(),
        })
    }
}

/// Replacing an existing bundle keeps its mode; new bundles follow the umask.
fn match_permissions(temp: &NamedTempFile, output: &Path) -> Result<()> {
    let Ok(meta) = fs::metadata(output) else {
        return Ok(());
    };
    temp.as_file()
        .set_permissions(meta.permissions())
        .context("failed to set bundle permissions")
}
