//! Domain models for bundle runs.

use std::path::{Path, PathBuf};

use crate::domain::languages::ExtensionSet;

/// Ordering applied to collected files before they are bundled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Full path, lexicographic.
    #[default]
    ByName,
    /// Extension first, then full path.
    ByType,
}

impl SortMode {
    /// Interpret a free-form `--sort` value. Anything but `type` means by name.
    pub fn from_flag(value: Option<&str>) -> Self {
        match value {
            Some(raw) if raw.trim().eq_ignore_ascii_case("type") => SortMode::ByType,
            _ => SortMode::ByName,
        }
    }
}

/// Fully resolved settings for a single bundle run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleConfig {
    pub root: PathBuf,
    pub extensions: ExtensionSet,
    pub output_path: PathBuf,
    pub include_note: bool,
    pub sort_mode: SortMode,
    pub remove_empty_lines: bool,
    pub author: Option<String>,
}

/// A file discovered beneath the bundle root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub display_path: String,
}

impl FileEntry {
    pub fn new(root: &Path, path: PathBuf) -> Self {
        let display_path = to_display_path(root, &path);
        Self { path, display_path }
    }

    /// Lossy string form of the full path, used for ordering.
    pub fn sort_key(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    /// Extension as written on disk (without the dot), or empty.
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

fn to_display_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
