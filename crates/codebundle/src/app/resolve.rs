//! Turning parsed arguments into a validated [`BundleConfig`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::BundleArgs;
use crate::domain::errors::BundleError;
use crate::domain::languages::ExtensionSet;
use crate::domain::model::{BundleConfig, SortMode};

/// Resolve command-line arguments into an immutable bundle configuration.
pub fn resolve(args: &BundleArgs) -> Result<BundleConfig> {
    if args.languages.is_empty() {
        return Err(BundleError::InvalidArgument("--language is required".into()).into());
    }
    let output = args
        .output
        .as_ref()
        .filter(|path| !path.as_os_str().is_empty())
        .ok_or_else(|| BundleError::InvalidArgument("--output is required".into()))?;

    let resolution = ExtensionSet::resolve(&args.languages);
    for token in &resolution.unknown {
        tracing::warn!(language = %token, "ignoring unknown language");
    }
    if resolution.extensions.is_empty() {
        return Err(BundleError::NoValidLanguages.into());
    }

    let root = resolve_root(&args.root)?;
    let output_path = resolve_output(&root, output);

    let config = BundleConfig {
        root,
        extensions: resolution.extensions,
        output_path,
        include_note: args.note,
        sort_mode: SortMode::from_flag(args.sort.as_deref()),
        remove_empty_lines: args.remove_empty_lines,
        author: args
            .author
            .as_deref()
            .map(str::trim)
            .filter(|author| !author.is_empty())
            .map(str::to_owned),
    };
    tracing::debug!(?config, "resolved bundle configuration");
    Ok(config)
}

/// Canonical form of the root directory; an empty path means `.`.
pub fn resolve_root(root: &Path) -> Result<PathBuf> {
    let root = if root.as_os_str().is_empty() {
        Path::new(".")
    } else {
        root
    };
    fs::canonicalize(root)
        .with_context(|| format!("failed to resolve root directory {}", root.display()))
}

fn resolve_output(root: &Path, output: &Path) -> PathBuf {
    let joined = root.join(output);
    match (joined.parent(), joined.file_name()) {
        (Some(parent), Some(name)) => fs::canonicalize(parent)
            .map(|parent| parent.join(name))
            .unwrap_or(joined),
        _ => joined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(root: &Path, languages: &[&str], output: Option<&str>) -> BundleArgs {
        BundleArgs {
            languages: languages.iter().map(|s| s.to_string()).collect(),
            output: output.map(PathBuf::from),
            root: root.to_path_buf(),
            ..BundleArgs::default()
        }
    }

    fn domain_error(err: &anyhow::Error) -> Option<&BundleError> {
        err.downcast_ref::<BundleError>()
    }

    #[test]
    fn missing_required_options_are_invalid_arguments() -> Result<()> {
        let temp = tempfile::tempdir()?;

        let err = resolve(&args(temp.path(), &[], Some("out.txt"))).unwrap_err();
        assert!(matches!(
            domain_error(&err),
            Some(BundleError::InvalidArgument(_))
        ));

        let err = resolve(&args(temp.path(), &["py"], None)).unwrap_err();
        assert!(matches!(
            domain_error(&err),
            Some(BundleError::InvalidArgument(_))
        ));
        Ok(())
    }

    #[test]
    fn unknown_languages_only_is_rejected() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let err = resolve(&args(temp.path(), &["ruby"], Some("out.txt"))).unwrap_err();
        assert_eq!(domain_error(&err), Some(&BundleError::NoValidLanguages));
        assert_eq!(err.to_string(), "No valid languages specified.");
        Ok(())
    }

    #[test]
    fn resolves_paths_against_root() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let root = fs::canonicalize(temp.path())?;

        let mut input = args(temp.path(), &["ruby", "py"], Some("out.txt"));
        input.author = Some("  ".into());
        input.sort = Some("type".into());
        let config = resolve(&input)?;

        assert_eq!(config.root, root);
        assert_eq!(config.output_path, root.join("out.txt"));
        assert_eq!(config.author, None);
        assert_eq!(config.sort_mode, SortMode::ByType);
        assert_eq!(config.extensions.iter().collect::<Vec<_>>(), vec![".py"]);
        Ok(())
    }

    #[test]
    fn missing_root_is_an_io_failure() {
        let input = args(
            Path::new("/definitely/not/a/real/root"),
            &["py"],
            Some("out.txt"),
        );
        let err = resolve(&input).unwrap_err();
        assert!(domain_error(&err).is_none());
        assert!(err.to_string().contains("failed to resolve root directory"));
    }
}
