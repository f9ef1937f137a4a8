//! Language tokens and the file extensions they select.

use std::collections::BTreeSet;
use std::path::Path;

/// Token that expands to every known language.
pub const ALL_LANGUAGES: &str = "all";

const LANGUAGE_TABLE: &[(&str, &str)] = &[
    ("cs", ".cs"),
    ("js", ".js"),
    ("ts", ".ts"),
    ("python", ".py"),
    ("py", ".py"),
    ("java", ".java"),
];

/// Look up the extension (with leading dot) for a single language token.
pub fn extension_for(token: &str) -> Option<&'static str> {
    let token = token.trim().to_ascii_lowercase();
    LANGUAGE_TABLE
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, ext)| *ext)
}

/// Set of lowercase extensions, each with a leading dot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: BTreeSet<&'static str>,
}

/// Result of resolving user supplied language tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub extensions: ExtensionSet,
    pub unknown: Vec<String>,
}

impl ExtensionSet {
    /// Resolve language tokens. Unknown tokens are reported, not rejected.
    pub fn resolve<I, S>(tokens: I) -> Resolution
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut resolution = Resolution::default();
        for token in tokens {
            let token = token.as_ref();
            if token.trim().eq_ignore_ascii_case(ALL_LANGUAGES) {
                resolution
                    .extensions
                    .extensions
                    .extend(LANGUAGE_TABLE.iter().map(|(_, ext)| *ext));
                continue;
            }
            match extension_for(token) {
                Some(ext) => {
                    resolution.extensions.extensions.insert(ext);
                }
                None => resolution.unknown.push(token.to_owned()),
            }
        }
        resolution
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.extensions.iter().copied()
    }

    /// Whether the path's extension, compared case-insensitively, is selected.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return false;
        };
        let dotted = format!(".{}", ext.to_ascii_lowercase());
        self.extensions.contains(dotted.as_str())
    }
}
