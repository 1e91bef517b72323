use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Token the registry understands as "newest published version"
pub const LATEST: &str = "latest";

static VERSION_TRIPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+\.\d+\.\d+").expect("version triple pattern is valid")
});

/// Concrete version passed to a registry lookup
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionToken {
    /// A `major.minor.patch` triple lifted out of a specifier
    Exact(String),
    /// No triple found; ask the registry for its latest version
    Latest,
}

impl VersionToken {
    pub fn as_str(&self) -> &str {
        match self {
            VersionToken::Exact(v) => v,
            VersionToken::Latest => LATEST,
        }
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extracts the first `d+.d+.d+` substring from a version specifier.
///
/// Range operators, pre-release tags and anything around the triple are
/// discarded. The match is not anchored, so a triple buried inside a URL or
/// git reference is returned as well.
pub fn normalize_version(specifier: &str) -> VersionToken {
    match VERSION_TRIPLE.find(specifier) {
        Some(m) => VersionToken::Exact(m.as_str().to_string()),
        None => VersionToken::Latest,
    }
}
