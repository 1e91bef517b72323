use crate::dependency_graph::domain::DependencySpec;
use crate::shared::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the root manifest comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    /// A plain JSON manifest on disk
    File(PathBuf),
    /// A manifest stored as an entry of a zip archive
    Archive { path: PathBuf, entry: String },
}

impl fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestSource::File(path) => write!(f, "{}", path.display()),
            ManifestSource::Archive { path, entry } => {
                write!(f, "{} (entry: {})", path.display(), entry)
            }
        }
    }
}

/// ManifestReader port for reading the root dependency set
///
/// This port abstracts the file system and archive access needed to turn a
/// manifest into the `DependencySpec` the traversal starts from.
pub trait ManifestReader {
    /// Reads a JSON manifest and returns its `dependencies`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The content is not a JSON object (`DepGraphError::ManifestParse`)
    fn load_from_file(&self, path: &Path) -> Result<DependencySpec>;

    /// Extracts `entry_name` from a zip archive and parses it as a manifest
    ///
    /// # Errors
    /// Returns an error if:
    /// - The archive cannot be opened or is not a valid zip file
    /// - The entry is absent (`DepGraphError::ManifestEntryNotFound`)
    /// - The entry is not a JSON object (`DepGraphError::ManifestParse`)
    fn load_from_archive(&self, archive_path: &Path, entry_name: &str) -> Result<DependencySpec>;

    /// Dispatches on the manifest source
    fn load(&self, source: &ManifestSource) -> Result<DependencySpec> {
        match source {
            ManifestSource::File(path) => self.load_from_file(path),
            ManifestSource::Archive { path, entry } => self.load_from_archive(path, entry),
        }
    }
}
