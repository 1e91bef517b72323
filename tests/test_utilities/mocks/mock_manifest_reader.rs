use npm_depgraph::prelude::*;
use npm_depgraph::shared::error::DepGraphError;
use std::path::Path;

/// Mock ManifestReader returning a fixed root set, or failing when it has none
pub struct MockManifestReader {
    roots: Option<DependencySpec>,
}

#[allow(dead_code)]
impl MockManifestReader {
    pub fn new(roots: &[(&str, &str)]) -> Self {
        Self {
            roots: Some(roots.iter().copied().collect()),
        }
    }

    pub fn failing() -> Self {
        Self { roots: None }
    }
}

impl ManifestReader for MockManifestReader {
    fn load_from_file(&self, path: &Path) -> Result<DependencySpec> {
        self.roots.clone().ok_or_else(|| {
            DepGraphError::FileRead {
                path: path.to_path_buf(),
                details: "No such file or directory".to_string(),
            }
            .into()
        })
    }

    fn load_from_archive(&self, archive_path: &Path, entry_name: &str) -> Result<DependencySpec> {
        self.roots.clone().ok_or_else(|| {
            DepGraphError::ManifestEntryNotFound {
                archive: archive_path.to_path_buf(),
                entry: entry_name.to_string(),
            }
            .into()
        })
    }
}
