use crate::dependency_graph::domain::DependencySpec;
use crate::ports::outbound::ManifestReader;
use crate::shared::error::DepGraphError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use serde_json::Value;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

/// FileSystemManifestReader adapter for manifests on disk or inside zip archives
///
/// Reads the `dependencies` object of a `package.json`-style document. With
/// `with_dev_dependencies(true)` the `devDependencies` object is appended,
/// without overriding names already listed under `dependencies`.
#[derive(Debug, Default)]
pub struct FileSystemManifestReader {
    include_dev_dependencies: bool,
}

impl FileSystemManifestReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dev_dependencies(mut self, include: bool) -> Self {
        self.include_dev_dependencies = include;
        self
    }

    /// Parses manifest text; `origin` only labels error messages
    fn parse_manifest(&self, origin: &Path, content: &str) -> Result<DependencySpec> {
        let parse_error = |details: String| DepGraphError::ManifestParse {
            path: origin.to_path_buf(),
            details,
        };

        let value: Value = serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        let Value::Object(document) = value else {
            return Err(parse_error("manifest is not a JSON object".to_string()).into());
        };

        let mut spec = Self::spec_field(&document, "dependencies").map_err(parse_error)?;
        if self.include_dev_dependencies {
            let dev = Self::spec_field(&document, "devDependencies").map_err(parse_error)?;
            spec.merge_missing(dev);
        }

        Ok(spec)
    }

    fn spec_field(
        document: &serde_json::Map<String, Value>,
        field: &str,
    ) -> std::result::Result<DependencySpec, String> {
        match document.get(field) {
            None | Some(Value::Null) => Ok(DependencySpec::new()),
            Some(Value::Object(object)) => Ok(DependencySpec::from_json_object(object)),
            Some(_) => Err(format!("\"{}\" must be an object", field)),
        }
    }

    /// Finds the archive entry to read
    ///
    /// An exact name match wins. Otherwise the shallowest entry whose file
    /// name equals `entry_name` is used, so `my-app/package.json` is found
    /// when asking for `package.json`.
    fn find_entry<R: Read + std::io::Seek>(
        archive: &zip::ZipArchive<R>,
        entry_name: &str,
    ) -> Option<usize> {
        if let Some(index) = archive.index_for_name(entry_name) {
            return Some(index);
        }

        (0..archive.len())
            .filter_map(|index| archive.name_for_index(index).map(|name| (index, name)))
            .filter(|(_, name)| !name.ends_with('/'))
            .filter(|(_, name)| {
                Path::new(name)
                    .file_name()
                    .is_some_and(|file_name| file_name == entry_name)
            })
            .min_by_key(|(_, name)| (name.matches('/').count(), name.to_string()))
            .map(|(index, _)| index)
    }
}

impl ManifestReader for FileSystemManifestReader {
    fn load_from_file(&self, path: &Path) -> Result<DependencySpec> {
        if !path.exists() {
            return Err(DepGraphError::FileRead {
                path: path.to_path_buf(),
                details: "Manifest file does not exist".to_string(),
            }
            .into());
        }

        validate_regular_file(path, "manifest").map_err(|e| DepGraphError::FileRead {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let content = fs::read_to_string(path).map_err(|e| DepGraphError::FileRead {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        self.parse_manifest(path, &content)
    }

    fn load_from_archive(&self, archive_path: &Path, entry_name: &str) -> Result<DependencySpec> {
        let read_error = |details: String| DepGraphError::FileRead {
            path: archive_path.to_path_buf(),
            details,
        };

        if !archive_path.exists() {
            return Err(read_error("Archive does not exist".to_string()).into());
        }
        validate_regular_file(archive_path, "archive").map_err(|e| read_error(e.to_string()))?;

        let file = File::open(archive_path).map_err(|e| read_error(e.to_string()))?;
        let mut archive = zip::ZipArchive::new(file)
            .map_err(|e| read_error(format!("Not a valid zip archive: {}", e)))?;

        let index = Self::find_entry(&archive, entry_name).ok_or_else(|| {
            DepGraphError::ManifestEntryNotFound {
                archive: archive_path.to_path_buf(),
                entry: entry_name.to_string(),
            }
        })?;

        let mut entry = archive
            .by_index(index)
            .map_err(|e| read_error(format!("Failed to open entry '{}': {}", entry_name, e)))?;
        let origin = PathBuf::from(format!("{}!/{}", archive_path.display(), entry.name()));

        // The declared size can lie; cap what is actually read as well
        validate_file_size(entry.size(), &origin, MAX_FILE_SIZE)?;
        let mut content = String::new();
        (&mut entry)
            .take(MAX_FILE_SIZE + 1)
            .read_to_string(&mut content)
            .map_err(|e| DepGraphError::ManifestParse {
                path: origin.clone(),
                details: format!("Entry is not valid UTF-8 text: {}", e),
            })?;
        validate_file_size(content.len() as u64, &origin, MAX_FILE_SIZE)?;

        self.parse_manifest(&origin, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn write_zip(dir: &Path, entries: &[(&str, &str)]) -> PathBuf {
        let path = dir.join("bundle.zip");
        let file = File::create(&path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        for (name, content) in entries {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
        path
    }

    #[test]
    fn test_load_from_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");
        fs::write(
            &path,
            r#"{"name":"app","dependencies":{"express":"^4.17.1","lodash":"^4.17.21"}}"#,
        )
        .unwrap();

        let spec = FileSystemManifestReader::new().load_from_file(&path).unwrap();

        assert_eq!(spec.names().collect::<Vec<_>>(), vec!["express", "lodash"]);
        assert_eq!(spec.get("lodash"), Some("^4.17.21"));
    }

    #[test]
    fn test_load_from_file_without_dependencies() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");
        fs::write(&path, r#"{"name":"app"}"#).unwrap();

        let spec = FileSystemManifestReader::new().load_from_file(&path).unwrap();
        assert!(spec.is_empty());
    }

    #[test]
    fn test_load_from_file_with_dev_dependencies() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");
        fs::write(
            &path,
            r#"{"dependencies":{"express":"^4.17.1"},"devDependencies":{"jest":"^29.7.0","express":"^5.0.0"}}"#,
        )
        .unwrap();

        let plain = FileSystemManifestReader::new().load_from_file(&path).unwrap();
        assert_eq!(plain.len(), 1);

        let with_dev = FileSystemManifestReader::new()
            .with_dev_dependencies(true)
            .load_from_file(&path)
            .unwrap();
        assert_eq!(with_dev.names().collect::<Vec<_>>(), vec!["express", "jest"]);
        assert_eq!(with_dev.get("express"), Some("^4.17.1"));
    }

    #[test]
    fn test_load_from_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemManifestReader::new().load_from_file(&temp_dir.path().join("missing.json"));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Manifest file does not exist"));
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");
        fs::write(&path, "{ not json").unwrap();

        let err = FileSystemManifestReader::new().load_from_file(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DepGraphError>(),
            Some(DepGraphError::ManifestParse { .. })
        ));
    }

    #[test]
    fn test_load_from_file_not_an_object() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");
        fs::write(&path, r#"["express"]"#).unwrap();

        let err = FileSystemManifestReader::new().load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("manifest is not a JSON object"));
    }

    #[test]
    fn test_load_from_file_dependencies_not_an_object() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");
        fs::write(&path, r#"{"dependencies":["express"]}"#).unwrap();

        let err = FileSystemManifestReader::new().load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("\"dependencies\" must be an object"));
    }

    #[test]
    fn test_load_from_archive_exact_entry() {
        let temp_dir = TempDir::new().unwrap();
        let zip_path = write_zip(
            temp_dir.path(),
            &[
                ("README.md", "# app"),
                ("package.json", r#"{"dependencies":{"react":"^18.2.0"}}"#),
            ],
        );

        let spec = FileSystemManifestReader::new()
            .load_from_archive(&zip_path, "package.json")
            .unwrap();
        assert_eq!(spec.get("react"), Some("^18.2.0"));
    }

    #[test]
    fn test_load_from_archive_nested_entry() {
        let temp_dir = TempDir::new().unwrap();
        let zip_path = write_zip(
            temp_dir.path(),
            &[
                ("app/node_modules/dep/package.json", r#"{"dependencies":{"wrong":"1.0.0"}}"#),
                ("app/package.json", r#"{"dependencies":{"vue":"3.4.0"}}"#),
            ],
        );

        let spec = FileSystemManifestReader::new()
            .load_from_archive(&zip_path, "package.json")
            .unwrap();
        assert_eq!(spec.names().collect::<Vec<_>>(), vec!["vue"]);
    }

    #[test]
    fn test_load_from_archive_entry_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let zip_path = write_zip(temp_dir.path(), &[("README.md", "# app")]);

        let err = FileSystemManifestReader::new()
            .load_from_archive(&zip_path, "package.json")
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DepGraphError>(),
            Some(DepGraphError::ManifestEntryNotFound { .. })
        ));
    }

    #[test]
    fn test_load_from_archive_invalid_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let zip_path = write_zip(temp_dir.path(), &[("package.json", "not json")]);

        let err = FileSystemManifestReader::new()
            .load_from_archive(&zip_path, "package.json")
            .unwrap_err();
        let display = err.to_string();
        assert!(display.contains("Failed to parse manifest"));
        assert!(display.contains("bundle.zip!/package.json"));
    }

    #[test]
    fn test_load_from_archive_not_a_zip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bundle.zip");
        fs::write(&path, "definitely not a zip").unwrap();

        let err = FileSystemManifestReader::new()
            .load_from_archive(&path, "package.json")
            .unwrap_err();
        assert!(err.to_string().contains("Not a valid zip archive"));
    }

    #[test]
    fn test_load_dispatches_on_source() {
        use crate::ports::outbound::ManifestSource;

        let temp_dir = TempDir::new().unwrap();
        let zip_path = write_zip(
            temp_dir.path(),
            &[("pkg.json", r#"{"dependencies":{"chalk":"5.3.0"}}"#)],
        );

        let spec = FileSystemManifestReader::new()
            .load(&ManifestSource::Archive {
                path: zip_path,
                entry: "pkg.json".to_string(),
            })
            .unwrap();
        assert_eq!(spec.get("chalk"), Some("5.3.0"));
    }
}
