use crate::ports::outbound::DiagramWriter;
use crate::shared::error::DepGraphError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemWriter adapter for writing diagram source files
///
/// Existing files are overwritten; symbolic links are refused.
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(DepGraphError::FileWrite {
                    path: path.to_path_buf(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Refuses to write through a symbolic link
    fn validate_output_security(path: &Path) -> Result<()> {
        if fs::symlink_metadata(path).is_ok() {
            validate_not_symlink(path, "write").map_err(|e| DepGraphError::Security {
                path: path.to_path_buf(),
                reason: e.to_string(),
                hint: "Point the diagram path at a regular file".to_string(),
            })?;
        }
        Ok(())
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramWriter for FileSystemWriter {
    fn write_diagram(&self, path: &Path, content: &str) -> Result<()> {
        Self::validate_parent_directory(path)?;
        Self::validate_output_security(path)?;

        fs::write(path, content).map_err(|e| DepGraphError::FileWrite {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "diagram source written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_write_diagram_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("graph.mmd");

        FileSystemWriter::new()
            .write_diagram(&path, "graph TD\n")
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "graph TD\n");
    }

    #[test]
    fn test_write_diagram_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("graph.mmd");
        fs::write(&path, "old content that is longer").unwrap();

        FileSystemWriter::new()
            .write_diagram(&path, "graph TD\n  a --> b\n")
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "graph TD\n  a --> b\n");
    }

    #[test]
    fn test_write_diagram_parent_directory_not_found() {
        let path = PathBuf::from("/nonexistent/directory/graph.mmd");

        let err = FileSystemWriter::new()
            .write_diagram(&path, "graph TD\n")
            .unwrap_err();
        assert!(err.to_string().contains("Parent directory does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_diagram_refuses_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.txt");
        let link = temp_dir.path().join("graph.mmd");
        fs::write(&target, "keep me").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = FileSystemWriter::new()
            .write_diagram(&link, "graph TD\n")
            .unwrap_err();

        assert!(err.to_string().contains("Security violation"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "keep me");
    }
}
