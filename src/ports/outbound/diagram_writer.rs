use crate::shared::Result;
use std::path::Path;

/// DiagramWriter port for persisting the diagram source
///
/// The written file is the input of the external renderer and must survive
/// a failed rendering.
pub trait DiagramWriter {
    /// Writes `content` to `path`, replacing any existing file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The parent directory does not exist
    /// - The target is a symbolic link
    /// - Writing fails (permissions, disk space)
    fn write_diagram(&self, path: &Path, content: &str) -> Result<()>;
}
