use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// DiagramRenderer port for turning diagram source into an image
///
/// Implementations run an external layout tool; the caller treats every
/// failure as non-fatal.
#[async_trait]
pub trait DiagramRenderer: Send + Sync {
    /// Renders the diagram source at `input` into `output`
    ///
    /// # Errors
    /// Returns a `DepGraphError::Render` if the tool cannot be started, exits
    /// unsuccessfully, or does not finish in time.
    async fn render(&self, input: &Path, output: &Path) -> Result<()>;
}
