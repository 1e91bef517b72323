use crate::dependency_graph::domain::CollectionReport;
use std::path::PathBuf;

/// Outcome of the external rendering step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The image was written to this path
    Rendered(PathBuf),
    /// Rendering failed; the diagram source is still on disk
    Failed(String),
}

impl RenderOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderOutcome::Rendered(_))
    }
}

/// VisualizeResponse - Response DTO from the dependency visualization use case
#[derive(Debug, Clone)]
pub struct VisualizeResponse {
    /// Collected graph plus the lookups that failed along the way
    pub report: CollectionReport,
    /// Mermaid source generated from the graph
    pub diagram: String,
    /// Where the Mermaid source was written
    pub diagram_path: PathBuf,
    /// Whether the image could be rendered
    pub render_outcome: RenderOutcome,
}
