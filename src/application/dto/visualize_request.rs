use crate::dependency_graph::policies::LookupFailurePolicy;
use crate::ports::outbound::ManifestSource;
use std::path::PathBuf;

/// VisualizeRequest - Request DTO for the dependency visualization use case
#[derive(Debug, Clone)]
pub struct VisualizeRequest {
    /// Where the root dependency set is read from
    pub manifest: ManifestSource,
    /// Path of the intermediate Mermaid source file
    pub diagram_path: PathBuf,
    /// Path of the rendered image
    pub output_path: PathBuf,
    /// What a failed registry lookup leaves in the graph
    pub failure_policy: LookupFailurePolicy,
    /// Optional limit on how many levels below the roots are expanded
    pub max_depth: Option<usize>,
}

impl VisualizeRequest {
    pub fn new(manifest: ManifestSource, diagram_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            manifest,
            diagram_path,
            output_path,
            failure_policy: LookupFailurePolicy::default(),
            max_depth: None,
        }
    }

    pub fn with_failure_policy(mut self, failure_policy: LookupFailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}
