use crate::application::dto::{RenderOutcome, VisualizeRequest, VisualizeResponse};
use crate::dependency_graph::domain::{CollectionReport, DependencySpec};
use crate::dependency_graph::services::{DependencyCollector, MermaidRenderer};
use crate::ports::outbound::{
    DiagramRenderer, DiagramWriter, ManifestReader, ProgressReporter, RegistryLookup,
};
use crate::shared::Result;
use std::path::Path;


/// VisualizeDependenciesUseCase - Core use case for dependency visualization
///
/// Loads the root manifest, walks the registry, renders the graph as Mermaid
/// source, writes it to disk and hands it to the external renderer.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `REG` - RegistryLookup implementation
/// * `DW` - DiagramWriter implementation
/// * `DR` - DiagramRenderer implementation
/// * `PR` - ProgressReporter implementation
pub struct VisualizeDependenciesUseCase<MR, REG, DW, DR, PR> {
    manifest_reader: MR,
    registry: REG,
    diagram_writer: DW,
    diagram_renderer: DR,
    progress_reporter: PR,
}

impl<MR, REG, DW, DR, PR> VisualizeDependenciesUseCase<MR, REG, DW, DR, PR>
where
    MR: ManifestReader,
    REG: RegistryLookup,
    DW: DiagramWriter,
    DR: DiagramRenderer,
    PR: ProgressReporter,
{
    /// Creates a new use case with injected dependencies
    pub fn new(
        manifest_reader: MR,
        registry: REG,
        diagram_writer: DW,
        diagram_renderer: DR,
        progress_reporter: PR,
    ) -> Self {
        Self {
            manifest_reader,
            registry,
            diagram_writer,
            diagram_renderer,
            progress_reporter,
        }
    }

    /// Executes the visualization use case
    ///
    /// # Errors
    /// Only failures that leave nothing to show are returned: an unreadable
    /// or malformed manifest, or a diagram file that cannot be written.
    /// Registry and renderer failures are reported and reflected in the
    /// response instead.
    pub async fn execute(&self, request: VisualizeRequest) -> Result<VisualizeResponse> {
        // Step 1: Read the root dependency set
        let roots = self.load_roots(&request)?;

        // Step 2: Walk the registry
        let report = self.collect(&request, &roots).await;

        // Step 3: Generate diagram source
        let diagram = MermaidRenderer::render(&report.graph);

        // Step 4: Persist and render
        let render_outcome = self
            .persist_and_visualize(&diagram, &request.diagram_path, &request.output_path)
            .await?;

        Ok(VisualizeResponse {
            report,
            diagram,
            diagram_path: request.diagram_path,
            render_outcome,
        })
    }

    fn load_roots(&self, request: &VisualizeRequest) -> Result<DependencySpec> {
        self.progress_reporter
            .report(&format!("📖 Loading manifest from: {}", request.manifest));

        let roots = self.manifest_reader.load(&request.manifest)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} direct dependencies", roots.len()));
        Ok(roots)
    }

    async fn collect(&self, request: &VisualizeRequest, roots: &DependencySpec) -> CollectionReport {
        self.progress_reporter
            .report("🔍 Fetching dependency information from the registry...");

        let report = DependencyCollector::new(&self.registry, &self.progress_reporter)
            .with_failure_policy(request.failure_policy)
            .with_max_depth(request.max_depth)
            .collect(roots)
            .await;

        let summary = format!(
            "✅ Collected {} package(s) with {} edge(s)",
            report.graph.package_count(),
            report.graph.edge_count()
        );
        if report.is_complete() {
            self.progress_reporter.report_completion(&summary);
        } else {
            self.progress_reporter.report_completion(&format!(
                "{} ({} lookup(s) failed: {})",
                summary,
                report.failures.len(),
                report.failed_packages().collect::<Vec<_>>().join(", ")
            ));
        }

        report
    }

    /// Writes the diagram source and runs the renderer on it
    ///
    /// The source file is written first and stays on disk whatever the
    /// renderer does. A renderer failure is logged and returned as
    /// `RenderOutcome::Failed`.
    ///
    /// # Errors
    /// Returns an error only if the diagram source cannot be written.
    pub async fn persist_and_visualize(
        &self,
        diagram: &str,
        diagram_path: &Path,
        output_path: &Path,
    ) -> Result<RenderOutcome> {
        self.diagram_writer.write_diagram(diagram_path, diagram)?;
        self.progress_reporter.report(&format!(
            "📝 Mermaid diagram written to: {}",
            diagram_path.display()
        ));

        match self.diagram_renderer.render(diagram_path, output_path).await {
            Ok(()) => {
                self.progress_reporter.report(&format!(
                    "🖼️  Graph image rendered to: {}",
                    output_path.display()
                ));
                Ok(RenderOutcome::Rendered(output_path.to_path_buf()))
            }
            Err(err) => {
                tracing::debug!(error = %err, "diagram rendering failed");
                self.progress_reporter
                    .report_error(&format!("❌ Failed to visualize graph: {}", err));
                Ok(RenderOutcome::Failed(err.to_string()))
            }
        }
    }
}
