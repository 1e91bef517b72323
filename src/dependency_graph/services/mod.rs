mod dependency_collector;
mod mermaid_renderer;

pub use dependency_collector::{DependencyCollector, MAX_TRAVERSAL_DEPTH};
pub use mermaid_renderer::MermaidRenderer;
