use crate::dependency_graph::domain::DependencyGraph;
use std::fmt::Write;

/// Header line of every generated diagram (top-down flowchart)
pub const MERMAID_HEADER: &str = "graph TD";

/// MermaidRenderer service for turning a dependency graph into diagram source
///
/// Output is a pure function of the graph: parents in graph order, children
/// in list order, one `parent --> child` line per edge.
pub struct MermaidRenderer;

impl MermaidRenderer {
    pub fn render(graph: &DependencyGraph) -> String {
        let mut out = String::with_capacity(MERMAID_HEADER.len() + 1 + graph.edge_count() * 32);
        out.push_str(MERMAID_HEADER);
        out.push('\n');

        for (parent, child) in graph.edges() {
            // Writing into a String cannot fail
            let _ = writeln!(out, "  {} --> {}", parent, child);
        }

        out
    }
}
