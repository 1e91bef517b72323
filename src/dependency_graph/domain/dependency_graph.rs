use indexmap::IndexMap;

/// DependencyGraph aggregate: package name to its direct dependency names
///
/// Entries are kept in the order packages were processed; each entry's list
/// keeps the order of the registry response it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: IndexMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the dependencies of `package`, replacing any previous entry.
    pub fn insert(&mut self, package: impl Into<String>, dependencies: Vec<String>) {
        self.edges.insert(package.into(), dependencies);
    }

    pub fn dependencies_of(&self, package: &str) -> Option<&[String]> {
        self.edges.get(package).map(Vec::as_slice)
    }

    pub fn contains(&self, package: &str) -> bool {
        self.edges.contains_key(package)
    }

    /// Iterates `(parent, dependencies)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.edges.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Iterates every `(parent, child)` edge in rendering order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .flat_map(|(parent, deps)| deps.iter().map(move |dep| (parent, dep.as_str())))
    }

    pub fn package_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<P, D> FromIterator<(P, Vec<D>)> for DependencyGraph
where
    P: Into<String>,
    D: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (P, Vec<D>)>>(iter: T) -> Self {
        Self {
            edges: iter
                .into_iter()
                .map(|(p, deps)| (p.into(), deps.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_graph_counts() {
        let graph: DependencyGraph = vec![
            ("express", vec!["body-parser", "cookie-parser"]),
            ("body-parser", vec!["bytes"]),
            ("lodash", vec![]),
        ]
        .into_iter()
        .collect();

        assert_eq!(graph.package_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.contains("lodash"));
        assert_eq!(graph.dependencies_of("lodash"), Some(&[][..]));
        assert_eq!(graph.dependencies_of("bytes"), None);
    }

    #[test]
    fn test_edges_follow_insertion_order() {
        let mut graph = DependencyGraph::new();
        graph.insert("zeta", vec!["b".to_string(), "a".to_string()]);
        graph.insert("alpha", vec!["c".to_string()]);

        let edges: Vec<(&str, &str)> = graph.edges().collect();
        assert_eq!(edges, vec![("zeta", "b"), ("zeta", "a"), ("alpha", "c")]);
    }

    #[test]
    fn test_dependency_graph_empty() {
        let graph = DependencyGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.package_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}
