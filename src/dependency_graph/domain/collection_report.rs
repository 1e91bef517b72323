use super::DependencyGraph;

/// A package whose registry lookup failed during collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupFailure {
    pub package: String,
    pub version: String,
    pub reason: String,
}

/// Result of one collection run: the graph plus what went wrong on the way
#[derive(Debug, Clone, Default)]
pub struct CollectionReport {
    pub graph: DependencyGraph,
    pub failures: Vec<LookupFailure>,
    /// Number of registry lookups issued (successful or not)
    pub lookups: usize,
}

impl CollectionReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed_packages(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|f| f.package.as_str())
    }
}
