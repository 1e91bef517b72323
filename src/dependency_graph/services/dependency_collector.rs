use crate::dependency_graph::domain::{
    normalize_version, CollectionReport, DependencyGraph, DependencySpec, LookupFailure,
};
use crate::dependency_graph::policies::LookupFailurePolicy;
use crate::ports::outbound::{ProgressReporter, RegistryLookup};
use crate::shared::error::DepGraphError;
use std::collections::{HashSet, VecDeque};

/// Hard ceiling on traversal depth, applied even when no limit is configured
/// A malicious or corrupt registry could otherwise serve an endless chain
pub const MAX_TRAVERSAL_DEPTH: usize = 100;

/// DependencyCollector service for walking a registry from a set of roots
///
/// Every package name is looked up at most once per `collect` call, no matter
/// how many parents declare it. A failed lookup only affects its own node.
pub struct DependencyCollector<'a, R, PR> {
    registry: &'a R,
    progress_reporter: &'a PR,
    failure_policy: LookupFailurePolicy,
    max_depth: Option<usize>,
}

impl<'a, R, PR> DependencyCollector<'a, R, PR>
where
    R: RegistryLookup,
    PR: ProgressReporter,
{
    pub fn new(registry: &'a R, progress_reporter: &'a PR) -> Self {
        Self {
            registry,
            progress_reporter,
            failure_policy: LookupFailurePolicy::default(),
            max_depth: None,
        }
    }

    pub fn with_failure_policy(mut self, policy: LookupFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Limits expansion to `max_depth` levels below the roots (roots are
    /// depth 0). Packages at the limit are still looked up and recorded.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Collects the dependency graph reachable from `roots`
    ///
    /// # Arguments
    /// * `roots` - Direct dependencies of the manifest being analyzed
    ///
    /// # Returns
    /// A CollectionReport with the graph, the failed lookups and the number
    /// of lookups issued. Lookup failures never abort the walk.
    pub async fn collect(&self, roots: &DependencySpec) -> CollectionReport {
        let mut session = TraversalSession::seeded(roots);
        let depth_limit = self
            .max_depth
            .unwrap_or(MAX_TRAVERSAL_DEPTH)
            .min(MAX_TRAVERSAL_DEPTH);

        while let Some(pending) = session.next_pending() {
            if !session.mark_visited(&pending.name) {
                continue;
            }

            let version = normalize_version(&pending.specifier);
            session.lookups += 1;
            self.progress_reporter.report_progress(
                session.lookups,
                session.discovered_count(),
                Some(&format!("{}@{}", pending.name, version)),
            );
            tracing::debug!(
                package = %pending.name,
                specifier = %pending.specifier,
                version = %version,
                depth = pending.depth,
                "looking up dependencies"
            );

            match self.registry.lookup(&pending.name, &version).await {
                Ok(dependencies) => {
                    session.graph.insert(
                        pending.name.clone(),
                        dependencies.names().map(str::to_string).collect(),
                    );

                    if pending.depth < depth_limit {
                        session.enqueue(&dependencies, pending.depth + 1);
                    } else if pending.depth >= MAX_TRAVERSAL_DEPTH && !dependencies.is_empty() {
                        tracing::debug!(package = %pending.name, "maximum traversal depth reached");
                        self.progress_reporter.report_error(&format!(
                            "⚠️  Warning: Maximum traversal depth ({}) reached at '{}'. \
                             Dependency chain may be truncated.",
                            MAX_TRAVERSAL_DEPTH, pending.name
                        ));
                    }
                }
                Err(err) => {
                    tracing::debug!(
                        package = %pending.name,
                        version = %version,
                        error = %err,
                        "lookup failed, continuing with remaining packages"
                    );
                    self.progress_reporter
                        .report_error(&format!("⚠️  Warning: {}", err));

                    if let Some(entry) = self.failure_policy.entry_for_failure() {
                        session.graph.insert(pending.name.clone(), entry);
                    }

                    let reason = match err.downcast_ref::<DepGraphError>() {
                        Some(DepGraphError::Lookup { reason, .. }) => reason.clone(),
                        _ => err.to_string(),
                    };
                    session.failures.push(LookupFailure {
                        package: pending.name,
                        version: version.to_string(),
                        reason,
                    });
                }
            }
        }

        session.into_report()
    }
}

/// A package waiting to be expanded
#[derive(Debug)]
struct PendingPackage {
    name: String,
    specifier: String,
    depth: usize,
}

/// State of one `collect` call; built fresh every time and consumed at the end
struct TraversalSession {
    visited: HashSet<String>,
    discovered: HashSet<String>,
    pending: VecDeque<PendingPackage>,
    graph: DependencyGraph,
    failures: Vec<LookupFailure>,
    lookups: usize,
}

impl TraversalSession {
    fn seeded(roots: &DependencySpec) -> Self {
        let mut session = Self {
            visited: HashSet::new(),
            discovered: HashSet::new(),
            pending: VecDeque::new(),
            graph: DependencyGraph::new(),
            failures: Vec::new(),
            lookups: 0,
        };
        session.enqueue(roots, 0);
        session
    }

    /// Queues every entry, including already visited names; those are
    /// dropped when popped.
    fn enqueue(&mut self, dependencies: &DependencySpec, depth: usize) {
        for (name, specifier) in dependencies.iter() {
            self.discovered.insert(name.to_string());
            self.pending.push_back(PendingPackage {
                name: name.to_string(),
                specifier: specifier.to_string(),
                depth,
            });
        }
    }

    fn next_pending(&mut self) -> Option<PendingPackage> {
        self.pending.pop_front()
    }

    /// Returns `true` if `name` had not been visited yet
    fn mark_visited(&mut self, name: &str) -> bool {
        self.visited.insert(name.to_string())
    }

    fn discovered_count(&self) -> usize {
        self.discovered.len()
    }

    fn into_report(self) -> CollectionReport {
        CollectionReport {
            graph: self.graph,
            failures: self.failures,
            lookups: self.lookups,
        }
    }
}
