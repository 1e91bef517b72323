use async_trait::async_trait;
use npm_depgraph::prelude::*;
use npm_depgraph::shared::error::DepGraphError;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock RegistryLookup serving canned dependency sets and counting calls
#[derive(Default, Clone)]
pub struct MockRegistry {
    packages: HashMap<String, DependencySpec>,
    failing: HashSet<String>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

#[allow(dead_code)]
impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, name: &str, deps: &[(&str, &str)]) -> Self {
        self.packages
            .insert(name.to_string(), deps.iter().copied().collect());
        self
    }

    pub fn with_failure(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    /// (package, version) pairs in lookup order
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, package: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| name == package)
            .count()
    }
}

#[async_trait]
impl RegistryLookup for MockRegistry {
    async fn lookup(&self, package: &str, version: &VersionToken) -> Result<DependencySpec> {
        self.calls
            .lock()
            .unwrap()
            .push((package.to_string(), version.to_string()));

        if self.failing.contains(package) {
            return Err(DepGraphError::lookup(package, version.as_str(), "mock registry failure").into());
        }
        Ok(self.packages.get(package).cloned().unwrap_or_default())
    }
}
