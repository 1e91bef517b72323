use crate::dependency_graph::domain::{DependencySpec, VersionToken};
use crate::shared::error::DepGraphError;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// RegistryLookup port for discovering a package's direct dependencies
///
/// This port abstracts the package registry (HTTP API or `npm` CLI) that the
/// dependency collector queries once per package.
///
/// # Async Support
/// Lookups are async so network and subprocess transports can share one
/// interface. Implementations must be `Send + Sync`.
#[async_trait]
pub trait RegistryLookup: Send + Sync {
    /// Fetches the direct dependencies of `package` at `version`
    ///
    /// # Returns
    /// The package's `dependencies` mapping in registry order; empty when the
    /// package declares none.
    ///
    /// # Errors
    /// Returns a `DepGraphError::Lookup` if:
    /// - The transport fails (network error, process failure, timeout)
    /// - The response is not valid JSON
    /// - The response is valid JSON but not an object
    async fn lookup(&self, package: &str, version: &VersionToken) -> Result<DependencySpec>;
}

#[async_trait]
impl<T: RegistryLookup + ?Sized> RegistryLookup for Box<T> {
    async fn lookup(&self, package: &str, version: &VersionToken) -> Result<DependencySpec> {
        (**self).lookup(package, version).await
    }
}

/// Parses a registry response body that must be a JSON object
///
/// A body that parses but is an array, `null` or a scalar carries no usable
/// dependency data and is reported as a lookup error; the collector decides
/// what that means for the graph.
pub fn parse_object_response(
    package: &str,
    version: &VersionToken,
    body: &str,
) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        DepGraphError::lookup(
            package,
            version.as_str(),
            format!("failed to parse response: {}", e),
        )
    })?;

    match value {
        Value::Object(object) => Ok(object),
        other => Err(DepGraphError::lookup(
            package,
            version.as_str(),
            format!(
                "response is not a JSON object (got {})",
                json_type_name(&other)
            ),
        )
        .into()),
    }
}

/// Extracts the `dependencies` object from a package version document
///
/// Missing or non-object `dependencies` yields an empty spec.
pub fn dependencies_from_document(document: &Map<String, Value>) -> DependencySpec {
    document
        .get("dependencies")
        .and_then(Value::as_object)
        .map(DependencySpec::from_json_object)
        .unwrap_or_default()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
