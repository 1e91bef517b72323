use crate::dependency_graph::domain::{DependencySpec, VersionToken};
use crate::ports::outbound::{dependencies_from_document, parse_object_response, RegistryLookup};
use crate::shared::error::DepGraphError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Public npm registry
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default number of attempts per lookup
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// NpmRegistryClient adapter for the npm registry HTTP API
///
/// Fetches `GET {base_url}/{package}/{version}` and reads the `dependencies`
/// object of the returned version document.
pub struct NpmRegistryClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl NpmRegistryClient {
    /// Creates a client for the public registry with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(DEFAULT_REGISTRY_URL, DEFAULT_TIMEOUT, DEFAULT_MAX_RETRIES)
    }

    /// Creates a client for a custom registry (mirrors, private registries)
    pub fn with_settings(base_url: &str, timeout: Duration, max_retries: u32) -> Result<Self> {
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(DepGraphError::Config {
                message: format!("Invalid registry URL: {}", base_url),
                hint: "The registry URL must start with http:// or https://".to_string(),
            }
            .into());
        }

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("npm-depgraph/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_retries: max_retries.max(1),
        })
    }

    /// Builds the version document URL for a package
    ///
    /// Scoped names (`@scope/name`) are encoded as a single path segment,
    /// which is what the registry expects.
    fn version_url(&self, package: &str, version: &VersionToken) -> Result<String> {
        Self::validate_package_name(package)?;
        Self::validate_url_component(version.as_str(), "Version")?;

        Ok(format!(
            "{}/{}/{}",
            self.base_url,
            urlencoding::encode(package),
            urlencoding::encode(version.as_str())
        ))
    }

    /// Validates a package name for URL safety
    fn validate_package_name(package: &str) -> Result<()> {
        if package.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        // Only a scoped name may contain one '/', right after the scope
        match package.strip_prefix('@') {
            Some(scoped) => {
                let mut parts = scoped.splitn(2, '/');
                let scope = parts.next().unwrap_or_default();
                let name = parts.next().unwrap_or_default();
                if scope.is_empty() || name.is_empty() {
                    anyhow::bail!("Security: Scoped package name '{}' is malformed", package);
                }
                Self::validate_url_component(scope, "Package scope")?;
                Self::validate_url_component(name, "Package name")
            }
            None => Self::validate_url_component(package, "Package name"),
        }
    }

    /// Validates a single URL path component
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        // Security: Prevent URL injection attacks
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!(
                "Security: {} contains path separators which are not allowed",
                component_type
            );
        }

        if component.contains("..") {
            anyhow::bail!(
                "Security: {} contains '..' which is not allowed",
                component_type
            );
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!("Security: {} contains URL-unsafe characters", component_type);
        }

        Ok(())
    }

    /// Fetches the version document, retrying transport failures
    async fn fetch_with_retry(&self, url: &str, package: &str, version: &VersionToken) -> Result<String> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_once(url, package, version).await {
                Ok(body) => return Ok(body),
                Err(FetchError::Permanent(e)) => return Err(e),
                Err(FetchError::Transient(e)) => {
                    tracing::debug!(%url, attempt, error = %e, "registry request failed");
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            DepGraphError::lookup(package, version.as_str(), "no request attempted").into()
        }))
    }

    async fn fetch_once(
        &self,
        url: &str,
        package: &str,
        version: &VersionToken,
    ) -> std::result::Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            let reason = if e.is_timeout() {
                format!("request timed out: {}", e)
            } else {
                format!("request failed: {}", e)
            };
            FetchError::Transient(DepGraphError::lookup(package, version.as_str(), reason).into())
        })?;

        let status = response.status();
        if !status.is_success() {
            let error = DepGraphError::lookup(
                package,
                version.as_str(),
                format!("registry returned status code {}", status),
            )
            .into();
            // Retrying a missing package or version will not help
            return Err(if status.is_client_error() {
                FetchError::Permanent(error)
            } else {
                FetchError::Transient(error)
            });
        }

        response.text().await.map_err(|e| {
            FetchError::Transient(
                DepGraphError::lookup(
                    package,
                    version.as_str(),
                    format!("failed to read response body: {}", e),
                )
                .into(),
            )
        })
    }
}

enum FetchError {
    Transient(anyhow::Error),
    Permanent(anyhow::Error),
}

#[async_trait]
impl RegistryLookup for NpmRegistryClient {
    async fn lookup(&self, package: &str, version: &VersionToken) -> Result<DependencySpec> {
        let url = self
            .version_url(package, version)
            .map_err(|e| DepGraphError::lookup(package, version.as_str(), e.to_string()))?;

        let body = self.fetch_with_retry(&url, package, version).await?;
        let document = parse_object_response(package, version, &body)?;
        Ok(dependencies_from_document(&document))
    }
}
