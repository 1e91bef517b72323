use crate::dependency_graph::domain::{DependencySpec, VersionToken};
use crate::ports::outbound::{parse_object_response, RegistryLookup};
use crate::shared::error::DepGraphError;
use crate::shared::Result;
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Default time allowed for one `npm view` invocation
pub const DEFAULT_NPM_TIMEOUT: Duration = Duration::from_secs(30);

/// NpmCliLookup adapter that asks the `npm` command for dependency data
///
/// Runs `npm view <package>@<version> dependencies --json`, which uses the
/// registry and credentials configured for the local npm installation.
pub struct NpmCliLookup {
    program: String,
    timeout: Duration,
}

impl NpmCliLookup {
    pub fn new() -> Self {
        Self::with_program("npm", DEFAULT_NPM_TIMEOUT)
    }

    pub fn with_program(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    fn command(&self, package: &str, version: &VersionToken) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("view")
            .arg(format!("{}@{}", package, version))
            .arg("dependencies")
            .arg("--json")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

impl Default for NpmCliLookup {
    fn default() -> Self {
        Self::new()
    }
}

/// Interprets the stdout of `npm view ... dependencies --json`
///
/// npm prints the dependency object itself, and nothing at all when the
/// package declares no dependencies.
pub(crate) fn parse_cli_output(
    package: &str,
    version: &VersionToken,
    stdout: &str,
) -> Result<DependencySpec> {
    if stdout.trim().is_empty() {
        return Ok(DependencySpec::new());
    }

    let object = parse_object_response(package, version, stdout)?;
    Ok(DependencySpec::from_json_object(&object))
}

#[async_trait]
impl RegistryLookup for NpmCliLookup {
    async fn lookup(&self, package: &str, version: &VersionToken) -> Result<DependencySpec> {
        // A leading '-' would be read as an npm option
        if package.starts_with('-') {
            return Err(DepGraphError::lookup(
                package,
                version.as_str(),
                "package name must not start with '-'",
            )
            .into());
        }

        tracing::debug!(program = %self.program, %package, %version, "running npm view");

        let output = tokio::time::timeout(self.timeout, self.command(package, version).output())
            .await
            .map_err(|_| {
                DepGraphError::lookup(
                    package,
                    version.as_str(),
                    format!("{} did not finish within {:?}", self.program, self.timeout),
                )
            })?
            .map_err(|e| {
                DepGraphError::lookup(
                    package,
                    version.as_str(),
                    format!("failed to run {}: {}", self.program, e),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DepGraphError::lookup(
                package,
                version.as_str(),
                format!(
                    "{} exited with {}: {}",
                    self.program,
                    output.status,
                    stderr.trim()
                ),
            )
            .into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_cli_output(package, version, &stdout)
    }
}
