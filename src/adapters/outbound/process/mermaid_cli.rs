use crate::ports::outbound::DiagramRenderer;
use crate::shared::error::DepGraphError;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Default time allowed for one rendering (mmdc starts a headless browser)
pub const DEFAULT_RENDER_TIMEOUT: Duration = Duration::from_secs(120);

/// MermaidCli adapter running the Mermaid command-line renderer
///
/// Invokes `mmdc -i <input> -o <output>` with every standard stream
/// discarded; only the exit status is inspected.
pub struct MermaidCli {
    program: String,
    timeout: Duration,
}

impl MermaidCli {
    pub fn new() -> Self {
        Self::with_program("mmdc", DEFAULT_RENDER_TIMEOUT)
    }

    pub fn with_program(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    fn command(&self, input: &Path, output: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("-i")
            .arg(input)
            .arg("-o")
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        command
    }

    fn render_error(&self, output: &Path, details: String) -> DepGraphError {
        DepGraphError::Render {
            path: output.to_path_buf(),
            details,
        }
    }
}

impl Default for MermaidCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DiagramRenderer for MermaidCli {
    async fn render(&self, input: &Path, output: &Path) -> Result<()> {
        tracing::debug!(
            program = %self.program,
            input = %input.display(),
            output = %output.display(),
            "rendering diagram"
        );

        let status = tokio::time::timeout(self.timeout, self.command(input, output).status())
            .await
            .map_err(|_| {
                self.render_error(
                    output,
                    format!("{} did not finish within {:?}", self.program, self.timeout),
                )
            })?
            .map_err(|e| self.render_error(output, format!("failed to run {}: {}", self.program, e)))?;

        if !status.success() {
            return Err(self
                .render_error(output, format!("{} exited with {}", self.program, status))
                .into());
        }

        Ok(())
    }
}
