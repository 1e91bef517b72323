use async_trait::async_trait;
use npm_depgraph::prelude::*;
use npm_depgraph::shared::error::DepGraphError;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock DiagramRenderer that records invocations and optionally fails
#[derive(Default, Clone)]
pub struct MockDiagramRenderer {
    fail: bool,
    pub invocations: Arc<Mutex<Vec<(PathBuf, PathBuf)>>>,
}

#[allow(dead_code)]
impl MockDiagramRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn invocation_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }
}

#[async_trait]
impl DiagramRenderer for MockDiagramRenderer {
    async fn render(&self, input: &Path, output: &Path) -> Result<()> {
        self.invocations
            .lock()
            .unwrap()
            .push((input.to_path_buf(), output.to_path_buf()));
        if self.fail {
            return Err(DepGraphError::Render {
                path: output.to_path_buf(),
                details: "mock renderer failure".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
