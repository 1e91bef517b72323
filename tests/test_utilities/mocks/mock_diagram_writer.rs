use npm_depgraph::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock DiagramWriter keeping written diagrams in memory
#[derive(Default, Clone)]
pub struct MockDiagramWriter {
    pub written: Arc<Mutex<Vec<(PathBuf, String)>>>,
}

#[allow(dead_code)]
impl MockDiagramWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_written(&self) -> Option<(PathBuf, String)> {
        self.written.lock().unwrap().last().cloned()
    }
}

impl DiagramWriter for MockDiagramWriter {
    fn write_diagram(&self, path: &Path, content: &str) -> Result<()> {
        self.written
            .lock()
            .unwrap()
            .push((path.to_path_buf(), content.to_string()));
        Ok(())
    }
}
