use crate::domain::graph::GraphData;
use crate::domain::ports::GraphSource;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Graph source reading the JSON network export from disk
pub struct JsonGraphSource {
    path: PathBuf,
}

impl JsonGraphSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl GraphSource for JsonGraphSource {
    fn load(&self) -> Result<GraphData> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read graph file: {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse graph JSON: {}", self.path.display()))
    }
}
