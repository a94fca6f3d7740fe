use super::write_atomically;
use crate::inventory::domain::{InventorySummary, ProjectScope};
use crate::ports::outbound::SummaryStore;
use crate::shared::error::InventoryError;
use crate::shared::security::reject_symlink_destination;
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Default directory for persisted summaries, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// File name of the summary inside the per-project directory
pub const SUMMARY_FILE_NAME: &str = "inventory_summary.json";

/// FileSystemSummaryStore adapter writing `<output_dir>/<project-id>/inventory_summary.json`
///
/// Every run replaces the whole file; there is no merge with a previous
/// summary.
pub struct FileSystemSummaryStore {
    output_dir: PathBuf,
}

impl FileSystemSummaryStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl SummaryStore for FileSystemSummaryStore {
    fn location(&self, scope: &ProjectScope) -> PathBuf {
        self.output_dir.join(scope.as_str()).join(SUMMARY_FILE_NAME)
    }

    fn persist(&self, scope: &ProjectScope, summary: &InventorySummary) -> Result<PathBuf> {
        let path = self.location(scope);
        let write_error = |details: String| InventoryError::SummaryWriteError {
            path: path.clone(),
            details,
        };

        if let Some(directory) = path.parent() {
            fs::create_dir_all(directory).map_err(|e| write_error(e.to_string()))?;
        }
        reject_symlink_destination(&path, "summary write")
            .map_err(|e| write_error(e.to_string()))?;

        let mut body = summary
            .to_pretty_json()
            .map_err(|e| write_error(e.to_string()))?;
        body.push('\n');
        write_atomically(&path, &body).map_err(|e| write_error(e.to_string()))?;

        info!(path = %path.display(), "inventory summary written");
        Ok(path)
    }
}
